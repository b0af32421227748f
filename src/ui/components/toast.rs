use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Queues a notice; the oldest one is dropped beyond [`MAX_TOASTS`].
pub fn push_toast(mut toasts: Signal<Vec<ToastMessage>>, kind: ToastKind, message: impl Into<String>) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| {
        if entries.len() >= MAX_TOASTS {
            entries.remove(0);
        }
        entries.push(message);
    });
}

#[component]
pub fn Toasts() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        ul {
            class: "pointer-events-none fixed inset-x-0 bottom-4 z-50 flex flex-col items-center gap-2",
            role: "status",
            for message in entries {
                ToastCard { key: "{message.id}", message, toasts }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let mut toasts = toasts;
    let timer_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let theme = match message.kind {
        ToastKind::Info => "bg-mint text-navy",
        ToastKind::Warning => "bg-white text-navy border-2 border-pink",
        ToastKind::Error => "bg-pink text-white",
    };
    let id = message.id.clone();

    rsx! {
        li {
            class: "pointer-events-auto flex items-center gap-3 rounded-lg px-4 py-3 shadow-lg {theme}",
            p { class: "text-sm font-bold", "{message.text}" }
            button {
                r#type: "button",
                class: "text-xs underline",
                onclick: move |_| {
                    let target = id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Schließen"
            }
        }
    }
}
