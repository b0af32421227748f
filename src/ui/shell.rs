use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::components::nav_drawer::{close_on_escape, MenuToggle, NavDrawer, NAV_LINKS};
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let drawer_open = use_signal(|| false);

    rsx! {
        div {
            class: "min-h-screen bg-navy text-white font-sans",
            tabindex: "-1",
            onkeydown: move |evt: KeyboardEvent| close_on_escape(drawer_open, &evt),
            header { class: "border-b-2 border-pink px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🚲" }
                        h1 { class: "text-xl font-bold tracking-tight", "{APP_NAME}" }
                    }
                    nav { class: "hidden gap-2 text-sm lg:flex",
                        for link in NAV_LINKS {
                            NavButton {
                                key: "{link.label}",
                                active: (link.route)() == current_route,
                                onclick: move |_| {
                                    nav.push((link.route)());
                                },
                                label: link.label,
                            }
                        }
                    }
                    MenuToggle { open: drawer_open }
                }
            }
            NavDrawer { open: drawer_open }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 py-6 text-xs text-white/60",
                "{APP_NAME} · {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "rounded-lg bg-pink px-4 py-2 font-bold text-white"
    } else {
        "rounded-lg px-4 py-2 text-white/80 transition hover:bg-white/10 hover:text-white"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_current: if active { "page" } else { "false" },
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
