use std::sync::Arc;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, AreaData, LoadState},
    infra::site_data::SiteDataClient,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage, Toasts},
        pages::{DeliveryAreasPage, HomePage, PriceCalculatorPage},
        shell::Shell,
    },
    util::{assets, settings::load_settings},
};

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/preise")]
    Prices {},
    #[route("/liefergebiete")]
    Areas {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::new(load_settings()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    // One-time load; there is no retry.
    let _site = use_resource(move || async move { load_site(state, toasts).await });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toasts {}
    }
}

async fn load_site(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let settings = state.peek().settings.clone();
    let client = match SiteDataClient::from_settings(&settings) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("cannot set up data client: {err}");
            state.with_mut(|st| st.site = LoadState::Failed(err.to_string()));
            push_toast(toasts, ToastKind::Error, "Die Seitendaten konnten nicht geladen werden.");
            return;
        }
    };
    tracing::info!(source = ?client.source(), "loading site data");

    match client.load_site_data().await {
        Ok(data) => {
            if let AreaData::Unavailable(_) = data.areas {
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    "Die Karte der Liefergebiete ist gerade nicht verfügbar.",
                );
            }
            state.with_mut(|st| st.site = LoadState::Ready(Arc::new(data)));
        }
        Err(err) => {
            state.with_mut(|st| st.site = LoadState::Failed(err.to_string()));
            push_toast(toasts, ToastKind::Error, "Die Preisdaten konnten nicht geladen werden.");
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Prices() -> Element {
    rsx! { Shell { PriceCalculatorPage {} } }
}

#[component]
pub fn Areas() -> Element {
    rsx! { Shell { DeliveryAreasPage {} } }
}
