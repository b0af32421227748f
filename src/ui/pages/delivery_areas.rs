use dioxus::prelude::*;

use crate::domain::{AppState, AreaData, LoadState};
use crate::ui::components::area_map::AreaMap;
use crate::ui::theme;
use crate::util::format::surcharge_suffix;

#[component]
pub fn DeliveryAreasPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let site = state.with(|s| s.site.clone());

    let body = match site {
        LoadState::Loading => rsx! {
            p { class: "text-sm", "Liefergebiete werden geladen …" }
        },
        LoadState::Failed(_) => rsx! {
            div { class: theme::ERROR_PANEL, "Die Liefergebiete konnten nicht geladen werden." }
        },
        LoadState::Ready(data) => match &data.areas {
            AreaData::Unavailable(_) => rsx! {
                div { class: theme::ERROR_PANEL, "Die Karte der Liefergebiete konnte nicht geladen werden." }
            },
            AreaData::Ready(index) => {
                let legend: Vec<(String, &'static str, String)> = data
                    .pricing
                    .areas
                    .iter()
                    .map(|(key, area)| {
                        (
                            key.to_string(),
                            theme::area_fill(key),
                            format!("{}{}", area.label, surcharge_suffix(area.surcharge)),
                        )
                    })
                    .collect();
                rsx! {
                    div { class: "grid gap-6 lg:grid-cols-[2fr_1fr]",
                        AreaMap { index: index.clone() }
                        ul { class: "{theme::PANEL} flex flex-col gap-3",
                            for (key, fill, label) in legend {
                                li { key: "{key}", class: "flex items-center gap-3",
                                    span {
                                        class: "inline-block h-4 w-4 rounded-sm",
                                        style: "background: {fill}",
                                    }
                                    span { "{label}" }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "flex flex-col gap-6",
            h2 { class: "text-3xl font-bold", "Liefergebiete" }
            p { "Klick auf ein Gebiet, um seinen Namen zu sehen." }
            {body}
        }
    }
}
