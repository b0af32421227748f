use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::components::hero_slideshow::HeroSlideshow;
use crate::util::assets;

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let interval_ms = state.with(|s| s.settings.slide_interval_ms);

    rsx! {
        section { class: "flex flex-col gap-8",
            HeroSlideshow {
                slides: assets::hero_slides().to_vec(),
                interval_ms,
                alt: "Radkurier unterwegs in Rostock",
            }
            div { class: "flex flex-col gap-4",
                h2 { class: "text-3xl font-bold", "Schnell. Leise. Mit dem Rad." }
                p { class: "max-w-2xl text-lg",
                    "Wir holen deine Sendung ab und stellen sie noch am selben Tag in Rostock und Umgebung zu. "
                    "Ohne Stau, ohne Abgase."
                }
                div { class: "flex flex-wrap gap-3",
                    Link {
                        class: "rounded-lg bg-pink px-5 py-3 font-bold text-white",
                        to: Route::Prices {},
                        "Preis berechnen"
                    }
                    Link {
                        class: "rounded-lg border-2 border-mint px-5 py-3 font-bold text-mint",
                        to: Route::Areas {},
                        "Liefergebiete ansehen"
                    }
                }
            }
        }
    }
}
