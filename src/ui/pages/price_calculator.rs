use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::{compute_price, AppState, Leg, LoadState, Selection, SiteData};
use crate::ui::components::{
    area_map::{AreaChips, AreaMap, AreaOption},
    package_list::PackageList,
    price_panel::{price_lines, PricePanel},
};
use crate::ui::theme;
use crate::util::{format::surcharge_suffix, generate_id};

const LEGS: [Leg; 2] = [Leg::Pickup, Leg::Delivery];

#[derive(Clone, Debug, PartialEq)]
pub enum Hint {
    ChoosePickup,
    ContinueToDelivery,
    ChooseDelivery,
}

impl Hint {
    pub fn text(&self) -> &'static str {
        match self {
            Hint::ChoosePickup => "📍 Abholgebiet auf der Karte wählen",
            Hint::ContinueToDelivery => "✓ Prima, jetzt Liefergebiet auswählen →",
            Hint::ChooseDelivery => "📦 Liefergebiet auf der Karte wählen",
        }
    }
}

/// Hint shown under the tabs for the active leg.
pub fn hint_for(active: Leg, selection: &Selection) -> Hint {
    match active {
        Leg::Pickup if selection.pickup_area.is_some() => Hint::ContinueToDelivery,
        Leg::Pickup => Hint::ChoosePickup,
        Leg::Delivery => Hint::ChooseDelivery,
    }
}

#[component]
pub fn PriceCalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let site = state.with(|s| s.site.clone());

    let body = match site {
        LoadState::Loading => rsx! {
            p { class: "text-sm", "Preise werden geladen …" }
        },
        LoadState::Failed(_) => rsx! {
            div { class: theme::ERROR_PANEL,
                "Die Preisdaten konnten nicht geladen werden. Bitte versuche es später erneut."
            }
        },
        LoadState::Ready(data) => rsx! { PriceCalculator { data } },
    };

    rsx! {
        section { class: "flex flex-col gap-6",
            h2 { class: "text-3xl font-bold", "Preisrechner" }
            {body}
        }
    }
}

#[component]
pub fn PriceCalculator(data: Arc<SiteData>) -> Element {
    let initial = use_hook({
        let data = data.clone();
        move || {
            Selection::new(&data.pricing).inspect_err(|err| {
                tracing::error!("calculator cannot start: {err}");
            })
        }
    });

    match initial {
        Ok(selection) => rsx! { CalculatorForm { data, initial: selection } },
        Err(_) => rsx! {
            div { class: theme::ERROR_PANEL, "Der Preisrechner ist zurzeit nicht verfügbar." }
        },
    }
}

#[component]
fn CalculatorForm(data: Arc<SiteData>, initial: Selection) -> Element {
    let mut selection = use_signal(move || initial);
    let mut active_leg = use_signal(|| Leg::Pickup);
    let tier_group = use_hook(|| generate_id("tier"));

    let on_pick = use_callback({
        let data = data.clone();
        move |(leg, key): (Leg, String)| {
            if let Err(err) = selection.with_mut(|sel| sel.select_area(&data.pricing, leg, &key)) {
                tracing::warn!("area selection rejected: {err}");
            }
        }
    });
    let on_tier = use_callback({
        let data = data.clone();
        move |key: String| {
            if let Err(err) = selection.with_mut(|sel| sel.select_tier(&data.pricing, &key)) {
                tracing::warn!("tier selection rejected: {err}");
            }
        }
    });

    let pricing = &data.pricing;
    let current = selection();
    let active = active_leg();

    let result = compute_price(pricing, &current);
    if let Err(err) = &result {
        tracing::error!("price calculation failed: {err}");
    }
    let lines = price_lines(&result, pricing.vat_percent);
    let hint = hint_for(active, &current);

    let options: Vec<AreaOption> = pricing
        .areas
        .iter()
        .map(|(key, area)| AreaOption {
            key: key.to_string(),
            label: area.label.clone(),
        })
        .collect();
    let tiers: Vec<(String, String)> = pricing
        .delivery_tiers
        .iter()
        .map(|(key, tier)| {
            (
                key.to_string(),
                format!("{}{}", tier.label, surcharge_suffix(tier.surcharge)),
            )
        })
        .collect();
    let index = data.areas.index().cloned();

    rsx! {
        div { class: "grid gap-6 lg:grid-cols-[3fr_2fr]",
            div { class: "flex flex-col",
                div { class: "flex gap-2", role: "tablist",
                    for leg in LEGS {
                        button {
                            r#type: "button",
                            role: "tab",
                            class: theme::tab_button(leg, leg == active),
                            aria_selected: "{leg == active}",
                            onclick: move |_| active_leg.set(leg),
                            "{leg.label()}"
                        }
                    }
                }
                div { class: "flex flex-col gap-4 rounded-b-lg border-2 border-white p-4",
                    if hint == Hint::ContinueToDelivery {
                        button {
                            r#type: "button",
                            class: "self-start rounded-lg bg-mint px-4 py-2 text-sm font-bold text-white",
                            onclick: move |_| active_leg.set(Leg::Delivery),
                            "{hint.text()}"
                        }
                    } else {
                        p { class: "text-sm font-bold", "{hint.text()}" }
                    }
                    for leg in LEGS {
                        div {
                            key: "{leg.label()}",
                            class: if leg == active { "flex flex-col gap-4" } else { "hidden" },
                            role: "tabpanel",
                            if let Some(index) = index.clone() {
                                AreaMap {
                                    index,
                                    selectable: true,
                                    selected: current.area(leg).map(str::to_string),
                                    on_select: move |key: String| on_pick.call((leg, key)),
                                }
                            } else {
                                p { class: "text-sm", "Die Karte ist gerade nicht verfügbar. Wähle das Gebiet hier aus:" }
                            }
                            AreaChips {
                                options: options.clone(),
                                leg,
                                selected: current.area(leg).map(str::to_string),
                                on_select: move |key: String| on_pick.call((leg, key)),
                            }
                        }
                    }
                }
            }
            div { class: "flex flex-col gap-6",
                fieldset { class: theme::PANEL,
                    legend { class: theme::PANEL_TITLE, "Zustellung" }
                    for (key, label) in tiers {
                        label { key: "{key}", class: "flex items-center gap-2 py-1 text-sm",
                            input {
                                r#type: "radio",
                                name: "{tier_group}",
                                value: "{key}",
                                checked: current.tier == key,
                                onchange: {
                                    let key = key.clone();
                                    move |_| on_tier.call(key.clone())
                                },
                            }
                            "{label}"
                        }
                    }
                }
                PackageList {
                    packages: current.packages().to_vec(),
                    can_remove: current.can_remove_packages(),
                    on_input: move |(idx, raw): (usize, String)| {
                        if let Err(err) = selection.with_mut(|sel| sel.set_package_input(idx, &raw)) {
                            tracing::warn!("package update rejected: {err}");
                        }
                    },
                    on_add: move |_| selection.with_mut(|sel| sel.add_package()),
                    on_remove: move |idx: usize| {
                        selection.with_mut(|sel| sel.remove_package(idx));
                    },
                }
                PricePanel { lines }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::pricing::fixtures::sample_config;

    use super::*;

    #[test]
    fn hint_follows_the_pickup_choice() {
        let config = sample_config();
        let mut selection = Selection::new(&config).unwrap();
        assert_eq!(hint_for(Leg::Pickup, &selection), Hint::ChoosePickup);

        selection.select_area(&config, Leg::Pickup, "standard").unwrap();
        assert_eq!(hint_for(Leg::Pickup, &selection), Hint::ContinueToDelivery);
        assert_eq!(hint_for(Leg::Delivery, &selection), Hint::ChooseDelivery);
    }
}
