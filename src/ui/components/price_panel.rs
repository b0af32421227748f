use dioxus::prelude::*;

use crate::domain::{PriceResult, QuoteError};
use crate::ui::theme;
use crate::util::format::{format_cents, format_weight, weight_class_label};

/// Placeholder shown wherever a figure cannot be computed.
pub const NO_PRICE: &str = "–";

#[derive(Clone, Debug, PartialEq)]
pub struct PriceLines {
    pub total_weight: String,
    pub weight_class: String,
    pub net: String,
    pub gross: String,
    pub vat_note: String,
    pub overweight: bool,
}

pub fn price_lines(result: &Result<PriceResult, QuoteError>, vat_percent: f64) -> PriceLines {
    let vat_note = format!("inkl. {vat_percent}% MwSt.");
    match result {
        Ok(price) => PriceLines {
            total_weight: format!("{} kg", format_weight(price.total_weight_kg)),
            weight_class: weight_class_label(&price.weight_class),
            net: format_cents(price.net_cents),
            gross: format_cents(price.gross_cents),
            vat_note,
            overweight: price.weight_clamped,
        },
        Err(_) => PriceLines {
            total_weight: NO_PRICE.to_string(),
            weight_class: NO_PRICE.to_string(),
            net: NO_PRICE.to_string(),
            gross: NO_PRICE.to_string(),
            vat_note,
            overweight: false,
        },
    }
}

#[component]
pub fn PricePanel(lines: PriceLines) -> Element {
    rsx! {
        div { class: "{theme::PANEL} flex flex-col gap-2", aria_live: "polite",
            div { class: "flex justify-between text-sm",
                span { "Gesamtgewicht" }
                span { class: "font-bold", "{lines.total_weight}" }
            }
            div { class: "flex justify-between text-sm",
                span { "Gewichtsklasse" }
                span { class: "font-bold", "{lines.weight_class}" }
            }
            if lines.overweight {
                p { class: "text-xs text-pink",
                    "Das Gesamtgewicht liegt über der höchsten Gewichtsklasse. Bitte sprich uns für einen Sondertarif an."
                }
            }
            div { class: "flex justify-between text-sm",
                span { "Netto" }
                span { "{lines.net}" }
            }
            div { class: "mt-2 flex items-baseline justify-between border-t-2 border-white pt-3",
                span { class: "text-sm", "{lines.vat_note}" }
                span { class: "text-3xl font-bold text-pink", "{lines.gross}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::pricing::fixtures::sample_config;
    use crate::domain::quote::quote;

    use super::*;

    #[test]
    fn successful_quote_is_formatted_in_german() {
        let config = sample_config();
        let result = quote(&config, Some("stadtrand"), None, "normal", &[35.0]);
        let lines = price_lines(&result, config.vat_percent);
        assert_eq!(lines.total_weight, "35.0 kg");
        assert_eq!(lines.weight_class, "L (30.01-60 kg)");
        assert_eq!(lines.net, "19,00 €");
        assert_eq!(lines.gross, "22,61 €");
        assert_eq!(lines.vat_note, "inkl. 19% MwSt.");
        assert!(!lines.overweight);
    }

    #[test]
    fn failed_quote_shows_placeholders() {
        let config = sample_config();
        let result = quote(&config, None, None, "overnight", &[1.0]);
        let lines = price_lines(&result, config.vat_percent);
        assert_eq!(lines.net, NO_PRICE);
        assert_eq!(lines.gross, NO_PRICE);
        assert_eq!(lines.weight_class, NO_PRICE);
    }

    #[test]
    fn clamped_weight_is_flagged() {
        let config = sample_config();
        let result = quote(&config, None, None, "normal", &[70.0]);
        assert!(price_lines(&result, config.vat_percent).overweight);
    }
}
