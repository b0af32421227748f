//! German display formatting for prices and weights.

use crate::domain::pricing::{Cents, WeightClass};

/// `123456` → `"1.234,56 €"`.
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let euros = abs / 100;
    let rest = abs % 100;
    format!("{sign}{},{rest:02} €", group_thousands(euros))
}

/// Suffix for an option label, empty when there is no surcharge: `" (+4,50 €)"`.
pub fn surcharge_suffix(cents: Cents) -> String {
    if cents > 0 {
        format!(" (+{})", format_cents(cents))
    } else {
        String::new()
    }
}

pub fn format_weight(weight_kg: f64) -> String {
    format!("{weight_kg:.1}")
}

/// `"M (10.01-30 kg)"`.
pub fn weight_class_label(class: &WeightClass) -> String {
    format!("{} ({}-{} kg)", class.label, class.min, class.max)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use crate::domain::pricing::fixtures::sample_config;

    use super::*;

    #[test]
    fn cents_use_german_separators() {
        assert_eq!(format_cents(0), "0,00 €");
        assert_eq!(format_cents(5), "0,05 €");
        assert_eq!(format_cents(1190), "11,90 €");
        assert_eq!(format_cents(123_456), "1.234,56 €");
        assert_eq!(format_cents(100_000_000), "1.000.000,00 €");
        assert_eq!(format_cents(-250), "-2,50 €");
    }

    #[test]
    fn suffix_only_for_positive_surcharges() {
        assert_eq!(surcharge_suffix(0), "");
        assert_eq!(surcharge_suffix(450), " (+4,50 €)");
    }

    #[test]
    fn weight_labels() {
        let config = sample_config();
        assert_eq!(weight_class_label(&config.weight_classes[0]), "S (0-10 kg)");
        assert_eq!(weight_class_label(&config.weight_classes[1]), "M (10.01-30 kg)");
        assert_eq!(format_weight(5.0), "5.0");
        assert_eq!(format_weight(12.34), "12.3");
    }
}
