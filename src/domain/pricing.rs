//! Pricing document: base price, VAT, delivery areas, delivery tiers and weight classes.
//!
//! Areas and delivery tiers are kept in document order: the first tier is the default
//! selection and areas are listed in the order they are configured.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Amounts are integer cents.
pub type Cents = i64;

/// Upper bound for any single configured amount (1.000.000,00 €).
pub const MAX_AMOUNT_CENTS: Cents = 100_000_000;

pub type AreaKey = String;
pub type TierKey = String;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Charge per stop; every trip has two stops.
    #[serde(rename = "basePrice")]
    pub base_price: Cents,
    /// VAT in percent, applied on top of the net price.
    #[serde(rename = "vat")]
    pub vat_percent: f64,
    pub areas: IndexMap<AreaKey, Area>,
    #[serde(rename = "delivery")]
    pub delivery_tiers: IndexMap<TierKey, DeliveryTier>,
    #[serde(rename = "weightClasses")]
    pub weight_classes: Vec<WeightClass>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub label: String,
    #[serde(default)]
    pub surcharge: Cents,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTier {
    pub label: String,
    #[serde(default)]
    pub surcharge: Cents,
}

/// Inclusive weight band in kilograms with one surcharge per delivery tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightClass {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub surcharges: IndexMap<TierKey, Cents>,
}

impl WeightClass {
    pub fn contains(&self, weight_kg: f64) -> bool {
        self.min <= weight_kg && weight_kg <= self.max
    }

    pub fn surcharge_for(&self, tier: &str) -> Option<Cents> {
        self.surcharges.get(tier).copied()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("failed to parse pricing document: {0}")]
    Parse(String),
    #[error("{field} must be between 0 and {MAX_AMOUNT_CENTS} cents (got {value})")]
    AmountOutOfRange { field: String, value: Cents },
    #[error("VAT must be a finite, non-negative percentage (got {0})")]
    InvalidVat(f64),
    #[error("at least one delivery tier is required")]
    NoDeliveryTiers,
    #[error("at least one weight class is required")]
    NoWeightClasses,
    #[error("weight class `{label}` has an invalid range {min}..={max}")]
    InvalidRange { label: String, min: f64, max: f64 },
    #[error("weight class `{label}` overlaps or precedes `{previous}`")]
    Unordered { label: String, previous: String },
    #[error("no weight class covers 0 kg (first class starts at {0})")]
    ZeroNotCovered(f64),
    #[error("weight class `{label}` has no surcharge for delivery tier `{tier}`")]
    MissingTierSurcharge { label: String, tier: TierKey },
}

impl PricingConfig {
    /// Parses and validates a pricing document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PricingConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_amount("basePrice", self.base_price)?;
        for (key, area) in &self.areas {
            check_amount(&format!("areas.{key}.surcharge"), area.surcharge)?;
        }
        for (key, tier) in &self.delivery_tiers {
            check_amount(&format!("delivery.{key}.surcharge"), tier.surcharge)?;
        }
        if !self.vat_percent.is_finite() || self.vat_percent < 0.0 {
            return Err(ConfigError::InvalidVat(self.vat_percent));
        }
        if self.delivery_tiers.is_empty() {
            return Err(ConfigError::NoDeliveryTiers);
        }
        let Some(first) = self.weight_classes.first() else {
            return Err(ConfigError::NoWeightClasses);
        };
        if first.min > 0.0 {
            return Err(ConfigError::ZeroNotCovered(first.min));
        }

        let mut previous: Option<&WeightClass> = None;
        for class in &self.weight_classes {
            if !class.min.is_finite() || !class.max.is_finite() || class.max < class.min {
                return Err(ConfigError::InvalidRange {
                    label: class.label.clone(),
                    min: class.min,
                    max: class.max,
                });
            }
            // Touching bands are fine; first match wins on the shared boundary.
            if let Some(prev) = previous {
                if class.min < prev.max {
                    return Err(ConfigError::Unordered {
                        label: class.label.clone(),
                        previous: prev.label.clone(),
                    });
                }
            }
            for (tier, surcharge) in &class.surcharges {
                check_amount(
                    &format!("weightClasses.{}.surcharges.{tier}", class.label),
                    *surcharge,
                )?;
            }
            if let Some(tier) = self
                .delivery_tiers
                .keys()
                .find(|tier| !class.surcharges.contains_key(tier.as_str()))
            {
                return Err(ConfigError::MissingTierSurcharge {
                    label: class.label.clone(),
                    tier: tier.to_string(),
                });
            }
            previous = Some(class);
        }

        Ok(())
    }

    pub fn default_tier(&self) -> Option<&str> {
        self.delivery_tiers.first().map(|(key, _)| key.as_str())
    }

    pub fn area(&self, key: &str) -> Option<&Area> {
        self.areas.get(key)
    }

    pub fn tier(&self, key: &str) -> Option<&DeliveryTier> {
        self.delivery_tiers.get(key)
    }
}

fn check_amount(field: &str, value: Cents) -> Result<(), ConfigError> {
    if (0..=MAX_AMOUNT_CENTS).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::AmountOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::fixtures::{sample_config, SAMPLE_PRICING};
    use super::*;

    fn with_classes(classes: serde_json::Value) -> PricingConfig {
        serde_json::from_value(json!({
            "basePrice": 500,
            "vat": 19,
            "areas": {},
            "delivery": { "normal": { "label": "Normal", "surcharge": 0 } },
            "weightClasses": classes
        }))
        .unwrap()
    }

    #[test]
    fn parses_document_field_names() {
        let config = sample_config();
        assert_eq!(config.base_price, 500);
        assert_eq!(config.vat_percent, 19.0);
        assert_eq!(config.default_tier(), Some("normal"));
        assert_eq!(config.area("stadtrand").map(|a| a.surcharge), Some(300));
        assert_eq!(config.weight_classes.len(), 3);
    }

    #[test]
    fn document_order_survives_parsing() {
        let config = sample_config();
        let areas: Vec<_> = config.areas.keys().map(String::as_str).collect();
        let tiers: Vec<_> = config.delivery_tiers.keys().map(String::as_str).collect();
        assert_eq!(areas, vec!["standard", "stadtrand", "umland"]);
        assert_eq!(tiers, vec!["normal", "express"]);

        let from_value: PricingConfig =
            serde_json::from_value(serde_json::from_str(SAMPLE_PRICING).unwrap()).unwrap();
        assert_eq!(from_value.default_tier(), Some("normal"));
    }

    #[test]
    fn shipped_document_is_valid() {
        let raw = include_str!("../../assets/data/pricing.json");
        let config = PricingConfig::from_json(raw).unwrap();
        assert_eq!(config.default_tier(), Some("normal"));
        assert_eq!(config.areas.first().map(|(key, _)| key.as_str()), Some("standard"));
    }

    #[test]
    fn rejects_negative_surcharges() {
        let mut config = sample_config();
        config.areas["umland"].surcharge = -5000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::AmountOutOfRange {
                field: "areas.umland.surcharge".into(),
                value: -5000
            })
        );

        let mut config = sample_config();
        config.delivery_tiers["express"].surcharge = -2000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AmountOutOfRange { .. })
        ));

        let mut config = sample_config();
        config.weight_classes[1].surcharges["normal"] = -100;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AmountOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_oversized_and_negative_base_price() {
        let mut config = sample_config();
        config.base_price = 5_000_000_000_000_000_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AmountOutOfRange { .. })
        ));

        config.base_price = -1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AmountOutOfRange { .. })
        ));

        config.base_price = MAX_AMOUNT_CENTS;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_missing_tier_surcharge() {
        let config = with_classes(json!([
            { "label": "S", "min": 0, "max": 10, "surcharges": {} }
        ]));
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingTierSurcharge {
                label: "S".into(),
                tier: "normal".into()
            })
        );
    }

    #[test]
    fn rejects_overlapping_bands() {
        let config = with_classes(json!([
            { "label": "S", "min": 0, "max": 10, "surcharges": { "normal": 0 } },
            { "label": "M", "min": 5, "max": 20, "surcharges": { "normal": 0 } }
        ]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Unordered { .. })
        ));
    }

    #[test]
    fn accepts_touching_bands() {
        let config = with_classes(json!([
            { "label": "S", "min": 0, "max": 10, "surcharges": { "normal": 0 } },
            { "label": "M", "min": 10, "max": 20, "surcharges": { "normal": 100 } }
        ]));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_band_list_not_covering_zero() {
        let config = with_classes(json!([
            { "label": "S", "min": 1, "max": 10, "surcharges": { "normal": 0 } }
        ]));
        assert_eq!(config.validate(), Err(ConfigError::ZeroNotCovered(1.0)));
    }

    #[test]
    fn rejects_inverted_range_and_empty_lists() {
        let inverted = with_classes(json!([
            { "label": "S", "min": 0, "max": -1, "surcharges": { "normal": 0 } }
        ]));
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));

        let empty = with_classes(json!([]));
        assert_eq!(empty.validate(), Err(ConfigError::NoWeightClasses));

        let mut no_tiers = sample_config();
        no_tiers.delivery_tiers = IndexMap::new();
        assert_eq!(no_tiers.validate(), Err(ConfigError::NoDeliveryTiers));
    }

    #[test]
    fn rejects_negative_vat() {
        let mut config = sample_config();
        config.vat_percent = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidVat(-1.0)));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        assert!(matches!(
            PricingConfig::from_json("{\"basePrice\": \"x\"}"),
            Err(ConfigError::Parse(_))
        ));
    }
}
