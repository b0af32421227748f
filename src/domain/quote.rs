//! Delivery price quote.
//!
//! `net = 2 * base + max(pickup area, delivery area) + weight class + delivery tier`,
//! `gross = round(net * (1 + vat / 100))`.

use thiserror::Error;

use super::pricing::{AreaKey, Cents, PricingConfig, TierKey, WeightClass};
use super::selection::Selection;
use super::weight::{resolve_weight_class, total_weight};

/// Every trip has a pickup and a delivery stop.
pub const STOPS_PER_TRIP: Cents = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct PriceResult {
    pub total_weight_kg: f64,
    pub weight_class: WeightClass,
    /// Total weight was above every class and priced with the last one.
    pub weight_clamped: bool,
    pub breakdown: FeeBreakdown,
    pub net_cents: Cents,
    pub gross_cents: Cents,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub stops_fee: Cents,
    pub area_fee: Cents,
    pub tier_fee: Cents,
    pub weight_fee: Cents,
}

impl FeeBreakdown {
    /// Sum of all fees, `None` on overflow.
    pub fn net(&self) -> Option<Cents> {
        self.stops_fee
            .checked_add(self.area_fee)?
            .checked_add(self.tier_fee)?
            .checked_add(self.weight_fee)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("pricing configuration has no weight classes")]
    NoWeightClasses,
    #[error("unknown delivery tier `{0}`")]
    UnknownTier(TierKey),
    #[error("unknown area `{0}`")]
    UnknownArea(AreaKey),
    #[error("weight class `{class}` has no surcharge for tier `{tier}`")]
    MissingWeightSurcharge { class: String, tier: TierKey },
    #[error("price exceeds the representable range")]
    AmountOverflow,
}

pub fn compute_price(config: &PricingConfig, selection: &Selection) -> Result<PriceResult, QuoteError> {
    quote(
        config,
        selection.pickup_area.as_deref(),
        selection.delivery_area.as_deref(),
        &selection.tier,
        &selection.weights(),
    )
}

/// Same as [`compute_price`] over plain inputs.
pub fn quote(
    config: &PricingConfig,
    pickup_area: Option<&str>,
    delivery_area: Option<&str>,
    tier_key: &str,
    package_weights: &[f64],
) -> Result<PriceResult, QuoteError> {
    let total_weight_kg = total_weight(package_weights);
    let resolved = resolve_weight_class(total_weight_kg, &config.weight_classes)
        .ok_or(QuoteError::NoWeightClasses)?;

    let pickup_fee = area_surcharge(config, pickup_area)?;
    let delivery_fee = area_surcharge(config, delivery_area)?;

    let tier = config
        .tier(tier_key)
        .ok_or_else(|| QuoteError::UnknownTier(tier_key.to_string()))?;
    let weight_fee =
        resolved
            .class
            .surcharge_for(tier_key)
            .ok_or_else(|| QuoteError::MissingWeightSurcharge {
                class: resolved.class.label.clone(),
                tier: tier_key.to_string(),
            })?;

    let breakdown = FeeBreakdown {
        stops_fee: config
            .base_price
            .checked_mul(STOPS_PER_TRIP)
            .ok_or(QuoteError::AmountOverflow)?,
        // Only the harder leg is charged.
        area_fee: pickup_fee.max(delivery_fee),
        tier_fee: tier.surcharge,
        weight_fee,
    };
    let net_cents = breakdown.net().ok_or(QuoteError::AmountOverflow)?;

    Ok(PriceResult {
        total_weight_kg,
        weight_class: resolved.class.clone(),
        weight_clamped: resolved.clamped,
        breakdown,
        net_cents,
        gross_cents: gross_from_net(net_cents, config.vat_percent),
    })
}

/// Applies VAT and rounds half away from zero to whole cents.
pub fn gross_from_net(net_cents: Cents, vat_percent: f64) -> Cents {
    (net_cents as f64 * (1.0 + vat_percent / 100.0)).round() as Cents
}

fn area_surcharge(config: &PricingConfig, key: Option<&str>) -> Result<Cents, QuoteError> {
    match key {
        None => Ok(0),
        Some(key) => config
            .area(key)
            .map(|area| area.surcharge)
            .ok_or_else(|| QuoteError::UnknownArea(key.to_string())),
    }
}
