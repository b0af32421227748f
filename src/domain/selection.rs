//! Calculator selection: chosen areas, delivery tier and the package list.
//!
//! One `Selection` belongs to one calculator widget. It is created from a loaded
//! [`PricingConfig`] and only accepts keys that exist in that configuration.

use thiserror::Error;

use super::pricing::{AreaKey, PricingConfig, TierKey};
use super::weight::parse_weight;
use crate::util::generate_id;

/// Weight a freshly added package starts with.
pub const DEFAULT_PACKAGE_WEIGHT_KG: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    Pickup,
    Delivery,
}

impl Leg {
    pub fn label(&self) -> &'static str {
        match self {
            Leg::Pickup => "Abholgebiet",
            Leg::Delivery => "Liefergebiet",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    pub id: String,
    /// Text as typed, kept so live editing is not rewritten under the cursor.
    pub input: String,
    pub weight_kg: f64,
}

impl Package {
    fn with_weight(weight_kg: f64) -> Self {
        Self {
            id: generate_id("package"),
            input: format!("{weight_kg}"),
            weight_kg,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("unknown area `{0}`")]
    UnknownArea(AreaKey),
    #[error("unknown delivery tier `{0}`")]
    UnknownTier(TierKey),
    #[error("no package at position {0}")]
    NoSuchPackage(usize),
    #[error("pricing configuration has no delivery tier")]
    NoDefaultTier,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub pickup_area: Option<AreaKey>,
    pub delivery_area: Option<AreaKey>,
    pub tier: TierKey,
    packages: Vec<Package>,
}

impl Selection {
    /// No areas, the first configured tier and one default package.
    pub fn new(config: &PricingConfig) -> Result<Self, SelectionError> {
        let tier = config
            .default_tier()
            .ok_or(SelectionError::NoDefaultTier)?
            .to_string();
        Ok(Self {
            pickup_area: None,
            delivery_area: None,
            tier,
            packages: vec![Package::with_weight(DEFAULT_PACKAGE_WEIGHT_KG)],
        })
    }

    pub fn area(&self, leg: Leg) -> Option<&str> {
        match leg {
            Leg::Pickup => self.pickup_area.as_deref(),
            Leg::Delivery => self.delivery_area.as_deref(),
        }
    }

    pub fn select_area(
        &mut self,
        config: &PricingConfig,
        leg: Leg,
        key: &str,
    ) -> Result<(), SelectionError> {
        if !config.areas.contains_key(key) {
            return Err(SelectionError::UnknownArea(key.to_string()));
        }
        let slot = match leg {
            Leg::Pickup => &mut self.pickup_area,
            Leg::Delivery => &mut self.delivery_area,
        };
        *slot = Some(key.to_string());
        Ok(())
    }

    pub fn select_tier(&mut self, config: &PricingConfig, key: &str) -> Result<(), SelectionError> {
        if !config.delivery_tiers.contains_key(key) {
            return Err(SelectionError::UnknownTier(key.to_string()));
        }
        self.tier = key.to_string();
        Ok(())
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn weights(&self) -> Vec<f64> {
        self.packages.iter().map(|package| package.weight_kg).collect()
    }

    pub fn add_package(&mut self) {
        self.packages
            .push(Package::with_weight(DEFAULT_PACKAGE_WEIGHT_KG));
    }

    pub fn set_package_input(&mut self, index: usize, raw: &str) -> Result<(), SelectionError> {
        let package = self
            .packages
            .get_mut(index)
            .ok_or(SelectionError::NoSuchPackage(index))?;
        package.input = raw.to_string();
        package.weight_kg = parse_weight(raw);
        Ok(())
    }

    /// Removes a package. The last remaining package is never removed.
    pub fn remove_package(&mut self, index: usize) -> bool {
        if !self.can_remove_packages() || index >= self.packages.len() {
            return false;
        }
        self.packages.remove(index);
        true
    }

    pub fn can_remove_packages(&self) -> bool {
        self.packages.len() > 1
    }
}
