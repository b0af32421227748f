use std::sync::Arc;

use super::areas::AreaIndex;
use super::pricing::PricingConfig;
use crate::util::settings::Settings;

/// Everything the widgets need once the site documents are in.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteData {
    pub pricing: PricingConfig,
    pub areas: AreaData,
}

/// The geographic document is optional for the calculator; the standalone map needs it.
#[derive(Clone, Debug, PartialEq)]
pub enum AreaData {
    Ready(AreaIndex),
    Unavailable(String),
}

impl AreaData {
    pub fn index(&self) -> Option<&AreaIndex> {
        match self {
            AreaData::Ready(index) => Some(index),
            AreaData::Unavailable(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Arc<SiteData>),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    pub site: LoadState,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            site: LoadState::Loading,
        }
    }
}
