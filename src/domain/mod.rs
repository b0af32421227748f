//! Pricing engine and the state the courier widgets share.

pub mod app_state;
pub mod areas;
pub mod pricing;
pub mod quote;
pub mod selection;
pub mod weight;

pub use app_state::{AppState, AreaData, LoadState, SiteData};
pub use areas::{classify_features, AreaIndex, FeatureCollection, MapFrame};
pub use pricing::{ConfigError, PricingConfig};
pub use quote::{compute_price, PriceResult, QuoteError};
pub use selection::{Leg, Selection};
