//! Loads the two site documents: the pricing configuration and the delivery-area GeoJSON.
//!
//! - Embedded copies under `assets/data/` are used unless a data URL is configured.
//! - Both documents are requested concurrently; only the pricing document is mandatory.

use reqwest::{Client, Url};
use thiserror::Error;

use crate::domain::{
    classify_features, AreaData, ConfigError, FeatureCollection, PricingConfig, SiteData,
};
use crate::util::{
    assets::{self, AREAS_DOCUMENT, PRICING_DOCUMENT},
    settings::Settings,
    version::user_agent,
};

const PRICING_FILE: &str = "pricing.json";
const AREAS_FILE: &str = "areas.json";

#[derive(Debug, Error)]
pub enum SiteDataError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid pricing document: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid area document: {0}")]
    Geo(#[from] serde_json::Error),
    #[error("embedded document {0} is missing")]
    MissingAsset(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DataSource {
    Embedded,
    Remote(Url),
}

#[derive(Clone)]
pub struct SiteDataClient {
    http: Client,
    source: DataSource,
}

impl SiteDataClient {
    pub fn embedded() -> Result<Self, SiteDataError> {
        Self::with_source(DataSource::Embedded)
    }

    pub fn with_base_url(base: &str) -> Result<Self, SiteDataError> {
        // Without the trailing slash `join` would replace the last path segment.
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        Self::with_source(DataSource::Remote(Url::parse(&base)?))
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, SiteDataError> {
        match settings.data_url.as_deref() {
            Some(url) => Self::with_base_url(url),
            None => Self::embedded(),
        }
    }

    fn with_source(source: DataSource) -> Result<Self, SiteDataError> {
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, source })
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub async fn get_pricing(&self) -> Result<PricingConfig, SiteDataError> {
        let raw = self.fetch_text(PRICING_FILE, PRICING_DOCUMENT).await?;
        Ok(PricingConfig::from_json(&raw)?)
    }

    pub async fn get_areas(&self) -> Result<FeatureCollection, SiteDataError> {
        let raw = self.fetch_text(AREAS_FILE, AREAS_DOCUMENT).await?;
        let collection: FeatureCollection = serde_json::from_str(&raw)?;
        tracing::info!(features = collection.features.len(), "loaded delivery areas");
        Ok(collection)
    }

    /// Loads both documents. Fails only when the pricing document is unusable.
    pub async fn load_site_data(&self) -> Result<SiteData, SiteDataError> {
        let (pricing, areas) = tokio::join!(self.get_pricing(), self.get_areas());
        assemble_site_data(pricing, areas)
    }

    pub fn document_url(&self, file: &str) -> Option<Result<Url, url::ParseError>> {
        match &self.source {
            DataSource::Embedded => None,
            DataSource::Remote(base) => Some(base.join(file)),
        }
    }

    async fn fetch_text(
        &self,
        file: &str,
        embedded: &'static str,
    ) -> Result<String, SiteDataError> {
        let Some(url) = self.document_url(file) else {
            return assets::embedded_text(embedded).ok_or(SiteDataError::MissingAsset(embedded));
        };
        let url = url?;
        tracing::debug!("requesting {url}");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Without pricing nothing can be shown; without areas the calculator still works.
pub fn assemble_site_data(
    pricing: Result<PricingConfig, SiteDataError>,
    areas: Result<FeatureCollection, SiteDataError>,
) -> Result<SiteData, SiteDataError> {
    let pricing = pricing.inspect_err(|err| {
        tracing::error!("pricing document unavailable: {err}");
    })?;

    let areas = match areas {
        Ok(collection) => AreaData::Ready(classify_features(&pricing.areas, &collection)),
        Err(err) => {
            tracing::warn!("delivery areas unavailable: {err}");
            AreaData::Unavailable(err.to_string())
        }
    };

    Ok(SiteData { pricing, areas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::fixtures::sample_config;

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = SiteDataClient::with_base_url("https://kurier.example/data").unwrap();
        let url = client.document_url(PRICING_FILE).unwrap().unwrap();
        assert_eq!(url.as_str(), "https://kurier.example/data/pricing.json");
    }

    #[test]
    fn settings_pick_the_source() {
        let embedded = SiteDataClient::from_settings(&Settings::default()).unwrap();
        assert_eq!(embedded.source(), &DataSource::Embedded);
        assert!(embedded.document_url(AREAS_FILE).is_none());

        let settings = Settings {
            data_url: Some("https://kurier.example/".into()),
            ..Settings::default()
        };
        let remote = SiteDataClient::from_settings(&settings).unwrap();
        assert!(matches!(remote.source(), DataSource::Remote(_)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            SiteDataClient::with_base_url("not a url"),
            Err(SiteDataError::InvalidUrl(_))
        ));
    }

    fn broken_geo_document() -> SiteDataError {
        let err = serde_json::from_str::<FeatureCollection>("{\"features\": 7}").unwrap_err();
        SiteDataError::Geo(err)
    }

    #[test]
    fn missing_areas_still_yield_pricing() {
        let data = assemble_site_data(Ok(sample_config()), Err(broken_geo_document())).unwrap();
        assert_eq!(data.pricing, sample_config());
        assert!(matches!(data.areas, AreaData::Unavailable(ref reason) if reason.starts_with("invalid area document")));
        assert!(data.areas.index().is_none());
    }

    #[test]
    fn missing_pricing_fails_the_whole_load() {
        let result = assemble_site_data(
            Err(SiteDataError::MissingAsset(PRICING_DOCUMENT)),
            Ok(FeatureCollection::default()),
        );
        assert!(matches!(result, Err(SiteDataError::MissingAsset(PRICING_DOCUMENT))));

        let result = assemble_site_data(
            Err(SiteDataError::Config(ConfigError::NoWeightClasses)),
            Err(broken_geo_document()),
        );
        assert!(matches!(
            result,
            Err(SiteDataError::Config(ConfigError::NoWeightClasses))
        ));
    }

    #[test]
    fn areas_are_classified_against_loaded_pricing() {
        let data = assemble_site_data(Ok(sample_config()), Ok(FeatureCollection::default())).unwrap();
        let index = data.areas.index().unwrap();
        let keys: Vec<_> = index.areas.iter().map(|shapes| shapes.key.as_str()).collect();
        assert_eq!(keys, vec!["standard", "stadtrand", "umland"]);
    }

    #[tokio::test]
    async fn embedded_documents_load_and_classify() {
        let client = SiteDataClient::embedded().unwrap();
        let data = client.load_site_data().await.unwrap();
        assert!(data.pricing.default_tier().is_some());

        let index = data.areas.index().expect("embedded areas load");
        assert_eq!(index.areas.len(), data.pricing.areas.len());
        assert!(index.areas.iter().all(|shapes| !shapes.rings.is_empty()));
        assert!(index.bounds().is_some());
    }
}
