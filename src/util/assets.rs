use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const PRICING_DOCUMENT: &str = "data/pricing.json";
pub const AREAS_DOCUMENT: &str = "data/areas.json";

const HERO_DIR: &str = "hero/";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();
static HERO_SLIDES: OnceLock<Vec<String>> = OnceLock::new();

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| embedded_text("/assets/main.css").unwrap_or_default())
        .as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| load_data_uri("/assets/favicon.svg").unwrap_or_default())
        .as_str()
}

/// Data URIs for every image under `assets/hero/`, in file name order.
pub fn hero_slides() -> &'static [String] {
    HERO_SLIDES.get_or_init(|| {
        let mut names: Vec<String> = EmbeddedAssets::iter()
            .filter(|name| name.starts_with(HERO_DIR))
            .map(|name| name.into_owned())
            .collect();
        names.sort();
        names
            .iter()
            .filter_map(|name| load_data_uri(name))
            .collect()
    })
}

/// UTF-8 contents of an embedded file, `None` if missing or not text.
pub fn embedded_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    match String::from_utf8(asset.into_owned()) {
        Ok(text) => Some(text),
        Err(_) => {
            tracing::error!("embedded asset {path} is not valid UTF-8");
            None
        }
    }
}

fn load_data_uri(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    let mime = guess_mime(path);
    let encoded = STANDARD.encode(asset.as_ref());
    Some(format!("data:{mime};base64,{encoded}"))
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    let asset = EmbeddedAssets::get(&canonical).map(|file| file.data);
    if asset.is_none() {
        tracing::error!("failed to locate embedded asset: {path}");
    }
    asset
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn guess_mime(path: &str) -> &'static str {
    if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".ico") {
        "image/x-icon"
    } else if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        "image/jpeg"
    } else if path.ends_with(".webp") {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_is_an_svg_data_uri() {
        let uri = favicon_data_uri();
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert!(String::from_utf8(decoded).unwrap().contains("<svg"));
    }

    #[test]
    fn data_documents_are_embedded() {
        assert!(embedded_text(PRICING_DOCUMENT).is_some());
        assert!(embedded_text("/assets/data/areas.json").is_some());
        assert!(embedded_text("data/missing.json").is_none());
    }

    #[test]
    fn hero_slides_are_data_uris() {
        let slides = hero_slides();
        assert!(slides.len() >= 2);
        assert!(slides.iter().all(|uri| uri.starts_with("data:image/svg+xml;base64,")));
    }
}
