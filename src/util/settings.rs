use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "de";
const APP_ORG: &str = "RadkurierKollektiv";
const APP_NAME: &str = "KurierSite";

/// Overrides `data_url` from the settings file.
pub const DATA_URL_ENV: &str = "KURIER_DATA_URL";

pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 800;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL serving `pricing.json` and `areas.json`. Embedded copies are used when unset.
    #[serde(default)]
    pub data_url: Option<String>,
    #[serde(default = "default_slide_interval")]
    pub slide_interval_ms: u64,
}

fn default_slide_interval() -> u64 {
    DEFAULT_SLIDE_INTERVAL_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: None,
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
        }
    }
}

impl Settings {
    pub fn with_env_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.data_url = Some(url);
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Settings file plus environment override. Problems fall back to defaults.
pub fn load_settings() -> Settings {
    let from_file = match settings_file() {
        Some(path) => match read_settings(&path) {
            Ok(Some(settings)) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Ok(None) => Settings::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable settings: {err}");
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    from_file.with_env_override(std::env::var(DATA_URL_ENV).ok())
}

/// `Ok(None)` when the file does not exist.
pub fn read_settings(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn env_value_overrides_file() {
        let settings = Settings {
            data_url: Some("https://file.example/data/".into()),
            ..Settings::default()
        };
        let settings = settings.with_env_override(Some(" https://env.example/data/ ".into()));
        assert_eq!(settings.data_url.as_deref(), Some("https://env.example/data/"));
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let settings = Settings::default().with_env_override(Some("   ".into()));
        assert_eq!(settings.data_url, None);
    }

    #[test]
    fn read_settings_handles_missing_and_present_files() {
        let dir = std::env::temp_dir().join(format!("kurier-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        let _ = fs::remove_file(&path);
        assert!(read_settings(&path).unwrap().is_none());

        fs::write(&path, r#"{"slide_interval_ms": 1200}"#).unwrap();
        let settings = read_settings(&path).unwrap().unwrap();
        assert_eq!(settings.slide_interval_ms, 1200);
        assert_eq!(settings.data_url, None);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(read_settings(&path), Err(SettingsError::Serde(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
