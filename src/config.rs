use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where portfolio data is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Local,
    Remote,
}

/// Feature defaults applied when no stored preference exists yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureDefaults {
    pub theme: Option<String>,
    pub text_size: Option<String>,
    pub sounds: Option<bool>,
    pub music: Option<bool>,
    pub particles: Option<bool>,
}

/// Site configuration. Every field has a default so a partial config
/// file (or none at all) still yields a working setup. Unknown keys
/// in the file are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub data_source: DataSource,
    pub local_data_path: String,
    /// Optional older data file tried when the primary local path
    /// cannot be read.
    pub fallback_data_path: Option<String>,
    pub remote_data_path: String,
    /// Substituted for the GITHUB_USERNAME token in the remote path.
    pub github_username: Option<String>,
    pub title_on_blur: String,
    pub title_on_active: String,
    pub animation_duration: u64,
    pub projects_per_row: u32,
    pub items_per_page: u32,
    pub enable_tooltips: bool,
    pub enable_animations: bool,
    pub enable_search: bool,
    pub show_navigation: bool,
    pub defaults: FeatureDefaults,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            data_source: DataSource::Local,
            local_data_path: "./portfolio-data.json".to_string(),
            fallback_data_path: None,
            remote_data_path:
                "https://raw.githubusercontent.com/GITHUB_USERNAME/portfolio-generator/master/portfolio-data.json"
                    .to_string(),
            github_username: None,
            title_on_blur: "Miss You :(".to_string(),
            title_on_active: "Portfolio".to_string(),
            animation_duration: 300,
            projects_per_row: 3,
            items_per_page: 6,
            enable_tooltips: true,
            enable_animations: true,
            enable_search: true,
            show_navigation: true,
            defaults: FeatureDefaults::default(),
        }
    }
}

impl SiteConfig {
    /// Read a config file, falling back to the built-in defaults when
    /// the file is missing or malformed.
    pub fn load(path: &str) -> SiteConfig {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default site config: {}", e);
                SiteConfig::default()
            }
        }
    }

    /// Read and parse a config file, surfacing the failure.
    pub fn try_load(path: &str) -> Result<SiteConfig, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
