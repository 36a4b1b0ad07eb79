use serde_json::{json, Value};

use crate::config::{DataSource, SiteConfig};
use crate::error::DataError;

pub struct DataLoader {
    config: SiteConfig,
    data: Option<Value>,
    last_error: Option<String>,
}

impl DataLoader {
    pub fn new(config: SiteConfig) -> DataLoader {
        DataLoader {
            config,
            data: None,
            last_error: None,
        }
    }

    /// Load data from the configured source, validate it and fill in
    /// normalized defaults. The loaded tree replaces any previous one.
    pub fn load(&mut self) -> Result<&Value, DataError> {
        self.last_error = None;

        let raw = match self.config.data_source {
            DataSource::Local => self.load_local(),
            DataSource::Remote => self.load_remote(),
        };

        let result = raw.and_then(|mut tree| {
            validate(&mut tree)?;
            Ok(tree)
        });

        match result {
            Ok(tree) => {
                log::debug!("Portfolio data loaded");
                Ok(self.data.insert(tree))
            }
            Err(e) => {
                log::error!("Failed to load portfolio data: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn load_local(&self) -> Result<Value, DataError> {
        let path = &self.config.local_data_path;
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) => match &self.config.fallback_data_path {
                Some(fallback) => {
                    log::warn!("Failed to read {}, trying {}", path, fallback);
                    std::fs::read_to_string(fallback).map_err(|source| DataError::Read {
                        path: fallback.clone(),
                        source,
                    })?
                }
                None => {
                    return Err(DataError::Read {
                        path: path.clone(),
                        source,
                    })
                }
            },
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn load_remote(&self) -> Result<Value, DataError> {
        let url = self.remote_url()?;
        log::debug!("Fetching portfolio data from {}", url);

        let response = reqwest::blocking::get(url.clone()).map_err(|source| DataError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status(status.as_u16()));
        }

        let body = response.text().map_err(|source| DataError::Fetch {
            url: url.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The remote URL with the GITHUB_USERNAME token substituted.
    fn remote_url(&self) -> Result<url::Url, DataError> {
        let mut raw = self.config.remote_data_path.clone();
        if let Some(username) = &self.config.github_username {
            raw = raw.replace("GITHUB_USERNAME", username);
        }
        url::Url::parse(&raw).map_err(|e| DataError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Replace one top-level key of the loaded tree (`sections`,
    /// `personal`, ...). Returns false when nothing is loaded yet.
    pub fn update_section(&mut self, key: &str, value: Value) -> bool {
        match self.data.as_mut() {
            Some(tree) => {
                tree[key] = value;
                true
            }
            None => false,
        }
    }
}

/// Check required fields and fill in normalized defaults in place.
///
/// `personal` and `sections` must exist. A missing `navigation.order`
/// is derived from the sections present (skipping ones explicitly
/// disabled), in document order. Each section gets a derived `title`,
/// `enabled: true` and an empty `items` array where absent. Nothing
/// else is touched.
pub fn validate(tree: &mut Value) -> Result<(), DataError> {
    if tree.get("personal").is_none() {
        return Err(DataError::MissingField("personal"));
    }
    if tree.get("sections").is_none() {
        return Err(DataError::MissingField("sections"));
    }

    if tree.get("navigation").and_then(|n| n.get("order")).is_none() {
        let order: Vec<Value> = tree
            .get("sections")
            .and_then(|s| s.as_object())
            .map(|sections| {
                sections
                    .iter()
                    .filter(|(_, section)| {
                        section.is_object()
                            && section.get("enabled").and_then(|v| v.as_bool()) != Some(false)
                    })
                    .map(|(key, _)| Value::String(key.clone()))
                    .collect()
            })
            .unwrap_or_default();
        tree["navigation"] = json!({ "order": order });
    }

    if let Some(sections) = tree.get_mut("sections").and_then(|s| s.as_object_mut()) {
        for (key, section) in sections.iter_mut() {
            let section = match section.as_object_mut() {
                Some(s) => s,
                None => continue,
            };
            if !section.contains_key("title") {
                section.insert("title".to_string(), Value::String(title_case(key)));
            }
            if !section.contains_key("enabled") {
                section.insert("enabled".to_string(), Value::Bool(true));
            }
            if !section.contains_key("items") && !section.contains_key("categories") {
                section.insert("items".to_string(), Value::Array(Vec::new()));
            }
        }
    }

    Ok(())
}

/// Convert a camelCase or snake_case section key into a display
/// title: `codingProjects` becomes `Coding Projects`.
pub fn title_case(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() {
            spaced.push(' ');
            spaced.push(ch);
        } else if ch == '_' {
            spaced.push(' ');
        } else {
            spaced.push(ch);
        }
    }

    spaced
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimal placeholder tree for hosts that want to show something
/// when no data can be loaded.
pub fn fallback_data() -> Value {
    json!({
        "personal": {
            "name": "Portfolio",
            "title": "Welcome",
            "email": "",
            "location": "",
            "bio": "Unable to load portfolio data. Please check your configuration."
        },
        "sections": {},
        "navigation": { "order": [] }
    })
}
