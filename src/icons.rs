use serde_json::Value;

use crate::error::ConfigError;

pub const ICON_STYLES: [&str; 3] = ["style-classic", "style-glossy-blue", "style-ios6"];

const DEFAULT_STYLE: &str = "style-ios6";
const DEFAULT_SIZE: u32 = 48;

pub struct IconSet {
    config: Value,
    style: String,
}

impl Default for IconSet {
    /// An empty set: every lookup misses, social links fall back to
    /// first-letter glyphs.
    fn default() -> Self {
        IconSet {
            config: Value::Null,
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

impl IconSet {
    /// Load icon configuration from a JSON file.
    pub fn load(path: &str) -> Result<IconSet, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config: Value = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::from_value(config))
    }

    /// Build a set from an already-parsed configuration tree.
    pub fn from_value(config: Value) -> IconSet {
        let style = config
            .get("iconStyle")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_STYLE)
            .to_string();
        IconSet { config, style }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn set_style(&mut self, style: &str) {
        self.style = style.to_string();
    }

    pub fn icon(&self, category: &str, key: &str) -> Option<&Value> {
        self.config.get(category)?.get(key)
    }

    pub fn category(&self, category: &str) -> Option<&Value> {
        self.config.get(category)
    }

    /// Image path for an icon in the given style (or the current one).
    pub fn icon_path(&self, category: &str, key: &str, style: Option<&str>) -> Option<&str> {
        let icon = self.icon(category, key)?;
        if icon.get("type").and_then(|v| v.as_str()) != Some("image") {
            return None;
        }
        icon.get("files")?
            .get(style.unwrap_or(&self.style))
            .and_then(|v| v.as_str())
    }

    /// HTML for an icon: an image tag when the current style has a
    /// file for it, an emoji span otherwise, `None` when the icon is
    /// unknown or has neither.
    pub fn icon_html(&self, category: &str, key: &str, size: u32) -> Option<String> {
        let icon = self.icon(category, key)?;

        if let Some(path) = self.icon_path(category, key, None) {
            let alt = icon.get("alt").and_then(|v| v.as_str()).unwrap_or("");
            return Some(format!(
                r#"<img src="{}" alt="{}" width="{}" height="{}" class="icon-image" loading="lazy">"#,
                path, alt, size, size
            ));
        }

        icon.get("emoji")
            .and_then(|v| v.as_str())
            .map(|emoji| format!(r#"<span class="icon-emoji">{}</span>"#, emoji))
    }

    /// Icon for a social platform, case-insensitive. Platforms with
    /// no configured icon get a first-letter glyph so the link still
    /// reads (`GitHub` becomes `G`, an empty platform becomes `?`).
    pub fn social_icon_html(&self, platform: &str) -> String {
        let key = platform.to_lowercase();
        if let Some(html) = self.icon_html("social", &key, DEFAULT_SIZE) {
            return html;
        }

        let glyph = platform.chars().next().unwrap_or('?');
        format!(r#"<span class="social-icon-fallback">{}</span>"#, glyph)
    }
}
