use crate::config::SiteConfig;
use crate::error::StoreError;
use crate::prefs::{self, PrefStore};

// ── Themes ──────────────────────────────────────────────────────

pub struct Theme {
    pub key: &'static str,
    pub class_name: &'static str,
    pub label: &'static str,
    pub meta_color: &'static str,
}

/// Cycle order is the declaration order.
pub static THEMES: [Theme; 4] = [
    Theme { key: "aero", class_name: "theme-aero", label: "Frutiger Aero", meta_color: "#3fa9f5" },
    Theme { key: "eco", class_name: "theme-eco", label: "Eco", meta_color: "#52b788" },
    Theme { key: "metro", class_name: "theme-metro", label: "Metro", meta_color: "#ff1843" },
    Theme { key: "red", class_name: "theme-red", label: "Metro Red", meta_color: "#e53946" },
];

pub const TEXT_SIZES: [&str; 3] = ["small", "medium", "large"];

/// Resolve a theme by key. Unknown keys fall back to the first theme
/// so a stale persisted value can never leave the page unstyled.
pub fn theme(key: &str) -> &'static Theme {
    THEMES.iter().find(|t| t.key == key).unwrap_or(&THEMES[0])
}

/// The key of the theme after `key` in the cycle. An unknown key is
/// treated as sitting just before the start, so cycling from it lands
/// on the first theme.
pub fn next_theme(key: &str) -> &'static str {
    let at = THEMES.iter().position(|t| t.key == key).unwrap_or(THEMES.len() - 1);
    THEMES[(at + 1) % THEMES.len()].key
}

/// The active theme key: persisted choice first, then the configured
/// default, then the built-in first theme.
pub fn current_theme(store: &PrefStore, config: &SiteConfig) -> String {
    match store.get(prefs::THEME_KEY) {
        Some(key) => key,
        None => match &config.defaults.theme {
            Some(key) => key.clone(),
            None => THEMES[0].key.to_string(),
        },
    }
}

/// Switch to the given theme, persisting the key as given. The key is
/// stored raw rather than resolved, so later additions to the theme
/// table pick it up.
pub fn apply_theme(store: &PrefStore, key: &str, persist: bool) -> &'static Theme {
    if persist {
        if let Err(e) = store.set(prefs::THEME_KEY, key) {
            log::warn!("Failed to persist theme: {}", e);
        }
    }
    theme(key)
}

/// Advance to the next theme in the cycle and persist it.
pub fn cycle_theme(store: &PrefStore, config: &SiteConfig) -> &'static Theme {
    let next = next_theme(&current_theme(store, config));
    apply_theme(store, next, true)
}

// ── Text size ───────────────────────────────────────────────────

pub fn current_text_size(store: &PrefStore, config: &SiteConfig) -> String {
    match store.get(prefs::TEXT_SIZE_KEY) {
        Some(size) => size,
        None => match &config.defaults.text_size {
            Some(size) => size.clone(),
            None => "medium".to_string(),
        },
    }
}

pub fn text_size_class(size: &str) -> String {
    format!("text-{}", size)
}

/// Advance small → medium → large → small and persist the result.
/// An unrecognized stored size restarts the cycle at the first entry.
pub fn cycle_text_size(store: &PrefStore, config: &SiteConfig) -> &'static str {
    let current = current_text_size(store, config);
    let next = match TEXT_SIZES.iter().position(|s| *s == current) {
        Some(at) => TEXT_SIZES[(at + 1) % TEXT_SIZES.len()],
        None => TEXT_SIZES[0],
    };
    if let Err(e) = store.set(prefs::TEXT_SIZE_KEY, next) {
        log::warn!("Failed to persist text size: {}", e);
    }
    next
}

// ── Toggles ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Sounds,
    Music,
    Particles,
}

impl Toggle {
    pub fn key(&self) -> &'static str {
        match self {
            Toggle::Sounds => prefs::SOUNDS_KEY,
            Toggle::Music => prefs::MUSIC_KEY,
            Toggle::Particles => prefs::PARTICLES_KEY,
        }
    }

    fn config_default(&self, config: &SiteConfig) -> bool {
        let defaults = &config.defaults;
        match self {
            Toggle::Sounds => defaults.sounds.unwrap_or(true),
            Toggle::Music => defaults.music.unwrap_or(true),
            Toggle::Particles => defaults.particles.unwrap_or(true),
        }
    }
}

/// Persisted value wins; otherwise the configured default, which is
/// on unless the config says otherwise.
pub fn is_enabled(store: &PrefStore, config: &SiteConfig, toggle: Toggle) -> bool {
    store.get_bool(toggle.key(), toggle.config_default(config))
}

/// Invert a toggle and persist the new state. Returns the new state.
pub fn flip(store: &PrefStore, config: &SiteConfig, toggle: Toggle) -> bool {
    let next = !is_enabled(store, config, toggle);
    if let Err(e) = store.set(toggle.key(), if next { "true" } else { "false" }) {
        log::warn!("Failed to persist toggle {}: {}", toggle.key(), e);
    }
    next
}

// ── Window title ────────────────────────────────────────────────

/// Document title for the current visibility state. Hidden tabs get
/// the configured away message.
pub fn title_for_visibility(config: &SiteConfig, visible: bool) -> String {
    if visible {
        config.title_on_active.clone()
    } else {
        config.title_on_blur.clone()
    }
}

// ── Debug mode ──────────────────────────────────────────────────

/// Debug mode is a persisted flag rather than config so it can be
/// toggled on a deployed site without editing files.
pub fn set_debug_mode(store: &PrefStore, enabled: bool) -> Result<(), StoreError> {
    if enabled {
        store.set(prefs::DEBUG_KEY, "true")
    } else {
        store.remove(prefs::DEBUG_KEY)
    }
}

pub fn debug_enabled(store: &PrefStore) -> bool {
    store.get_bool(prefs::DEBUG_KEY, false)
}
