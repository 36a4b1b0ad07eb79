//! Data-driven portfolio render engine.
//! Loads a JSON content tree (local file or remote URL), normalizes it,
//! renders every enabled section through a fixed set of card templates,
//! and assembles the full document. Visitor preferences persist in SQLite.

pub mod config;
pub mod error;
pub mod features;
pub mod icons;
pub mod loader;
pub mod page;
pub mod prefs;
pub mod render;
pub mod templates;


pub use config::{DataSource, SiteConfig};
pub use error::{ConfigError, DataError, RenderError, StoreError};
pub use icons::IconSet;
pub use loader::DataLoader;
pub use prefs::PrefStore;
pub use render::Fragment;

use serde_json::Value;

use page::MountSet;

/// Everything a running portfolio needs: the config, the content
/// loader, the icon set, and the preference store.
pub struct App {
    pub config: SiteConfig,
    pub loader: DataLoader,
    pub icons: IconSet,
    pub prefs: PrefStore,
}

/// Build the application context. A missing or broken icon config is
/// survivable (icons fall back to emoji); a preference store that
/// cannot open is not.
pub fn init(config: SiteConfig, icon_config_path: &str, prefs_path: &str) -> Result<App, StoreError> {
    let icons = match IconSet::load(icon_config_path) {
        Ok(icons) => icons,
        Err(e) => {
            log::warn!("Using empty icon set: {}", e);
            IconSet::default()
        }
    };
    let prefs = PrefStore::open(prefs_path)?;
    let loader = DataLoader::new(config.clone());
    Ok(App { config, loader, icons, prefs })
}

impl App {
    /// Load (or reload) the content tree and render the full page.
    /// Load and render failures both produce the error document
    /// rather than propagating, so the caller always has a page to
    /// serve.
    pub fn render_page(&mut self) -> String {
        let loaded = self.loader.load().map(|_| ());
        match loaded {
            Ok(()) => match self.render_loaded() {
                Ok(html) => html,
                Err(e) => {
                    log::error!("Failed to render portfolio: {}", e);
                    self.error_document(&e.to_string())
                }
            },
            Err(e) => {
                log::error!("Failed to initialize portfolio: {}", e);
                self.error_document(&e.to_string())
            }
        }
    }

    /// Render from the already-loaded tree without touching the data
    /// source again.
    pub fn render_loaded(&self) -> Result<String, DataError> {
        let tree = self.loader.data().ok_or(DataError::NotLoaded)?;
        let fragments = render::render(tree, &self.icons);
        let mut mounts = MountSet::standard();
        page::assemble(&mut mounts, &fragments, tree);
        Ok(self.finish_document(&mounts))
    }

    /// Replace one top-level section of the content tree and
    /// re-render. Returns `None` until data has been loaded once.
    pub fn update_section(&mut self, key: &str, value: Value) -> Option<String> {
        if !self.loader.update_section(key, value) {
            log::warn!("Cannot update section {:?} before data is loaded", key);
            return None;
        }
        log::debug!("Updated section: {}", key);
        match self.render_loaded() {
            Ok(html) => Some(html),
            Err(e) => {
                log::error!("Failed to re-render after update: {}", e);
                None
            }
        }
    }

    pub fn data(&self) -> Option<&Value> {
        self.loader.data()
    }

    fn error_document(&self, message: &str) -> String {
        let mut mounts = MountSet::standard();
        if let Err(e) = mounts.append(page::MOUNT_MAIN, &page::error_panel(message)) {
            log::warn!("{}", e);
        }
        self.finish_document(&mounts)
    }

    fn finish_document(&self, mounts: &MountSet) -> String {
        let theme_key = features::current_theme(&self.prefs, &self.config);
        let theme = features::theme(&theme_key);
        let size = features::current_text_size(&self.prefs, &self.config);
        page::build_document(mounts, theme.class_name, &features::text_size_class(&size))
    }
}
