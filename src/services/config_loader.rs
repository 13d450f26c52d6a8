//! Locates and loads the site configuration through a [`SiteStore`].

use crate::domain::site::{
    CANONICAL_CONFIG, ConfigFormat, LEGACY_CONFIG, elaborate_document,
};
use crate::domain::{AppError, SiteConfig};
use crate::ports::SiteStore;

/// A successfully loaded configuration plus the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedSite {
    pub config: SiteConfig,
    pub source: ConfigFormat,
}

impl LoadedSite {
    /// Whether the configuration was read from the legacy `site.yml`.
    pub fn from_legacy(&self) -> bool {
        self.source == ConfigFormat::Yaml
    }
}

/// Which configuration file a load would read, if any. The canonical
/// `site.toml` always wins over the legacy `site.yml`.
pub fn locate_config(store: &impl SiteStore) -> Option<ConfigFormat> {
    if store.exists(CANONICAL_CONFIG) {
        Some(ConfigFormat::Toml)
    } else if store.exists(LEGACY_CONFIG) {
        Some(ConfigFormat::Yaml)
    } else {
        None
    }
}

/// Loads and validates the site configuration, failing on the first invalid
/// field.
pub fn load_site(store: &impl SiteStore) -> Result<LoadedSite, AppError> {
    let source = locate_config(store).ok_or(AppError::ConfigMissing)?;
    let file = source.file_name();
    let content = store.read_text(file)?;
    let config = elaborate_document(&content, source, file)?;
    Ok(LoadedSite { config, source })
}
