//! Turning authored documents into validated configurations.
//!
//! `site.toml` is the canonical file; `site.yml` is accepted as a legacy
//! spelling of the same shape. When both exist the canonical file wins and
//! the legacy copy is compared structurally so a stale duplicate can be
//! reported instead of silently ignored.

use crate::domain::error::AppError;
use crate::domain::site::model::SiteConfig;
use crate::domain::site::raw::RawSiteConfig;
use crate::domain::site::validate::validate_raw;

/// Canonical configuration file name at the site root.
pub const CANONICAL_CONFIG: &str = "site.toml";
/// Legacy configuration file name, still honored when no canonical file exists.
pub const LEGACY_CONFIG: &str = "site.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => CANONICAL_CONFIG,
            ConfigFormat::Yaml => LEGACY_CONFIG,
        }
    }
}

/// Relationship between the canonical file and a legacy copy living next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyState {
    /// Same configuration in both files; the legacy one can be deleted.
    Redundant,
    /// The two files describe different sites.
    Diverged,
}

/// Parses one authored document into the raw shape. `path` is only used in
/// error messages.
pub fn parse_document(
    content: &str,
    format: ConfigFormat,
    path: &str,
) -> Result<RawSiteConfig, AppError> {
    match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|source| AppError::TomlParse { path: path.to_string(), source }),
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|source| AppError::YamlParse { path: path.to_string(), source }),
    }
}

/// Parses, validates, and elaborates one document, failing on the first
/// invalid field.
pub fn elaborate_document(
    content: &str,
    format: ConfigFormat,
    path: &str,
) -> Result<SiteConfig, AppError> {
    let raw = parse_document(content, format, path)?;
    if let Some(issue) = validate_raw(&raw).into_iter().find(|issue| issue.is_error()) {
        return Err(AppError::invalid_field(issue.field, issue.reason));
    }
    SiteConfig::from_raw(&raw)
}

/// Compares the canonical configuration with a legacy copy.
pub fn legacy_state(canonical: &RawSiteConfig, legacy: &RawSiteConfig) -> LegacyState {
    if canonical == legacy {
        LegacyState::Redundant
    } else {
        LegacyState::Diverged
    }
}
