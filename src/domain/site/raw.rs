//! Serde mirror of the authored configuration file.
//!
//! Raw types deserialize `site.toml` (or legacy `site.yml`) exactly as
//! written: URLs stay strings and plugin options stay generic values so that
//! validation can name every offending field itself instead of surfacing a
//! serde error mid-structure. Elaboration into the typed model lives in
//! [`super::model`].

use serde::Deserialize;

/// Top-level authored configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSiteConfig {
    pub site_metadata: RawSiteMetadata,
    #[serde(default)]
    pub plugins: Vec<RawPlugin>,
}

/// Authored `[site_metadata]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSiteMetadata {
    pub title: String,
    pub name: String,
    pub site_url: String,
    pub description: String,
    pub hero: RawHero,
    #[serde(default)]
    pub social: Vec<RawSocialLink>,
}

/// Authored `[site_metadata.hero]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawHero {
    pub heading: String,
    pub max_width: u32,
}

/// One authored `[[site_metadata.social]]` entry. Order is display order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSocialLink {
    pub name: String,
    pub url: String,
}

/// One authored `[[plugins]]` entry.
///
/// Options stay a generic value here; known plugins (`theme-novela`,
/// `manifest`) are parsed into typed options during elaboration, unknown
/// plugins pass through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPlugin {
    pub resolve: String,
    #[serde(default)]
    pub options: Option<toml::Value>,
}

impl RawPlugin {
    /// Options table, defaulting to an empty table when omitted.
    pub fn options_value(&self) -> toml::Value {
        self.options.clone().unwrap_or(toml::Value::Table(toml::map::Map::new()))
    }
}
