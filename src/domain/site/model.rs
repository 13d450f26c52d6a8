//! Validated site configuration model.
//!
//! This is the shape the rest of the crate works with: URLs are parsed,
//! known plugin options are typed, and serialization emits the published
//! contract names (`siteMetadata`, `siteUrl`, `maxWidth`, ...) regardless of
//! the snake_case keys used in the authored file.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::AppError;
use crate::domain::site::raw::{RawPlugin, RawSiteConfig};

/// Resolve id of the content theme plugin.
pub const THEME_PLUGIN: &str = "theme-novela";
/// Resolve id of the installable-web-app manifest plugin.
pub const MANIFEST_PLUGIN: &str = "manifest";

/// Elaborated site configuration. Construct via [`SiteConfig::from_raw`] or
/// the loader in [`super::load`]; the model is read-only after that.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_metadata: SiteMetadata,
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub name: String,
    pub site_url: Url,
    pub description: String,
    pub hero: Hero,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub heading: String,
    pub max_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: Url,
}

/// One plugin declaration, in authored order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugin {
    pub resolve: String,
    pub options: PluginOptions,
}

/// Plugin options, typed for the plugins this crate understands and passed
/// through verbatim for everything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginOptions {
    Theme(ThemeOptions),
    Manifest(ManifestOptions),
    Other(toml::Value),
}

/// Options of the `theme-novela` plugin. Every field carries the theme's
/// default, so a bare `[[plugins]]` entry is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), deny_unknown_fields)]
pub struct ThemeOptions {
    #[serde(default = "default_content_posts")]
    pub content_posts: String,
    #[serde(default = "default_content_authors")]
    pub content_authors: String,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default)]
    pub authors_page: bool,
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            content_posts: default_content_posts(),
            content_authors: default_content_authors(),
            base_path: default_base_path(),
            authors_page: false,
            sources: SourcesConfig::default(),
        }
    }
}

/// Content sources the theme reads from. Unknown keys are tolerated so a
/// remote source can be declared before this crate learns about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_true")]
    pub local: bool,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self { local: true }
    }
}

/// Options of the `manifest` plugin. These name the installable app, so all
/// of them must be spelled out in the authored file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestOptions {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: DisplayMode,
    pub icon: String,
}

/// Web app display mode, serialized in its wire spelling (`minimal-ui`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    Standalone,
    MinimalUi,
    Browser,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Fullscreen => "fullscreen",
            DisplayMode::Standalone => "standalone",
            DisplayMode::MinimalUi => "minimal-ui",
            DisplayMode::Browser => "browser",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_content_posts() -> String {
    "content/posts".to_string()
}

fn default_content_authors() -> String {
    "content/authors".to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

/// Parses a URL and insists on an absolute `http(s)` one, the only kind the
/// published configuration may carry.
pub(crate) fn parse_absolute_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value.trim())
        .map_err(|e| format!("must be an absolute http(s) URL ({e})"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("must use http or https, not '{other}'")),
    }
}

impl SiteConfig {
    /// Elaborates the authored shape into the typed model.
    ///
    /// Fails on the first structural problem (unparsable URL, malformed
    /// options for a known plugin) with an error naming the field; run
    /// [`super::validate::validate_raw`] first for a collected report.
    pub fn from_raw(raw: &RawSiteConfig) -> Result<Self, AppError> {
        let meta = &raw.site_metadata;
        let site_url = parse_absolute_url(&meta.site_url)
            .map_err(|reason| AppError::invalid_field("siteMetadata.siteUrl", reason))?;

        let mut social = Vec::with_capacity(meta.social.len());
        for (index, link) in meta.social.iter().enumerate() {
            let url = parse_absolute_url(&link.url).map_err(|reason| {
                AppError::invalid_field(format!("siteMetadata.social[{index}].url"), reason)
            })?;
            social.push(SocialLink { name: link.name.clone(), url });
        }

        let mut plugins = Vec::with_capacity(raw.plugins.len());
        for (index, plugin) in raw.plugins.iter().enumerate() {
            plugins.push(Plugin::from_raw(index, plugin)?);
        }

        Ok(Self {
            site_metadata: SiteMetadata {
                title: meta.title.clone(),
                name: meta.name.clone(),
                site_url,
                description: meta.description.clone(),
                hero: Hero {
                    heading: meta.hero.heading.clone(),
                    max_width: meta.hero.max_width,
                },
                social,
            },
            plugins,
        })
    }

    /// Typed options of the first `theme-novela` plugin, if declared.
    pub fn theme_options(&self) -> Option<&ThemeOptions> {
        self.plugins.iter().find_map(|plugin| match &plugin.options {
            PluginOptions::Theme(options) => Some(options),
            _ => None,
        })
    }

    /// Typed options of the first `manifest` plugin, if declared.
    pub fn manifest_options(&self) -> Option<&ManifestOptions> {
        self.plugins.iter().find_map(|plugin| match &plugin.options {
            PluginOptions::Manifest(options) => Some(options),
            _ => None,
        })
    }
}

impl Plugin {
    fn from_raw(index: usize, raw: &RawPlugin) -> Result<Self, AppError> {
        let value = raw.options_value();
        let options = match raw.resolve.as_str() {
            THEME_PLUGIN => PluginOptions::Theme(value.try_into().map_err(|e| {
                AppError::invalid_field(
                    format!("plugins[{index}].options"),
                    format!("malformed {THEME_PLUGIN} options: {e}"),
                )
            })?),
            MANIFEST_PLUGIN => PluginOptions::Manifest(value.try_into().map_err(|e| {
                AppError::invalid_field(
                    format!("plugins[{index}].options"),
                    format!("malformed {MANIFEST_PLUGIN} options: {e}"),
                )
            })?),
            _ => PluginOptions::Other(value),
        };
        Ok(Self { resolve: raw.resolve.clone(), options })
    }
}
