//! Build artifact shapes: the web manifest document and the fixed paths
//! artifacts land at inside the output directory.

use serde::Serialize;

use crate::domain::site::{DisplayMode, ManifestOptions};
use crate::domain::{AppError, SiteConfig};
use crate::services::icon::RenderedIcon;

pub const LOGO_PARTIAL_PATH: &str = "partials/logo.html";
pub const LOGO_STYLESHEET_PATH: &str = "css/logo.css";
pub const WEB_MANIFEST_PATH: &str = "manifest.webmanifest";
pub const CONFIG_EXPORT_PATH: &str = "site-config.json";

/// The `manifest.webmanifest` document, in its wire spelling.
#[derive(Debug, Clone, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: DisplayMode,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl WebManifest {
    pub fn from_options(options: &ManifestOptions, icons: &[RenderedIcon]) -> Self {
        Self {
            name: options.name.clone(),
            short_name: options.short_name.clone(),
            start_url: options.start_url.clone(),
            background_color: options.background_color.clone(),
            theme_color: options.theme_color.clone(),
            display: options.display,
            icons: icons
                .iter()
                .map(|icon| ManifestIcon {
                    src: icon.path.clone(),
                    sizes: icon.sizes_attr(),
                    mime_type: icon.mime_type().to_string(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|err| {
            AppError::InternalError(format!("Failed to serialize web manifest: {}", err))
        })
    }
}

/// Serializes a configuration in its published contract shape.
pub fn export_config_json(config: &SiteConfig, pretty: bool) -> Result<String, AppError> {
    let result = if pretty {
        serde_json::to_string_pretty(config)
    } else {
        serde_json::to_string(config)
    };
    result.map_err(|err| {
        AppError::InternalError(format!("Failed to serialize site configuration: {}", err))
    })
}
