pub mod load;
pub mod model;
pub mod raw;
pub mod validate;

pub use load::{
    CANONICAL_CONFIG, ConfigFormat, LEGACY_CONFIG, LegacyState, elaborate_document,
    legacy_state, parse_document,
};
pub use model::{
    DisplayMode, Hero, MANIFEST_PLUGIN, ManifestOptions, Plugin, PluginOptions, SiteConfig,
    SiteMetadata, SocialLink, SourcesConfig, THEME_PLUGIN, ThemeOptions,
};
pub use raw::{RawPlugin, RawSiteConfig};
pub use validate::{FieldIssue, IssueSeverity, validate_raw};
