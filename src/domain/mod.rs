pub mod error;
pub mod logo;
pub mod report;
pub mod site;

pub use error::AppError;
pub use logo::{DEFAULT_FILL, LogoSpec, LogoVariant, TABLET_BREAKPOINT_PX, visible_variant};
pub use report::{BuildReport, BuildReportEntry, REPORT_FILENAME, fingerprint, hash_bytes};
pub use site::{
    CANONICAL_CONFIG, ConfigFormat, DisplayMode, FieldIssue, Hero, IssueSeverity,
    LEGACY_CONFIG, LegacyState, MANIFEST_PLUGIN, ManifestOptions, Plugin, PluginOptions,
    RawSiteConfig, SiteConfig, SiteMetadata, SocialLink, THEME_PLUGIN, ThemeOptions,
};
