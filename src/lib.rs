//! masthead: site identity toolkit for a personal blog.
//!
//! One validated configuration file (`site.toml`, with legacy `site.yml`
//! support) drives everything the crate produces: the responsive brand mark
//! and its breakpoint stylesheet, the installable web-app manifest with
//! resized icons, and a canonical JSON export of the configuration itself.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{
    AppError, BuildOptions, BuildOutcome, CheckOptions, CheckOutcome, DEFAULT_OUT_DIR,
    ExportOptions, InitOutcome, StarterSite, build, build_at, check, check_at, export_config,
    export_config_at, init, init_at,
};
pub use domain::{LogoSpec, LogoVariant, SiteConfig, TABLET_BREAKPOINT_PX, visible_variant};
