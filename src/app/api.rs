//! API facade for the application.
//!
//! High-level functions that glue together context creation and command
//! execution. Every operation comes in two flavors: one for the current
//! directory and an `_at` variant taking the site root explicitly.

use std::path::PathBuf;

use crate::app::{
    AppContext,
    commands::{build, check, export, init},
};
use crate::services::{EmbeddedTheme, FilesystemSiteStore, HttpLinkProbe};

pub use crate::app::commands::build::{BuildOptions, BuildOutcome, DEFAULT_OUT_DIR};
pub use crate::app::commands::check::{CheckOptions, CheckOutcome};
pub use crate::app::commands::export::ExportOptions;
pub use crate::app::commands::init::InitOutcome;
pub use crate::domain::AppError;
pub use crate::ports::StarterSite;

/// Create an `AppContext` for a given site root.
fn create_context(path: PathBuf) -> AppContext<FilesystemSiteStore, EmbeddedTheme> {
    let store = FilesystemSiteStore::new(path);
    let theme = EmbeddedTheme::new();
    AppContext::new(store, theme)
}

/// Scaffold a fresh site in the current directory.
pub fn init(site: &StarterSite) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, site)
}

/// Scaffold a fresh site at the specified path.
pub fn init_at(path: impl Into<PathBuf>, site: &StarterSite) -> Result<InitOutcome, AppError> {
    let ctx = create_context(path.into());
    init::execute(&ctx, site)
}

/// Render all artifacts for the site in the current directory.
pub fn build(options: &BuildOptions) -> Result<BuildOutcome, AppError> {
    build_at(std::env::current_dir()?, options)
}

/// Render all artifacts for the site at the specified path.
pub fn build_at(path: impl Into<PathBuf>, options: &BuildOptions) -> Result<BuildOutcome, AppError> {
    let ctx = create_context(path.into());
    build::execute(&ctx, options)
}

/// Validate the site in the current directory.
pub fn check(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    check_at(std::env::current_dir()?, options)
}

/// Validate the site at the specified path.
pub fn check_at(path: impl Into<PathBuf>, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    let ctx = create_context(path.into());
    if options.links {
        let probe = HttpLinkProbe::new()?;
        check::execute(&ctx, Some(&probe), options)
    } else {
        check::execute(&ctx, None, options)
    }
}

/// Export the configuration of the site in the current directory.
pub fn export_config(options: ExportOptions) -> Result<String, AppError> {
    export_config_at(std::env::current_dir()?, options)
}

/// Export the configuration of the site at the specified path.
pub fn export_config_at(
    path: impl Into<PathBuf>,
    options: ExportOptions,
) -> Result<String, AppError> {
    let ctx = create_context(path.into());
    export::execute(&ctx, options)
}
