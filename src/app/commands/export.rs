use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{SiteStore, ThemeAssets};
use crate::services::{export_config_json, load_site};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub pretty: bool,
}

/// Execute the config export command: load, validate, and serialize the
/// configuration in its published contract shape.
pub fn execute<S, T>(ctx: &AppContext<S, T>, options: ExportOptions) -> Result<String, AppError>
where
    S: SiteStore,
    T: ThemeAssets,
{
    let loaded = load_site(ctx.store())?;
    export_config_json(&loaded.config, options.pretty)
}
