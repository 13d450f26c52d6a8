use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::site::{CANONICAL_CONFIG, LEGACY_CONFIG};
use crate::ports::{SiteStore, StarterSite, ThemeAssets};

/// What `init` did, for display.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub written: Vec<String>,
    /// Scaffold files that already existed and were left alone.
    pub skipped: Vec<String>,
}

/// Execute the init command.
///
/// Scaffolds a fresh site: configuration, starter icon, and empty content
/// directories. Files that already exist are never overwritten, and a site
/// that already has a configuration (canonical or legacy) is refused.
pub fn execute<S, T>(ctx: &AppContext<S, T>, site: &StarterSite) -> Result<InitOutcome, AppError>
where
    S: SiteStore,
    T: ThemeAssets,
{
    for file in [CANONICAL_CONFIG, LEGACY_CONFIG] {
        if ctx.store().exists(file) {
            return Err(AppError::ConfigExists { file: file.to_string() });
        }
    }
    site.validate()?;

    let mut outcome = InitOutcome { written: Vec::new(), skipped: Vec::new() };
    for file in ctx.theme().starter_files(site)? {
        if ctx.store().exists(&file.path) {
            outcome.skipped.push(file.path);
            continue;
        }
        ctx.store().write_bytes(&file.path, &file.contents)?;
        outcome.written.push(file.path);
    }
    Ok(outcome)
}
