mod asset_rules;
mod config_rules;
mod diagnostics;
mod link_rules;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{LinkProbe, SiteStore, ThemeAssets};

pub use diagnostics::Diagnostics;

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Treat warnings as failures.
    pub strict: bool,
    /// Probe the published URLs over the network.
    pub links: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Execute the check command.
///
/// Runs every rule and reports all findings at once. `link_probe` is
/// consulted only when present; callers pass one when `options.links` is
/// requested.
pub fn execute<S, T>(
    ctx: &AppContext<S, T>,
    link_probe: Option<&dyn LinkProbe>,
    options: CheckOptions,
) -> Result<CheckOutcome, AppError>
where
    S: SiteStore,
    T: ThemeAssets,
{
    let mut diagnostics = Diagnostics::default();

    let report = config_rules::config_checks(ctx.store(), &mut diagnostics);
    if let Some(config) = &report.config {
        asset_rules::asset_checks(ctx.store(), config, &mut diagnostics);
        if let Some(probe) = link_probe {
            link_rules::link_checks(config, probe, &mut diagnostics);
        }
    }

    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(CheckOutcome { errors, warnings, exit_code })
}
