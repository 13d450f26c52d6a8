//! Configuration checks: presence, parse, field validation, and agreement
//! between the canonical and legacy files.

use super::diagnostics::Diagnostics;
use crate::domain::AppError;
use crate::domain::site::{
    CANONICAL_CONFIG, ConfigFormat, IssueSeverity, LEGACY_CONFIG, LegacyState, RawSiteConfig,
    SiteConfig, legacy_state, parse_document, validate_raw,
};
use crate::ports::SiteStore;
use crate::services::locate_config;

/// What the configuration checks could establish. `config` is present only
/// when the file parsed and every field-level rule passed.
#[derive(Debug, Default)]
pub struct ConfigReport {
    pub config: Option<SiteConfig>,
    pub source: Option<ConfigFormat>,
}

pub fn config_checks(store: &impl SiteStore, diagnostics: &mut Diagnostics) -> ConfigReport {
    let Some(source) = locate_config(store) else {
        diagnostics.push_error(
            CANONICAL_CONFIG,
            format!("no site configuration found (looked for {CANONICAL_CONFIG} and {LEGACY_CONFIG})"),
        );
        return ConfigReport::default();
    };
    let file = source.file_name();

    let raw = match read_and_parse(store, source, diagnostics) {
        Some(raw) => raw,
        None => return ConfigReport { config: None, source: Some(source) },
    };

    let mut field_errors = 0;
    for issue in validate_raw(&raw) {
        match issue.severity {
            IssueSeverity::Error => {
                field_errors += 1;
                diagnostics.push_error(issue.field, issue.reason);
            }
            IssueSeverity::Warning => diagnostics.push_warning(issue.field, issue.reason),
        }
    }

    match source {
        ConfigFormat::Yaml => diagnostics.push_warning(
            LEGACY_CONFIG,
            format!("legacy configuration file in use; rename it to {CANONICAL_CONFIG}"),
        ),
        ConfigFormat::Toml => legacy_agreement(store, &raw, diagnostics),
    }

    let config = if field_errors == 0 {
        match SiteConfig::from_raw(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                diagnostics.push_error(file, e.to_string());
                None
            }
        }
    } else {
        None
    };

    ConfigReport { config, source: Some(source) }
}

fn read_and_parse(
    store: &impl SiteStore,
    source: ConfigFormat,
    diagnostics: &mut Diagnostics,
) -> Option<RawSiteConfig> {
    let file = source.file_name();
    let content = match store.read_text(file) {
        Ok(content) => content,
        Err(e) => {
            diagnostics.push_error(file, format!("cannot be read: {e}"));
            return None;
        }
    };
    match parse_document(&content, source, file) {
        Ok(raw) => Some(raw),
        Err(e) => {
            diagnostics.push_error(file, format!("does not parse: {}", parse_details(e)));
            None
        }
    }
}

/// Compares `site.toml` with a `site.yml` living next to it.
fn legacy_agreement(
    store: &impl SiteStore,
    canonical: &RawSiteConfig,
    diagnostics: &mut Diagnostics,
) {
    if !store.exists(LEGACY_CONFIG) {
        return;
    }
    let content = match store.read_text(LEGACY_CONFIG) {
        Ok(content) => content,
        Err(e) => {
            diagnostics.push_warning(LEGACY_CONFIG, format!("cannot be read: {e}"));
            return;
        }
    };
    match parse_document(&content, ConfigFormat::Yaml, LEGACY_CONFIG) {
        Ok(legacy) => match legacy_state(canonical, &legacy) {
            LegacyState::Redundant => diagnostics.push_warning(
                LEGACY_CONFIG,
                format!("identical copy of {CANONICAL_CONFIG}; delete it"),
            ),
            LegacyState::Diverged => diagnostics.push_warning(
                LEGACY_CONFIG,
                format!("has diverged from {CANONICAL_CONFIG}; {CANONICAL_CONFIG} wins"),
            ),
        },
        Err(e) => diagnostics.push_warning(
            LEGACY_CONFIG,
            format!("does not parse: {}", parse_details(e)),
        ),
    }
}

/// The underlying serde message, without the file path the diagnostic
/// subject already carries.
fn parse_details(error: AppError) -> String {
    match error {
        AppError::TomlParse { source, .. } => source.to_string(),
        AppError::YamlParse { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
