//! Field-level validation of the authored configuration.
//!
//! Rules run against the raw shape so a single pass can report every problem
//! at once. Each finding names the offending field in the published contract
//! notation (`siteMetadata.social[2].url`), never the serde path.

use std::path::{Component, Path};

use crate::domain::site::model::{
    parse_absolute_url, ManifestOptions, ThemeOptions, MANIFEST_PLUGIN, THEME_PLUGIN,
};
use crate::domain::site::raw::{RawPlugin, RawSiteConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// One validation finding against a named field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub field: String,
    pub reason: String,
    pub severity: IssueSeverity,
}

impl FieldIssue {
    fn error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: field.into(), reason: reason.into(), severity: IssueSeverity::Error }
    }

    fn warning(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: field.into(), reason: reason.into(), severity: IssueSeverity::Warning }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Runs every rule and returns all findings, errors and warnings alike.
pub fn validate_raw(raw: &RawSiteConfig) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    validate_metadata(raw, &mut issues);
    validate_plugins(&raw.plugins, &mut issues);
    issues
}

fn validate_metadata(raw: &RawSiteConfig, issues: &mut Vec<FieldIssue>) {
    let meta = &raw.site_metadata;
    require_text("siteMetadata.title", &meta.title, issues);
    require_text("siteMetadata.name", &meta.name, issues);
    require_text("siteMetadata.description", &meta.description, issues);
    require_text("siteMetadata.hero.heading", &meta.hero.heading, issues);

    if meta.hero.max_width == 0 {
        issues.push(FieldIssue::error(
            "siteMetadata.hero.maxWidth",
            "must be a positive pixel width",
        ));
    }

    if let Err(reason) = parse_absolute_url(&meta.site_url) {
        issues.push(FieldIssue::error("siteMetadata.siteUrl", reason));
    }

    for (index, link) in meta.social.iter().enumerate() {
        require_text(format!("siteMetadata.social[{index}].name"), &link.name, issues);
        if let Err(reason) = parse_absolute_url(&link.url) {
            issues.push(FieldIssue::error(format!("siteMetadata.social[{index}].url"), reason));
        }
        let duplicated = meta.social[..index]
            .iter()
            .any(|earlier| earlier.name.eq_ignore_ascii_case(&link.name));
        if duplicated && !link.name.trim().is_empty() {
            issues.push(FieldIssue::warning(
                format!("siteMetadata.social[{index}].name"),
                format!("duplicate social name '{}'", link.name),
            ));
        }
    }
}

fn validate_plugins(plugins: &[RawPlugin], issues: &mut Vec<FieldIssue>) {
    for (index, plugin) in plugins.iter().enumerate() {
        if plugin.resolve.trim().is_empty() {
            issues.push(FieldIssue::error(
                format!("plugins[{index}].resolve"),
                "must not be empty",
            ));
            continue;
        }
        let duplicated = plugins[..index].iter().any(|earlier| earlier.resolve == plugin.resolve);
        if duplicated && is_known_plugin(&plugin.resolve) {
            issues.push(FieldIssue::warning(
                format!("plugins[{index}].resolve"),
                format!("'{}' is declared more than once; the first declaration wins", plugin.resolve),
            ));
        }
        match plugin.resolve.as_str() {
            THEME_PLUGIN => validate_theme_plugin(index, plugin, issues),
            MANIFEST_PLUGIN => validate_manifest_plugin(index, plugin, issues),
            _ => {}
        }
    }
}

fn validate_theme_plugin(index: usize, plugin: &RawPlugin, issues: &mut Vec<FieldIssue>) {
    let options: ThemeOptions = match plugin.options_value().try_into() {
        Ok(options) => options,
        Err(e) => {
            issues.push(FieldIssue::error(
                format!("plugins[{index}].options"),
                format!("malformed {THEME_PLUGIN} options: {e}"),
            ));
            return;
        }
    };
    require_clean_content_path(
        format!("plugins[{index}].options.contentPosts"),
        &options.content_posts,
        issues,
    );
    require_clean_content_path(
        format!("plugins[{index}].options.contentAuthors"),
        &options.content_authors,
        issues,
    );
    if !options.base_path.starts_with('/') {
        issues.push(FieldIssue::error(
            format!("plugins[{index}].options.basePath"),
            "must start with '/'",
        ));
    }
}

fn validate_manifest_plugin(index: usize, plugin: &RawPlugin, issues: &mut Vec<FieldIssue>) {
    let options: ManifestOptions = match plugin.options_value().try_into() {
        Ok(options) => options,
        Err(e) => {
            issues.push(FieldIssue::error(
                format!("plugins[{index}].options"),
                format!("malformed {MANIFEST_PLUGIN} options: {e}"),
            ));
            return;
        }
    };
    require_text(format!("plugins[{index}].options.name"), &options.name, issues);
    require_text(format!("plugins[{index}].options.short_name"), &options.short_name, issues);
    require_text(format!("plugins[{index}].options.start_url"), &options.start_url, issues);
    if !options.start_url.is_empty() && !options.start_url.starts_with('/') {
        issues.push(FieldIssue::warning(
            format!("plugins[{index}].options.start_url"),
            "does not start with '/'; browsers resolve it against the manifest URL",
        ));
    }
    for (key, value) in [
        ("background_color", &options.background_color),
        ("theme_color", &options.theme_color),
    ] {
        let field = format!("plugins[{index}].options.{key}");
        require_text(field.clone(), value, issues);
        if !value.trim().is_empty() && !looks_like_hex_color(value) {
            issues.push(FieldIssue::warning(
                field,
                format!("'{value}' does not look like a hex color"),
            ));
        }
    }
    require_clean_content_path(format!("plugins[{index}].options.icon"), &options.icon, issues);
}

fn require_text(field: impl Into<String>, value: &str, issues: &mut Vec<FieldIssue>) {
    if value.trim().is_empty() {
        issues.push(FieldIssue::error(field, "must not be empty"));
    }
}

/// Content paths are resolved under the site root, so they must stay inside
/// it: relative, and free of `..` components.
fn require_clean_content_path(field: String, value: &str, issues: &mut Vec<FieldIssue>) {
    if value.trim().is_empty() {
        issues.push(FieldIssue::error(field, "must not be empty"));
        return;
    }
    let path = Path::new(value);
    if path.is_absolute() {
        issues.push(FieldIssue::error(field, "must be relative to the site root"));
        return;
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        issues.push(FieldIssue::error(field, "must not contain '..'"));
    }
}

fn looks_like_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_known_plugin(resolve: &str) -> bool {
    matches!(resolve, THEME_PLUGIN | MANIFEST_PLUGIN)
}
