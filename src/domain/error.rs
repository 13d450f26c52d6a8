use std::io;

use thiserror::Error;

/// Library-wide error type for masthead operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No site configuration file found at the site root.
    #[error("No site configuration found. Create site.toml (or legacy site.yml) at the site root.")]
    ConfigMissing,

    /// A site configuration already exists at the target location.
    #[error("{file} already exists; refusing to overwrite an existing site")]
    ConfigExists { file: String },

    /// A configuration field failed validation.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// TOML parsing error.
    #[error("Failed to parse {path}: {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// YAML parsing error (legacy site.yml).
    #[error("Failed to parse {path}: {source}")]
    YamlParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Template registration or rendering failed.
    #[error("Failed to render template '{name}': {details}")]
    TemplateError { name: String, details: String },

    /// Manifest icon could not be read, decoded, or resized.
    #[error("Icon error for '{path}': {details}")]
    IconError { path: String, details: String },

    /// Unexpected failure inside masthead itself.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for a field-level validation failure.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidField { field: field.into(), reason: reason.into() }
    }
}
