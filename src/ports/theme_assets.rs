use crate::domain::site::model::parse_absolute_url;
use crate::domain::{AppError, LogoSpec};

/// Answers collected by `init` before scaffolding a site.
#[derive(Debug, Clone)]
pub struct StarterSite {
    pub title: String,
    pub name: String,
    pub site_url: String,
    pub description: String,
}

impl StarterSite {
    /// Rejects answers that cannot be embedded in the starter configuration
    /// file, naming the configuration field each answer feeds.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("siteMetadata.title", &self.title),
            ("siteMetadata.name", &self.name),
            ("siteMetadata.siteUrl", &self.site_url),
            ("siteMetadata.description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::invalid_field(field, "must not be empty"));
            }
            if value.contains('"') || value.contains('\\') {
                return Err(AppError::invalid_field(field, "must not contain '\"' or '\\'"));
            }
            if value.chars().any(char::is_control) {
                return Err(AppError::invalid_field(field, "must not contain control characters"));
            }
        }
        parse_absolute_url(&self.site_url)
            .map_err(|reason| AppError::invalid_field("siteMetadata.siteUrl", reason))?;
        Ok(())
    }
}

/// One file of the starter scaffold.
#[derive(Debug, Clone)]
pub struct StarterFile {
    /// Path relative to the site root.
    pub path: String,
    /// Raw contents; the starter icon is binary.
    pub contents: Vec<u8>,
}

/// Port for the embedded theme: rendered brand-mark artifacts and the
/// starter scaffold.
pub trait ThemeAssets {
    /// Render the logo HTML partial for the given brand mark.
    fn logo_partial(&self, logo: &LogoSpec) -> Result<String, AppError>;

    /// Render the stylesheet that switches logo variants at the tablet
    /// breakpoint.
    fn logo_stylesheet(&self, logo: &LogoSpec) -> Result<String, AppError>;

    /// The complete starter scaffold for a fresh site, with the prompted
    /// values rendered into the configuration file.
    fn starter_files(&self, site: &StarterSite) -> Result<Vec<StarterFile>, AppError>;
}
