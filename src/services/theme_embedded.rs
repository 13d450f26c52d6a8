//! Embedded theme: templates and starter scaffold compiled into the binary.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, Value, context};

use crate::domain::AppError;
use crate::domain::logo::{LogoSpec, LogoVariant, TABLET_BREAKPOINT_PX};
use crate::domain::site::{CANONICAL_CONFIG, ThemeOptions};
use crate::ports::{StarterFile, StarterSite, ThemeAssets};

static THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/theme");

const LOGO_PARTIAL: &str = "partials/logo.html";
const LOGO_STYLESHEET: &str = "css/logo.css";
const STARTER_CONFIG: &str = "starter/site.toml";
const STARTER_ICON: &str = "starter/favicon.png";

/// Where the starter scaffold places the manifest icon.
pub const STARTER_ICON_PATH: &str = "assets/favicon.png";

/// Theme assets served from the embedded bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTheme;

impl EmbeddedTheme {
    pub fn new() -> Self {
        Self
    }
}

fn embedded_text(name: &str) -> Result<&'static str, AppError> {
    THEME_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::InternalError(format!("Missing embedded theme asset: {name}")))
}

fn environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    for name in [LOGO_PARTIAL, LOGO_STYLESHEET, STARTER_CONFIG] {
        env.add_template(name, embedded_text(name)?).map_err(|e| AppError::TemplateError {
            name: name.to_string(),
            details: e.to_string(),
        })?;
    }
    Ok(env)
}

fn render(name: &str, ctx: Value) -> Result<String, AppError> {
    let env = environment()?;
    let template = env.get_template(name).map_err(|e| AppError::TemplateError {
        name: name.to_string(),
        details: e.to_string(),
    })?;
    template.render(ctx).map_err(|e| AppError::TemplateError {
        name: name.to_string(),
        details: e.to_string(),
    })
}

impl ThemeAssets for EmbeddedTheme {
    fn logo_partial(&self, logo: &LogoSpec) -> Result<String, AppError> {
        render(
            LOGO_PARTIAL,
            context! {
                full_name => logo.full_name.as_str(),
                short_name => logo.short_name.as_str(),
                full_class => LogoVariant::Full.css_class(),
                short_class => LogoVariant::Short.css_class(),
            },
        )
    }

    fn logo_stylesheet(&self, logo: &LogoSpec) -> Result<String, AppError> {
        render(
            LOGO_STYLESHEET,
            context! {
                fill => logo.fill.as_str(),
                breakpoint_px => TABLET_BREAKPOINT_PX,
                full_class => LogoVariant::Full.css_class(),
                short_class => LogoVariant::Short.css_class(),
            },
        )
    }

    fn starter_files(&self, site: &StarterSite) -> Result<Vec<StarterFile>, AppError> {
        let logo = LogoSpec::from_name(&site.name, None);
        let config = render(
            STARTER_CONFIG,
            context! {
                title => site.title.as_str(),
                name => site.name.as_str(),
                site_url => site.site_url.as_str(),
                description => site.description.as_str(),
                short_name => logo.short_name.as_str(),
            },
        )?;
        let icon = THEME_DIR
            .get_file(STARTER_ICON)
            .map(|file| file.contents().to_vec())
            .ok_or_else(|| {
                AppError::InternalError(format!("Missing embedded theme asset: {STARTER_ICON}"))
            })?;

        let defaults = ThemeOptions::default();
        let mut files = vec![
            StarterFile { path: CANONICAL_CONFIG.to_string(), contents: config.into_bytes() },
            StarterFile { path: STARTER_ICON_PATH.to_string(), contents: icon },
        ];
        for dir in [&defaults.content_posts, &defaults.content_authors] {
            files.push(StarterFile { path: format!("{dir}/.gitkeep"), contents: Vec::new() });
        }
        Ok(files)
    }
}
