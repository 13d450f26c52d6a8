use crate::app::AppContext;
use crate::domain::logo::LogoSpec;
use crate::domain::{AppError, BuildReport, BuildReportEntry, REPORT_FILENAME};
use crate::ports::{SiteStore, ThemeAssets};
use crate::services::{
    CONFIG_EXPORT_PATH, LOGO_PARTIAL_PATH, LOGO_STYLESHEET_PATH, WEB_MANIFEST_PATH, WebManifest,
    export_config_json, load_site, render_icons,
};

/// Default output directory, relative to the site root.
pub const DEFAULT_OUT_DIR: &str = "public";

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Output directory, relative to the site root.
    pub out_dir: String,
    /// CSS color for the brand mark; the theme default when not given.
    pub logo_fill: Option<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { out_dir: DEFAULT_OUT_DIR.to_string(), logo_fill: None }
    }
}

/// What `build` produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub out_dir: String,
    /// Artifact paths relative to the output directory, report included.
    pub artifacts: Vec<String>,
    /// Whether the configuration came from the legacy `site.yml`.
    pub from_legacy: bool,
}

/// Execute the build command.
///
/// Renders every artifact the configuration calls for: the logo partial and
/// its stylesheet always, the web manifest and resized icons when a
/// `manifest` plugin is declared, plus the canonical JSON export and a build
/// report. Artifacts land under `options.out_dir`.
pub fn execute<S, T>(ctx: &AppContext<S, T>, options: &BuildOptions) -> Result<BuildOutcome, AppError>
where
    S: SiteStore,
    T: ThemeAssets,
{
    let loaded = load_site(ctx.store())?;
    let config = &loaded.config;
    let logo = LogoSpec::from_name(&config.site_metadata.name, options.logo_fill.as_deref());

    let mut artifacts: Vec<(String, Vec<u8>)> = vec![
        (LOGO_PARTIAL_PATH.to_string(), ctx.theme().logo_partial(&logo)?.into_bytes()),
        (LOGO_STYLESHEET_PATH.to_string(), ctx.theme().logo_stylesheet(&logo)?.into_bytes()),
    ];

    if let Some(manifest) = config.manifest_options() {
        if !ctx.store().exists(&manifest.icon) {
            return Err(AppError::IconError {
                path: manifest.icon.clone(),
                details: "file not found".to_string(),
            });
        }
        let source = ctx.store().read_bytes(&manifest.icon)?;
        let icons = render_icons(&source, &manifest.icon)?;
        let document = WebManifest::from_options(manifest, &icons).to_json()?;
        for icon in icons {
            artifacts.push((icon.path, icon.bytes));
        }
        artifacts.push((WEB_MANIFEST_PATH.to_string(), with_newline(document)));
    }

    artifacts.push((CONFIG_EXPORT_PATH.to_string(), with_newline(export_config_json(config, true)?)));

    let mut entries = Vec::with_capacity(artifacts.len());
    let mut written = Vec::with_capacity(artifacts.len() + 1);
    for (path, bytes) in &artifacts {
        ctx.store().write_bytes(&format!("{}/{}", options.out_dir, path), bytes)?;
        entries.push(BuildReportEntry::for_artifact(path.clone(), bytes));
        written.push(path.clone());
    }

    let report = BuildReport::new(chrono::Utc::now().to_rfc3339(), entries);
    ctx.store()
        .write_text(&format!("{}/{}", options.out_dir, REPORT_FILENAME), &with_newline_str(report.to_json()?))?;
    written.push(REPORT_FILENAME.to_string());

    Ok(BuildOutcome {
        out_dir: options.out_dir.clone(),
        artifacts: written,
        from_legacy: loaded.from_legacy(),
    })
}

fn with_newline(document: String) -> Vec<u8> {
    with_newline_str(document).into_bytes()
}

fn with_newline_str(mut document: String) -> String {
    if !document.ends_with('\n') {
        document.push('\n');
    }
    document
}
