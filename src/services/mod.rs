mod config_loader;
mod icon;
mod link_probe_http;
mod renderer;
mod site_filesystem;
mod theme_embedded;

pub use config_loader::{LoadedSite, load_site, locate_config};
pub use icon::{ICON_SIZES, RenderedIcon, decode_icon, is_square, render_icons};
pub use link_probe_http::HttpLinkProbe;
pub use renderer::{
    CONFIG_EXPORT_PATH, LOGO_PARTIAL_PATH, LOGO_STYLESHEET_PATH, ManifestIcon, WEB_MANIFEST_PATH,
    WebManifest, export_config_json,
};
pub use site_filesystem::FilesystemSiteStore;
pub use theme_embedded::{EmbeddedTheme, STARTER_ICON_PATH};
