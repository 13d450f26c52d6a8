mod link_probe;
mod site_store;
mod theme_assets;

pub use link_probe::{LinkProbe, LinkStatus};
pub use site_store::SiteStore;
pub use theme_assets::{StarterFile, StarterSite, ThemeAssets};
