use crate::ports::{SiteStore, ThemeAssets};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SiteStore, T: ThemeAssets> {
    store: S,
    theme: T,
}

impl<S: SiteStore, T: ThemeAssets> AppContext<S, T> {
    /// Create a new application context.
    pub fn new(store: S, theme: T) -> Self {
        Self { store, theme }
    }

    /// Get a reference to the site store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the theme assets.
    pub fn theme(&self) -> &T {
        &self.theme
    }
}
