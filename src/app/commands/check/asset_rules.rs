//! Asset checks: the files the configuration points at.

use image::GenericImageView;

use super::diagnostics::Diagnostics;
use crate::domain::SiteConfig;
use crate::ports::SiteStore;
use crate::services::{decode_icon, is_square};

pub fn asset_checks(store: &impl SiteStore, config: &SiteConfig, diagnostics: &mut Diagnostics) {
    if let Some(theme) = config.theme_options() {
        for dir in [&theme.content_posts, &theme.content_authors] {
            if !store.is_dir(dir) {
                diagnostics.push_warning(dir, "content directory not found");
            }
        }
    }

    if let Some(manifest) = config.manifest_options() {
        icon_checks(store, &manifest.icon, diagnostics);
    }
}

fn icon_checks(store: &impl SiteStore, icon_path: &str, diagnostics: &mut Diagnostics) {
    if !store.exists(icon_path) {
        diagnostics.push_error(icon_path, "manifest icon not found");
        return;
    }
    let bytes = match store.read_bytes(icon_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            diagnostics.push_error(icon_path, format!("cannot be read: {e}"));
            return;
        }
    };
    match decode_icon(&bytes, icon_path) {
        Ok(icon) => {
            if !is_square(&icon) {
                let (width, height) = icon.dimensions();
                diagnostics.push_warning(
                    icon_path,
                    format!("icon is {width}x{height}, not square; manifest icons are rendered square"),
                );
            }
        }
        Err(e) => diagnostics.push_error(icon_path, format!("cannot be decoded: {e}")),
    }
}
