//! Manifest icon pipeline: decode the source icon once, emit the resized,
//! content-fingerprinted PNGs the web manifest points at.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::domain::{AppError, fingerprint};

/// Square sizes rendered for the web manifest, in pixels.
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// One resized icon ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    /// Path relative to the output directory, fingerprint included.
    pub path: String,
    pub size: u32,
    pub bytes: Vec<u8>,
}

impl RenderedIcon {
    /// MIME type advertised in the manifest.
    pub fn mime_type(&self) -> &'static str {
        "image/png"
    }

    /// The `sizes` attribute value, e.g. `192x192`.
    pub fn sizes_attr(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}

/// Decodes the source icon. `source_path` is only used in error messages.
pub fn decode_icon(bytes: &[u8], source_path: &str) -> Result<DynamicImage, AppError> {
    image::load_from_memory(bytes).map_err(|e| AppError::IconError {
        path: source_path.to_string(),
        details: e.to_string(),
    })
}

pub fn is_square(icon: &DynamicImage) -> bool {
    let (width, height) = icon.dimensions();
    width == height
}

/// Renders every manifest size from the source icon.
///
/// The fingerprint in each filename is derived from the source bytes, so an
/// unchanged icon produces identical paths across builds.
pub fn render_icons(source: &[u8], source_path: &str) -> Result<Vec<RenderedIcon>, AppError> {
    let icon = decode_icon(source, source_path)?;
    let stamp = fingerprint(source);

    let mut rendered = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let resized = icon.resize_exact(size, size, FilterType::Lanczos3);
        let mut bytes = Vec::new();
        resized.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).map_err(|e| {
            AppError::IconError { path: source_path.to_string(), details: e.to_string() }
        })?;
        rendered.push(RenderedIcon {
            path: format!("icons/icon-{size}x{size}.{stamp}.png"),
            size,
            bytes,
        });
    }
    Ok(rendered)
}
