//! Lanczos downscaling of a PNG into fixed square sizes.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::{IconError, Result};
use crate::icon::with_suffix;

/// Square sizes written for every raster icon.
pub const RASTER_SIZES: [u32; 5] = [16, 24, 32, 48, 96];

/// Read and decode `source`, then write every [`RASTER_SIZES`] variant
/// next to `base`.
pub fn generate_sizes(base: &Path, source: &Path) -> Result<Vec<PathBuf>> {
    let img = image::open(source).map_err(|e| IconError::Image {
        path: source.to_path_buf(),
        message: e.to_string(),
    })?;

    resize_variants(&img, base, &RASTER_SIZES)
}

/// Write `<base><size>.png` for each size, overwriting existing files.
///
/// Stops at the first failure; files already written stay on disk.
pub fn resize_variants(img: &DynamicImage, base: &Path, sizes: &[u32]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let path = with_suffix(base, &format!("{}.png", size));
        let resized = img.resize_exact(size, size, FilterType::Lanczos3);

        resized.save(&path).map_err(|e| IconError::Image {
            path: path.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;

        written.push(path);
    }

    Ok(written)
}
