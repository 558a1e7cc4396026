//! Downscaling oversized images.

use image::imageops::FilterType;
use tracing::debug;

use crate::error::{Result, TouchupError};
use crate::types::Raster;

/// Longest side allowed by default when shrinking.
pub const DEFAULT_MAX_DIMENSION: u32 = 1920;

/// Scale `image` down so its longest side is at most `max_dimension`,
/// keeping the aspect ratio. Images already small enough are returned as-is.
pub fn fit_within(image: &Raster, max_dimension: u32) -> Result<Raster> {
    if max_dimension == 0 {
        return Err(TouchupError::Size {
            message: "Maximum dimension must be at least 1".to_string(),
            help: None,
        });
    }

    let (w, h) = image.dimensions();
    if w.max(h) <= max_dimension {
        return Ok(image.clone());
    }

    let (nw, nh) = if w >= h {
        (max_dimension, scaled_side(h, max_dimension, w))
    } else {
        (scaled_side(w, max_dimension, h), max_dimension)
    };

    debug!(from_width = w, from_height = h, to_width = nw, to_height = nh, "fit within");

    image.resized(nw, nh, FilterType::Lanczos3)
}

/// `side * target / longest`, rounded, never below 1.
fn scaled_side(side: u32, target: u32, longest: u32) -> u32 {
    let scaled = (side as u64 * target as u64 + longest as u64 / 2) / longest as u64;
    (scaled as u32).max(1)
}
