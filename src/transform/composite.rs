//! Alpha compositing of one raster onto another.

use image::imageops::FilterType;
use tracing::debug;

use crate::error::{Result, TouchupError};
use crate::types::{Colour, PixelFormat, Raster};

/// Draw `overlay` over `base` with its top-left corner at `(x, y)`.
///
/// Pixels outside the overlay footprint are copied from `base`; inside it each
/// pixel is the "over" blend of overlay onto base. An overlay without alpha is
/// treated as fully opaque. The footprint must lie inside `base`.
pub fn composite(base: &Raster, overlay: &Raster, x: u32, y: u32) -> Result<Raster> {
    let (bw, bh) = base.dimensions();
    let (ow, oh) = overlay.dimensions();
    let fits = x.checked_add(ow).is_some_and(|r| r <= bw)
        && y.checked_add(oh).is_some_and(|b| b <= bh);

    if !fits {
        return Err(TouchupError::Bounds {
            message: format!(
                "{}x{} overlay at ({}, {}) extends past the {}x{} base",
                ow, oh, x, y, bw, bh
            ),
            help: Some("Reduce the overlay scale or move it inside the base".to_string()),
        });
    }

    debug!(x, y, overlay_width = ow, overlay_height = oh, "composite");

    let mut out = base.pixels().clone();
    for (ox, oy, p) in overlay.pixels().enumerate_pixels() {
        let dest = out.get_pixel_mut(x + ox, y + oy);
        *dest = Colour::from(*p).over(Colour::from(*dest)).into();
    }

    let format = if base.has_alpha() || overlay.has_alpha() {
        PixelFormat::Rgba
    } else {
        PixelFormat::Rgb
    };
    Raster::new(out, format)
}

/// Edge length of a square overlay scaled against `base_width`.
pub fn logo_size(base_width: u32, scale: f64) -> u32 {
    (base_width as f64 * scale).round().max(0.0) as u32
}

/// Resize `overlay` to a `logo_size x logo_size` square (Lanczos3).
pub fn scale_overlay(base: &Raster, overlay: &Raster, scale: f64) -> Result<Raster> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(TouchupError::Size {
            message: format!("Overlay scale must be a positive number, got {}", scale),
            help: Some("Scale is a fraction of the base width, e.g. 0.2".to_string()),
        });
    }

    let size = logo_size(base.width(), scale);
    if size == 0 {
        return Err(TouchupError::Size {
            message: format!(
                "Scale {} of a {}px wide base rounds to an empty overlay",
                scale,
                base.width()
            ),
            help: Some("Increase the scale".to_string()),
        });
    }

    debug!(scale, size, "scale overlay");

    overlay.resized(size, size, FilterType::Lanczos3)
}
