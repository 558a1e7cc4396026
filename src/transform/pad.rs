//! Canvas padding.

use image::RgbaImage;
use tracing::debug;

use crate::error::{Result, TouchupError};
use crate::types::{Colour, PixelFormat, Raster, Rect};

use super::crop;

/// Place `image` at `(offset_x, offset_y)` on a new `new_width x new_height`
/// canvas filled with `fill`.
///
/// RGBA sources are blended onto the fill with "over"; RGB sources are copied
/// verbatim. The placed image must fit on the canvas, otherwise this is a
/// `Size` error. The result is always RGBA.
pub fn pad_canvas(
    image: &Raster,
    new_width: u32,
    new_height: u32,
    offset_x: u32,
    offset_y: u32,
    fill: Colour,
) -> Result<Raster> {
    let (w, h) = image.dimensions();
    let fits_x = offset_x.checked_add(w).is_some_and(|r| r <= new_width);
    let fits_y = offset_y.checked_add(h).is_some_and(|b| b <= new_height);

    if !fits_x || !fits_y {
        return Err(TouchupError::Size {
            message: format!(
                "{}x{} image at ({}, {}) does not fit on a {}x{} canvas",
                w, h, offset_x, offset_y, new_width, new_height
            ),
            help: Some("Enlarge the canvas or reduce the offset".to_string()),
        });
    }

    debug!(new_width, new_height, offset_x, offset_y, %fill, "pad canvas");

    let mut canvas = RgbaImage::from_pixel(new_width, new_height, fill.into());
    let blend = image.has_alpha();

    for (x, y, p) in image.pixels().enumerate_pixels() {
        let dest = canvas.get_pixel_mut(x + offset_x, y + offset_y);
        *dest = if blend {
            Colour::from(*p).over(Colour::from(*dest)).into()
        } else {
            *p
        };
    }

    Raster::new(canvas, PixelFormat::Rgba)
}

/// Crop `content` out of `image` and re-seat it at the bottom of a canvas with
/// `ratio` of its height added as transparent space above.
pub fn add_headroom(image: &Raster, content: Rect, ratio: f64) -> Result<Raster> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(TouchupError::Size {
            message: format!("Headroom ratio must be a non-negative number, got {}", ratio),
            help: None,
        });
    }

    let content = crop(image, content)?;
    let (w, h) = content.dimensions();
    let extra = (h as f64 * ratio) as u32;

    pad_canvas(&content, w, h + extra, 0, extra, Colour::TRANSPARENT)
}

/// Copy of `image` with row `row` painted solid `colour`.
pub fn draw_guide_line(image: &Raster, row: u32, colour: Colour) -> Result<Raster> {
    let (w, h) = image.dimensions();
    if row >= h {
        return Err(TouchupError::Bounds {
            message: format!("Row {} is outside a {}x{} image", row, w, h),
            help: None,
        });
    }

    let mut pixels = image.pixels().clone();
    for x in 0..w {
        pixels.put_pixel(x, row, colour.into());
    }
    Raster::new(pixels, image.format())
}
