//! Rectangular crops.

use image::imageops;
use tracing::debug;

use crate::error::{Result, TouchupError};
use crate::types::{Raster, Rect};

/// Extract `rect` from `image`.
///
/// The region must be non-empty and lie entirely inside the image; anything
/// else is a `Bounds` error rather than a silent clamp. The result keeps the
/// source pixel format and is byte-identical to the source region.
pub fn crop(image: &Raster, rect: Rect) -> Result<Raster> {
    let (w, h) = image.dimensions();
    if !rect.fits_within(w, h) {
        return Err(TouchupError::Bounds {
            message: format!("Crop region {} does not fit inside {}x{} image", rect, w, h),
            help: Some(format!(
                "Require left < right <= {} and top < bottom <= {}",
                w, h
            )),
        });
    }

    debug!(%rect, width = w, height = h, "crop");

    let sub = imageops::crop_imm(image.pixels(), rect.left, rect.top, rect.width(), rect.height())
        .to_image();
    Raster::new(sub, image.format())
}

/// Crop a `size x size` square from the centre of `image`.
pub fn center_square(image: &Raster, size: u32) -> Result<Raster> {
    let (w, h) = image.dimensions();
    if size == 0 || size > w || size > h {
        return Err(TouchupError::Bounds {
            message: format!("Square of {}px does not fit inside {}x{} image", size, w, h),
            help: Some(format!("Choose a size between 1 and {}", w.min(h))),
        });
    }

    let left = (w - size) / 2;
    let top = (h - size) / 2;
    crop(image, Rect::from_origin(left, top, size, size))
}

/// The region covering the last `rows` rows of `image`, full width.
///
/// `rows` larger than the image selects the whole image.
pub fn bottom_rows(image: &Raster, rows: u32) -> Rect {
    let (w, h) = image.dimensions();
    let top = h.saturating_sub(rows);
    Rect::new(0, top, w, h)
}
