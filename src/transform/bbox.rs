//! Content bounding-box detection and whitespace trimming.

use tracing::debug;

use crate::error::Result;
use crate::types::{BoundingBox, Colour, Raster};

use super::crop;

/// Channel value at or above which a pixel counts as background.
pub const DEFAULT_BACKGROUND_THRESHOLD: u8 = 240;

/// Padding kept around trimmed content.
pub const DEFAULT_TRIM_PADDING: u32 = 5;

/// Find the smallest box enclosing every non-background pixel.
///
/// A pixel is background when all three colour channels are
/// `>= background_threshold`; alpha is ignored. The box is grown by
/// `padding` on every side and clamped to the image. Returns `None` when the
/// whole image is background.
pub fn detect_content_bbox(
    image: &Raster,
    background_threshold: u8,
    padding: u32,
) -> Option<BoundingBox> {
    let (w, h) = image.dimensions();
    let mut found: Option<BoundingBox> = None;

    for (x, y, p) in image.pixels().enumerate_pixels() {
        if Colour::from(*p).is_at_least(background_threshold) {
            continue;
        }
        found = Some(match found {
            None => BoundingBox::new(x, y, x, y),
            Some(b) => BoundingBox::new(b.xmin.min(x), b.ymin.min(y), b.xmax.max(x), b.ymax.max(y)),
        });
    }

    let bbox = found?;
    let padded = BoundingBox::new(
        bbox.xmin.saturating_sub(padding),
        bbox.ymin.saturating_sub(padding),
        bbox.xmax.saturating_add(padding).min(w - 1),
        bbox.ymax.saturating_add(padding).min(h - 1),
    );

    debug!(content = %bbox, padded = %padded, "detected content");
    Some(padded)
}

/// Crop `image` down to its content plus `padding`.
///
/// `Ok(None)` means nothing but background was found.
pub fn trim(image: &Raster, background_threshold: u8, padding: u32) -> Result<Option<Raster>> {
    match detect_content_bbox(image, background_threshold, padding) {
        Some(bbox) => crop(image, bbox.to_rect()).map(Some),
        None => Ok(None),
    }
}
