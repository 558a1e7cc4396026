//! White-background removal.

use tracing::debug;

use crate::error::Result;
use crate::types::{Colour, PixelFormat, Raster};

/// Channel value above which a pixel counts as white.
pub const DEFAULT_WHITE_THRESHOLD: u8 = 240;

/// Make every near-white pixel fully transparent.
///
/// A pixel whose R, G and B are all strictly greater than `threshold` gets
/// alpha 0 and keeps its colour; every other pixel is untouched. Opacity only
/// ever goes down, so applying this twice changes nothing. There is no
/// neighbourhood cleanup: a stray dark pixel inside a white area stays opaque.
pub fn chroma_key(image: &Raster, threshold: u8) -> Result<Raster> {
    let mut pixels = image.pixels().clone();
    let mut keyed = 0usize;

    for p in pixels.pixels_mut() {
        if Colour::from(*p).is_above(threshold) {
            p[3] = 0;
            keyed += 1;
        }
    }

    debug!(threshold, keyed, "chroma key");
    Raster::new(pixels, PixelFormat::Rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn mixed() -> Raster {
        let img = RgbaImage::from_fn(4, 3, |x, _| match x {
            0 => Rgba([255, 255, 255, 255]),
            1 => Rgba([241, 250, 245, 90]),
            2 => Rgba([240, 255, 255, 255]),
            _ => Rgba([12, 200, 33, 180]),
        });
        Raster::new(img, PixelFormat::Rgba).unwrap()
    }

    #[test]
    fn test_white_becomes_transparent() {
        let out = chroma_key(&mixed(), 240).unwrap();
        assert_eq!(out.get(0, 0), Some(Colour::new(255, 255, 255, 0)));
        assert_eq!(out.get(1, 0), Some(Colour::new(241, 250, 245, 0)));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let out = chroma_key(&mixed(), 240).unwrap();
        assert_eq!(out.get(2, 0), Some(Colour::new(240, 255, 255, 255)));
    }

    #[test]
    fn test_non_white_untouched() {
        let out = chroma_key(&mixed(), 240).unwrap();
        assert_eq!(out.get(3, 0), Some(Colour::new(12, 200, 33, 180)));
    }

    #[test]
    fn test_idempotent() {
        for t in [0, 100, 240, 254, 255] {
            let once = chroma_key(&mixed(), t).unwrap();
            let twice = chroma_key(&once, t).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_isolated_pixel_stays_opaque() {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let out = chroma_key(&Raster::new(img, PixelFormat::Rgb).unwrap(), 240).unwrap();

        assert_eq!(out.get(1, 1), Some(Colour::BLACK));
        assert_eq!(out.get(0, 1).map(|c| c.a), Some(0));
        assert!(out.has_alpha());
    }
}
