//! In-memory raster image.
//!
//! Pixels are always held as RGBA. An RGB raster keeps every alpha at 255 and
//! remembers its format so encoders can write three channels again.
//!
//! Decoding always lands at 8 bits per channel; 16-bit and float sources are
//! quantized on load and a warning event records the original colour type.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::warn;

use crate::error::{Result, TouchupError};

use super::Colour;

/// Channel layout of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Rgba)
    }
}

/// A decoded image: a dense pixel grid plus its channel layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: RgbaImage,
    format: PixelFormat,
}

impl Raster {
    /// Wrap an RGBA buffer. Fails if either dimension is zero.
    pub fn new(pixels: RgbaImage, format: PixelFormat) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(TouchupError::Size {
                message: format!(
                    "Image has zero dimensions ({}x{})",
                    pixels.width(),
                    pixels.height()
                ),
                help: Some("Images must have non-zero width and height".to_string()),
            });
        }
        let pixels = match format {
            PixelFormat::Rgba => pixels,
            PixelFormat::Rgb => {
                let mut opaque = pixels;
                for p in opaque.pixels_mut() {
                    p[3] = 255;
                }
                opaque
            }
        };
        Ok(Self { pixels, format })
    }

    /// An RGBA raster filled with a single colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Result<Self> {
        Self::new(
            RgbaImage::from_pixel(width, height, colour.into()),
            PixelFormat::Rgba,
        )
    }

    /// Build from a decoded image, keeping track of whether it had alpha.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        let color = img.color();
        if color.bytes_per_pixel() > color.channel_count() {
            warn!(?color, "reducing to 8 bits per channel");
        }
        let format = if img.color().has_alpha() {
            PixelFormat::Rgba
        } else {
            PixelFormat::Rgb
        };
        Self::new(img.to_rgba8(), format)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn has_alpha(&self) -> bool {
        self.format.has_alpha()
    }

    /// Pixel at (x, y), or `None` when out of range.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixels.get_pixel_checked(x, y).map(|p| Colour::from(*p))
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    /// Resample to `width x height`.
    ///
    /// Rasters with alpha are filtered premultiplied, so the colour hidden
    /// under fully transparent pixels never bleeds into visible edges.
    pub fn resized(&self, width: u32, height: u32, filter: FilterType) -> Result<Raster> {
        if !self.has_alpha() {
            return Raster::new(imageops::resize(&self.pixels, width, height, filter), self.format);
        }

        let mut premultiplied = DynamicImage::ImageRgba8(self.pixels.clone()).into_rgba32f();
        for p in premultiplied.pixels_mut() {
            let a = p[3];
            p[0] *= a;
            p[1] *= a;
            p[2] *= a;
        }

        let resized = imageops::resize(&premultiplied, width, height, filter);
        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            let [r, g, b, a] = resized.get_pixel(x, y).0;
            let straight = |c: f32| if a > 0.0 { c / a } else { 0.0 };
            Rgba([
                to_channel(straight(r)),
                to_channel(straight(g)),
                to_channel(straight(b)),
                to_channel(a),
            ])
        });
        Raster::new(pixels, PixelFormat::Rgba)
    }

    /// Convert to a `DynamicImage` with the raster's own channel count.
    pub fn to_dynamic(&self) -> DynamicImage {
        let rgba = DynamicImage::ImageRgba8(self.pixels.clone());
        match self.format {
            PixelFormat::Rgba => rgba,
            PixelFormat::Rgb => DynamicImage::ImageRgb8(rgba.to_rgb8()),
        }
    }
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
