//! Colour type, parsing and alpha blending.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::error::{Result, TouchupError};

/// An RGBA colour value with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black, the default canvas fill.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Guide-line red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`; the leading `#`
    /// is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let channels: Vec<u8> = match hex.len() {
            3 | 4 => hex
                .chars()
                .map(|c| parse_hex_digit(c).map(|d| d << 4 | d))
                .collect::<Result<_>>()?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| parse_hex_byte(hex.get(i..i + 2).unwrap_or("")))
                .collect::<Result<_>>()?,
            _ => {
                return Err(TouchupError::Parse {
                    message: format!("Invalid hex colour: {}", s),
                    help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
                })
            }
        };

        let a = channels.get(3).copied().unwrap_or(255);
        Ok(Self::new(channels[0], channels[1], channels[2], a))
    }

    /// Convert to an RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when every colour channel is at least `threshold`. Alpha is ignored.
    pub fn is_at_least(self, threshold: u8) -> bool {
        self.r >= threshold && self.g >= threshold && self.b >= threshold
    }

    /// True when every colour channel is strictly above `threshold`.
    pub fn is_above(self, threshold: u8) -> bool {
        self.r > threshold && self.g > threshold && self.b > threshold
    }

    /// Porter-Duff "over": `self` drawn on top of `base`.
    ///
    /// With an opaque base this is `src * a + dst * (1 - a)` per channel.
    /// A fully transparent base takes the source unchanged, so pasting onto an
    /// empty canvas is lossless.
    pub fn over(self, base: Colour) -> Colour {
        if self.a == 255 || base.a == 0 {
            return self;
        }
        if self.a == 0 {
            return base;
        }

        let sa = self.a as u32;
        // base alpha contribution, scaled by 255
        let ba = div255(base.a as u32 * (255 - sa));
        let out_a = sa + ba;

        let blend = |s: u8, d: u8| -> u8 {
            let num = s as u32 * sa + d as u32 * ba;
            ((num + out_a / 2) / out_a) as u8
        };

        Colour::new(
            blend(self.r, base.r),
            blend(self.g, base.g),
            blend(self.b, base.b),
            out_a as u8,
        )
    }
}

/// Rounded `x / 255` for `x <= 255 * 255`.
fn div255(x: u32) -> u32 {
    (x + 127) / 255
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self::new(r, g, b, a)
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba(c.to_rgba())
    }
}

impl FromStr for Colour {
    type Err = TouchupError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| TouchupError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| TouchupError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
