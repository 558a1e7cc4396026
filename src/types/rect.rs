//! Pixel rectangles.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TouchupError};

/// Half-open pixel bounds: `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A rectangle from an origin and a size.
    pub fn from_origin(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the rectangle is non-empty and lies inside a `width x height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= width
            && self.bottom <= height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

impl FromStr for Rect {
    type Err = TouchupError;

    /// Parse `L,T,R,B`.
    fn from_str(s: &str) -> Result<Self> {
        let parts = parse_u32_list(s, 4, "L,T,R,B (e.g. 0,0,200,200)")?;
        Ok(Rect::new(parts[0], parts[1], parts[2], parts[3]))
    }
}

/// Inclusive bounding box as reported by content detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub xmin: u32,
    pub ymin: u32,
    pub xmax: u32,
    pub ymax: u32,
}

impl BoundingBox {
    pub const fn new(xmin: u32, ymin: u32, xmax: u32, ymax: u32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The equivalent half-open crop rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.xmin, self.ymin, self.xmax + 1, self.ymax + 1)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})..=({}, {})", self.xmin, self.ymin, self.xmax, self.ymax)
    }
}

/// Parse a comma-separated list of exactly `count` unsigned integers.
pub(crate) fn parse_u32_list(s: &str, count: usize, expected: &str) -> Result<Vec<u32>> {
    let values: Vec<&str> = s.split(',').map(str::trim).collect();
    if values.len() != count {
        return Err(TouchupError::Parse {
            message: format!("Invalid value '{}': expected {} numbers", s, count),
            help: Some(format!("Use the format {}", expected)),
        });
    }

    values
        .iter()
        .map(|v| {
            v.parse::<u32>().map_err(|_| TouchupError::Parse {
                message: format!("Invalid number '{}' in '{}'", v, s),
                help: Some("Values must be non-negative integers".to_string()),
            })
        })
        .collect()
}
