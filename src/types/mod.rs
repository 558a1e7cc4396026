//! Core types shared by the transforms:
//! - `Colour` - RGBA values and "over" blending
//! - `Raster` - a decoded image and its channel layout
//! - `Rect` / `BoundingBox` - pixel regions

mod colour;
mod raster;
mod rect;

pub use colour::Colour;
pub use raster::{PixelFormat, Raster};
pub use rect::{BoundingBox, Rect};

pub(crate) use rect::parse_u32_list;
