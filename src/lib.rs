//! touchup - image asset post-processing
//!
//! Crop, trim, pad, composite and chroma-key raster assets. Each transform is
//! a pure function from `Raster` to `Raster`; the `codec` module handles files
//! and the `variants` module batches logo composites from a YAML table.

pub mod cli;
pub mod codec;
pub mod error;
pub mod output;
pub mod transform;
pub mod types;
pub mod variants;

pub use codec::{load, save, SaveOptions};
pub use error::{Result, TouchupError};
pub use transform::{
    add_headroom, center_square, chroma_key, composite, crop, detect_content_bbox, fit_within,
    pad_canvas, scale_overlay, trim,
};
pub use types::{BoundingBox, Colour, PixelFormat, Raster, Rect};
pub use variants::{run_variants, BatchReport, Placement, VariantEntry, VariantTable};
