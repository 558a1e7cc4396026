//! Image transforms.
//!
//! Every transform takes its inputs by reference and returns a freshly
//! allocated `Raster`; none of them touch the filesystem.

mod bbox;
mod chroma;
mod composite;
mod crop;
mod fit;
mod pad;

pub use bbox::{detect_content_bbox, trim, DEFAULT_BACKGROUND_THRESHOLD, DEFAULT_TRIM_PADDING};
pub use chroma::{chroma_key, DEFAULT_WHITE_THRESHOLD};
pub use composite::{composite, logo_size, scale_overlay};
pub use crop::{bottom_rows, center_square, crop};
pub use fit::{fit_within, DEFAULT_MAX_DIMENSION};
pub use pad::{add_headroom, draw_guide_line, pad_canvas};
