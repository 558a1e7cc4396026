//! Overlay variants of a base image, driven by a declarative table.

mod driver;
mod table;

pub use driver::{position, run_variants, variant_path, BatchReport, VariantFailure};
pub use table::{Placement, VariantEntry, VariantTable};
