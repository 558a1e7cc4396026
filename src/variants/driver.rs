//! Batch production of overlay variants.
//!
//! Every entry in a `VariantTable` becomes one output file. A failing entry is
//! reported and skipped; the remaining entries still run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::codec::{self, SaveOptions};
use crate::error::{Result, TouchupError};
use crate::output::{dimensions, display_path, Printer};
use crate::transform::{composite, scale_overlay};
use crate::types::Raster;

use super::{Placement, VariantEntry, VariantTable};

/// A variant that could not be produced.
#[derive(Debug, Clone, Serialize)]
pub struct VariantFailure {
    pub name: String,
    pub message: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<VariantFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Top-left corner for an overlay of `overlay_size` pixels on `base`.
///
/// The overlay is centred horizontally and moved right by `x_shift`. Its top
/// sits at `y_fraction` of the base height, or `generic_y_fraction` when
/// `label` is the generic label.
pub fn position(base: &Raster, overlay_size: u32, label: &str, placement: &Placement) -> (i64, i64) {
    let (bw, bh) = base.dimensions();
    let x = (bw as i64 - overlay_size as i64).div_euclid(2) + placement.x_shift;

    let fraction = if label == placement.generic_label {
        placement.generic_y_fraction
    } else {
        placement.y_fraction
    };
    let y = (bh as f64 * fraction).floor() as i64;

    (x, y)
}

/// Output path for one variant: `<dir>/<base stem>_<variant>.png`.
pub fn variant_path(output_dir: &Path, base_path: &Path, variant: &str) -> PathBuf {
    let stem = base_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("base");
    output_dir.join(format!("{}_{}.png", stem, variant))
}

/// Produce every variant in `table` from the image at `base_path`.
///
/// Overlay paths are resolved against `overlay_root`. Only a failure to load
/// the base image aborts the run; per-variant errors land in the report.
pub fn run_variants(
    base_path: &Path,
    table: &VariantTable,
    overlay_root: &Path,
    output_dir: &Path,
    printer: &Printer,
) -> Result<BatchReport> {
    let base = codec::load(base_path)?;
    printer.status(
        "Loaded",
        &format!("{} ({})", display_path(base_path), dimensions(base.width(), base.height())),
    );
    info!(base = %base_path.display(), variants = table.variants.len(), "starting variant batch");

    let mut report = BatchReport::default();

    for entry in &table.variants {
        let output = variant_path(output_dir, base_path, &entry.name);

        match render_variant(&base, entry, &table.placement, overlay_root)
            .and_then(|img| codec::save(&img, &output, &SaveOptions::default()))
        {
            Ok(()) => {
                printer.status("Created", &display_path(&output));
                info!(variant = %entry.name, path = %output.display(), "variant written");
                report.written.push(output);
            }
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", entry.name, e));
                error!(variant = %entry.name, error = %e, "variant failed");
                report.failed.push(VariantFailure {
                    name: entry.name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Composite one entry's overlay onto `base`.
fn render_variant(
    base: &Raster,
    entry: &VariantEntry,
    placement: &Placement,
    overlay_root: &Path,
) -> Result<Raster> {
    let Some(overlay_path) = &entry.overlay else {
        return Ok(base.clone());
    };

    let overlay = codec::load(&overlay_root.join(overlay_path))?;
    let overlay = scale_overlay(base, &overlay, entry.scale)?;

    let (x, y) = position(base, overlay.width(), &entry.label, placement);
    let (x, y) = (x + entry.nudge.0, y + entry.nudge.1);

    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return Err(TouchupError::Bounds {
            message: format!("Variant '{}' places its overlay at ({}, {})", entry.name, x, y),
            help: Some("Adjust the placement or nudge so the overlay stays on the base".to_string()),
        });
    };

    composite(base, &overlay, x, y)
}
