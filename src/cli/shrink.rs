//! Shrink oversized images.

use std::path::PathBuf;

use clap::Args;

use crate::codec::SaveOptions;
use crate::error::Result;
use crate::output::{dimensions, Printer};
use crate::transform::{self, DEFAULT_MAX_DIMENSION};

/// Shrink an image so its longest side fits a limit
#[derive(Args, Debug)]
pub struct ShrinkArgs {
    /// Image to shrink
    pub input: PathBuf,

    /// Where to write the result
    pub output: PathBuf,

    /// Longest side allowed, in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    pub max: u32,

    /// JPEG quality when the output is a JPEG
    #[arg(long, default_value_t = 80)]
    pub quality: u8,
}

pub fn run(args: ShrinkArgs, printer: &Printer) -> Result<()> {
    let img = super::load(&args.input, printer)?;
    let out = transform::fit_within(&img, args.max)?;

    if out.dimensions() != img.dimensions() {
        printer.info(
            "Resized",
            &format!(
                "{} -> {}",
                dimensions(img.width(), img.height()),
                dimensions(out.width(), out.height())
            ),
        );
    }

    super::save(&out, &args.output, &SaveOptions::with_quality(args.quality), printer)?;

    let before = std::fs::metadata(&args.input).map(|m| m.len()).unwrap_or(0);
    let after = std::fs::metadata(&args.output).map(|m| m.len()).unwrap_or(0);
    printer.info("Size", &format!("{} -> {}", format_bytes(before), format_bytes(after)));
    Ok(())
}

/// Byte count in megabytes with two decimals.
fn format_bytes(bytes: u64) -> String {
    format!("{:.2}MB", bytes as f64 / 1024.0 / 1024.0)
}
