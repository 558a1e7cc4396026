//! Draw one image over another.

use std::path::PathBuf;

use clap::Args;

use crate::codec::SaveOptions;
use crate::error::Result;
use crate::output::{dimensions, Printer};
use crate::transform;

/// Draw one image over another
#[derive(Args, Debug)]
pub struct CompositeArgs {
    /// Background image
    pub base: PathBuf,

    /// Image drawn on top
    pub overlay: PathBuf,

    /// Where to write the result
    pub output: PathBuf,

    /// Top-left corner of the overlay, as X,Y
    #[arg(long, value_parser = super::parse_point)]
    pub at: (u32, u32),

    /// Resize the overlay to a square of this fraction of the base width
    #[arg(long)]
    pub scale: Option<f64>,
}

pub fn run(args: CompositeArgs, printer: &Printer) -> Result<()> {
    let base = super::load(&args.base, printer)?;
    let mut overlay = super::load(&args.overlay, printer)?;

    if let Some(scale) = args.scale {
        overlay = transform::scale_overlay(&base, &overlay, scale)?;
        printer.info("Scaled", &format!("overlay to {}", dimensions(overlay.width(), overlay.height())));
    }

    let (x, y) = args.at;
    let out = transform::composite(&base, &overlay, x, y)?;
    super::save(&out, &args.output, &SaveOptions::default(), printer)
}
