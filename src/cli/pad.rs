//! Place an image on a larger canvas.

use std::path::PathBuf;

use clap::Args;

use crate::codec::SaveOptions;
use crate::error::Result;
use crate::output::Printer;
use crate::transform;
use crate::types::Colour;

/// Place an image on a larger canvas
#[derive(Args, Debug)]
pub struct PadArgs {
    /// Image to place
    pub input: PathBuf,

    /// Where to write the padded image
    pub output: PathBuf,

    /// Canvas size as WxH
    #[arg(long, value_parser = super::parse_dimensions)]
    pub size: (u32, u32),

    /// Top-left corner of the image on the canvas, as X,Y
    #[arg(long, value_parser = super::parse_point, default_value = "0,0")]
    pub offset: (u32, u32),

    /// Canvas fill colour
    #[arg(long, default_value = "#00000000")]
    pub fill: Colour,
}

pub fn run(args: PadArgs, printer: &Printer) -> Result<()> {
    let img = super::load(&args.input, printer)?;
    let (w, h) = args.size;
    let (x, y) = args.offset;
    let padded = transform::pad_canvas(&img, w, h, x, y, args.fill)?;
    super::save(&padded, &args.output, &SaveOptions::default(), printer)
}
