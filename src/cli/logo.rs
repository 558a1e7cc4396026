//! Centred square logo crop.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;

use crate::codec::SaveOptions;
use crate::error::{Result, TouchupError};
use crate::output::{display_path, plural, Printer};
use crate::transform;

/// Crop a centred square logo out of an image
#[derive(Args, Debug)]
pub struct LogoArgs {
    /// Source artwork
    #[arg(requires = "output")]
    pub input: Option<PathBuf>,

    /// Where to write the logo
    #[arg(requires = "input")]
    pub output: Option<PathBuf>,

    /// Additional SOURCE:LOGO pair (repeatable); missing sources are skipped
    #[arg(long = "pair", value_name = "SOURCE:LOGO")]
    pub pairs: Vec<LogoPair>,

    /// Edge length of the square in pixels
    #[arg(long, default_value_t = 200)]
    pub size: u32,
}

/// A source image and the logo cropped from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoPair {
    pub source: PathBuf,
    pub logo: PathBuf,
}

impl FromStr for LogoPair {
    type Err = TouchupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((source, logo)) if !source.is_empty() && !logo.is_empty() => Ok(Self {
                source: source.into(),
                logo: logo.into(),
            }),
            _ => Err(TouchupError::Parse {
                message: format!("Invalid logo pair '{}'", s),
                help: Some("Use SOURCE:LOGO, e.g. catan_sheep.png:catan_sheep_logo.png".to_string()),
            }),
        }
    }
}

pub fn run(args: LogoArgs, printer: &Printer) -> Result<()> {
    match (&args.input, &args.output) {
        (Some(input), Some(output)) => crop_logo(input, output, args.size, printer)?,
        _ if args.pairs.is_empty() => {
            return Err(TouchupError::Parse {
                message: "No images to crop".to_string(),
                help: Some("Pass <INPUT> <OUTPUT> or at least one --pair SOURCE:LOGO".to_string()),
            })
        }
        _ => {}
    }

    let mut skipped = 0;
    for pair in &args.pairs {
        if !pair.source.is_file() {
            printer.warning("Skipped", &format!("{} not found", display_path(&pair.source)));
            skipped += 1;
            continue;
        }
        crop_logo(&pair.source, &pair.logo, args.size, printer)?;
    }

    if skipped > 0 {
        printer.info("Finished", &format!("{} skipped", plural(skipped, "pair", "pairs")));
    }
    Ok(())
}

fn crop_logo(input: &Path, output: &Path, size: u32, printer: &Printer) -> Result<()> {
    let img = super::load(input, printer)?;
    let logo = transform::center_square(&img, size)?;
    super::save(&logo, output, &SaveOptions::default(), printer)
}
