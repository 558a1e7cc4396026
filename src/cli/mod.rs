pub mod completions;
pub mod composite;
pub mod crop;
pub mod headroom;
pub mod logo;
pub mod pad;
pub mod remove_bg;
pub mod shrink;
pub mod trim;
pub mod variants;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::codec::{self, SaveOptions};
use crate::error::{Result, TouchupError};
use crate::output::{dimensions, display_path, Printer};
use crate::types::Raster;

/// touchup - image asset post-processing
#[derive(Parser, Debug)]
#[command(name = "touchup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit debug logs (also enabled by RUST_LOG)
    #[arg(long, global = true)]
    pub log: bool,

    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crop a fixed rectangle out of an image
    Crop(crop::CropArgs),

    /// Crop a centred square logo out of an image
    Logo(logo::LogoArgs),

    /// Trim near-white borders around the content
    Trim(trim::TrimArgs),

    /// Re-seat the content region with transparent space above it
    Headroom(headroom::HeadroomArgs),

    /// Place an image on a larger canvas
    Pad(pad::PadArgs),

    /// Make near-white pixels transparent
    RemoveBg(remove_bg::RemoveBgArgs),

    /// Draw one image over another
    Composite(composite::CompositeArgs),

    /// Generate logo variants of a base image from a variant table
    Variants(variants::VariantsArgs),

    /// Shrink an image so its longest side fits a limit
    Shrink(shrink::ShrinkArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    pub fn printer(&self) -> Printer {
        if self.quiet {
            Printer::quiet()
        } else {
            Printer::new()
        }
    }
}

/// Load an image and report its size.
pub(crate) fn load(path: &Path, printer: &Printer) -> Result<Raster> {
    let raster = codec::load(path)?;
    printer.status(
        "Loaded",
        &format!("{} ({})", display_path(path), dimensions(raster.width(), raster.height())),
    );
    Ok(raster)
}

/// Save an image and report where it went.
pub(crate) fn save(raster: &Raster, path: &Path, options: &SaveOptions, printer: &Printer) -> Result<()> {
    codec::save(raster, path, options)?;
    printer.status(
        "Saved",
        &format!("{} ({})", display_path(path), dimensions(raster.width(), raster.height())),
    );
    Ok(())
}

/// Parse a "WxH" dimension string into (width, height).
pub(crate) fn parse_dimensions(s: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = s.splitn(2, |c| c == 'x' || c == 'X').collect();
    if parts.len() != 2 {
        return Err(TouchupError::Parse {
            message: format!("Invalid dimensions '{}': expected WxH (e.g. 1024x1536)", s),
            help: Some("Use the format WxH, for example: 512x512".to_string()),
        });
    }

    let parse = |v: &str, what: &str| {
        v.trim().parse::<u32>().map_err(|_| TouchupError::Parse {
            message: format!("Invalid {} '{}' in dimensions '{}'", what, v, s),
            help: Some(format!("{} must be a positive integer", what)),
        })
    };
    let (w, h) = (parse(parts[0], "width")?, parse(parts[1], "height")?);

    if w == 0 || h == 0 {
        return Err(TouchupError::Parse {
            message: format!("Dimensions must be non-zero, got {}x{}", w, h),
            help: Some("Both width and height must be at least 1".to_string()),
        });
    }

    Ok((w, h))
}

/// Parse an "X,Y" pixel position.
pub(crate) fn parse_point(s: &str) -> Result<(u32, u32)> {
    let values = crate::types::parse_u32_list(s, 2, "X,Y (e.g. 40,580)")?;
    Ok((values[0], values[1]))
}
