//! White-background removal.

use std::path::PathBuf;

use clap::Args;

use crate::codec::SaveOptions;
use crate::error::Result;
use crate::output::Printer;
use crate::transform::{self, DEFAULT_WHITE_THRESHOLD};

/// Make near-white pixels transparent
#[derive(Args, Debug)]
pub struct RemoveBgArgs {
    /// Image with a white background
    pub input: PathBuf,

    /// Where to write the transparent image
    pub output: PathBuf,

    /// Channels strictly above this value count as white
    #[arg(long, default_value_t = DEFAULT_WHITE_THRESHOLD)]
    pub threshold: u8,
}

pub fn run(args: RemoveBgArgs, printer: &Printer) -> Result<()> {
    let img = super::load(&args.input, printer)?;
    let keyed = transform::chroma_key(&img, args.threshold)?;
    super::save(&keyed, &args.output, &SaveOptions::default(), printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::types::{Colour, PixelFormat, Raster};
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_remove_bg_command() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("logo.png");
        let output = dir.path().join("logo_clear.png");

        let mut img = RgbaImage::from_pixel(3, 3, Rgba([250, 250, 250, 255]));
        img.put_pixel(1, 1, Rgba([30, 60, 90, 255]));
        let raster = Raster::new(img, PixelFormat::Rgb).unwrap();
        codec::save(&raster, &input, &SaveOptions::default()).unwrap();

        run(
            RemoveBgArgs {
                input,
                output: output.clone(),
                threshold: 240,
            },
            &Printer::quiet(),
        )
        .unwrap();

        let out = codec::load(&output).unwrap();
        assert!(out.has_alpha());
        assert_eq!(out.get(0, 0), Some(Colour::new(250, 250, 250, 0)));
        assert_eq!(out.get(1, 1), Some(Colour::rgb(30, 60, 90)));
    }
}
