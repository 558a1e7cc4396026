//! Fixed-rectangle crop.

use std::path::PathBuf;

use clap::Args;

use crate::codec::SaveOptions;
use crate::error::Result;
use crate::output::Printer;
use crate::transform;
use crate::types::Rect;

/// Crop a fixed rectangle out of an image
#[derive(Args, Debug)]
pub struct CropArgs {
    /// Image to crop
    pub input: PathBuf,

    /// Where to write the cropped image
    pub output: PathBuf,

    /// Region as LEFT,TOP,RIGHT,BOTTOM (right and bottom exclusive)
    #[arg(long)]
    pub rect: Rect,

    /// JPEG quality when the output is a JPEG
    #[arg(long, default_value_t = crate::codec::DEFAULT_JPEG_QUALITY)]
    pub quality: u8,
}

pub fn run(args: CropArgs, printer: &Printer) -> Result<()> {
    let img = super::load(&args.input, printer)?;
    let cropped = transform::crop(&img, args.rect)?;
    super::save(&cropped, &args.output, &SaveOptions::with_quality(args.quality), printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::error::TouchupError;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_crop_command() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        let img = crate::transform::pad_canvas(
            &crate::types::Raster::filled(2, 2, Colour::RED).unwrap(),
            6,
            6,
            2,
            3,
            Colour::WHITE,
        )
        .unwrap();
        codec::save(&img, &input, &SaveOptions::default()).unwrap();

        let args = CropArgs {
            input,
            output: output.clone(),
            rect: Rect::new(2, 3, 4, 5),
            quality: 95,
        };
        run(args, &Printer::quiet()).unwrap();

        let out = codec::load(&output).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get(1, 1), Some(Colour::RED));
    }

    #[test]
    fn test_crop_command_out_of_bounds() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        codec::save(
            &crate::types::Raster::filled(4, 4, Colour::RED).unwrap(),
            &input,
            &SaveOptions::default(),
        )
        .unwrap();

        let args = CropArgs {
            input,
            output: output.clone(),
            rect: Rect::new(0, 0, 5, 5),
            quality: 95,
        };
        let err = run(args, &Printer::quiet()).unwrap_err();
        assert!(matches!(err, TouchupError::Bounds { .. }));
        assert!(!output.exists());
    }
}
