//! Trim near-white borders.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::codec::{SaveOptions, DEFAULT_JPEG_QUALITY};
use crate::error::Result;
use crate::output::{dimensions, display_path, Printer};
use crate::transform::{self, DEFAULT_BACKGROUND_THRESHOLD, DEFAULT_TRIM_PADDING};

/// Trim near-white borders around the content
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Image to trim
    pub input: PathBuf,

    /// Output path (default: <input stem>_cropped.<ext> beside the input)
    pub output: Option<PathBuf>,

    /// Channels at or above this value count as background
    #[arg(long, default_value_t = DEFAULT_BACKGROUND_THRESHOLD)]
    pub threshold: u8,

    /// Pixels of background to keep around the content
    #[arg(long, default_value_t = DEFAULT_TRIM_PADDING)]
    pub padding: u32,

    /// JPEG quality when the output is a JPEG
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: u8,
}

/// `dir/name.ext` -> `dir/name_cropped.ext`
fn cropped_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("image");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_cropped.{}", stem, ext),
        None => format!("{}_cropped.png", stem),
    };
    input.with_file_name(name)
}

pub fn run(args: TrimArgs, printer: &Printer) -> Result<()> {
    let img = super::load(&args.input, printer)?;

    let Some(trimmed) = transform::trim(&img, args.threshold, args.padding)? else {
        printer.warning(
            "Skipped",
            &format!("{}: no non-background content found", display_path(&args.input)),
        );
        return Ok(());
    };

    printer.info(
        "Trimmed",
        &format!(
            "{} -> {}",
            dimensions(img.width(), img.height()),
            dimensions(trimmed.width(), trimmed.height())
        ),
    );

    let output = args.output.unwrap_or_else(|| cropped_path(&args.input));
    super::save(&trimmed, &output, &SaveOptions::with_quality(args.quality), printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::types::{Colour, PixelFormat, Raster};
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn args(input: PathBuf, output: Option<PathBuf>) -> TrimArgs {
        TrimArgs {
            input,
            output,
            threshold: 240,
            padding: 5,
            quality: 95,
        }
    }

    #[test]
    fn test_cropped_path() {
        assert_eq!(
            cropped_path(Path::new("public/images/catan_gold.jpg")),
            PathBuf::from("public/images/catan_gold_cropped.jpg")
        );
        assert_eq!(cropped_path(Path::new("art")), PathBuf::from("art_cropped.png"));
    }

    #[test]
    fn test_trim_command_default_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("gold.png");

        let mut img = RgbaImage::from_pixel(40, 30, Rgba([255, 255, 255, 255]));
        for y in 10..14 {
            for x in 20..23 {
                img.put_pixel(x, y, Rgba([200, 150, 0, 255]));
            }
        }
        codec::save(&Raster::new(img, PixelFormat::Rgb).unwrap(), &input, &SaveOptions::default()).unwrap();

        run(args(input, None), &Printer::quiet()).unwrap();

        let out = codec::load(&dir.path().join("gold_cropped.png")).unwrap();
        assert_eq!(out.dimensions(), (13, 14));
        assert_eq!(out.get(5, 5), Some(Colour::rgb(200, 150, 0)));
    }

    #[test]
    fn test_trim_command_blank_image_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("blank.png");
        let output = dir.path().join("out.png");
        codec::save(&Raster::filled(8, 8, Colour::WHITE).unwrap(), &input, &SaveOptions::default()).unwrap();

        run(args(input, Some(output.clone())), &Printer::quiet()).unwrap();
        assert!(!output.exists());
    }
}
