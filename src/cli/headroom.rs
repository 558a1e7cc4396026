//! Add transparent space above an asset's content.

use std::path::PathBuf;

use clap::Args;

use crate::codec::SaveOptions;
use crate::error::Result;
use crate::output::Printer;
use crate::transform;
use crate::types::Colour;

/// Re-seat the content region with transparent space above it
#[derive(Args, Debug)]
pub struct HeadroomArgs {
    /// Image to adjust
    pub input: PathBuf,

    /// Output path (default: overwrite the input)
    pub output: Option<PathBuf>,

    /// Content occupies the last N rows (default: the whole image)
    #[arg(long)]
    pub content_rows: Option<u32>,

    /// Space to add above, as a fraction of the content height
    #[arg(long, default_value_t = 0.2)]
    pub ratio: f64,

    /// Paint the top row as a visible marker
    #[arg(long, num_args = 0..=1, default_missing_value = "#FF0000")]
    pub guide: Option<Colour>,
}

pub fn run(args: HeadroomArgs, printer: &Printer) -> Result<()> {
    let img = super::load(&args.input, printer)?;

    let rows = args.content_rows.unwrap_or(img.height());
    let content = transform::bottom_rows(&img, rows);
    if rows > img.height() {
        printer.warning(
            "Warning",
            &format!(
                "--content-rows {} exceeds image height {}; using the whole image",
                rows,
                img.height()
            ),
        );
    }

    let mut out = transform::add_headroom(&img, content, args.ratio)?;
    if let Some(colour) = args.guide {
        out = transform::draw_guide_line(&out, 0, colour)?;
    }

    let output = args.output.unwrap_or(args.input);
    super::save(&out, &output, &SaveOptions::default(), printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::types::{PixelFormat, Raster};
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_headroom_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catan_boat.png");
        let img = RgbaImage::from_fn(8, 30, |_, y| {
            if y < 10 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([90, 60, 30, 255])
            }
        });
        codec::save(&Raster::new(img, PixelFormat::Rgba).unwrap(), &path, &SaveOptions::default()).unwrap();

        let args = HeadroomArgs {
            input: path.clone(),
            output: None,
            content_rows: Some(20),
            ratio: 0.5,
            guide: None,
        };
        run(args, &Printer::quiet()).unwrap();

        let out = codec::load(&path).unwrap();
        assert_eq!(out.dimensions(), (8, 30));
        assert_eq!(out.get(0, 9), Some(Colour::TRANSPARENT));
        assert_eq!(out.get(0, 10), Some(Colour::rgb(90, 60, 30)));
    }

    #[test]
    fn test_headroom_with_guide() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("boat.png");
        let output = dir.path().join("boat_guide.png");
        codec::save(&Raster::filled(4, 10, Colour::BLACK).unwrap(), &input, &SaveOptions::default()).unwrap();

        let args = HeadroomArgs {
            input,
            output: Some(output.clone()),
            content_rows: None,
            ratio: 0.1,
            guide: Some(Colour::RED),
        };
        run(args, &Printer::quiet()).unwrap();

        let out = codec::load(&output).unwrap();
        assert_eq!(out.dimensions(), (4, 11));
        assert_eq!(out.get(3, 0), Some(Colour::RED));
        assert_eq!(out.get(3, 1), Some(Colour::BLACK));
    }

    #[test]
    fn test_guide_flag_defaults_to_red() {
        let cli = crate::cli::Cli::try_parse_from(["touchup", "headroom", "a.png", "--guide"]).unwrap();
        let crate::cli::Commands::Headroom(args) = cli.command else {
            panic!("expected headroom");
        };
        assert_eq!(args.guide, Some(Colour::RED));
    }
}
