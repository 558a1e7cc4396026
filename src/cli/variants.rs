//! Variants command implementation.
//!
//! Produces one composited image per entry of a variant table.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, TouchupError};
use crate::output::{display_path, plural, Printer};
use crate::variants::{run_variants, VariantTable};

/// Generate logo variants of a base image from a variant table
#[derive(Args, Debug)]
pub struct VariantsArgs {
    /// Base image shared by every variant
    pub base: PathBuf,

    /// Variant table (YAML). Defaults to the builtin port table
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Output directory (default: the base image's directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

pub fn run(args: VariantsArgs, printer: &Printer) -> Result<()> {
    // Overlays resolve against the table's directory, or the base's for the builtin table.
    let (table, overlay_root) = match &args.table {
        Some(path) => {
            printer.status("Reading", &display_path(path));
            (VariantTable::load(path)?, parent_dir(path))
        }
        None => (VariantTable::builtin_ports(), parent_dir(&args.base)),
    };

    let output_dir = args.output.clone().unwrap_or_else(|| parent_dir(&args.base));
    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir).map_err(|e| TouchupError::Io {
            path: output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let report = run_variants(&args.base, &table, &overlay_root, &output_dir, printer)?;

    let summary = plural(report.written.len(), "variant", "variants");
    if report.is_clean() {
        printer.status("Finished", &summary);
    } else {
        printer.warning(
            "Finished",
            &format!("{} ({} failed)", summary, report.failed.len()),
        );
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| TouchupError::Parse {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{self, SaveOptions};
    use crate::types::{Colour, Raster};
    use tempfile::tempdir;

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("boat.png")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("img/boat.png")), PathBuf::from("img"));
    }

    #[test]
    fn test_variants_command_with_table() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("boat.png");
        codec::save(&Raster::filled(100, 100, Colour::WHITE).unwrap(), &base, &SaveOptions::default()).unwrap();

        let logos = dir.path().join("logos");
        std::fs::create_dir(&logos).unwrap();
        codec::save(&Raster::filled(8, 8, Colour::RED).unwrap(), &logos.join("brick.png"), &SaveOptions::default()).unwrap();

        let table = dir.path().join("ports.yaml");
        std::fs::write(
            &table,
            "variants:\n  - { name: brick, overlay: logos/brick.png, label: \"2:1\", scale: 0.2 }\n",
        )
        .unwrap();

        let out_dir = dir.path().join("dist");
        let args = VariantsArgs {
            base,
            table: Some(table),
            output: Some(out_dir.clone()),
            json: false,
        };
        run(args, &Printer::quiet()).unwrap();

        // 20px logo at ((100 - 20) / 2 + 40, floor(100 * 0.58)) = (80, 57)
        let out = codec::load(&out_dir.join("boat_brick.png")).unwrap();
        let corner = out.get(80, 60).unwrap();
        assert!(corner.r > 250 && corner.g < 5);
        assert_eq!(out.get(79, 60), Some(Colour::WHITE));
        assert_eq!(out.get(85, 50), Some(Colour::WHITE));
    }
}
