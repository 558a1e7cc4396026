//! Reading and writing image files.
//!
//! Decoding sniffs the format from file content. Encoding picks the format from
//! the output extension and writes through a temporary file in the destination
//! directory, which is renamed over the target only once encoding succeeded.
//! A replaced file keeps its permissions.
//! Two processes writing the same path at once is not supported.

use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, ImageReader};
use tracing::debug;

use crate::error::{Result, TouchupError};
use crate::types::Raster;

/// Default quality for JPEG output.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// JPEG quality, 1..=100. Ignored for lossless formats.
    pub jpeg_quality: u8,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl SaveOptions {
    pub fn with_quality(jpeg_quality: u8) -> Self {
        Self { jpeg_quality }
    }
}

/// Decode the image at `path`.
pub fn load(path: &Path) -> Result<Raster> {
    if !path.is_file() {
        return Err(TouchupError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |message: String| TouchupError::Decode {
        path: path.to_path_buf(),
        message,
    };

    let img = ImageReader::open(path)
        .map_err(|e| decode_err(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?
        .decode()
        .map_err(|e| decode_err(e.to_string()))?;

    let raster = Raster::from_dynamic(img).map_err(|e| decode_err(e.to_string()))?;
    debug!(path = %path.display(), width = raster.width(), height = raster.height(), "loaded");
    Ok(raster)
}

/// Decode an in-memory image.
pub fn decode(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory(bytes).map_err(|e| TouchupError::Decode {
        path: "<memory>".into(),
        message: e.to_string(),
    })?;
    Raster::from_dynamic(img)
}

/// The output format implied by `path`'s extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path).map_err(|_| TouchupError::Encode {
        path: path.to_path_buf(),
        message: "Unsupported or missing file extension".to_string(),
    })
}

/// Encode `raster` into `writer` as `format`.
///
/// JPEG has no alpha channel, so RGBA rasters are flattened to RGB first.
pub fn encode<W: Write + Seek>(
    raster: &Raster,
    format: ImageFormat,
    options: &SaveOptions,
    writer: &mut W,
) -> std::result::Result<(), image::ImageError> {
    match format {
        ImageFormat::Jpeg => {
            let rgb = raster.to_dynamic().to_rgb8();
            let quality = options.jpeg_quality.clamp(1, 100);
            JpegEncoder::new_with_quality(writer, quality).encode_image(&rgb)
        }
        _ => raster.to_dynamic().write_to(writer, format),
    }
}

/// Encode to a byte buffer.
pub fn encode_to_vec(raster: &Raster, format: ImageFormat, options: &SaveOptions) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    encode(raster, format, options, &mut buf).map_err(|e| TouchupError::Encode {
        path: "<memory>".into(),
        message: e.to_string(),
    })?;
    Ok(buf.into_inner())
}

/// Encode `raster` to `path`, replacing any existing file atomically.
pub fn save(raster: &Raster, path: &Path, options: &SaveOptions) -> Result<()> {
    let format = format_for_path(path)?;
    let encode_err = |message: String| TouchupError::Encode {
        path: path.to_path_buf(),
        message,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".touchup-");
    // new files get the usual umask-filtered mode instead of 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let tmp = builder.tempfile_in(dir).map_err(|e| TouchupError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create temporary file: {}", e),
    })?;

    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| TouchupError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to copy permissions: {}", e),
            })?;
    }

    {
        let mut writer = BufWriter::new(tmp.as_file());
        encode(raster, format, options, &mut writer).map_err(|e| encode_err(e.to_string()))?;
        writer.flush().map_err(|e| encode_err(e.to_string()))?;
    }

    tmp.persist(path).map_err(|e| TouchupError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to replace file: {}", e.error),
    })?;

    debug!(path = %path.display(), ?format, "saved");
    Ok(())
}
