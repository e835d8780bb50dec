//! Output format types

use std::path::Path;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Container written for a converted image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
    /// Binary NetPBM graymap (`P5`)
    Pgm,
}

impl OutputFormat {
    /// Picks the format from the path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                ConversionError::UnsupportedFormat(format!(
                    "{}: no file extension",
                    path.display()
                ))
            })?;

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "pgm" => Ok(OutputFormat::Pgm),
            other => Err(ConversionError::UnsupportedFormat(format!(
                "{}: .{} output",
                path.display(),
                other
            ))),
        }
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_map_case_insensitively() {
        assert_eq!(OutputFormat::from_path(Path::new("a.PNG")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.jpg")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("a.JPEG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("dir/a.bmp")).unwrap(), OutputFormat::Bmp);
        assert_eq!(OutputFormat::from_path(Path::new("a.tif")).unwrap(), OutputFormat::Tiff);
        assert_eq!(OutputFormat::from_path(Path::new("a.pgm")).unwrap(), OutputFormat::Pgm);
    }

    #[test]
    fn unknown_or_missing_extension_is_unsupported() {
        assert!(matches!(
            OutputFormat::from_path(Path::new("a.gif")),
            Err(ConversionError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            OutputFormat::from_path(Path::new("noext")),
            Err(ConversionError::UnsupportedFormat(_))
        ));
    }
}
