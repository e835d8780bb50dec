//! Binary PGM (NetPBM `P5`) output.
//!
//! Layout: `P5\n<width> <height>\n255\n` followed by `width * height` bytes,
//! one per pixel, row-major, with no padding and nothing after the samples.

use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::grayscale::GrayImageData;

pub const MAGIC: &str = "P5";
pub const MAX_VALUE: u8 = 255;

pub fn header(width: usize, height: usize) -> String {
    format!("{MAGIC}\n{width} {height}\n{MAX_VALUE}\n")
}

pub fn write_pgm(image: &GrayImageData, output: &mut dyn Write) -> Result<()> {
    if image.data.len() != image.width * image.height {
        return Err(ConversionError::InvalidDimensions(image.width, image.height));
    }

    debug!("Writing PGM {}x{}", image.width, image.height);
    output.write_all(header(image.width, image.height).as_bytes())?;
    output.write_all(&image.data)?;
    output.flush()?;
    Ok(())
}
