//! Image reader implementation using the image library.
//!
//! The container format is detected from the leading bytes, so PNG, JPEG,
//! BMP, TIFF and PNM inputs are all accepted regardless of file name.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::reader::ImageReader;
use crate::image_pipeline::decode::types::DecodedImage;

/// Reader backed by `image::load_from_memory`.
///
/// Sources without colour information (L8, LA8, L16, ...) decode to a single
/// channel. Everything else decodes to interleaved RGB. Alpha is discarded
/// and 16-bit samples are reduced to 8 bits.
pub struct StandardImageReader;

impl ImageReader for StandardImageReader {
    fn read_image(&self, data: &[u8]) -> Result<DecodedImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let color = decoded.color();
        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        let (channels, data) = if color.has_color() {
            (3, decoded.into_rgb8().into_raw())
        } else {
            (1, decoded.into_luma8().into_raw())
        };

        debug!("Decoded image: {}x{} ({:?} -> {} channel(s))", width, height, color, channels);

        Ok(DecodedImage {
            width,
            height,
            channels,
            data,
        })
    }
}
