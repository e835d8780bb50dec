use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::DecodedImage;
use crate::image_pipeline::grayscale::types::{GrayImageData, GrayscaleMethod};

const WEIGHT_SHIFT: u32 = 14;
const ROUNDING: u32 = 1 << (WEIGHT_SHIFT - 1);

/// Collapses a decoded image to one luma sample per pixel.
///
/// Single-channel input is copied through unchanged. RGB input is reduced
/// with a fixed-point weighted sum, rounded to nearest.
pub fn to_grayscale(image: &DecodedImage, method: GrayscaleMethod) -> Result<GrayImageData> {
    if image.data.len() != image.expected_len() {
        return Err(ConversionError::InvalidDimensions(image.width, image.height));
    }

    let data = match image.channels {
        1 => image.data.clone(),
        3 => {
            debug!("Applying {:?} luma to {}x{}", method, image.width, image.height);
            let [wr, wg, wb] = method.fixed_point_weights();
            image
                .data
                .chunks_exact(3)
                .map(|px| {
                    let sum = wr * px[0] as u32 + wg * px[1] as u32 + wb * px[2] as u32;
                    ((sum + ROUNDING) >> WEIGHT_SHIFT) as u8
                })
                .collect()
        }
        n => {
            return Err(ConversionError::UnsupportedFormat(format!(
                "{n} channel image"
            )));
        }
    };

    Ok(GrayImageData {
        width: image.width,
        height: image.height,
        data,
    })
}
