use std::io::{Cursor, Write};

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::ConversionConfig;
use crate::image_pipeline::encode::pgm;
use crate::image_pipeline::encode::types::{OutputFormat, TiffCompression};
use crate::image_pipeline::encode::writer::GrayImageWriter;
use crate::image_pipeline::grayscale::GrayImageData;

pub struct StandardGrayWriter;

impl StandardGrayWriter {
    fn encode_with_image<E: ImageEncoder>(encoder: E, image: &GrayImageData) -> Result<()> {
        let (width, height) = dimensions_u32(image)?;
        encoder
            .write_image(&image.data, width, height, ExtendedColorType::L8)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))
    }

    fn encode_tiff(image: &GrayImageData, buffer: &mut Vec<u8>, config: &ConversionConfig) -> Result<()> {
        let (width, height) = dimensions_u32(image)?;

        let compression = match config.tiff_compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder
            .write_image::<tiff::encoder::colortype::Gray8>(width, height, &image.data)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))
    }
}

impl GrayImageWriter for StandardGrayWriter {
    fn write_gray(
        &self,
        image: &GrayImageData,
        format: OutputFormat,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", format, image.width, image.height);

        let mut buffer = Vec::new();
        match format {
            OutputFormat::Pgm => return pgm::write_pgm(image, output),
            OutputFormat::Png => Self::encode_with_image(PngEncoder::new(&mut buffer), image)?,
            OutputFormat::Jpeg => Self::encode_with_image(
                JpegEncoder::new_with_quality(&mut buffer, config.jpeg_quality),
                image,
            )?,
            OutputFormat::Bmp => Self::encode_with_image(BmpEncoder::new(&mut buffer), image)?,
            OutputFormat::Tiff => Self::encode_tiff(image, &mut buffer, config)?,
        }

        output.write_all(&buffer)?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

fn dimensions_u32(image: &GrayImageData) -> Result<(u32, u32)> {
    match (u32::try_from(image.width), u32::try_from(image.height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(ConversionError::InvalidDimensions(image.width, image.height)),
    }
}
