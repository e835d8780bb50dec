use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::conversions::ConversionConfig;
use crate::image_pipeline::encode::types::OutputFormat;
use crate::image_pipeline::grayscale::GrayImageData;

pub trait GrayImageWriter {
    fn write_gray(
        &self,
        image: &GrayImageData,
        format: OutputFormat,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
