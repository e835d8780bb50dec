//! Grayscale conversion configuration types

use crate::image_pipeline::encode::TiffCompression;
use crate::image_pipeline::grayscale::GrayscaleMethod;

/// Name prefix given to every file written by a directory batch
pub const DEFAULT_OUTPUT_PREFIX: &str = "gray_";

/// Configuration for grayscale conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Luminance weighting used when collapsing RGB
    pub method: GrayscaleMethod,
    /// Compression method for TIFF output
    pub tiff_compression: TiffCompression,
    /// Predictor value for TIFF compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// JPEG output quality, 1-100
    pub jpeg_quality: u8,
    /// Whether to reject zero-sized images before encoding
    pub validate_dimensions: bool,
    /// Whether a batch keeps going after a file fails (default: abort)
    pub continue_on_error: bool,
    /// Prefix prepended to the original file name in batch output
    pub output_prefix: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            method: GrayscaleMethod::default(),
            tiff_compression: TiffCompression::None,
            predictor: None,
            jpeg_quality: 90,
            validate_dimensions: true,
            continue_on_error: false,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    method: Option<GrayscaleMethod>,
    tiff_compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    jpeg_quality: Option<u8>,
    validate_dimensions: Option<bool>,
    continue_on_error: Option<bool>,
    output_prefix: Option<String>,
}

impl ConversionConfigBuilder {
    pub fn method(mut self, method: GrayscaleMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn tiff_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    /// Clamped to 1..=100.
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn continue_on_error(mut self, enable: bool) -> Self {
        self.continue_on_error = Some(enable);
        self
    }

    pub fn output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = Some(prefix.into());
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            method: self.method.unwrap_or(default.method),
            tiff_compression: self.tiff_compression.unwrap_or(default.tiff_compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            continue_on_error: self.continue_on_error.unwrap_or(default.continue_on_error),
            output_prefix: self.output_prefix.unwrap_or(default.output_prefix),
        }
    }
}
