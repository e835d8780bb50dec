//! Image processing pipeline module
//!
//! This module provides a structured approach to grayscale conversion,
//! with separate modules for decoding, luma reduction, encoding and
//! conversion orchestration.

pub mod common;
pub mod conversions;
pub mod decode;
pub mod encode;
pub mod grayscale;

pub use common::{
    ConversionError,
    PipelineTimings,
    Result,
};

pub use decode::{
    DecodedImage,
    ImageReader,
    StandardImageReader,
};

pub use grayscale::{
    GrayImageData,
    GrayscaleMethod,
    to_grayscale,
};

pub use encode::{
    GrayImageWriter,
    OutputFormat,
    StandardGrayWriter,
    TiffCompression,
};

pub use conversions::{
    BatchFailure,
    BatchReport,
    ConversionConfig,
    ConversionConfigBuilder,
    GrayscalePipeline,
    batch_convert_directory,
    convert_to_grayscale,
    save_as_pgm,
};
