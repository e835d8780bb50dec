//! Pipeline conversions module
//!
//! This module contains orchestration logic: single-file grayscale
//! conversion, directory batches and PGM export.

mod batch;
mod grayscale_pipeline;
pub mod types;


pub use batch::{BatchFailure, BatchReport, SUPPORTED_INPUT_EXTENSIONS, is_supported_input};
pub use grayscale_pipeline::GrayscalePipeline;
pub use types::{ConversionConfig, ConversionConfigBuilder, DEFAULT_OUTPUT_PREFIX};

use std::path::Path;

use crate::image_pipeline::common::error::Result;

/// Converts one image to grayscale with the default configuration.
pub fn convert_to_grayscale<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<()> {
    GrayscalePipeline::new(ConversionConfig::default()).convert_file(input_path, output_path)
}

/// Converts every `.png`/`.jpg`/`.jpeg`/`.bmp` file in `input_dir` into
/// `output_dir/gray_<name>` with the default configuration.
pub fn batch_convert_directory<P: AsRef<Path>, Q: AsRef<Path>>(input_dir: P, output_dir: Q) -> Result<BatchReport> {
    GrayscalePipeline::new(ConversionConfig::default()).batch_convert_directory(input_dir, output_dir)
}

/// Writes the input image as a binary PGM with the default configuration.
pub fn save_as_pgm<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<()> {
    GrayscalePipeline::new(ConversionConfig::default()).save_as_pgm(input_path, output_path)
}
