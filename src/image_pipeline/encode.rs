//! Image encoding module
//!
//! This module writes grayscale images as PNG, JPEG, BMP, TIFF or raw PGM.

mod writer;
mod standard_writer;
pub mod pgm;
pub mod types;

pub use writer::GrayImageWriter;
pub use standard_writer::StandardGrayWriter;
pub use types::{OutputFormat, TiffCompression};
