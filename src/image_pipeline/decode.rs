//! Image decoding module
//!
//! This module turns encoded image bytes into 8-bit sample grids.

mod reader;
mod standard_reader;
pub mod types;

pub use reader::ImageReader;
pub use standard_reader::StandardImageReader;
pub use types::DecodedImage;
