//! Grayscale conversion module

pub mod luma;
pub mod types;

pub use luma::to_grayscale;
pub use types::{GrayImageData, GrayscaleMethod};
