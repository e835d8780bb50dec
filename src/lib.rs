pub mod image_pipeline;
pub mod logger;

pub use image_pipeline::{batch_convert_directory, convert_to_grayscale, save_as_pgm};
