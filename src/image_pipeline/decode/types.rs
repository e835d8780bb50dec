//! Decoded image types

/// 8-bit image as decoded from disk
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Samples per pixel: 1 for grayscale, 3 for interleaved RGB
    pub channels: usize,
    /// Row-major pixel data, `width * height * channels` bytes
    pub data: Vec<u8>,
}

impl DecodedImage {
    pub fn is_grayscale(&self) -> bool {
        self.channels == 1
    }

    pub fn expected_len(&self) -> usize {
        self.width * self.height * self.channels
    }
}
