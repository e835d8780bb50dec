//! Types for grayscale conversion

/// Luminance weighting applied to RGB samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrayscaleMethod {
    /// ITU-R BT.601 luma: 0.299 R + 0.587 G + 0.114 B
    #[default]
    Rec601,
    /// ITU-R BT.709 luma: 0.2126 R + 0.7152 G + 0.0722 B
    Rec709,
}

impl GrayscaleMethod {
    /// RGB weights in 1/16384 units. Each triple sums to exactly 16384.
    pub(crate) const fn fixed_point_weights(self) -> [u32; 3] {
        match self {
            GrayscaleMethod::Rec601 => [4899, 9617, 1868],
            GrayscaleMethod::Rec709 => [3483, 11718, 1183],
        }
    }
}

/// Single-channel image after conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// One byte per pixel, row-major
    pub data: Vec<u8>,
}
