use crate::ThresholdError;

/// Borrowed 8-bit grayscale raster, row-major, `len = width * height`.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl<'a> GrayImageView<'a> {
    /// Wrap a raw buffer, rejecting empty rasters and length mismatches.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ThresholdError> {
        if width == 0 || height == 0 || data.len() != width * height {
            return Err(ThresholdError::InvalidInput {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn to_owned(&self) -> GrayImage {
        GrayImage {
            width: self.width,
            height: self.height,
            data: self.data.to_vec(),
        }
    }
}

/// Owned 8-bit grayscale raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Take ownership of a raw buffer, rejecting empty rasters and length
    /// mismatches.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ThresholdError> {
        if width == 0 || height == 0 || data.len() != width * height {
            return Err(ThresholdError::InvalidInput {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Uniform raster of `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self, ThresholdError> {
        Self::new(width, height, vec![value; width * height])
    }

    #[inline]
    pub fn as_view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Same-shape `f32` layer produced by the statistics engine (local mean,
/// local variance). Intermediate value only; discarded once the binary
/// output is produced.
#[derive(Clone, Debug)]
pub struct FloatImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl FloatImage {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }
}
