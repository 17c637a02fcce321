//! Helpers bridging `image::GrayImage` (luma8) buffers to the engine.

use local_thresh_core::{GrayImageView, Result};

use crate::method::Method;
use crate::params::ThresholdParams;
use crate::threshold::threshold;

/// Convert an `image::GrayImage` into the lightweight internal view type.
pub fn gray_view(img: &::image::GrayImage) -> Result<GrayImageView<'_>> {
    GrayImageView::new(img.width() as usize, img.height() as usize, img.as_raw())
}

/// Threshold a luma8 image, returning the binary result as a luma8 image.
pub fn threshold_luma8(
    img: &::image::GrayImage,
    method: Method,
    params: &ThresholdParams,
) -> Result<::image::GrayImage> {
    let view = gray_view(img)?;
    let out = threshold(&view, method, params)?;
    // Dimensions are preserved, so reassembly cannot fail.
    Ok(::image::GrayImage::from_raw(img.width(), img.height(), out.data)
        .unwrap_or_else(|| ::image::GrayImage::new(img.width(), img.height())))
}
