//! Public neighborhood-statistics operations.
//!
//! Each operation takes the input raster and a disk radius and returns a
//! same-size layer. Pass a [`CancelToken`] to make long passes abortable
//! at row granularity.

use local_thresh_core::{CancelToken, FloatImage, GrayImage, GrayImageView, Result};

use crate::histogram::Histogram;
use crate::slide::{map_moments, map_windows};

/// Minimum sample value in the disk around each pixel.
pub fn local_min(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
) -> Result<GrayImage> {
    let data = map_windows(src, radius, cancel, |_, _, h: &Histogram| h.min())?;
    Ok(GrayImage {
        width: src.width,
        height: src.height,
        data,
    })
}

/// Maximum sample value in the disk around each pixel.
pub fn local_max(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
) -> Result<GrayImage> {
    let data = map_windows(src, radius, cancel, |_, _, h: &Histogram| h.max())?;
    Ok(GrayImage {
        width: src.width,
        height: src.height,
        data,
    })
}

/// Median sample value in the disk around each pixel (upper median for
/// even counts).
pub fn local_median(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
) -> Result<GrayImage> {
    let data = map_windows(src, radius, cancel, |_, _, h: &Histogram| h.median())?;
    Ok(GrayImage {
        width: src.width,
        height: src.height,
        data,
    })
}

/// Arithmetic mean of the disk around each pixel.
pub fn local_mean(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
) -> Result<FloatImage> {
    let data = map_moments(src, radius, cancel, |_, _, m| m.mean() as f32)?;
    Ok(FloatImage {
        width: src.width,
        height: src.height,
        data,
    })
}

/// Population variance of the disk around each pixel. Callers take the
/// square root for the local standard deviation.
pub fn local_variance(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
) -> Result<FloatImage> {
    let data = map_moments(src, radius, cancel, |_, _, m| m.variance() as f32)?;
    Ok(FloatImage {
        width: src.width,
        height: src.height,
        data,
    })
}
