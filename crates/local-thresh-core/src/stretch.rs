//! 0%-saturation contrast stretch.
//!
//! Linear rescale so that the darkest occupied histogram bin maps to 0 and
//! the brightest to 255. The Phansalkar rule runs on stretched copies of
//! the input before any neighborhood statistics are computed.

use crate::image::{GrayImage, GrayImageView};

/// Contrast-stretch `src` to the full [0, 255] range.
///
/// Flat images have no defined stretch and are returned unchanged.
pub fn stretch_histogram(src: &GrayImageView<'_>) -> GrayImage {
    let mut hist = [0u32; 256];
    for &v in src.data {
        hist[v as usize] += 1;
    }
    let lo = hist.iter().position(|&c| c > 0).unwrap_or(0);
    let hi = hist.iter().rposition(|&c| c > 0).unwrap_or(0);
    if hi <= lo {
        return src.to_owned();
    }

    let scale = 255.0 / (hi - lo) as f64;
    let data = src
        .data
        .iter()
        .map(|&v| {
            let mapped = (f64::from(v) - lo as f64) * scale + 0.5;
            mapped.clamp(0.0, 255.0) as u8
        })
        .collect();
    GrayImage {
        width: src.width,
        height: src.height,
        data,
    }
}
