//! The nine decision rules.
//!
//! Each rule is a pure function of the center pixel, the neighborhood
//! statistics it needs, and its resolved parameters; polarity is applied
//! later when the label is encoded. Comparison directions are fixed and
//! never flip with polarity.

use crate::params::Label;

/// Fixed Phansalkar exponent weights (`p` and `q` in the paper).
pub(crate) const PHANSALKAR_P: f64 = 2.0;
pub(crate) const PHANSALKAR_Q: f64 = 10.0;

/// Bernsen (1986). In low-contrast regions the whole window is classified
/// by its midgray; otherwise the pixel is compared to the midgray.
pub(crate) fn bernsen(pixel: u8, min: u8, max: u8, contrast_threshold: i32) -> Label {
    let min = i32::from(min);
    let max = i32::from(max);
    let local_contrast = max - min;
    let mid_gray = (min + max) / 2;
    if local_contrast < contrast_threshold {
        Label::of(mid_gray >= 128)
    } else {
        Label::of(i32::from(pixel) >= mid_gray)
    }
}

/// Contrast toggle: the pixel snaps to whichever of local max/min it is
/// closer to. Zero pixels have no direction to toggle to and stay
/// background.
pub(crate) fn contrast(pixel: u8, min: u8, max: u8) -> Label {
    let p = i32::from(pixel);
    let to_max = (i32::from(max) - p).abs();
    let to_min = (p - i32::from(min)).abs();
    Label::of(to_max <= to_min && p != 0)
}

pub(crate) fn mean(pixel: u8, local_mean: f64, c: f64) -> Label {
    Label::of(f64::from(pixel) > local_mean - c)
}

pub(crate) fn median(pixel: u8, local_median: u8, c: f64) -> Label {
    Label::of(f64::from(pixel) > f64::from(local_median) - c)
}

/// Integer midgray `(min + max) / 2`.
pub(crate) fn mid_grey(pixel: u8, min: u8, max: u8, c: f64) -> Label {
    let mid_gray = (i32::from(min) + i32::from(max)) / 2;
    Label::of(f64::from(pixel) > f64::from(mid_gray) - c)
}

/// Niblack (1986): `t = mean + k·σ − c`. The default `k` is +0.2 for
/// white objects and −0.2 for black objects; the orchestration resolves
/// that before calling.
pub(crate) fn niblack(pixel: u8, local_mean: f64, local_variance: f64, k: f64, c: f64) -> Label {
    Label::of(f64::from(pixel) > local_mean + k * local_variance.sqrt() - c)
}

/// Otsu on the window histogram. Pixel value 255 is always object so a
/// saturated pixel cannot be claimed by a bright background class.
pub(crate) fn otsu(pixel: u8, window_threshold: u8) -> Label {
    Label::of(pixel > window_threshold || pixel == 255)
}

/// Phansalkar et al. (2011): `t = m·(1 + p·e^(−q·m) + k·(σ/r − 1))`, with
/// pixel, mean and stddev pre-normalized to [0, 1].
pub(crate) fn phansalkar(
    norm_pixel: f64,
    norm_mean: f64,
    norm_stddev: f64,
    k: f64,
    r: f64,
) -> Label {
    let t = norm_mean
        * (1.0 + PHANSALKAR_P * (-PHANSALKAR_Q * norm_mean).exp() + k * (norm_stddev / r - 1.0));
    Label::of(norm_pixel > t)
}

/// Sauvola & Pietikäinen (2000): `t = mean·(1 + k·(σ/r − 1))`.
pub(crate) fn sauvola(pixel: u8, local_mean: f64, local_variance: f64, k: f64, r: f64) -> Label {
    let t = local_mean * (1.0 + k * (local_variance.sqrt() / r - 1.0));
    Label::of(f64::from(pixel) > t)
}
