//! Orchestration: resolve parameters, compute the statistics layers a
//! rule needs (each exactly once), evaluate the rule per pixel, and encode
//! labels according to polarity.
//!
//! The input raster is never mutated; every call writes a distinct output
//! buffer so later statistics reads cannot observe earlier writes.

use log::debug;

use local_thresh_core::{stretch_histogram, CancelToken, GrayImage, GrayImageView, Result};
use local_thresh_rank::{
    local_max, local_mean, local_median, local_min, local_variance, map_windows, validate,
};

use crate::method::Method;
use crate::params::{Label, Polarity, ThresholdParams};
use crate::rules;

#[cfg(feature = "tracing")]
use tracing::instrument;

const BERNSEN_CONTRAST_THRESHOLD: f64 = 15.0;
const NIBLACK_K: f64 = 0.2;
const NIBLACK_C: f64 = 0.0;
const OFFSET_C: f64 = 0.0;
const PHANSALKAR_K: f64 = 0.25;
const PHANSALKAR_R: f64 = 0.5;
const SAUVOLA_K: f64 = 0.5;
const SAUVOLA_R: f64 = 128.0;

/// Threshold `src` with the given rule and parameters.
///
/// Returns a raster of identical dimensions holding only the two raw
/// label encodings (OBJECT/BACKGROUND as resolved by
/// [`Polarity`](crate::Polarity)). The input is read-only for the whole
/// call; on error no output is produced.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(src, params), fields(width = src.width, height = src.height, method = %method, radius = params.radius))
)]
pub fn threshold(
    src: &GrayImageView<'_>,
    method: Method,
    params: &ThresholdParams,
) -> Result<GrayImage> {
    threshold_impl(src, method, params, None)
}

/// Like [`threshold`], but abortable: the engine checks `cancel` at row
/// granularity and returns `Cancelled`, discarding partial output.
pub fn threshold_cancellable(
    src: &GrayImageView<'_>,
    method: Method,
    params: &ThresholdParams,
    cancel: &CancelToken,
) -> Result<GrayImage> {
    threshold_impl(src, method, params, Some(cancel))
}

/// Run every rule with one parameter set ("try all" without the montage).
pub fn threshold_all(
    src: &GrayImageView<'_>,
    params: &ThresholdParams,
) -> Result<Vec<(Method, GrayImage)>> {
    Method::ALL
        .iter()
        .map(|&m| threshold(src, m, params).map(|img| (m, img)))
        .collect()
}

fn threshold_impl(
    src: &GrayImageView<'_>,
    method: Method,
    params: &ThresholdParams,
    cancel: Option<&CancelToken>,
) -> Result<GrayImage> {
    validate(src, params.radius)?;
    let radius = params.radius;
    let polarity = params.polarity;

    match method {
        Method::Bernsen => {
            let ct = resolve(method, "contrast_threshold", params.par1, BERNSEN_CONTRAST_THRESHOLD);
            let ct = ct as i32;
            let min = local_min(src, radius, cancel)?;
            let max = local_max(src, radius, cancel)?;
            Ok(render(src, polarity, |i, px| {
                rules::bernsen(px, min.data[i], max.data[i], ct)
            }))
        }
        Method::Contrast => {
            let min = local_min(src, radius, cancel)?;
            let max = local_max(src, radius, cancel)?;
            Ok(render(src, polarity, |i, px| {
                rules::contrast(px, min.data[i], max.data[i])
            }))
        }
        Method::Mean => {
            let c = resolve(method, "c_value", params.par1, OFFSET_C);
            let mean = local_mean(src, radius, cancel)?;
            Ok(render(src, polarity, |i, px| {
                rules::mean(px, f64::from(mean.data[i]), c)
            }))
        }
        Method::Median => {
            let c = resolve(method, "c_value", params.par1, OFFSET_C);
            let median = local_median(src, radius, cancel)?;
            Ok(render(src, polarity, |i, px| {
                rules::median(px, median.data[i], c)
            }))
        }
        Method::MidGrey => {
            let c = resolve(method, "c_value", params.par1, OFFSET_C);
            let min = local_min(src, radius, cancel)?;
            let max = local_max(src, radius, cancel)?;
            Ok(render(src, polarity, |i, px| {
                rules::mid_grey(px, min.data[i], max.data[i], c)
            }))
        }
        Method::Niblack => {
            let default_k = match polarity {
                Polarity::WhiteObjects => NIBLACK_K,
                Polarity::BlackObjects => -NIBLACK_K,
            };
            let k = resolve(method, "k_value", params.par1, default_k);
            let c = resolve(method, "c_value", params.par2, NIBLACK_C);
            let mean = local_mean(src, radius, cancel)?;
            let var = local_variance(src, radius, cancel)?;
            Ok(render(src, polarity, |i, px| {
                rules::niblack(px, f64::from(mean.data[i]), f64::from(var.data[i]), k, c)
            }))
        }
        Method::Otsu => {
            let data = map_windows(src, radius, cancel, |x, y, hist| {
                rules::otsu(src.get(x, y), hist.otsu_threshold()).encode(polarity)
            })?;
            Ok(GrayImage {
                width: src.width,
                height: src.height,
                data,
            })
        }
        Method::Phansalkar => {
            let k = resolve(method, "k_value", params.par1, PHANSALKAR_K);
            let r = resolve(method, "r_value", params.par2, PHANSALKAR_R);
            // The rule operates on the [0,1] scale of a contrast-stretched
            // copy; stretching in the 8-bit domain and dividing by 255 at
            // evaluation time is bit-exact with stretching after the float
            // conversion.
            let stretched = stretch_histogram(src);
            let sview = stretched.as_view();
            let mean = local_mean(&sview, radius, cancel)?;
            let var = local_variance(&sview, radius, cancel)?;
            Ok(render(src, polarity, |i, _| {
                let norm_pixel = f64::from(stretched.data[i]) / 255.0;
                let norm_mean = f64::from(mean.data[i]) / 255.0;
                let norm_stddev = f64::from(var.data[i]).sqrt() / 255.0;
                rules::phansalkar(norm_pixel, norm_mean, norm_stddev, k, r)
            }))
        }
        Method::Sauvola => {
            let k = resolve(method, "k_value", params.par1, SAUVOLA_K);
            let r = resolve(method, "r_value", params.par2, SAUVOLA_R);
            let mean = local_mean(src, radius, cancel)?;
            let var = local_variance(src, radius, cancel)?;
            Ok(render(src, polarity, |i, px| {
                rules::sauvola(px, f64::from(mean.data[i]), f64::from(var.data[i]), k, r)
            }))
        }
    }
}

/// Resolve an optional method parameter against its published default,
/// logging at debug level when an override takes effect.
fn resolve(method: Method, name: &str, par: Option<f64>, default: f64) -> f64 {
    match par {
        Some(v) => {
            if v != default {
                debug!("{method}: changed {name} from {default} to {v}");
            }
            v
        }
        None => default,
    }
}

/// Evaluate `rule(index, pixel)` over the raster and encode the labels.
fn render<F>(src: &GrayImageView<'_>, polarity: Polarity, rule: F) -> GrayImage
where
    F: Fn(usize, u8) -> Label,
{
    let data = src
        .data
        .iter()
        .enumerate()
        .map(|(i, &px)| rule(i, px).encode(polarity))
        .collect();
    GrayImage {
        width: src.width,
        height: src.height,
        data,
    }
}
