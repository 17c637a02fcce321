//! Local adaptive thresholding of 8-bit grayscale rasters.
//!
//! For every pixel, statistics of a circular neighborhood (radius `r`,
//! clipped at the raster bounds) feed one of nine published decision
//! rules: Bernsen, Contrast, Mean, Median, MidGrey, Niblack, Otsu,
//! Phansalkar, Sauvola. The result is a binary raster of identical
//! dimensions; thresholded pixels render as 255 under the default
//! white-objects polarity.
//!
//! ## Quickstart
//!
//! ```
//! use local_thresh::{threshold, GrayImageView, Method, ThresholdParams};
//!
//! # fn main() -> Result<(), local_thresh::ThresholdError> {
//! let pixels = vec![128u8; 100 * 80];
//! let img = GrayImageView::new(100, 80, &pixels)?;
//! let binary = threshold(&img, Method::Sauvola, &ThresholdParams::new(15))?;
//! assert_eq!(binary.data.len(), pixels.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`Method`]: the nine rules; parse with `"Sauvola".parse::<Method>()`.
//! - [`ThresholdParams`]: radius, optional method parameters (`None` =
//!   published default), polarity.
//! - [`threshold`] / [`threshold_cancellable`] / [`threshold_all`]: the
//!   orchestration entry points.
//! - `local_thresh::rank`: the neighborhood statistics engine, usable on
//!   its own (local min/max/mean/variance/median, sliding histograms).
//!
//! ## Features
//! - `rayon`: per-row parallel statistics passes.
//! - `image`: helpers for `image::GrayImage` buffers ([`interop`]).
//! - `tracing`: span instrumentation on the entry points.

pub use local_thresh_core as core;
pub use local_thresh_rank as rank;

pub use local_thresh_core::{
    stretch_histogram, CancelToken, FloatImage, GrayImage, GrayImageView, ThresholdError,
};

mod method;
mod params;
mod rules;
mod threshold;

pub use method::Method;
pub use params::{Label, Polarity, ThresholdParams};
pub use threshold::{threshold, threshold_all, threshold_cancellable};

#[cfg(feature = "image")]
pub mod interop;
