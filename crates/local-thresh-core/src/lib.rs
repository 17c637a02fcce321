//! Core types and utilities for local adaptive thresholding.
//!
//! This crate is intentionally small: raster containers, the error
//! taxonomy, cooperative cancellation, and the histogram stretch used by
//! the Phansalkar rule. It does *not* depend on any concrete statistics
//! engine or decoded image format.

mod cancel;
mod error;
mod image;
mod logger;
mod stretch;

pub use cancel::CancelToken;
pub use error::ThresholdError;
pub use image::{FloatImage, GrayImage, GrayImageView};
pub use stretch::stretch_histogram;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, ThresholdError>;
