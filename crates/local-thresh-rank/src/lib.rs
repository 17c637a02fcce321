//! Neighborhood statistics over circular windows.
//!
//! For every pixel of an 8-bit raster this crate computes order statistics
//! (min, max, median), moments (mean, population variance), or visits the
//! full 256-bin histogram of a disk of configurable radius centered on the
//! pixel. Windows crossing the raster boundary are clipped to the image
//! bounds; out-of-bounds samples are excluded, never zero-padded.
//!
//! All operations slide the window incrementally along each row (one
//! disk-edge column slice added and one removed per step), so the cost per
//! pixel is proportional to the disk height rather than the disk area.
//! Rows are independent; with the `rayon` feature they are processed in
//! parallel.

mod histogram;
mod kernel;
mod rank;
mod slide;

pub use histogram::Histogram;
pub use kernel::DiskKernel;
pub use rank::{local_max, local_mean, local_median, local_min, local_variance};
pub use slide::{for_each_window, map_moments, map_windows, validate, Moments, WindowState};
