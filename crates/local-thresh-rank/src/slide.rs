//! Sliding-window drivers.
//!
//! A window state (histogram or running moments) is seeded at the start of
//! each row and then slid one pixel at a time: for every row offset of the
//! disk, the sample leaving on the left is removed and the sample entering
//! on the right is added. Samples outside the raster are skipped, which
//! yields the clipped-window convention of rank filters.

use local_thresh_core::{CancelToken, GrayImageView, Result, ThresholdError};

use crate::histogram::Histogram;
use crate::kernel::DiskKernel;

/// Incremental state maintained while the disk slides along a row.
pub trait WindowState: Default {
    fn clear(&mut self);
    fn add(&mut self, v: u8);
    fn remove(&mut self, v: u8);
}

/// Running first and second moments of the samples inside one window.
///
/// Sums are exact integer accumulators (samples are bytes), so mean and
/// population variance carry no sliding-window float drift.
#[derive(Clone, Copy, Debug, Default)]
pub struct Moments {
    count: u32,
    sum: u64,
    sum_sq: u64,
}

impl WindowState for Moments {
    fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    fn add(&mut self, v: u8) {
        let v = u64::from(v);
        self.count += 1;
        self.sum += v;
        self.sum_sq += v * v;
    }

    #[inline]
    fn remove(&mut self, v: u8) {
        let v = u64::from(v);
        self.count -= 1;
        self.sum -= v;
        self.sum_sq -= v * v;
    }
}

impl Moments {
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.sum as f64 / f64::from(self.count)
    }

    /// Population variance `E[v²] − E[v]²`, clamped against negative
    /// rounding residue.
    pub fn variance(&self) -> f64 {
        let n = f64::from(self.count);
        let mean = self.sum as f64 / n;
        (self.sum_sq as f64 / n - mean * mean).max(0.0)
    }
}

/// Check the (raster, radius) pair every public operation requires.
pub fn validate(src: &GrayImageView<'_>, radius: u32) -> Result<()> {
    if src.width == 0 || src.height == 0 || src.data.len() != src.width * src.height {
        return Err(ThresholdError::InvalidInput {
            width: src.width,
            height: src.height,
            len: src.data.len(),
        });
    }
    if radius == 0 {
        return Err(ThresholdError::InvalidParameter {
            name: "radius",
            value: 0,
            reason: "window radius must be positive",
        });
    }
    Ok(())
}

/// Map `f(x, y, &Histogram)` over every pixel, where the histogram holds
/// exactly the samples of the disk clipped to the raster bounds.
pub fn map_windows<T, F>(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
    f: F,
) -> Result<Vec<T>>
where
    T: Copy + Default + Send,
    F: Fn(usize, usize, &Histogram) -> T + Sync,
{
    map_states::<Histogram, T, F>(src, radius, cancel, f)
}

/// Visit every pixel's window histogram without materializing a layer.
pub fn for_each_window<F>(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
    f: F,
) -> Result<()>
where
    F: Fn(usize, usize, &Histogram) + Sync,
{
    map_windows(src, radius, cancel, |x, y, h| f(x, y, h)).map(|_: Vec<()>| ())
}

/// Map `f(x, y, Moments)` over every pixel's window.
pub fn map_moments<T, F>(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
    f: F,
) -> Result<Vec<T>>
where
    T: Copy + Default + Send,
    F: Fn(usize, usize, &Moments) -> T + Sync,
{
    map_states::<Moments, T, F>(src, radius, cancel, f)
}

fn map_states<S, T, F>(
    src: &GrayImageView<'_>,
    radius: u32,
    cancel: Option<&CancelToken>,
    f: F,
) -> Result<Vec<T>>
where
    S: WindowState,
    T: Copy + Default + Send,
    F: Fn(usize, usize, &S) -> T + Sync,
{
    validate(src, radius)?;
    let kernel = DiskKernel::new(radius);
    let width = src.width;
    let mut out = vec![T::default(); width * src.height];

    process_rows(&mut out, width, cancel, |y, row_out| {
        let mut state = S::default();
        seed_row(src, &kernel, y, &mut state);
        for (x, slot) in row_out.iter_mut().enumerate() {
            if x > 0 {
                slide_step(src, &kernel, x, y, &mut state);
            }
            *slot = f(x, y, &state);
        }
    })?;
    Ok(out)
}

/// Load the window centered at `(0, y)` into `state`.
fn seed_row<S: WindowState>(src: &GrayImageView<'_>, kernel: &DiskKernel, y: usize, state: &mut S) {
    state.clear();
    let h = src.height as i64;
    let w = src.width as i64;
    for (dy, hw) in kernel.rows() {
        let yy = y as i64 + dy;
        if yy < 0 || yy >= h {
            continue;
        }
        let row = &src.data[(yy as usize) * src.width..(yy as usize + 1) * src.width];
        let end = hw.min(w - 1);
        for &v in &row[..=end as usize] {
            state.add(v);
        }
    }
}

/// Advance the window from center `(x-1, y)` to `(x, y)`.
#[inline]
fn slide_step<S: WindowState>(
    src: &GrayImageView<'_>,
    kernel: &DiskKernel,
    x: usize,
    y: usize,
    state: &mut S,
) {
    let h = src.height as i64;
    let w = src.width as i64;
    let x = x as i64;
    for (dy, hw) in kernel.rows() {
        let yy = y as i64 + dy;
        if yy < 0 || yy >= h {
            continue;
        }
        let row = &src.data[(yy as usize) * src.width..(yy as usize + 1) * src.width];
        let leaving = x - 1 - hw;
        if leaving >= 0 {
            state.remove(row[leaving as usize]);
        }
        let entering = x + hw;
        if entering < w {
            state.add(row[entering as usize]);
        }
    }
}

#[cfg(feature = "rayon")]
fn process_rows<T, F>(
    out: &mut [T],
    width: usize,
    cancel: Option<&CancelToken>,
    body: F,
) -> Result<()>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    use rayon::prelude::*;

    out.par_chunks_mut(width)
        .enumerate()
        .try_for_each(|(y, row)| {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Err(ThresholdError::Cancelled);
            }
            body(y, row);
            Ok(())
        })
}

#[cfg(not(feature = "rayon"))]
fn process_rows<T, F>(
    out: &mut [T],
    width: usize,
    cancel: Option<&CancelToken>,
    body: F,
) -> Result<()>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    for (y, row) in out.chunks_mut(width).enumerate() {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(ThresholdError::Cancelled);
        }
        body(y, row);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moments_add_remove_are_inverse() {
        let mut m = Moments::default();
        for v in [3u8, 200, 17, 17] {
            m.add(v);
        }
        m.remove(200);
        assert_eq!(m.count(), 3);
        let mean = (3.0 + 17.0 + 17.0) / 3.0;
        assert!((m.mean() - mean).abs() < 1e-12);
    }

    #[test]
    fn variance_of_constant_window_is_zero() {
        let mut m = Moments::default();
        for _ in 0..9 {
            m.add(128);
        }
        assert_eq!(m.variance(), 0.0);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let buf = [0u8; 4];
        let src = GrayImageView::new(2, 2, &buf).unwrap();
        let err = validate(&src, 0).unwrap_err();
        assert!(matches!(err, ThresholdError::InvalidParameter { .. }));
    }

    #[test]
    fn cancelled_before_start_returns_cancelled() {
        let buf = [0u8; 16];
        let src = GrayImageView::new(4, 4, &buf).unwrap();
        let token = CancelToken::new();
        token.cancel();
        let err = map_windows(&src, 1, Some(&token), |_, _, h| h.max()).unwrap_err();
        assert_eq!(err, ThresholdError::Cancelled);
    }
}
