//! Circular structuring element.

/// Per-scanline extents of the Euclidean disk `dx² + dy² ≤ r²`.
///
/// The disk is stored as one half-width per row offset: on row offset `dy`
/// the window spans `x - hw ..= x + hw` where `hw = ⌊√(r² − dy²)⌋`. This
/// representation is what lets the sliding drivers add and remove exactly
/// one column slice of the disk per horizontal step.
#[derive(Clone, Debug)]
pub struct DiskKernel {
    radius: i64,
    half_widths: Vec<i64>,
}

impl DiskKernel {
    pub fn new(radius: u32) -> Self {
        let r = i64::from(radius);
        let r2 = r * r;
        let half_widths = (-r..=r).map(|dy| isqrt(r2 - dy * dy)).collect();
        Self {
            radius: r,
            half_widths,
        }
    }

    #[inline]
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Iterate `(dy, half_width)` pairs for `dy ∈ -r..=r`.
    pub fn rows(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.half_widths
            .iter()
            .enumerate()
            .map(move |(i, &hw)| (i as i64 - self.radius, hw))
    }

    /// Number of samples in the unclipped disk.
    pub fn area(&self) -> u64 {
        self.half_widths.iter().map(|&hw| (2 * hw + 1) as u64).sum()
    }
}

/// Integer square root, exact for the magnitudes a kernel can produce.
fn isqrt(v: i64) -> i64 {
    debug_assert!(v >= 0);
    let mut x = (v as f64).sqrt() as i64;
    while (x + 1) * (x + 1) <= v {
        x += 1;
    }
    while x * x > v {
        x -= 1;
    }
    x
}
