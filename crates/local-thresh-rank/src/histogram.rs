//! Per-window 256-bin histogram and the statistics derived from it.

use crate::slide::WindowState;

/// Count histogram of the samples currently inside one disk window.
///
/// Windows clipped at the raster boundary simply hold fewer samples; the
/// drivers guarantee `count() >= 1` for every visited pixel because the
/// center pixel is always inside its own window.
#[derive(Clone, Debug)]
pub struct Histogram {
    bins: [u32; 256],
    count: u32,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            bins: [0; 256],
            count: 0,
        }
    }
}

impl WindowState for Histogram {
    fn clear(&mut self) {
        self.bins = [0; 256];
        self.count = 0;
    }

    #[inline]
    fn add(&mut self, v: u8) {
        self.bins[v as usize] += 1;
        self.count += 1;
    }

    #[inline]
    fn remove(&mut self, v: u8) {
        self.bins[v as usize] -= 1;
        self.count -= 1;
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn bin(&self, v: u8) -> u32 {
        self.bins[v as usize]
    }

    /// Lowest occupied bin; 0 for an empty histogram.
    pub fn min(&self) -> u8 {
        self.bins.iter().position(|&c| c > 0).unwrap_or(0) as u8
    }

    /// Highest occupied bin; 0 for an empty histogram.
    pub fn max(&self) -> u8 {
        self.bins.iter().rposition(|&c| c > 0).unwrap_or(0) as u8
    }

    /// Median sample, taking the upper median when the count is even.
    pub fn median(&self) -> u8 {
        let target = self.count / 2 + 1;
        let mut cumulative = 0u32;
        for (v, &c) in self.bins.iter().enumerate() {
            cumulative += c;
            if cumulative >= target {
                return v as u8;
            }
        }
        0
    }

    /// Otsu threshold of this window: the gray level whose class split
    /// maximizes the between-class variance of the window's own histogram.
    ///
    /// Degenerate splits (one class empty) are skipped; a flat window
    /// yields threshold 0, so an all-zero window never classifies its
    /// center pixel as object.
    pub fn otsu_threshold(&self) -> u8 {
        if self.count == 0 {
            return 0;
        }
        let term = 1.0 / f64::from(self.count);

        let mut total_mean = 0.0;
        for (v, &c) in self.bins.iter().enumerate() {
            total_mean += v as f64 * term * f64::from(c);
        }

        // Cumulative normalized histogram and cumulative mean, both
        // inclusive of the candidate threshold bin.
        let mut omega = 0.0;
        let mut mu = 0.0;
        let mut best = 0u8;
        let mut max_bcv = 0.0;
        for (v, &c) in self.bins.iter().enumerate() {
            omega += term * f64::from(c);
            mu += v as f64 * term * f64::from(c);

            let denom = omega * (1.0 - omega);
            if denom <= 0.0 {
                continue;
            }
            let diff = total_mean * omega - mu;
            let bcv = diff * diff / denom;
            if bcv > max_bcv {
                max_bcv = bcv;
                best = v as u8;
            }
        }
        best
    }
}
