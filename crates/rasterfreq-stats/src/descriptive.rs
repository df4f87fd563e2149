use serde::Serialize;

use crate::distribution::Distribution;

/// Descriptive statistics of the valid cells behind a [`Distribution`].
///
/// Moments are weighted by each distinct value's count, so they match what a
/// direct computation over every valid cell would give.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of valid cells.
    pub valid_count: u64,
    /// Number of distinct cell values.
    pub distinct_count: usize,
    /// The smallest valid cell value.
    pub min: f64,
    /// The largest valid cell value.
    pub max: f64,
    /// The arithmetic mean of the valid cells.
    pub mean: f64,
    /// The population standard deviation of the valid cells.
    pub std_dev: f64,
}

impl SummaryStats {
    /// Computes summary statistics from a distribution.
    ///
    /// The mean and variance are accumulated with a count-weighted Welford
    /// update over values scaled into `[-1, 1]`, so cells close to
    /// `f64::MAX` in magnitude still yield finite results.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rasterfreq_stats::{descriptive::SummaryStats, distribution::Distribution};
    /// let dist = Distribution::build(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// let stats = SummaryStats::from_distribution(&dist);
    /// assert_eq!(stats.min, 2.0);
    /// assert_eq!(stats.max, 9.0);
    /// assert!((stats.mean - 5.0).abs() < 1e-12);
    /// assert!((stats.std_dev - 2.0).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_distribution(dist: &Distribution) -> Self {
        let values = dist.values();
        let min = values.first().copied().unwrap_or(f64::NAN);
        let max = values.last().copied().unwrap_or(f64::NAN);

        let scale = f64::max(min.abs(), max.abs());
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };

        let mut weight = 0.0;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for (&value, &count) in values.iter().zip(dist.counts()) {
            let x = value / scale;
            let c = count as f64;
            weight += c;
            let delta = x - mean;
            mean += delta * c / weight;
            m2 += c * delta * (x - mean);
        }
        let variance = if weight > 0.0 { m2 / weight } else { f64::NAN };

        Self {
            valid_count: dist.total_count(),
            distinct_count: dist.len(),
            min,
            max,
            mean: mean * scale,
            std_dev: variance.max(0.0).sqrt() * scale,
        }
    }
}

impl Distribution {
    /// Shorthand for [`SummaryStats::from_distribution`].
    #[must_use]
    pub fn summary(&self) -> SummaryStats {
        SummaryStats::from_distribution(self)
    }
}
