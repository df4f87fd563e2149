use serde::Serialize;

use crate::distribution::Distribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LocateError {
    #[display("cumulative percentage sequence is empty")]
    EmptyCumulative,
    #[display("target percentage is NaN")]
    NanTarget,
}

/// Finds the first index whose cumulative percentage reaches `target`.
///
/// This is a left-biased insertion point search over a non-decreasing
/// sequence: the smallest `i` with `cumulative[i] >= target`. When several
/// entries share the same cumulative value, the earliest one wins. Targets
/// above every element clamp to the last index, so any finite target (even
/// outside `0..=100`) maps to a usable distinct value.
///
/// # Errors
///
/// * [`LocateError::EmptyCumulative`] if `cumulative` is empty.
/// * [`LocateError::NanTarget`] if `target` is NaN.
///
/// # Examples
///
/// ```
/// use rasterfreq_stats::locate::locate;
///
/// let cumulative = [50.0, 83.3, 100.0];
/// assert_eq!(locate(&cumulative, 60.0), Ok(1));
/// assert_eq!(locate(&cumulative, 50.0), Ok(0));
/// assert_eq!(locate(&cumulative, 150.0), Ok(2));
/// ```
pub fn locate(cumulative: &[f64], target: f64) -> Result<usize, LocateError> {
    if cumulative.is_empty() {
        return Err(LocateError::EmptyCumulative);
    }
    if target.is_nan() {
        return Err(LocateError::NanTarget);
    }
    debug_assert!(
        cumulative.is_sorted_by(|a, b| a <= b),
        "cumulative percentages must be non-decreasing"
    );

    let idx = cumulative.partition_point(|&c| c < target);
    Ok(idx.min(cumulative.len() - 1))
}

/// The distinct value located for a requested cumulative percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LookupResult {
    /// The requested cumulative percentage.
    pub target: f64,
    /// Index of the located distinct value.
    pub index: usize,
    /// The located distinct value.
    pub value: f64,
    /// Occurrence count of the located value.
    pub count: u64,
    /// The cumulative percentage actually reached at `index`.
    pub cumulative_percentage: f64,
}

impl Distribution {
    /// Locates the distinct value at which `target` cumulative percent is
    /// first reached or exceeded.
    ///
    /// # Errors
    ///
    /// See [`locate`].
    pub fn lookup(&self, target: f64) -> Result<LookupResult, LocateError> {
        let index = locate(self.cumulative_percentages(), target)?;
        Ok(LookupResult {
            target,
            index,
            value: self.values()[index],
            count: self.counts()[index],
            cumulative_percentage: self.cumulative_percentages()[index],
        })
    }
}
