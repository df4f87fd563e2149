use std::ops::Range;

use crate::distribution::{Distribution, DistributionRow};

/// Default number of rows shown around a located value.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Index range of the window of `size` rows around `center`.
///
/// The range is `center - size / 2 .. center + size / 2`, clipped to `0..len`.
/// Near either end of the distribution the range is simply shorter; it never
/// wraps around.
///
/// # Examples
///
/// ```
/// use rasterfreq_stats::neighborhood::window_range;
///
/// assert_eq!(window_range(10, 5, 5), 3..7);
/// assert_eq!(window_range(10, 0, 5), 0..2);
/// assert_eq!(window_range(10, 9, 5), 7..10);
/// ```
#[must_use]
pub fn window_range(len: usize, center: usize, size: usize) -> Range<usize> {
    let half = size / 2;
    let end = center.saturating_add(half).min(len);
    let start = center.saturating_sub(half).min(end);
    start..end
}

/// Extracts the rows of `dist` surrounding `center`.
#[must_use]
pub fn window(dist: &Distribution, center: usize, size: usize) -> Vec<DistributionRow> {
    window_range(dist.len(), center, size)
        .filter_map(|i| dist.row(i))
        .collect()
}

impl Distribution {
    /// Shorthand for [`window`].
    #[must_use]
    pub fn window(&self, center: usize, size: usize) -> Vec<DistributionRow> {
        window(self, center, size)
    }
}
