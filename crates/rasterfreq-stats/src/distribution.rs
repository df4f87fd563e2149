use serde::Serialize;

/// Errors raised while building a [`Distribution`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DistributionError {
    #[display("no valid data")]
    EmptyDistribution,
    #[display("sample at position {index} is NaN")]
    NanSample { index: usize },
}

/// Frequency distribution over the distinct values of a sample.
///
/// The distribution stores parallel sequences indexed by distinct value, in
/// ascending numeric order:
/// - the distinct values themselves
/// - the number of occurrences of each value
/// - each value's share of the total, in percent
/// - the running sum of those shares
///
/// All four sequences have the same length and are never reordered
/// independently, so an index into one is an index into every other.
///
/// # Examples
///
/// ```
/// use rasterfreq_stats::distribution::Distribution;
///
/// let dist = Distribution::build(&[1.0, 1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert_eq!(dist.values(), &[1.0, 2.0, 3.0]);
/// assert_eq!(dist.counts(), &[3, 2, 1]);
/// assert_eq!(dist.percentages()[0], 50.0);
/// assert!((dist.cumulative_percentages()[2] - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    values: Vec<f64>,
    counts: Vec<u64>,
    percentages: Vec<f64>,
    cumulative: Vec<f64>,
    total: u64,
}

/// One row of a [`Distribution`], copied from its parallel sequences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionRow {
    pub value: f64,
    pub count: u64,
    pub percentage: f64,
    pub cumulative_percentage: f64,
}

impl Distribution {
    /// Builds the distribution of `valid` values.
    ///
    /// The values are sorted ascending, equal neighbours are run-length
    /// encoded into distinct values, and the percentage and cumulative
    /// percentage of each distinct value are derived from the counts.
    ///
    /// # Errors
    ///
    /// * [`DistributionError::EmptyDistribution`] if `valid` is empty.
    /// * [`DistributionError::NanSample`] if any value is NaN.
    pub fn build(valid: &[f64]) -> Result<Self, DistributionError> {
        if let Some(index) = valid.iter().position(|v| v.is_nan()) {
            return Err(DistributionError::NanSample { index });
        }
        if valid.is_empty() {
            return Err(DistributionError::EmptyDistribution);
        }

        let mut sorted = valid.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut values = vec![];
        let mut counts = vec![];
        for run in sorted.chunk_by(|a, b| same_value(*a, *b)) {
            values.push(run[0]);
            counts.push(run.len() as u64);
        }

        Ok(Self::from_counts(values, counts))
    }

    /// Derives percentages from already grouped, ascending distinct values.
    #[expect(clippy::cast_precision_loss)]
    fn from_counts(values: Vec<f64>, counts: Vec<u64>) -> Self {
        debug_assert_eq!(values.len(), counts.len());
        debug_assert!(values.is_sorted_by(|a, b| a < b));

        let total = counts.iter().sum::<u64>();
        let total_f = total as f64;
        let percentages = counts
            .iter()
            .map(|&count| count as f64 / total_f * 100.0)
            .collect::<Vec<_>>();
        let cumulative = percentages
            .iter()
            .scan(0.0, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect();

        Self {
            values,
            counts,
            percentages,
            cumulative,
            total,
        }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a built distribution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of valid samples the distribution was built from.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[must_use]
    pub fn percentages(&self) -> &[f64] {
        &self.percentages
    }

    /// Running sum of [`percentages`](Self::percentages); non-decreasing, last element ≈ 100.
    #[must_use]
    pub fn cumulative_percentages(&self) -> &[f64] {
        &self.cumulative
    }

    /// Returns the row at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<DistributionRow> {
        Some(DistributionRow {
            value: *self.values.get(index)?,
            count: self.counts[index],
            percentage: self.percentages[index],
            cumulative_percentage: self.cumulative[index],
        })
    }

    /// Iterates over all rows in ascending value order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = DistributionRow> + '_ {
        (0..self.len()).map(|i| DistributionRow {
            value: self.values[i],
            count: self.counts[i],
            percentage: self.percentages[i],
            cumulative_percentage: self.cumulative[i],
        })
    }
}

// `-0.0` and `0.0` group together.
#[expect(clippy::float_cmp)]
fn same_value(a: f64, b: f64) -> bool {
    a == b
}
