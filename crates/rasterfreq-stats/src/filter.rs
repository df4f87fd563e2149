/// Cells at or below this value are treated as an unset encoding, whatever
/// the declared no-data value is.
pub const INVALID_THRESHOLD: f64 = -1e38;

/// Cell values that survived no-data and validity filtering.
///
/// The values keep the order and multiplicity of the raw sample; sorting is
/// left to [`Distribution::build`](crate::distribution::Distribution::build).
///
/// # Examples
///
/// ```
/// use rasterfreq_stats::filter::ValidSample;
///
/// let raw = [1.0, -9999.0, 2.0, -3.4e38, 1.0];
/// let sample = ValidSample::from_raw(raw, Some(-9999.0));
/// assert_eq!(sample.values(), &[1.0, 2.0, 1.0]);
/// assert_eq!(sample.no_data_count(), 1);
/// assert_eq!(sample.invalid_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidSample {
    values: Vec<f64>,
    no_data_count: usize,
    invalid_count: usize,
}

impl ValidSample {
    /// Filters raw cell values of a single band.
    ///
    /// A value is dropped when it equals `no_data`, or when it is not strictly
    /// greater than [`INVALID_THRESHOLD`]. NaN fails that comparison, so NaN
    /// cells (and a NaN no-data declaration) are dropped as invalid.
    #[must_use]
    pub fn from_raw<I>(raw: I, no_data: Option<f64>) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sample = Self::default();
        for value in raw {
            if is_no_data(value, no_data) {
                sample.no_data_count += 1;
            } else if value > INVALID_THRESHOLD {
                sample.values.push(value);
            } else {
                sample.invalid_count += 1;
            }
        }
        sample
    }

    /// The valid values, in input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of cells equal to the declared no-data value.
    #[must_use]
    pub fn no_data_count(&self) -> usize {
        self.no_data_count
    }

    /// Number of cells rejected by the validity threshold (including NaN).
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.invalid_count
    }
}

/// Returns the valid subset of `raw`.
///
/// Shorthand for [`ValidSample::from_raw`] when the exclusion counts are not needed.
#[must_use]
pub fn filter_valid(raw: &[f64], no_data: Option<f64>) -> Vec<f64> {
    ValidSample::from_raw(raw.iter().copied(), no_data).into_values()
}

#[expect(clippy::float_cmp)]
fn is_no_data(value: f64, no_data: Option<f64>) -> bool {
    no_data.is_some_and(|nd| value == nd)
}
