use serde::Serialize;

use crate::{
    distribution::{Distribution, DistributionRow},
    locate::{LocateError, LookupResult},
};

/// Lookup of one target percentage together with its neighborhood rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetReport {
    #[serde(flatten)]
    pub lookup: LookupResult,
    pub neighborhood: Vec<DistributionRow>,
}

impl Distribution {
    /// Looks up every target and extracts a `window_size` neighborhood for each.
    ///
    /// Reports are returned in the order of `targets`. The first failing
    /// lookup aborts the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::NanTarget`] if any target is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterfreq_stats::distribution::Distribution;
    ///
    /// let dist = Distribution::build(&[1.0, 1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
    /// let reports = dist.report_targets(&[0.0, 60.0, 150.0], 5).unwrap();
    /// let values = reports.iter().map(|r| r.lookup.value).collect::<Vec<_>>();
    /// assert_eq!(values, [1.0, 2.0, 3.0]);
    /// ```
    pub fn report_targets(
        &self,
        targets: &[f64],
        window_size: usize,
    ) -> Result<Vec<TargetReport>, LocateError> {
        targets
            .iter()
            .map(|&target| {
                let lookup = self.lookup(target)?;
                let neighborhood = self.window(lookup.index, window_size);
                Ok(TargetReport {
                    lookup,
                    neighborhood,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::DEFAULT_WINDOW_SIZE;

    fn deciles() -> Distribution {
        let cells = (1..=10).map(|v| f64::from(v) * 10.0).collect::<Vec<_>>();
        Distribution::build(&cells).unwrap()
    }

    #[test]
    fn test_two_targets() {
        let reports = deciles()
            .report_targets(&[10.0, 90.0], DEFAULT_WINDOW_SIZE)
            .unwrap();
        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0].lookup.index, 0);
        assert_eq!(reports[0].lookup.value, 10.0);
        assert_eq!(
            reports[0]
                .neighborhood
                .iter()
                .map(|r| r.value)
                .collect::<Vec<_>>(),
            [10.0, 20.0]
        );

        assert_eq!(reports[1].lookup.index, 8);
        assert_eq!(reports[1].lookup.value, 90.0);
        assert_eq!(
            reports[1]
                .neighborhood
                .iter()
                .map(|r| r.value)
                .collect::<Vec<_>>(),
            [70.0, 80.0, 90.0, 100.0]
        );
    }

    #[test]
    fn test_order_follows_targets() {
        let reports = deciles()
            .report_targets(&[95.0, 5.0, 55.0], DEFAULT_WINDOW_SIZE)
            .unwrap();
        let indices = reports.iter().map(|r| r.lookup.index).collect::<Vec<_>>();
        assert_eq!(indices, [9, 0, 5]);
    }

    #[test]
    fn test_nan_target_aborts() {
        assert_eq!(
            deciles().report_targets(&[10.0, f64::NAN], DEFAULT_WINDOW_SIZE),
            Err(LocateError::NanTarget)
        );
    }

    #[test]
    fn test_serializes_flat_lookup() {
        let reports = deciles().report_targets(&[50.0], 3).unwrap();
        let json = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(json["target"], 50.0);
        assert_eq!(json["index"], 4);
        assert_eq!(json["value"], 50.0);
        assert_eq!(json["count"], 1);
        assert_eq!(json["neighborhood"].as_array().unwrap().len(), 2);
    }
}
