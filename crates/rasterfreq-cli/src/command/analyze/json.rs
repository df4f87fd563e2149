//! JSON report

use std::{io, path::Path};

use rasterfreq_stats::{
    descriptive::SummaryStats, distribution::DistributionRow, report::TargetReport,
};
use serde::Serialize;

use super::Outcome;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonReport<'a> {
    UnsupportedInput {
        raster: &'a Path,
        band_count: usize,
    },
    NoData {
        raster: &'a Path,
        no_data_cells: usize,
        invalid_cells: usize,
    },
    Complete {
        raster: &'a Path,
        no_data_cells: usize,
        invalid_cells: usize,
        summary: &'a SummaryStats,
        #[serde(skip_serializing_if = "Option::is_none")]
        distribution: Option<Vec<DistributionRow>>,
        targets: &'a [TargetReport],
    },
}

impl<'a> JsonReport<'a> {
    fn new(raster: &'a Path, outcome: &'a Outcome, detail: bool) -> Self {
        match outcome {
            Outcome::UnsupportedInput { bands } => Self::UnsupportedInput {
                raster,
                band_count: *bands,
            },
            Outcome::NoData {
                no_data_count,
                invalid_count,
            } => Self::NoData {
                raster,
                no_data_cells: *no_data_count,
                invalid_cells: *invalid_count,
            },
            Outcome::Complete(analysis) => Self::Complete {
                raster,
                no_data_cells: analysis.no_data_count,
                invalid_cells: analysis.invalid_count,
                summary: &analysis.summary,
                distribution: detail.then(|| analysis.distribution.rows().collect()),
                targets: &analysis.targets,
            },
        }
    }
}

pub(super) fn write_report<W>(
    out: &mut W,
    raster: &Path,
    outcome: &Outcome,
    detail: bool,
) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    let report = JsonReport::new(raster, outcome, detail);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use rasterfreq_raster::MemoryRaster;
    use serde_json::Value;

    use super::*;
    use crate::command::analyze::analyze;

    fn render(raster: &mut MemoryRaster, targets: &[f64], detail: bool) -> Value {
        let outcome = analyze(raster, targets, 5).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, Path::new("dem.tif"), &outcome, detail).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_complete_report() {
        let mut raster = MemoryRaster::new(vec![1.0, 1.0, 1.0, 2.0, 2.0, 3.0, -9999.0], Some(-9999.0));
        let json = render(&mut raster, &[60.0, 150.0], true);

        assert_eq!(json["status"], "complete");
        assert_eq!(json["raster"], "dem.tif");
        assert_eq!(json["no_data_cells"], 1);
        assert_eq!(json["summary"]["valid_count"], 6);
        assert_eq!(json["summary"]["distinct_count"], 3);
        assert_eq!(json["distribution"].as_array().unwrap().len(), 3);
        assert_eq!(json["distribution"][0]["count"], 3);

        let targets = json["targets"].as_array().unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0]["index"], 1);
        assert_eq!(targets[0]["value"], 2.0);
        assert_eq!(targets[1]["index"], 2);
        assert_eq!(targets[1]["target"], 150.0);
    }

    #[test]
    fn test_distribution_omitted_without_detail() {
        let mut raster = MemoryRaster::new(vec![1.0, 2.0], None);
        let json = render(&mut raster, &[50.0], false);
        assert!(json.get("distribution").is_none());
        assert_eq!(json["targets"][0]["neighborhood"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_non_complete_statuses() {
        let mut raster = MemoryRaster::new(vec![1.0; 4], None).with_band_count(4);
        let json = render(&mut raster, &[50.0], false);
        assert_eq!(json["status"], "unsupported_input");
        assert_eq!(json["band_count"], 4);

        let mut raster = MemoryRaster::new(vec![f64::NAN; 3], None);
        let json = render(&mut raster, &[50.0], false);
        assert_eq!(json["status"], "no_data");
        assert_eq!(json["invalid_cells"], 3);
    }
}
