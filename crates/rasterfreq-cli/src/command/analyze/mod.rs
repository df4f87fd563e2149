//! Frequency distribution analysis command
//!
//! Builds the distinct-value frequency distribution of a single-band raster and
//! reports the cell value reached at each requested cumulative percentage.

mod json;
mod table;
mod targets;

use std::{
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, ValueEnum, builder::RangedU64ValueParser};
use rasterfreq_raster::{GeoTiffRaster, RasterError, RasterSource, ensure_single_band};
use rasterfreq_stats::{
    descriptive::SummaryStats,
    distribution::{Distribution, DistributionError},
    filter::ValidSample,
    neighborhood::DEFAULT_WINDOW_SIZE,
    report::TargetReport,
};
use tracing::{info, warn};

use self::targets::TargetList;

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the single-band raster (GeoTIFF)
    pub raster: PathBuf,

    /// Target cumulative percentages, separated by semicolons (e.g. "10;50;90")
    #[arg(allow_hyphen_values = true)]
    pub targets: TargetList,

    /// Also print the full distinct-value table
    #[arg(long)]
    pub detail: bool,

    /// Number of rows in the neighborhood shown around each target
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub window: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Result of analyzing one raster.
#[derive(Debug, Clone)]
pub(crate) enum Outcome {
    /// The raster has more than one band and was not analyzed.
    UnsupportedInput { bands: usize },
    /// Every cell was filtered out.
    NoData {
        no_data_count: usize,
        invalid_count: usize,
    },
    Complete(Analysis),
}

#[derive(Debug, Clone)]
pub(crate) struct Analysis {
    pub no_data_count: usize,
    pub invalid_count: usize,
    pub summary: SummaryStats,
    pub distribution: Distribution,
    pub targets: Vec<TargetReport>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let mut raster = GeoTiffRaster::open(&arg.raster)
        .with_context(|| format!("Failed to open raster: {}", arg.raster.display()))?;
    let outcome = analyze(&mut raster, arg.targets.as_slice(), arg.window)?;

    let mut out = io::stdout().lock();
    let written = match arg.format {
        OutputFormat::Text => table::write_report(&mut out, &arg.raster, &outcome, arg.detail),
        OutputFormat::Json => json::write_report(&mut out, &arg.raster, &outcome, arg.detail),
    };
    written
        .and_then(|()| out.flush())
        .context("Failed to write report")?;

    Ok(())
}

/// Runs the filter, distribution, lookup, and neighborhood stages over `source`.
pub(crate) fn analyze<S>(
    source: &mut S,
    targets: &[f64],
    window_size: usize,
) -> anyhow::Result<Outcome>
where
    S: RasterSource + ?Sized,
{
    match ensure_single_band(&*source) {
        Ok(()) => {}
        Err(RasterError::UnsupportedBandCount { bands }) => {
            warn!(bands, "skipping multi-band raster");
            return Ok(Outcome::UnsupportedInput { bands });
        }
        Err(err) => return Err(err.into()),
    }

    let raw = source.read_band().context("Failed to read raster band")?;
    let cells = raw.len();
    let sample = ValidSample::from_raw(raw, source.no_data_value());
    info!(
        cells,
        valid = sample.len(),
        no_data = sample.no_data_count(),
        invalid = sample.invalid_count(),
        "filtered raster cells"
    );

    let distribution = match Distribution::build(sample.values()) {
        Ok(distribution) => distribution,
        Err(DistributionError::EmptyDistribution) => {
            warn!("raster has no valid data");
            return Ok(Outcome::NoData {
                no_data_count: sample.no_data_count(),
                invalid_count: sample.invalid_count(),
            });
        }
        Err(err) => return Err(err).context("Failed to build frequency distribution"),
    };
    info!(distinct = distribution.len(), "built frequency distribution");

    let targets = distribution
        .report_targets(targets, window_size)
        .context("Failed to locate target percentages")?;

    Ok(Outcome::Complete(Analysis {
        no_data_count: sample.no_data_count(),
        invalid_count: sample.invalid_count(),
        summary: distribution.summary(),
        distribution,
        targets,
    }))
}
