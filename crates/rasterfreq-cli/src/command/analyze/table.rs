//! Plain text report
//!
//! Cell values and percentages are printed with six decimal places.

use std::{io, path::Path};

use rasterfreq_stats::{distribution::DistributionRow, report::TargetReport};

use super::{Analysis, Outcome};

const TARGET_SEPARATOR: &str = "===============================================";
const SECTION_SEPARATOR: &str = "-------------------------";

pub(super) fn write_report<W>(
    out: &mut W,
    raster: &Path,
    outcome: &Outcome,
    detail: bool,
) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    match outcome {
        Outcome::UnsupportedInput { bands } => writeln!(
            out,
            "{} has {bands} bands. Only single-band rasters are supported; multi-band and multidimensional rasters are not processed.",
            raster.display()
        ),
        Outcome::NoData {
            no_data_count,
            invalid_count,
        } => writeln!(
            out,
            "{}: no valid data ({no_data_count} no-data cells, {invalid_count} invalid cells)",
            raster.display()
        ),
        Outcome::Complete(analysis) => write_analysis(out, raster, analysis, detail),
    }
}

fn write_analysis<W>(out: &mut W, raster: &Path, analysis: &Analysis, detail: bool) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    let summary = &analysis.summary;
    writeln!(out, "Frequency distribution of {}", raster.display())?;
    writeln!(
        out,
        "Valid cells: {} ({} distinct values; excluded {} no-data, {} invalid)",
        summary.valid_count, summary.distinct_count, analysis.no_data_count, analysis.invalid_count
    )?;
    writeln!(
        out,
        "Min: {:.6}  Max: {:.6}  Mean: {:.6}  Std dev: {:.6}",
        summary.min, summary.max, summary.mean, summary.std_dev
    )?;

    if detail {
        writeln!(out)?;
        write_rows(out, analysis.distribution.rows())?;
    }

    for target in &analysis.targets {
        write_target(out, target)?;
    }
    Ok(())
}

fn write_target<W>(out: &mut W, target: &TargetReport) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    let lookup = &target.lookup;
    writeln!(out, "{TARGET_SEPARATOR}")?;
    writeln!(out, "Target cumulative % | Actual cumulative % | Cell value")?;
    writeln!(
        out,
        "{:.6} | {:.6} | {:.6}",
        lookup.target, lookup.cumulative_percentage, lookup.value
    )?;
    writeln!(out, "{SECTION_SEPARATOR}")?;
    writeln!(out, "Cell values near the target:")?;
    write_rows(out, target.neighborhood.iter().copied())
}

fn write_rows<W, I>(out: &mut W, rows: I) -> io::Result<()>
where
    W: io::Write + ?Sized,
    I: IntoIterator<Item = DistributionRow>,
{
    writeln!(out, "Value | Count | Percent | Cumulative")?;
    for row in rows {
        writeln!(
            out,
            "{:.6}    {}    {:.6}    {:.6}",
            row.value, row.count, row.percentage, row.cumulative_percentage
        )?;
    }
    Ok(())
}
