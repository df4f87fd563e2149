//! Frequency distribution analysis of raster cell values.
//!
//! This crate turns the cell values of a single-band raster into a discrete
//! frequency distribution and answers which cell value corresponds to a given
//! cumulative percentage:
//!
//! - **Filtering**: drop no-data and invalid cells
//! - **Distribution**: distinct-value histogram with percentage and cumulative percentage
//! - **Lookup**: first distinct value whose cumulative percentage reaches a target
//! - **Neighborhood**: rows surrounding a located value
//!
//! # Modules
//!
//! - [`filter`]: Validity filtering of raw cell values
//! - [`distribution`]: Distinct-value frequency distribution
//! - [`descriptive`]: Summary statistics over a distribution
//! - [`locate`]: Cumulative percentage lookup
//! - [`neighborhood`]: Bounded row windows around a located index
//! - [`report`]: Per-target lookup reports
//!
//! # Examples
//!
//! ```
//! use rasterfreq_stats::{distribution::Distribution, filter::ValidSample};
//!
//! let raw = [1.0, 1.0, -9999.0, 1.0, 2.0, 2.0, 3.0];
//! let sample = ValidSample::from_raw(raw, Some(-9999.0));
//! let dist = Distribution::build(sample.values()).unwrap();
//!
//! let result = dist.lookup(60.0).unwrap();
//! assert_eq!(result.value, 2.0);
//!
//! let rows = dist.window(result.index, 5);
//! assert_eq!(rows.len(), 3);
//! ```

pub mod descriptive;
pub mod distribution;
pub mod filter;
pub mod locate;
pub mod neighborhood;
pub mod report;
