//! Raster sources supplying single-band cell values.
//!
//! A [`RasterSource`] exposes the band count, the declared no-data value and
//! the flat cell values of its (only) band. Multi-band sources are rejected
//! with [`ensure_single_band`] before any values are read.

pub use self::{geotiff::*, memory::*};

mod geotiff;
mod memory;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RasterError {
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
    #[display("TIFF decoding error: {_0}")]
    Tiff(tiff::TiffError),
    #[display("invalid no-data declaration {value:?}")]
    InvalidNoData { value: String },
    #[display("raster has {bands} bands; only single-band rasters are supported")]
    UnsupportedBandCount { bands: usize },
}

impl From<std::io::Error> for RasterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<tiff::TiffError> for RasterError {
    fn from(err: tiff::TiffError) -> Self {
        Self::Tiff(err)
    }
}

/// A raster whose cell values can be analyzed.
pub trait RasterSource {
    /// Number of bands (samples per pixel).
    fn band_count(&self) -> usize;

    /// The declared no-data value, if any.
    fn no_data_value(&self) -> Option<f64>;

    /// Reads every cell value of the band, widened to `f64`.
    ///
    /// Callers should check [`ensure_single_band`] first; for multi-band
    /// sources the layout of the returned values is unspecified.
    fn read_band(&mut self) -> Result<Vec<f64>, RasterError>;
}

/// Rejects sources with more than one band.
///
/// # Examples
///
/// ```
/// use rasterfreq_raster::{MemoryRaster, RasterError, ensure_single_band};
///
/// let single = MemoryRaster::new(vec![1.0, 2.0], None);
/// assert!(ensure_single_band(&single).is_ok());
///
/// let rgb = MemoryRaster::new(vec![0.0; 12], None).with_band_count(3);
/// assert!(matches!(
///     ensure_single_band(&rgb),
///     Err(RasterError::UnsupportedBandCount { bands: 3 })
/// ));
/// ```
pub fn ensure_single_band<S>(source: &S) -> Result<(), RasterError>
where
    S: RasterSource + ?Sized,
{
    match source.band_count() {
        1 => Ok(()),
        bands => Err(RasterError::UnsupportedBandCount { bands }),
    }
}
