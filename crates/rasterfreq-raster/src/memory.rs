use crate::{RasterError, RasterSource};

/// Raster held entirely in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRaster {
    values: Vec<f64>,
    band_count: usize,
    no_data: Option<f64>,
}

impl MemoryRaster {
    /// Creates a single-band raster from its cell values.
    #[must_use]
    pub fn new(values: Vec<f64>, no_data: Option<f64>) -> Self {
        Self {
            values,
            band_count: 1,
            no_data,
        }
    }

    #[must_use]
    pub fn with_band_count(mut self, band_count: usize) -> Self {
        self.band_count = band_count;
        self
    }
}

impl RasterSource for MemoryRaster {
    fn band_count(&self) -> usize {
        self.band_count
    }

    fn no_data_value(&self) -> Option<f64> {
        self.no_data
    }

    fn read_band(&mut self) -> Result<Vec<f64>, RasterError> {
        Ok(self.values.clone())
    }
}
