use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use tiff::{
    decoder::{Decoder, DecodingResult, Limits},
    tags::Tag,
};
use tracing::debug;

use crate::{RasterError, RasterSource};

/// TIFF tag GDAL uses to store the no-data value as an ASCII string.
pub const GDAL_NODATA_TAG: u16 = 42113;

/// Raster backed by a (Geo)TIFF file.
///
/// The band count is taken from `SamplesPerPixel` and the no-data value from
/// the GDAL no-data tag. Georeferencing tags are not interpreted.
pub struct GeoTiffRaster<R>
where
    R: Read + Seek,
{
    decoder: Decoder<R>,
    width: u32,
    height: u32,
    band_count: usize,
    no_data: Option<f64>,
}

impl GeoTiffRaster<BufReader<File>> {
    /// Opens a GeoTIFF file.
    pub fn open(path: &Path) -> Result<Self, RasterError> {
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened raster file");
        Self::from_reader(BufReader::new(file))
    }
}

impl<R> GeoTiffRaster<R>
where
    R: Read + Seek,
{
    /// Reads the header of the first image in `reader`.
    ///
    /// Decoding is not capped in size; a band is read whole into memory.
    pub fn from_reader(reader: R) -> Result<Self, RasterError> {
        Self::from_reader_with_limits(reader, Limits::unlimited())
    }

    /// Like [`from_reader`](Self::from_reader), with explicit decoder limits.
    pub fn from_reader_with_limits(reader: R, limits: Limits) -> Result<Self, RasterError> {
        let mut decoder = Decoder::new(reader)?.with_limits(limits);
        let (width, height) = decoder.dimensions()?;
        let band_count = match decoder.find_tag(Tag::SamplesPerPixel)? {
            Some(value) => value.into_u32()? as usize,
            None => 1,
        };
        let no_data = match decoder.find_tag(Tag::from_u16_exhaustive(GDAL_NODATA_TAG))? {
            Some(value) => Some(parse_no_data(&value.into_string()?)?),
            None => None,
        };
        debug!(width, height, band_count, ?no_data, "read raster header");

        Ok(Self {
            decoder,
            width,
            height,
            band_count,
            no_data,
        })
    }

    /// Image width and height in cells.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl<R> RasterSource for GeoTiffRaster<R>
where
    R: Read + Seek,
{
    fn band_count(&self) -> usize {
        self.band_count
    }

    fn no_data_value(&self) -> Option<f64> {
        self.no_data
    }

    fn read_band(&mut self) -> Result<Vec<f64>, RasterError> {
        let values = widen(self.decoder.read_image()?);
        debug!(cells = values.len(), "decoded raster band");
        Ok(values)
    }
}

fn parse_no_data(raw: &str) -> Result<f64, RasterError> {
    let trimmed = raw.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    trimmed
        .parse::<f64>()
        .map_err(|_| RasterError::InvalidNoData {
            value: raw.to_owned(),
        })
}

#[expect(clippy::cast_precision_loss)]
fn widen(result: DecodingResult) -> Vec<f64> {
    match result {
        DecodingResult::U8(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U16(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U64(data) => data.into_iter().map(|v| v as f64).collect(),
        DecodingResult::I8(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I16(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I64(data) => data.into_iter().map(|v| v as f64).collect(),
        DecodingResult::F32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::F64(data) => data,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tiff::encoder::{TiffEncoder, colortype};

    use super::*;
    use crate::ensure_single_band;

    fn encode_f32(width: u32, height: u32, data: &[f32], no_data: Option<&str>) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        let mut encoder = TiffEncoder::new(&mut buf).unwrap();
        let mut image = encoder
            .new_image::<colortype::Gray32Float>(width, height)
            .unwrap();
        if let Some(no_data) = no_data {
            image
                .encoder()
                .write_tag(Tag::Unknown(GDAL_NODATA_TAG), no_data)
                .unwrap();
        }
        image.write_data(data).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_reads_float_band_with_no_data() {
        let data = [1.5, -9999.0, 2.0, 2.0, 1.5, -9999.0];
        let bytes = encode_f32(3, 2, &data, Some("-9999"));
        let mut raster = GeoTiffRaster::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.band_count(), 1);
        assert_eq!(raster.no_data_value(), Some(-9999.0));
        assert_eq!(
            raster.read_band().unwrap(),
            vec![1.5, -9999.0, 2.0, 2.0, 1.5, -9999.0]
        );
    }

    #[test]
    fn test_no_data_tag_is_optional() {
        let bytes = encode_f32(2, 1, &[0.25, 0.5], None);
        let mut raster = GeoTiffRaster::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(raster.no_data_value(), None);
        assert_eq!(raster.read_band().unwrap(), vec![0.25, 0.5]);
    }

    #[test]
    fn test_float_min_no_data() {
        let bytes = encode_f32(1, 1, &[f32::MIN], Some("-3.4028234663852886e+38"));
        let raster = GeoTiffRaster::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(raster.no_data_value(), Some(f64::from(f32::MIN)));
    }

    #[test]
    fn test_nan_no_data() {
        let bytes = encode_f32(1, 1, &[f32::NAN], Some("nan"));
        let raster = GeoTiffRaster::from_reader(Cursor::new(bytes)).unwrap();
        assert!(raster.no_data_value().unwrap().is_nan());
    }

    #[test]
    fn test_invalid_no_data_is_rejected() {
        let bytes = encode_f32(1, 1, &[0.0], Some("none"));
        let result = GeoTiffRaster::from_reader(Cursor::new(bytes));
        assert!(matches!(result, Err(RasterError::InvalidNoData { .. })));
    }

    #[test]
    fn test_decoder_limits_are_applied() {
        let data = [1.0; 16];
        let bytes = encode_f32(4, 4, &data, None);

        let mut limits = Limits::default();
        limits.decoding_buffer_size = 16;
        let mut capped =
            GeoTiffRaster::from_reader_with_limits(Cursor::new(bytes.clone()), limits).unwrap();
        assert!(matches!(capped.read_band(), Err(RasterError::Tiff(_))));

        let mut uncapped = GeoTiffRaster::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(uncapped.read_band().unwrap(), vec![1.0; 16]);
    }

    #[test]
    fn test_large_bands_fit_default_reader() {
        // 8200 x 8200 f32 cells exceed tiff's built-in decoding cap.
        let band_bytes = 8200 * 8200 * 4;
        assert!(Limits::default().decoding_buffer_size < band_bytes);
        assert!(Limits::unlimited().decoding_buffer_size >= band_bytes);
    }

    #[test]
    fn test_reads_integer_band() {
        let mut buf = Cursor::new(Vec::new());
        TiffEncoder::new(&mut buf)
            .unwrap()
            .write_image::<colortype::Gray16>(2, 2, &[0, 7, 65535, 7])
            .unwrap();
        let mut raster = GeoTiffRaster::from_reader(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(raster.band_count(), 1);
        assert_eq!(raster.read_band().unwrap(), vec![0.0, 7.0, 65535.0, 7.0]);
    }

    #[test]
    fn test_rgb_is_multi_band() {
        let mut buf = Cursor::new(Vec::new());
        TiffEncoder::new(&mut buf)
            .unwrap()
            .write_image::<colortype::RGB8>(2, 1, &[1, 2, 3, 4, 5, 6])
            .unwrap();
        let raster = GeoTiffRaster::from_reader(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(raster.band_count(), 3);
        assert!(matches!(
            ensure_single_band(&raster),
            Err(RasterError::UnsupportedBandCount { bands: 3 })
        ));
    }

    #[test]
    fn test_not_a_tiff() {
        let result = GeoTiffRaster::from_reader(Cursor::new(b"definitely not a tiff".to_vec()));
        assert!(matches!(result, Err(RasterError::Tiff(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = GeoTiffRaster::open(Path::new("/nonexistent/raster.tif"));
        assert!(matches!(result, Err(RasterError::Io(_))));
    }
}
