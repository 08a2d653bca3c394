use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThresholdError {
    #[error("unknown filter type: {0}")]
    InvalidFilterType(String),

    #[error("cannot open source raster {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        source: gdal::errors::GdalError,
    },

    #[error("cannot create output raster {path}: {source}")]
    DestinationWriteFailure {
        path: PathBuf,
        source: gdal::errors::GdalError,
    },

    #[error("failed to read source block at ({x_off},{y_off}): {source}")]
    BlockReadFailure {
        x_off: usize,
        y_off: usize,
        source: gdal::errors::GdalError,
    },

    #[error("failed to write output block at ({x_off},{y_off}): {source}")]
    BlockWriteFailure {
        x_off: usize,
        y_off: usize,
        source: gdal::errors::GdalError,
    },

    #[error("input raster has invalid dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),

    #[error("invalid filter bounds: lower {0} exceeds upper {1}")]
    InvalidBounds(i16, i16),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, ThresholdError>;
