use crate::error::{Result, ThresholdError};
use crate::filter::{self, NO_DATA_VALUE};
use crate::policy::FilterRegistry;
use crate::tiling::BlockGrid;
use gdal::{Dataset, DriverManager};
use log::{debug, info};
use ndarray::Array2;
use std::fs;
use std::path::Path;

/// Shape and spatial referencing of the source raster, copied verbatim onto
/// the output.
#[derive(Debug, Clone)]
pub struct RasterDescriptor {
    pub width: usize,
    pub height: usize,
    pub block_width: usize,
    pub block_height: usize,
    pub geotransform: [f64; 6],
    pub projection: String,
}

fn describe_source(dataset: &Dataset) -> Result<RasterDescriptor> {
    let band = dataset.rasterband(1)?;

    let width = band.x_size();
    let height = band.y_size();
    if width == 0 || height == 0 {
        return Err(ThresholdError::InvalidDimensions(width, height));
    }

    // Read in the source's native block geometry
    let (block_width, block_height) = band.block_size();

    Ok(RasterDescriptor {
        width,
        height,
        block_width,
        block_height,
        geotransform: dataset.geo_transform()?,
        projection: dataset.projection(),
    })
}

/// Threshold-filter a single-band raster block by block.
///
/// Resolves `filter_type` against the registry, then streams the source
/// through the block plan: read, narrow to Int16, mask out-of-range samples
/// with the no-data sentinel, write to the same window of the output. The
/// output raster reuses the source's dimensions, geotransform and
/// projection. A pre-existing file at `output` is removed first, so reruns
/// always produce a fresh output.
pub fn run(
    input: &Path,
    output: &Path,
    filter_type: &str,
    registry: &FilterRegistry,
) -> Result<()> {
    // Resolve the filter before touching the filesystem, so an unknown
    // name leaves both paths alone.
    let spec = registry.resolve(filter_type)?;
    info!(
        "Filter type '{}': valid range [{}, {}]",
        spec.name, spec.lower, spec.upper
    );

    info!("Opening source raster: {}", input.display());
    let source = Dataset::open(input).map_err(|source| ThresholdError::SourceUnreadable {
        path: input.to_path_buf(),
        source,
    })?;
    let descriptor = describe_source(&source)?;
    debug!(
        "Source: {}x{}, native block size {}x{}",
        descriptor.width, descriptor.height, descriptor.block_width, descriptor.block_height
    );

    // Remove and regenerate any existing output
    if output.exists() {
        debug!("Removing existing output file: {}", output.display());
        fs::remove_file(output)?;
    }

    info!("Creating output raster: {}", output.display());
    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut dest = driver
        .create_with_band_type::<i16, _>(output, descriptor.width, descriptor.height, 1)
        .map_err(|source| ThresholdError::DestinationWriteFailure {
            path: output.to_path_buf(),
            source,
        })?;

    dest.set_geo_transform(&descriptor.geotransform)?;
    dest.set_projection(&descriptor.projection)?;

    let grid = BlockGrid::new(
        descriptor.width,
        descriptor.height,
        descriptor.block_width,
        descriptor.block_height,
    );
    info!("Processing {} blocks", grid.total_blocks);

    {
        let source_band = source.rasterband(1)?;
        let mut dest_band = dest.rasterband(1)?;

        // Set once, before any block writes
        dest_band.set_no_data_value(Some(NO_DATA_VALUE as f64))?;

        for (idx, block) in grid.iter() {
            debug!(
                "Block {}/{}: offset=({},{}), size=({},{})",
                idx + 1,
                grid.total_blocks,
                block.x_off,
                block.y_off,
                block.width,
                block.height
            );

            let buffer = source_band
                .read_as::<i32>(
                    (block.x_off as isize, block.y_off as isize),
                    (block.width, block.height),
                    (block.width, block.height),
                    None,
                )
                .map_err(|source| ThresholdError::BlockReadFailure {
                    x_off: block.x_off,
                    y_off: block.y_off,
                    source,
                })?;

            let data_vec: Vec<i32> = buffer.into_iter().collect();
            let raw = Array2::from_shape_vec((block.height, block.width), data_vec)?;
            let filtered = filter::apply(filter::narrow(raw), &spec);

            let block_slice = filtered.as_slice().expect("Array must be contiguous");
            let mut out_buffer =
                gdal::raster::Buffer::new((block.width, block.height), block_slice.to_vec());

            dest_band
                .write(
                    (block.x_off as isize, block.y_off as isize),
                    (block.width, block.height),
                    &mut out_buffer,
                )
                .map_err(|source| ThresholdError::BlockWriteFailure {
                    x_off: block.x_off,
                    y_off: block.y_off,
                    source,
                })?;
        }
    }

    dest.flush_cache()?;
    info!("Wrote filtered output: {}", output.display());
    Ok(())
}
