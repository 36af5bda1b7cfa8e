//! Grid map layer to occupancy raster quantization.
//!
//! One layer is linearly mapped from a declared `[data_min, data_max]` range
//! onto occupancy percentages `0..=100`, saturating outside the range. NaN
//! cells become the unknown sentinel.
//!
//! The grid map stores cells max-corner first while occupancy rasters are
//! row-major from the min corner, so every cell value lands at the fully
//! reversed linear index. Getting this wrong would mirror the map, so the
//! reversal is checked against physical cell positions in the tests.

use super::reversed_index;
use crate::core::Pose;
use crate::error::{ConversionError, Result};
use crate::grid::GridMap;
use crate::msg::{Header, OccupancyGrid};
use log::debug;

/// Quantize one layer into an occupancy raster.
///
/// Values are mapped linearly from `[data_min, data_max]` to `[0, 100]` and
/// clamped outside that range; NaN cells become
/// [`OccupancyGrid::UNKNOWN`]. The bounds must satisfy
/// `data_min < data_max`, otherwise the normalization is degenerate and
/// [`ConversionError::DegenerateRange`] is returned.
pub fn to_occupancy_grid(
    map: &GridMap,
    layer: &str,
    data_min: f64,
    data_max: f64,
    header: &Header,
) -> Result<OccupancyGrid> {
    // Rejects equal, inverted, and NaN bounds in one comparison.
    if !(data_min < data_max) {
        return Err(ConversionError::DegenerateRange {
            min: data_min,
            max: data_max,
        });
    }
    let layer_data = map.layer(layer)?;

    let cell_count = map.cell_count();
    let span = data_max - data_min;
    let mut data = vec![OccupancyGrid::UNKNOWN; cell_count];

    let mut logical = 0;
    for iy in 0..map.size_y() {
        for ix in 0..map.size_x() {
            let value = layer_data[map.buffer_index(ix, iy)];
            if !value.is_nan() {
                let normalized = ((value - data_min) / span).clamp(0.0, 1.0);
                data[reversed_index(logical, cell_count)] =
                    (normalized * f64::from(OccupancyGrid::OCCUPIED)).round() as i8;
            }
            logical += 1;
        }
    }

    debug!(
        "quantized layer '{}' into {}x{} occupancy raster",
        layer,
        map.size_x(),
        map.size_y()
    );

    Ok(OccupancyGrid {
        header: header.clone(),
        resolution: map.resolution() as f32,
        width: map.size_x() as u32,
        height: map.size_y() as u32,
        origin: Pose::from_position(map.corner_position().with_z(0.0)),
        data,
    })
}
