//! Grid map layer to sparse cell list thresholding.

use crate::error::Result;
use crate::grid::GridMap;
use crate::msg::{GridCells, Header};
use log::debug;

/// Collect the world centers of all cells whose layer value lies in
/// `[lower_threshold, upper_threshold]` (inclusive).
///
/// NaN cells never qualify. Inverted thresholds are not an error; no cell
/// can satisfy them, so the result is simply empty. Output follows the
/// map's logical traversal order and is therefore deterministic for
/// identical input.
pub fn to_grid_cells(
    map: &GridMap,
    layer: &str,
    lower_threshold: f64,
    upper_threshold: f64,
    header: &Header,
) -> Result<GridCells> {
    let layer_data = map.layer(layer)?;

    let mut cells = Vec::new();
    for iy in 0..map.size_y() {
        for ix in 0..map.size_x() {
            let value = layer_data[map.buffer_index(ix, iy)];
            // NaN fails both comparisons
            if value >= lower_threshold && value <= upper_threshold {
                cells.push(map.cell_position(ix, iy).with_z(0.0));
            }
        }
    }

    debug!(
        "thresholded layer '{}' in [{}, {}]: {} of {} cells",
        layer,
        lower_threshold,
        upper_threshold,
        cells.len(),
        map.cell_count()
    );

    Ok(GridCells {
        header: header.clone(),
        cell_width: map.resolution() as f32,
        cell_height: map.resolution() as f32,
        cells,
    })
}
