//! Stateless converters between [`GridMap`](crate::grid::GridMap) and the
//! wire message formats.
//!
//! All converters are pure free functions. They read the map through its
//! accessor surface, validate their inputs up front, and return a freshly
//! allocated message; on error no partial output is produced. Traversal is
//! always in logical cell order (`iy` outer, `ix` inner), independent of the
//! map's circular-buffer start index, so outputs are deterministic.

mod cells;
mod codec;
mod occupancy;
mod point_cloud;

pub use cells::to_grid_cells;
pub use codec::{from_message, to_message, to_message_for_layers};
pub use occupancy::to_occupancy_grid;
pub use point_cloud::{to_point_cloud, to_point_cloud_for_layers};

/// Map a logical linear cell index onto a min-corner row-major raster.
///
/// The grid map stores cells max-corner first along both axes while
/// occupancy rasters index min-corner first, so the linear order reverses
/// completely. This is the single place that flip lives.
#[inline]
pub(crate) fn reversed_index(logical: usize, cell_count: usize) -> usize {
    debug_assert!(logical < cell_count);
    cell_count - 1 - logical
}
