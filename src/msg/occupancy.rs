//! Single-layer occupancy raster message.

use super::Header;
use crate::core::Pose;
use serde::{Deserialize, Serialize};

/// Occupancy raster: one byte per cell, row-major from the min corner with
/// +x fastest.
///
/// Cell values are occupancy percentages in `0..=100`, or [`UNKNOWN`] for
/// cells without a valid measurement.
///
/// [`UNKNOWN`]: OccupancyGrid::UNKNOWN
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OccupancyGrid {
    /// Common header
    pub header: Header,
    /// Cell edge length in meters
    pub resolution: f32,
    /// Cell count along x
    pub width: u32,
    /// Cell count along y
    pub height: u32,
    /// Pose of the cell (0, 0) corner of the raster
    pub origin: Pose,
    /// Cell values, `width * height` bytes
    pub data: Vec<i8>,
}

impl OccupancyGrid {
    /// Fully free cell
    pub const FREE: i8 = 0;
    /// Fully occupied cell
    pub const OCCUPIED: i8 = 100;
    /// Cell without a valid measurement
    pub const UNKNOWN: i8 = -1;
}
