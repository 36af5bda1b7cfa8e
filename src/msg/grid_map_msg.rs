//! Generic multi-layer grid map message.

use super::Header;
use crate::core::Position2;
use serde::{Deserialize, Serialize};

/// Geometry header of a grid map message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridMapInfo {
    /// Common header
    pub header: Header,
    /// Cell edge length in meters
    pub resolution: f64,
    /// Physical side length along x in meters
    pub length_x: f64,
    /// Physical side length along y in meters
    pub length_y: f64,
    /// World coordinates of the grid center
    pub position: Position2,
}

/// Multi-layer grid map message.
///
/// `layers` and `data` are parallel ordered lists: `data[i]` is the flat
/// cell buffer of `layers[i]`, in the map's native storage order, exactly
/// one value per cell. The start indices record the circular-buffer offset
/// of the stored buffers: `outer_start_index` for the outer (y) dimension,
/// `inner_start_index` for the inner (x) dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridMapMessage {
    /// Geometry fields
    pub info: GridMapInfo,
    /// Circular-buffer start index of the outer (y) dimension
    pub outer_start_index: u32,
    /// Circular-buffer start index of the inner (x) dimension
    pub inner_start_index: u32,
    /// Layer names, in map order
    pub layers: Vec<String>,
    /// One flat data block per layer, parallel to `layers`
    pub data: Vec<Vec<f64>>,
}
