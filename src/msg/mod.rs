//! Wire message structs.
//!
//! These mirror fixed external contracts used by robot perception stacks;
//! their field layout is not negotiable here. Every converter allocates a
//! fresh message per call and hands full ownership to the caller.

mod cells;
mod grid_map_msg;
mod occupancy;
mod point_cloud;

pub use cells::GridCells;
pub use grid_map_msg::{GridMapInfo, GridMapMessage};
pub use occupancy::OccupancyGrid;
pub use point_cloud::{FieldType, PointCloud2, PointField};

use serde::{Deserialize, Serialize};

/// Common message header: coordinate frame plus timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Coordinate frame the message data is expressed in
    pub frame_id: String,
    /// Acquisition time in microseconds since an arbitrary epoch
    pub stamp_us: u64,
}

impl Header {
    /// Create a header with a zero timestamp.
    pub fn new(frame_id: &str) -> Self {
        Self {
            frame_id: frame_id.to_string(),
            stamp_us: 0,
        }
    }

    /// Create a header with an explicit timestamp.
    pub fn with_stamp(frame_id: &str, stamp_us: u64) -> Self {
        Self {
            frame_id: frame_id.to_string(),
            stamp_us,
        }
    }
}
