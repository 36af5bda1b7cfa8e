//! Sparse cell list message.

use super::Header;
use crate::core::Position3;
use serde::{Deserialize, Serialize};

/// Sparse list of cell centers, used to publish the cells of one layer that
/// pass a threshold band. Carries no per-cell data beyond the position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridCells {
    /// Common header
    pub header: Header,
    /// Cell edge length along x in meters
    pub cell_width: f32,
    /// Cell edge length along y in meters
    pub cell_height: f32,
    /// World centers of the qualifying cells
    pub cells: Vec<Position3>,
}
