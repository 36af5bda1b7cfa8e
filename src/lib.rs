//! # Setu-Grid: Grid Map Message Conversions
//!
//! Conversion layer between an in-memory multi-layer 2D grid map and the
//! standard message formats used by robot perception pipelines:
//!
//! - **Grid map message**: bidirectional, all layers or a named subset
//! - **Point cloud**: one layer supplies point heights, the rest become
//!   per-point attribute fields
//! - **Occupancy grid**: one layer quantized to 0-100 with an unknown marker
//! - **Grid cells**: sparse list of cell centers passing a threshold band
//!
//! ## Quick Start
//!
//! ```rust
//! use setu_grid::{GridMap, Header, convert};
//! use setu_grid::core::Position2;
//!
//! let mut map = GridMap::new(2.0, 2.0, 1.0, Position2::new(0.0, 0.0)).unwrap();
//! map.add_layer("elevation", 0.0);
//!
//! let header = Header::new("map");
//! let cloud = convert::to_point_cloud(&map, "elevation", &header).unwrap();
//! assert_eq!(cloud.width, 4);
//! ```
//!
//! ## Coordinate Frame
//!
//! World coordinates follow the ROS REP-103 convention (x-forward, y-left,
//! meters, radians). The grid map itself stores cells in the grid_map
//! convention: the map `position` is the **center** of the grid and cell
//! index (0, 0) sits at the max-x/max-y corner, with indices increasing
//! towards -x/-y. See [`grid`] for the full storage contract.
//!
//! ## Architecture
//!
//! - [`core`]: geometry scalar types (positions, pose)
//! - [`grid`]: the multi-layer grid map and its index/world mapping
//! - [`msg`]: wire message structs (fixed external contracts)
//! - [`convert`]: the four stateless converters
//! - [`error`]: conversion error taxonomy
//!
//! All converters are pure free functions: they read the map through its
//! narrow accessor surface and return a freshly allocated message. There is
//! no shared state, so concurrent read-only conversions over one map are
//! safe; serializing writes against readers is the caller's responsibility.

pub mod convert;
pub mod core;
pub mod error;
pub mod grid;
pub mod msg;

// Re-export the main types at crate root
pub use convert::{
    from_message, to_grid_cells, to_message, to_message_for_layers, to_occupancy_grid,
    to_point_cloud, to_point_cloud_for_layers,
};
pub use error::{ConversionError, Result};
pub use grid::GridMap;
pub use msg::{FieldType, GridCells, GridMapMessage, Header, OccupancyGrid, PointCloud2, PointField};
