//! Multi-layer 2D grid map storage and its index/world mapping.

mod map;

pub use map::GridMap;
