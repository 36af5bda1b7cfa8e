//! Fundamental geometry types shared by the grid map and the message layer.

mod geometry;

pub use geometry::{Pose, Position2, Position3};
