//! World-coordinate scalar types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D world position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position2 {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
}

impl Position2 {
    /// Create a new position.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to another position (avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, other: &Position2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to another position.
    #[inline]
    pub fn distance(&self, other: &Position2) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Lift into 3D with the given z.
    #[inline]
    pub fn with_z(&self, z: f64) -> Position3 {
        Position3::new(self.x, self.y, z)
    }
}

impl Add for Position2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Position2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Position2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Position2::new(self.x - other.x, self.y - other.y)
    }
}

/// A 3D world position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3 {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
    /// Z coordinate in meters
    pub z: f64,
}

impl Position3 {
    /// Create a new position.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A planar pose: position plus heading about the z axis.
///
/// Used as the anchor of an occupancy grid. Yaw is in radians,
/// counter-clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Position of the pose in meters
    pub position: Position3,
    /// Heading about z in radians
    pub yaw: f64,
}

impl Pose {
    /// Create a pose with zero yaw.
    #[inline]
    pub fn from_position(position: Position3) -> Self {
        Self { position, yaw: 0.0 }
    }
}
