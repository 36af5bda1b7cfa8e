//! The multi-layer grid map consumed and produced by the converters.
//!
//! ## Storage Contract
//!
//! The map follows the grid_map storage convention:
//!
//! - `position` is the world coordinate of the **grid center**
//! - cell index (0, 0) sits at the max-x/max-y corner; increasing `ix`
//!   moves in -x, increasing `iy` in -y
//! - each layer is one flat buffer with linear index `iy * size_x + ix`
//!   (x-index fastest)
//! - a circular-buffer start index marks which stored row/column is
//!   logically first, so the map can shift without copying data
//!
//! ```text
//!        +y ◄──────┐
//!                  │ (0,0)          cell center:
//!   ┌────┬────┐    │                x = cx + res * (0.5*(size_x-1) - ix)
//!   │(0,1)│(0,0)│  │                y = cy + res * (0.5*(size_y-1) - iy)
//!   ├────┼────┤    ▼
//!   │(1,1)│(1,0)│  -x
//!   └────┴────┘
//! ```
//!
//! Geometry is defined on **logical** indices; `buffer_index` applies the
//! start-index wrap to reach the stored value. A cell value of NaN marks an
//! invalid/unknown measurement. All layers in one map share the same
//! dimensions.

use crate::core::Position2;
use crate::error::{ConversionError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A rectangular grid of square cells with named floating-point data layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridMap {
    /// Cell edge length in meters
    resolution: f64,
    /// World coordinates of the grid center
    position: Position2,
    /// Cell count along x
    size_x: usize,
    /// Cell count along y
    size_y: usize,
    /// Circular-buffer start index (x, y)
    start_index: (usize, usize),
    /// Layer name -> flat cell buffer, in insertion order
    layers: IndexMap<String, Vec<f64>>,
}

impl GridMap {
    /// Create an empty map covering `length_x` x `length_y` meters centered
    /// at `position`.
    ///
    /// The cell counts are `round(length / resolution)` per axis. Fails if
    /// the resolution or either length is non-positive, non-finite, or too
    /// small to hold a single cell.
    pub fn new(
        length_x: f64,
        length_y: f64,
        resolution: f64,
        position: Position2,
    ) -> Result<Self> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(ConversionError::InvalidGeometry(format!(
                "resolution must be positive, got {}",
                resolution
            )));
        }
        if !(length_x.is_finite() && length_x > 0.0 && length_y.is_finite() && length_y > 0.0) {
            return Err(ConversionError::InvalidGeometry(format!(
                "lengths must be positive, got {} x {}",
                length_x, length_y
            )));
        }
        let size_x = (length_x / resolution).round() as usize;
        let size_y = (length_y / resolution).round() as usize;
        if size_x == 0 || size_y == 0 {
            return Err(ConversionError::InvalidGeometry(format!(
                "lengths {} x {} hold no cell at resolution {}",
                length_x, length_y, resolution
            )));
        }
        Ok(Self {
            resolution,
            position,
            size_x,
            size_y,
            start_index: (0, 0),
            layers: IndexMap::new(),
        })
    }

    /// Cell count along x
    #[inline]
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Cell count along y
    #[inline]
    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size_x * self.size_y
    }

    /// Cell edge length in meters
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// World coordinates of the grid center
    #[inline]
    pub fn position(&self) -> Position2 {
        self.position
    }

    /// Physical side length along x in meters
    #[inline]
    pub fn length_x(&self) -> f64 {
        self.size_x as f64 * self.resolution
    }

    /// Physical side length along y in meters
    #[inline]
    pub fn length_y(&self) -> f64 {
        self.size_y as f64 * self.resolution
    }

    /// Circular-buffer start index (x, y)
    #[inline]
    pub fn start_index(&self) -> (usize, usize) {
        self.start_index
    }

    /// Set the circular-buffer start index. Indices are taken modulo the
    /// grid size.
    pub fn set_start_index(&mut self, start_x: usize, start_y: usize) {
        self.start_index = (start_x % self.size_x, start_y % self.size_y);
    }

    /// Add a layer filled with `value`, replacing any layer of the same name.
    pub fn add_layer(&mut self, name: &str, value: f64) {
        self.layers
            .insert(name.to_string(), vec![value; self.cell_count()]);
    }

    /// Add a layer from an existing cell buffer.
    ///
    /// The buffer must be in the map's native storage order and hold exactly
    /// one value per cell.
    pub fn set_layer(&mut self, name: &str, data: Vec<f64>) -> Result<()> {
        if data.len() != self.cell_count() {
            return Err(ConversionError::SizeMismatch {
                layer: name.to_string(),
                expected: self.cell_count(),
                actual: data.len(),
            });
        }
        self.layers.insert(name.to_string(), data);
        Ok(())
    }

    /// Get a layer's cell buffer by name.
    pub fn layer(&self, name: &str) -> Result<&[f64]> {
        self.layers
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ConversionError::MissingLayer(name.to_string()))
    }

    /// Get a mutable layer buffer by name.
    pub fn layer_mut(&mut self, name: &str) -> Result<&mut [f64]> {
        self.layers
            .get_mut(name)
            .map(Vec::as_mut_slice)
            .ok_or_else(|| ConversionError::MissingLayer(name.to_string()))
    }

    /// Check if a layer exists.
    #[inline]
    pub fn has_layer(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// Layer names in insertion order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    /// Layers with their cell buffers, in insertion order.
    pub fn layers(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.layers.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Flat buffer index of logical cell (ix, iy), applying the
    /// circular-buffer wrap.
    #[inline]
    pub fn buffer_index(&self, ix: usize, iy: usize) -> usize {
        debug_assert!(ix < self.size_x && iy < self.size_y);
        let bx = (ix + self.start_index.0) % self.size_x;
        let by = (iy + self.start_index.1) % self.size_y;
        by * self.size_x + bx
    }

    /// World center of logical cell (ix, iy).
    ///
    /// This is the single index-to-world transform; every converter goes
    /// through it rather than duplicating the sign convention.
    #[inline]
    pub fn cell_position(&self, ix: usize, iy: usize) -> Position2 {
        Position2::new(
            self.position.x + self.resolution * (0.5 * (self.size_x as f64 - 1.0) - ix as f64),
            self.position.y + self.resolution * (0.5 * (self.size_y as f64 - 1.0) - iy as f64),
        )
    }

    /// World coordinates of the min-x/min-y corner of the covered area.
    #[inline]
    pub fn corner_position(&self) -> Position2 {
        Position2::new(
            self.position.x - 0.5 * self.length_x(),
            self.position.y - 0.5 * self.length_y(),
        )
    }

    /// Check whether the layer value at logical cell (ix, iy) is a valid
    /// (finite or infinite, but not NaN) measurement.
    #[inline]
    pub fn is_valid(&self, data: &[f64], ix: usize, iy: usize) -> bool {
        !data[self.buffer_index(ix, iy)].is_nan()
    }
}
