//! Error types for grid map conversions.

/// Result type alias
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Requested layer name is not present in the grid map
    #[error("Layer not found: {0}")]
    MissingLayer(String),

    /// Data block length does not match the declared geometry
    #[error("Data size mismatch for layer '{layer}': expected {expected} cells, got {actual}")]
    SizeMismatch {
        /// Layer whose data block is malformed
        layer: String,
        /// Expected cell count (rows x cols)
        expected: usize,
        /// Actual block length
        actual: usize,
    },

    /// Geometry fields are absent, inconsistent, or out of range
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Point layer was not part of the selected layer list
    #[error("Point layer '{0}' is not in the selected layers")]
    PointLayerNotSelected(String),

    /// Normalization bounds do not satisfy min < max
    #[error("Degenerate normalization range: min {min} must be less than max {max}")]
    DegenerateRange {
        /// Lower bound of the declared data range
        min: f64,
        /// Upper bound of the declared data range
        max: f64,
    },
}
