//! Point cloud message with a byte-exact per-point field table.
//!
//! # Wire Format
//!
//! Each point is one fixed-stride record; the field table describes the
//! record layout shared by all points:
//!
//! ```text
//! ┌───────┬───────┬───────┬─────────┬─────────┬──
//! │ x:f64 │ y:f64 │ z:f64 │ layer A │ layer B │ ...
//! │ 8B    │ 8B    │ 8B    │ 8B      │ 8B      │
//! └───────┴───────┴───────┴─────────┴─────────┴──
//! ```
//!
//! Position fields are always present and first. The total payload is
//! `width * point_step` bytes, little-endian unless `is_bigendian` is set.

use super::Header;
use serde::{Deserialize, Serialize};

/// Numeric type tags for point field data.
///
/// The discriminants match the sensor_msgs/PointField datatype codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum FieldType {
    /// Signed 8-bit integer
    Int8 = 1,
    /// Unsigned 8-bit integer
    UInt8 = 2,
    /// Signed 16-bit integer
    Int16 = 3,
    /// Unsigned 16-bit integer
    UInt16 = 4,
    /// Signed 32-bit integer
    Int32 = 5,
    /// Unsigned 32-bit integer
    UInt32 = 6,
    /// IEEE 754 single precision
    Float32 = 7,
    /// IEEE 754 double precision
    Float64 = 8,
}

impl FieldType {
    /// Size of one element of this type in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            FieldType::Int8 | FieldType::UInt8 => 1,
            FieldType::Int16 | FieldType::UInt16 => 2,
            FieldType::Int32 | FieldType::UInt32 | FieldType::Float32 => 4,
            FieldType::Float64 => 8,
        }
    }
}

/// One entry of the per-point field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointField {
    /// Field name
    pub name: String,
    /// Byte offset within the point record
    pub offset: u32,
    /// Numeric type of the field elements
    pub datatype: FieldType,
    /// Number of elements at this offset
    pub count: u32,
}

impl PointField {
    /// Create a single-element field.
    pub fn new(name: &str, offset: u32, datatype: FieldType) -> Self {
        Self {
            name: name.to_string(),
            offset,
            datatype,
            count: 1,
        }
    }

    /// Total byte size of this field.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.datatype.size() * self.count as usize
    }
}

/// Fixed-stride point cloud message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointCloud2 {
    /// Common header
    pub header: Header,
    /// Number of point rows; 1 for an unorganized cloud
    pub height: u32,
    /// Number of points per row
    pub width: u32,
    /// Field table shared by all points
    pub fields: Vec<PointField>,
    /// True when the payload is big-endian
    pub is_bigendian: bool,
    /// Byte stride between consecutive points
    pub point_step: u32,
    /// Byte stride between consecutive rows
    pub row_step: u32,
    /// Packed point records, `width * height * point_step` bytes
    pub data: Vec<u8>,
    /// True when the payload contains no invalid (NaN) values
    pub is_dense: bool,
}

impl PointCloud2 {
    /// Number of points in the cloud.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_sizes() {
        assert_eq!(FieldType::Int8.size(), 1);
        assert_eq!(FieldType::UInt16.size(), 2);
        assert_eq!(FieldType::Float32.size(), 4);
        assert_eq!(FieldType::Float64.size(), 8);
    }

    #[test]
    fn test_field_byte_size() {
        let f = PointField::new("x", 0, FieldType::Float64);
        assert_eq!(f.byte_size(), 8);
        let f = PointField {
            name: "rgb".to_string(),
            offset: 0,
            datatype: FieldType::UInt8,
            count: 3,
        };
        assert_eq!(f.byte_size(), 3);
    }
}
