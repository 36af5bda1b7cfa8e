//! Grid map to point cloud projection.
//!
//! One designated layer supplies the point heights; every other selected
//! layer becomes a named per-point attribute field. Cells whose point-layer
//! value is NaN are dropped, so the cloud shrinks with invalid coverage
//! instead of carrying placeholder points.

use crate::error::{ConversionError, Result};
use crate::grid::GridMap;
use crate::msg::{FieldType, Header, PointCloud2, PointField};
use log::debug;

/// Project a grid map into a point cloud using all layers.
///
/// `point_layer` supplies the z coordinate of each point; all other layers
/// of the map are added as attribute fields in map order.
pub fn to_point_cloud(map: &GridMap, point_layer: &str, header: &Header) -> Result<PointCloud2> {
    let layers: Vec<&str> = map.layer_names().collect();
    project(map, &layers, point_layer, header)
}

/// Project a grid map into a point cloud using an explicit layer selection.
///
/// `point_layer` must be a member of `layers`; the remaining selected layers
/// become attribute fields in selection order.
pub fn to_point_cloud_for_layers(
    map: &GridMap,
    layers: &[&str],
    point_layer: &str,
    header: &Header,
) -> Result<PointCloud2> {
    if !layers.contains(&point_layer) {
        return Err(ConversionError::PointLayerNotSelected(
            point_layer.to_string(),
        ));
    }
    project(map, layers, point_layer, header)
}

/// Byte size of one point field; all emitted fields carry the layer's
/// double-precision values.
const FIELD_SIZE: usize = std::mem::size_of::<f64>();

fn project(
    map: &GridMap,
    layers: &[&str],
    point_layer: &str,
    header: &Header,
) -> Result<PointCloud2> {
    // Resolve every layer up front so a missing name fails before any
    // output exists.
    let point_data = map.layer(point_layer)?;
    let mut attributes: Vec<(&str, &[f64])> = Vec::with_capacity(layers.len().saturating_sub(1));
    for &name in layers {
        if name != point_layer {
            attributes.push((name, map.layer(name)?));
        }
    }

    // The field table is shared by every point, so it is computed once per
    // call. Positions are always present and first.
    let mut fields = vec![
        PointField::new("x", 0, FieldType::Float64),
        PointField::new("y", FIELD_SIZE as u32, FieldType::Float64),
        PointField::new("z", 2 * FIELD_SIZE as u32, FieldType::Float64),
    ];
    let mut offset = 3 * FIELD_SIZE as u32;
    for (name, _) in &attributes {
        fields.push(PointField::new(name, offset, FieldType::Float64));
        offset += FIELD_SIZE as u32;
    }
    let point_step = offset;

    let mut data = Vec::with_capacity(map.cell_count() * point_step as usize);
    let mut count: u32 = 0;
    let mut dense = true;

    for iy in 0..map.size_y() {
        for ix in 0..map.size_x() {
            let buffer_index = map.buffer_index(ix, iy);
            let z = point_data[buffer_index];
            if z.is_nan() {
                continue;
            }
            let center = map.cell_position(ix, iy);
            data.extend_from_slice(&center.x.to_le_bytes());
            data.extend_from_slice(&center.y.to_le_bytes());
            data.extend_from_slice(&z.to_le_bytes());
            for (_, attribute_data) in &attributes {
                let value = attribute_data[buffer_index];
                if value.is_nan() {
                    dense = false;
                }
                data.extend_from_slice(&value.to_le_bytes());
            }
            count += 1;
        }
    }

    debug!(
        "projected {} of {} cells into point cloud ({} fields, step {})",
        count,
        map.cell_count(),
        fields.len(),
        point_step
    );

    Ok(PointCloud2 {
        header: header.clone(),
        height: 1,
        width: count,
        fields,
        is_bigendian: false,
        point_step,
        row_step: count * point_step,
        data,
        is_dense: dense,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position2;
    use approx::assert_relative_eq;

    fn test_map() -> GridMap {
        let mut map = GridMap::new(2.0, 2.0, 1.0, Position2::new(0.0, 0.0)).unwrap();
        map.set_layer("elevation", vec![0.0, 50.0, f64::NAN, 100.0])
            .unwrap();
        map.set_layer("intensity", vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        map
    }

    /// Read field `index` of point `point` back out of the payload.
    fn read_field(cloud: &PointCloud2, point: usize, index: usize) -> f64 {
        let field = &cloud.fields[index];
        let start = point * cloud.point_step as usize + field.offset as usize;
        let bytes: [u8; 8] = cloud.data[start..start + 8].try_into().unwrap();
        f64::from_le_bytes(bytes)
    }

    #[test]
    fn test_field_layout() {
        let map = test_map();
        let cloud = to_point_cloud(&map, "elevation", &Header::new("map")).unwrap();

        let names: Vec<&str> = cloud.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z", "intensity"]);
        assert_eq!(cloud.fields[0].offset, 0);
        assert_eq!(cloud.fields[1].offset, 8);
        assert_eq!(cloud.fields[2].offset, 16);
        assert_eq!(cloud.fields[3].offset, 24);
        assert_eq!(cloud.point_step, 32);
        assert!(!cloud.is_bigendian);
    }

    #[test]
    fn test_nan_cells_excluded() {
        let map = test_map();
        let cloud = to_point_cloud(&map, "elevation", &Header::new("map")).unwrap();

        // One of four cells is NaN in the point layer
        assert_eq!(cloud.width, 3);
        assert_eq!(cloud.height, 1);
        assert_eq!(cloud.data.len(), 3 * 32);
        assert_eq!(cloud.row_step, 3 * 32);
        assert!(cloud.is_dense);
    }

    #[test]
    fn test_point_values() {
        let map = test_map();
        let cloud = to_point_cloud(&map, "elevation", &Header::new("map")).unwrap();

        // First emitted point is logical cell (0, 0): the max corner cell
        assert_relative_eq!(read_field(&cloud, 0, 0), 0.5);
        assert_relative_eq!(read_field(&cloud, 0, 1), 0.5);
        assert_relative_eq!(read_field(&cloud, 0, 2), 0.0);
        assert_relative_eq!(read_field(&cloud, 0, 3), 1.0);

        // The NaN cell (logical index 2) is skipped, so the third point is
        // logical cell (1, 1) with elevation 100
        assert_relative_eq!(read_field(&cloud, 2, 2), 100.0);
        assert_relative_eq!(read_field(&cloud, 2, 3), 4.0);
    }

    #[test]
    fn test_explicit_selection() {
        let map = test_map();
        let cloud = to_point_cloud_for_layers(&map, &["elevation"], "elevation", &Header::new("map"))
            .unwrap();
        assert_eq!(cloud.fields.len(), 3);
        assert_eq!(cloud.point_step, 24);
        assert_eq!(cloud.width, 3);
    }

    #[test]
    fn test_point_layer_not_selected() {
        let map = test_map();
        let err =
            to_point_cloud_for_layers(&map, &["intensity"], "elevation", &Header::new("map"))
                .unwrap_err();
        assert_eq!(
            err,
            ConversionError::PointLayerNotSelected("elevation".to_string())
        );
    }

    #[test]
    fn test_missing_layer() {
        let map = test_map();
        let err = to_point_cloud(&map, "slope", &Header::new("map")).unwrap_err();
        assert_eq!(err, ConversionError::MissingLayer("slope".to_string()));

        let err = to_point_cloud_for_layers(&map, &["elevation", "slope"], "elevation", &Header::new("map"))
            .unwrap_err();
        assert_eq!(err, ConversionError::MissingLayer("slope".to_string()));
    }

    #[test]
    fn test_all_invalid_yields_empty_cloud() {
        let mut map = GridMap::new(2.0, 2.0, 1.0, Position2::new(0.0, 0.0)).unwrap();
        map.add_layer("elevation", f64::NAN);
        let cloud = to_point_cloud(&map, "elevation", &Header::new("map")).unwrap();
        assert_eq!(cloud.width, 0);
        assert!(cloud.data.is_empty());
        assert_eq!(cloud.row_step, 0);
    }

    #[test]
    fn test_nan_attribute_clears_dense_flag() {
        let mut map = test_map();
        map.layer_mut("intensity").unwrap()[0] = f64::NAN;
        let cloud = to_point_cloud(&map, "elevation", &Header::new("map")).unwrap();
        assert_eq!(cloud.width, 3);
        assert!(!cloud.is_dense);
    }

    #[test]
    fn test_wrap_does_not_change_positions() {
        // The same physical cell must produce the same point regardless of
        // where the circular buffer starts.
        let mut wrapped = test_map();
        wrapped.set_start_index(1, 1);
        // Rearrange the buffers so logical content matches the unwrapped map
        let reorder = |src: &[f64]| -> Vec<f64> {
            let mut out = vec![0.0; 4];
            for iy in 0..2 {
                for ix in 0..2 {
                    let logical = iy * 2 + ix;
                    let stored = ((iy + 1) % 2) * 2 + ((ix + 1) % 2);
                    out[stored] = src[logical];
                }
            }
            out
        };
        wrapped
            .set_layer("elevation", reorder(&[0.0, 50.0, f64::NAN, 100.0]))
            .unwrap();
        wrapped
            .set_layer("intensity", reorder(&[1.0, 2.0, 3.0, 4.0]))
            .unwrap();

        let plain = to_point_cloud(&test_map(), "elevation", &Header::new("map")).unwrap();
        let shifted = to_point_cloud(&wrapped, "elevation", &Header::new("map")).unwrap();
        assert_eq!(plain.data, shifted.data);
    }
}
