//! Bidirectional codec between a grid map and the multi-layer grid message.

use crate::error::{ConversionError, Result};
use crate::grid::GridMap;
use crate::msg::{GridMapInfo, GridMapMessage, Header};
use log::debug;

/// Encode all layers of a grid map, in map order.
///
/// Geometry is copied verbatim and each layer buffer is cloned in its native
/// storage order; the current circular-buffer start index is recorded so the
/// consumer can unwrap the data without a copy.
pub fn to_message(map: &GridMap, header: &Header) -> GridMapMessage {
    let mut message = empty_message(map, header);
    for (name, data) in map.layers() {
        message.layers.push(name.to_string());
        message.data.push(data.to_vec());
    }
    message
}

/// Encode a named subset of layers, in the given order.
///
/// Fails with [`ConversionError::MissingLayer`] if any name is absent; no
/// partial message is produced.
pub fn to_message_for_layers(
    map: &GridMap,
    layers: &[&str],
    header: &Header,
) -> Result<GridMapMessage> {
    let mut message = empty_message(map, header);
    for &name in layers {
        let data = map.layer(name)?;
        message.layers.push(name.to_string());
        message.data.push(data.to_vec());
    }
    Ok(message)
}

/// Decode a grid map message into a fresh grid map.
///
/// Fails with [`ConversionError::InvalidGeometry`] if the geometry fields
/// are unusable or the layer/data lists disagree, and with
/// [`ConversionError::SizeMismatch`] if any data block does not hold exactly
/// one value per cell. On failure nothing is returned, so no caller-visible
/// map is ever left half-written.
pub fn from_message(message: &GridMapMessage) -> Result<GridMap> {
    if message.layers.len() != message.data.len() {
        return Err(ConversionError::InvalidGeometry(format!(
            "{} layer names but {} data blocks",
            message.layers.len(),
            message.data.len()
        )));
    }

    let info = &message.info;
    let mut map = GridMap::new(info.length_x, info.length_y, info.resolution, info.position)?;
    map.set_start_index(
        message.inner_start_index as usize,
        message.outer_start_index as usize,
    );

    for (name, block) in message.layers.iter().zip(&message.data) {
        map.set_layer(name, block.clone())?;
    }

    debug!(
        "decoded grid map message: {} layers, {}x{} cells",
        message.layers.len(),
        map.size_x(),
        map.size_y()
    );
    Ok(map)
}

fn empty_message(map: &GridMap, header: &Header) -> GridMapMessage {
    let (start_x, start_y) = map.start_index();
    GridMapMessage {
        info: GridMapInfo {
            header: header.clone(),
            resolution: map.resolution(),
            length_x: map.length_x(),
            length_y: map.length_y(),
            position: map.position(),
        },
        outer_start_index: start_y as u32,
        inner_start_index: start_x as u32,
        layers: Vec::new(),
        data: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position2;
    use approx::assert_relative_eq;

    fn test_map() -> GridMap {
        let mut map = GridMap::new(2.0, 2.0, 1.0, Position2::new(0.5, -0.5)).unwrap();
        map.set_layer("elevation", vec![0.1, 0.2, f64::NAN, 0.4]).unwrap();
        map.set_layer("variance", vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        map
    }

    #[test]
    fn test_to_message_all_layers() {
        let map = test_map();
        let msg = to_message(&map, &Header::new("map"));

        assert_relative_eq!(msg.info.resolution, 1.0);
        assert_relative_eq!(msg.info.length_x, 2.0);
        assert_eq!(msg.info.header.frame_id, "map");
        assert_eq!(msg.layers, vec!["elevation", "variance"]);
        assert_eq!(msg.data.len(), 2);
        assert_eq!(msg.data[0].len(), 4);
        assert_eq!(msg.data[1], vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_to_message_subset() {
        let map = test_map();
        let msg = to_message_for_layers(&map, &["variance"], &Header::new("map")).unwrap();
        assert_eq!(msg.layers, vec!["variance"]);
        assert_eq!(msg.data.len(), 1);
    }

    #[test]
    fn test_to_message_missing_layer() {
        let map = test_map();
        let err = to_message_for_layers(&map, &["slope"], &Header::new("map")).unwrap_err();
        assert_eq!(err, ConversionError::MissingLayer("slope".to_string()));
    }

    #[test]
    fn test_round_trip_bit_exact() {
        let mut map = test_map();
        map.set_start_index(1, 1);
        let msg = to_message(&map, &Header::new("map"));
        let decoded = from_message(&msg).unwrap();

        assert_eq!(decoded.size_x(), map.size_x());
        assert_eq!(decoded.size_y(), map.size_y());
        assert_eq!(decoded.position(), map.position());
        assert_eq!(decoded.start_index(), map.start_index());
        for (name, original) in map.layers() {
            let restored = decoded.layer(name).unwrap();
            // Bit-exact comparison, including NaN placement
            for (a, b) in original.iter().zip(restored) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn test_from_message_block_size_mismatch() {
        let map = test_map();
        let mut msg = to_message(&map, &Header::new("map"));
        msg.data[1].pop();
        let err = from_message(&msg).unwrap_err();
        assert_eq!(
            err,
            ConversionError::SizeMismatch {
                layer: "variance".to_string(),
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_from_message_list_length_mismatch() {
        let map = test_map();
        let mut msg = to_message(&map, &Header::new("map"));
        msg.layers.pop();
        assert!(matches!(
            from_message(&msg),
            Err(ConversionError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_from_message_bad_geometry() {
        let map = test_map();
        let mut msg = to_message(&map, &Header::new("map"));
        msg.info.resolution = 0.0;
        assert!(matches!(
            from_message(&msg),
            Err(ConversionError::InvalidGeometry(_))
        ));
    }
}
