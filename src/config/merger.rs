//! Layering of YAML configuration values.
//!
//! A local override file is laid over the project config before the result
//! is parsed into a [`ScrutinyConfig`](super::ScrutinyConfig).
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (a `categories` list is never appended to)
//! - Null values in the overlay delete the corresponding key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge two YAML values. `overlay` wins at every point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge config layers in order, later layers taking precedence.
///
/// An empty file parses to null and is skipped rather than erasing the
/// layers beneath it.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
