//! Attribute path resolution over schemaless actor data
//!
//! Game systems nest their resources differently (`attributes.hp`,
//! `resources.hp`, `wounds`). Paths are dotted keys into the JSON tree.

use serde_json::Value;

use crate::error::HudError;

/// Current/max/temporary triple read from a resource node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResourceValues {
    pub value: f64,
    pub max: f64,
    pub temp: Option<f64>,
}

impl ResourceValues {
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value,
            max,
            temp: None,
        }
    }

    pub fn with_temp(mut self, temp: f64) -> Self {
        self.temp = Some(temp);
        self
    }
}

/// Walk a dotted path. An empty path addresses the root.
pub fn attribute<'a>(tree: &'a Value, path: &str) -> Result<&'a Value, HudError> {
    let mut node = tree;
    for key in path.split('.').filter(|k| !k.is_empty()) {
        node = match node {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
        .filter(|v| !v.is_null())
        .ok_or_else(|| HudError::missing_attribute(path))?;
    }
    Ok(node)
}

/// Numeric value of a node; numeric strings count
pub fn as_number(node: &Value) -> Option<f64> {
    match node {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a number at `path`
pub fn number(tree: &Value, path: &str) -> Result<f64, HudError> {
    let node = attribute(tree, path)?;
    as_number(node).ok_or_else(|| HudError::missing_attribute(path))
}

/// Read a `{value, max, temp?}` resource node.
///
/// A bare number is treated as a full resource (`max == value`). A missing
/// `max` reads as zero; a missing or non-numeric `temp` is absent.
pub fn resource(tree: &Value, path: &str) -> Result<ResourceValues, HudError> {
    let node = attribute(tree, path)?;
    if let Some(n) = as_number(node) {
        return Ok(ResourceValues::new(n, n));
    }

    let value = node
        .get("value")
        .and_then(as_number)
        .ok_or_else(|| HudError::missing_attribute(format!("{}.value", path)))?;
    let max = node.get("max").and_then(as_number).unwrap_or(0.0);
    let temp = node.get("temp").and_then(as_number);

    Ok(ResourceValues { value, max, temp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_paths() {
        let tree = json!({"attributes": {"hp": {"value": 10, "max": 18, "temp": 4}}});
        let hp = resource(&tree, "attributes.hp").unwrap();
        assert_eq!(hp, ResourceValues::new(10.0, 18.0).with_temp(4.0));
    }

    #[test]
    fn missing_path_is_an_error() {
        let tree = json!({"attributes": {}});
        let err = resource(&tree, "attributes.hp").unwrap_err();
        assert_eq!(err, HudError::missing_attribute("attributes.hp"));
    }

    #[test]
    fn null_nodes_count_as_missing() {
        let tree = json!({"resources": {"hp": null}});
        assert!(attribute(&tree, "resources.hp").is_err());
    }

    #[test]
    fn numeric_strings_and_bare_numbers() {
        let tree = json!({"bennies": 3, "wounds": {"value": "1", "max": "3"}});
        assert_eq!(resource(&tree, "bennies").unwrap(), ResourceValues::new(3.0, 3.0));
        assert_eq!(resource(&tree, "wounds").unwrap(), ResourceValues::new(1.0, 3.0));
    }

    #[test]
    fn node_without_value_is_missing() {
        let tree = json!({"hp": {"max": 10}});
        assert_eq!(
            resource(&tree, "hp").unwrap_err(),
            HudError::missing_attribute("hp.value")
        );
    }

    #[test]
    fn number_reads_level_fields() {
        let tree = json!({"details": {"level": {"value": 7}}});
        assert_eq!(number(&tree, "details.level.value").unwrap(), 7.0);
        assert!(number(&tree, "details.level").is_err());
    }
}
