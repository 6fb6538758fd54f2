//! JSON and YAML output of the snapshot tree

use super::FormatError;
use crate::mindmark::ast::{snapshot_forest, Statement};

pub fn to_json(forest: &[Statement]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(&snapshot_forest(forest))
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub fn to_yaml(forest: &[Statement]) -> Result<String, FormatError> {
    serde_yaml::to_string(&snapshot_forest(forest))
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mindmark::ast::NodeSnapshot;
    use crate::mindmark::parsing::parse;

    #[test]
    fn test_json_reads_back() {
        let forest = parse("total(1, 25%)\n");
        let json = to_json(&forest).unwrap();
        let snapshots: Vec<NodeSnapshot> = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshots, snapshot_forest(&forest));
        let function = &snapshots[0].children[0];
        assert_eq!(function.node_type, "FUNCTION");
        assert_eq!(function.children[1].attributes["value"], "0.25");
    }

    #[test]
    fn test_json_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&parse("x")).unwrap()).unwrap();

        assert_eq!(value[0]["node_type"], "STATEMENT");
        assert_eq!(value[0]["range"]["start"]["row"], 1);
        assert_eq!(value[0]["children"][0]["label"], "x");
        assert!(value[0]["children"][0].get("children").is_none());
    }

    #[test]
    fn test_yaml_reads_back() {
        let forest = parse("a\n  b 2024-01-05\n");
        let yaml = to_yaml(&forest).unwrap();
        let snapshots: Vec<NodeSnapshot> = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(snapshots, snapshot_forest(&forest));
        assert!(yaml.contains("node_type: STATEMENT"));
    }
}
