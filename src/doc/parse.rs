//! Input document parsing and normalization.
//!
//! Input files may be YAML or JSON. YAML is a superset of JSON, so one
//! parse path handles both: serde_yaml deserializes straight into a
//! `serde_json::Value`, giving the resolver a single normalized tree of
//! objects/arrays/scalars/null regardless of the source syntax.

use anyhow::Context;
use serde_json::Value;
use std::fs;

/// Parse raw document bytes into a normalized JSON value tree.
///
/// Fails on syntactically invalid input and on YAML mappings whose keys
/// are not strings (those have no JSON-tree equivalent).
pub fn parse_document(bytes: &[u8]) -> anyhow::Result<Value> {
    serde_yaml::from_slice(bytes).context("document is not valid YAML or JSON")
}

/// Read and parse the document file at `path`.
///
/// Failures here are per-file: the caller reports them and moves on to
/// the next document.
pub fn load_document(path: &str) -> anyhow::Result<Value> {
    let bytes = fs::read(path).with_context(|| format!("read document file {}", path))?;
    parse_document(&bytes).with_context(|| format!("parse document file {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn yaml_and_json_normalize_to_the_same_tree() {
        let from_yaml = parse_document(b"a:\n  b: 1\nitems:\n  - x\n  - y\n").unwrap();
        let from_json = parse_document(br#"{"a": {"b": 1}, "items": ["x", "y"]}"#).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml, json!({"a": {"b": 1}, "items": ["x", "y"]}));
    }

    #[test]
    fn yaml_null_becomes_json_null() {
        let doc = parse_document(b"a:\n  b: null\n  c:\n").unwrap();
        assert_eq!(doc, json!({"a": {"b": null, "c": null}}));
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(parse_document(b"{ broken: [").is_err());
    }

    #[test]
    fn load_document_errors_on_missing_file() {
        assert!(load_document("/nonexistent/values.yaml").is_err());
    }
}
