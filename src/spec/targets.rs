//! Spec-file targets: the list of path checks to run against each document.
//!
//! Spec file shape (YAML or JSON, a sequence of records):
//!
//! - path: "spec.template.metadata"   # dot-notation key path
//!   msg: "moved in v2, see CHANGELOG"
//!   required: false                  # optional, defaults to false
//!
//! `required: false` means the path is expected to be *absent* (a
//! deprecation check, warn when found); `required: true` means it is
//! expected to be present (warn when missing). The default is deliberate:
//! an unannotated record is a deprecation check.
//!
//! We keep two representations:
//! - RawTarget: serde-friendly record as it appears in the spec file
//! - Target: validated, with the path parsed into a KeyPath

use crate::spec::KeyPath;
use anyhow::Context;
use serde::Deserialize;
use std::fs;

/// Raw record shape as it appears in the spec file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTarget {
    pub path: String,

    #[serde(rename = "msg")]
    pub message: String,

    #[serde(default)]
    pub required: bool,
}

/// A single validated path-check rule.
#[derive(Debug, Clone)]
pub struct Target {
    pub path: KeyPath,
    pub message: String,
    pub required: bool,
}

/// Parse spec-file bytes into an ordered target list.
///
/// YAML is a superset of JSON, so JSON spec files go through the same
/// parse. Any shape violation (not a sequence, missing `path`/`msg`,
/// unparsable path) is fatal to the whole run.
pub fn parse_targets(bytes: &[u8]) -> anyhow::Result<Vec<Target>> {
    let raw: Vec<RawTarget> =
        serde_yaml::from_slice(bytes).context("spec file must be a sequence of target records")?;

    let mut targets = Vec::with_capacity(raw.len());
    for record in raw {
        let path = KeyPath::parse(&record.path)
            .with_context(|| format!("bad path in spec file: {:?}", record.path))?;
        targets.push(Target {
            path,
            message: record.message,
            required: record.required,
        });
    }

    Ok(targets)
}

/// Read and parse the spec file at `path`.
///
/// An unreadable spec file is as fatal as an unparsable one: without the
/// target list there is nothing to check.
pub fn load_targets(path: &str) -> anyhow::Result<Vec<Target>> {
    let bytes = fs::read(path).with_context(|| format!("read spec file {}", path))?;
    parse_targets(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_yaml_spec() {
        let spec = b"
- path: a.b
  msg: deprecated
  required: false
- path: x.y
  msg: must exist
  required: true
";
        let targets = parse_targets(spec).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].path.to_string(), "a.b");
        assert_eq!(targets[0].message, "deprecated");
        assert!(!targets[0].required);
        assert!(targets[1].required);
    }

    #[test]
    fn parses_json_spec_through_same_path() {
        let spec = br#"[{"path": "a.b", "msg": "deprecated"}]"#;
        let targets = parse_targets(spec).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].path.to_string(), "a.b");
    }

    #[test]
    fn required_defaults_to_false() {
        let spec = b"
- path: spec.replicas
  msg: replicas is managed by the autoscaler now
";
        let targets = parse_targets(spec).unwrap();
        assert!(!targets[0].required);
    }

    #[test]
    fn rejects_malformed_spec() {
        assert!(parse_targets(b"{ not yaml: [").is_err());
    }

    #[test]
    fn rejects_wrong_shape() {
        // A mapping, not a sequence of records.
        assert!(parse_targets(b"path: a.b\nmsg: hi\n").is_err());
        // Missing msg.
        assert!(parse_targets(b"- path: a.b\n").is_err());
    }

    #[test]
    fn rejects_unparsable_path() {
        assert!(parse_targets(b"- path: \"a..b\"\n  msg: hi\n").is_err());
    }

    #[test]
    fn empty_sequence_is_a_valid_spec() {
        let targets = parse_targets(b"[]").unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn load_targets_errors_on_missing_file() {
        assert!(load_targets("/nonexistent/keycheck-spec.yaml").is_err());
    }
}
