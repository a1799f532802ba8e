//! Dot-notation key path used in spec targets.
//!
//! Example spec path: "a.b.2.c"  =>  KeyPath { segments: ["a", "b", "2", "c"] }
//!
//! Segments are kept as strings. Whether a numeric segment means "array
//! index" or "map key" is decided at resolution time by the node being
//! walked: an object with the key "2" matches the segment 2 directly.

use anyhow::bail;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path like "items.1.name".
    ///
    /// The empty path and paths with empty segments ("a..b", a leading or
    /// trailing dot) are rejected; they never address anything.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        if s.trim().is_empty() {
            bail!("path must not be empty");
        }

        let mut segments = Vec::new();
        for seg in s.split('.') {
            if seg.is_empty() {
                bail!("path {:?} contains an empty segment", s);
            }
            segments.push(seg.to_string());
        }

        Ok(Self {
            raw: s.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
