//! Key path resolution: walk a normalized document tree segment by segment.

use crate::spec::KeyPath;
use serde_json::Value;

/// Resolve `path` inside `doc`, returning the addressed value if every
/// segment matches.
///
/// Walk rules:
/// - object node: the segment must match a field name (a map key "2"
///   matches the segment 2)
/// - array node: the segment must parse as a usize and be in bounds
/// - scalar or null node with segments remaining: no match
///
/// A path that lands on an explicit null resolves successfully. The key
/// is structurally present, which is what a presence check asks about.
pub fn resolve<'a>(doc: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    let mut node = doc;
    for seg in path.segments() {
        node = match node {
            Value::Object(map) => map.get(seg)?,
            Value::Array(items) => {
                let idx: usize = seg.parse().ok()?;
                items.get(idx)?
            }
            _ => return None,
        };
    }
    Some(node)
}

/// True if `path` addresses a structurally present value in `doc`.
pub fn path_exists(doc: &Value, path: &KeyPath) -> bool {
    resolve(doc, path).is_some()
}
