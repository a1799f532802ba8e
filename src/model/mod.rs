//! Evaluation model: combine one parsed document with the target list.
//!
//! This is the decision core. For each target we test whether its path
//! resolves in the document and compare that against the `required` flag:
//!
//!   warn = (exists && !required) || (!exists && required)
//!
//! i.e. warn whenever actual presence contradicts the declared
//! expectation. Evaluation is pure: same document + same targets always
//! yields the same warnings, and target order only affects output order.

use crate::doc::path_exists;
use crate::spec::Target;
use serde_json::Value;

/// A single triggered warning, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub path: String,
    pub message: String,
}

/// Evaluate every target against one document, in spec order.
pub fn evaluate_document(doc: &Value, targets: &[Target]) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for target in targets {
        let exists = path_exists(doc, &target.path);
        if exists != target.required {
            warnings.push(Warning {
                path: target.path.to_string(),
                message: target.message.clone(),
            });
        }
    }
    warnings
}
