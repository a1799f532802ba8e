//! Spec layer: spec-file schema + validated in-memory structures.
//!
//! This module is intentionally separate from document parsing and
//! rendering. It owns:
//! - KeyPath type (dot-notation address)
//! - Target records loaded from the spec file

pub mod path;
pub mod targets;

pub use path::KeyPath;
pub use targets::{RawTarget, Target, load_targets, parse_targets};
