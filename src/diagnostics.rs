//! Stderr diagnostics. Warnings are non-fatal notes about skipped work;
//! errors accompany a non-zero exit.

use std::fmt::Display;

pub fn warn(msg: impl Display) {
    eprintln!("WARNING: {}", msg);
}

pub fn error(msg: impl Display) {
    eprintln!("ERROR: {}", msg);
}
