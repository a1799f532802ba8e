//! Output rendering. Plain text only.

pub mod text;

pub use text::render_warnings;
