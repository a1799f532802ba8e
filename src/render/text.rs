//! Plain-text rendering of triggered warnings.

use crate::model::Warning;

/// Render warnings as aligned two-line blocks, one per warning:
///
/// ```text
///
///    Item  spec.template.metadata
/// Message  moved in v2, see CHANGELOG
/// ```
///
/// Each block is preceded by a blank line so consecutive warnings stay
/// visually separated. No warnings renders as the empty string.
pub fn render_warnings(warnings: &[Warning]) -> String {
    let mut out = String::new();
    for warning in warnings {
        out.push_str(&format!(
            "\n   Item  {}\nMessage  {}\n",
            warning.path, warning.message
        ));
    }
    out
}
