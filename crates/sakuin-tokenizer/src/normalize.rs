//! Text normalization

use crate::charclass::to_halfwidth;

/// Normalize text for indexing and querying
///
/// - Fullwidth Latin letters and digits fold to halfwidth
/// - Letters are lowercased
/// - Runs of whitespace (including the ideographic space) collapse to one space
/// - Leading and trailing whitespace is trimmed
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(to_halfwidth(c).to_lowercase());
    }

    out
}
