//! Reassembles a house number and its suffix into one canonical token.
//!
//! `"7"` + `"23#M"` becomes `"7-23#M"`, `"103"` + `"3 & 4"` becomes
//! `"103-3-&-4"`: both parts are split on separators and the pieces are
//! joined with single dashes.

use std::sync::LazyLock;

use regex::Regex;

/// Separators between number tokens. `+`, `#` and `&` stay attached.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w+#&]+").expect("valid regex"));

/// Joins the tokens of `number` and `suffix` with dashes.
///
/// Returns `None` when neither part contains a token.
#[must_use]
pub fn normalize_number(number: &str, suffix: &str) -> Option<String> {
    let tokens: Vec<&str> = [number, suffix]
        .into_iter()
        .flat_map(|part| SEPARATOR_RE.split(part))
        .filter(|token| !token.trim().is_empty())
        .collect();

    if tokens.is_empty() {
        return None;
    }

    Some(tokens.join("-"))
}
