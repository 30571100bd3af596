//! Placeholders for Dutch contractions.
//!
//! Street names such as `'s-Gravendijkwal` and `'t Leantsje` start with an
//! apostrophe contraction. The apostrophe is stripped or treated as
//! punctuation by the cleanup rewrites and the street pattern, so the
//! contractions are swapped for plain-letter placeholders before matching
//! and swapped back on the extracted street name.

/// Contraction → placeholder, longest contraction first so that `'s-`
/// wins over `'s`.
pub const SPECIAL_TOKENS: &[(&str, &str)] = &[
    ("'s-", "SCH_DASH_TOKEN"),
    ("'s", "SCH_TOKEN"),
    ("'t", "HET_TOKEN"),
];

/// Replaces every contraction with its placeholder.
#[must_use]
pub fn protect(input: &str) -> String {
    SPECIAL_TOKENS
        .iter()
        .fold(input.to_string(), |acc, (contraction, placeholder)| {
            acc.replace(contraction, placeholder)
        })
}

/// Replaces every placeholder with its original contraction.
#[must_use]
pub fn restore(input: &str) -> String {
    SPECIAL_TOKENS
        .iter()
        .fold(input.to_string(), |acc, (contraction, placeholder)| {
            acc.replace(placeholder, contraction)
        })
}
