//! Pre-match cleanup of raw address strings.
//!
//! Raw addresses arrive HTML-escaped, OCR'd or typed into web forms, so
//! they carry entities, asterisks, parentheses, zero-width characters,
//! trailing punctuation and the odd superscript digit. The pipeline in
//! [`normalize_address`] turns them into a single-spaced, street-first
//! string that the address pattern can match.
//!
//! Every stage is a pure `&str -> String` transform. The stages depend on
//! each other's output shape and run in a fixed order.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::special_tokens;

/// Cleanup rewrites, applied one after another to the previous output.
///
/// Trailing punctuation is stripped after asterisks and parentheses are
/// gone, so inputs like `"5-**,"` or `"31 (*)"` lose their whole tail.
static CLEANUP_REWRITES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // asterisks
        (r"\*", " "),
        // zero-width and typographic spaces
        (r"[\x{2000}-\x{200F}]", ""),
        // parentheses, keeping their contents
        (r"[()]", ""),
        // trailing punctuation and whitespace
        (r#"[\-/.,"' !?`]+$"#, ""),
        (r" {2,}", " "),
        // "Oltmansstraat,68T" / "rudolfarendsstraat#20B"
        (r"([^0-9])[,#]([0-9]+)", "${1} ${2}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

/// Regex for number-first addresses such as `"25 witton street"`.
static NUMBER_FIRST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([0-9]{2,}) ([a-z ]+)$").expect("valid regex"));

/// Runs the full cleanup pipeline.
///
/// `keywords` is the compiled strippable-keyword alternation, or `None`
/// when no keywords are configured.
#[must_use]
pub fn normalize_address(raw: &str, keywords: Option<&Regex>) -> String {
    let address = decode_entities(raw);
    let address = strip_keywords(&address, keywords);
    let address = apply_cleanup_rewrites(&address);
    let address = decompose_compatibility(&address);
    let address = swap_leading_number(&address);
    let address = special_tokens::protect(&address);
    let address = expand_street_abbreviation(&address);
    capitalize_first(address.trim())
}

/// Decodes numeric and named character entities and trims the result.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).trim().to_string()
}

/// Deletes every match of the keyword pattern.
#[must_use]
pub fn strip_keywords(input: &str, keywords: Option<&Regex>) -> String {
    match keywords {
        Some(re) => re.replace_all(input, "").into_owned(),
        None => input.to_string(),
    }
}

/// Applies [`CLEANUP_REWRITES`] in order.
#[must_use]
pub fn apply_cleanup_rewrites(input: &str) -> String {
    CLEANUP_REWRITES
        .iter()
        .fold(input.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

/// Unicode compatibility decomposition (NFKD). Turns superscript and
/// subscript digits into plain digits so they can end up in the number.
#[must_use]
pub fn decompose_compatibility(input: &str) -> String {
    input.nfkd().collect()
}

/// Rewrites `"<number> <street>"` as `"<street> <number>"`.
///
/// Only applies when the number has at least two digits and the rest is
/// letters and spaces. The number is written back as an integer, so
/// leading zeros are dropped.
#[must_use]
pub fn swap_leading_number(input: &str) -> String {
    let Some(caps) = NUMBER_FIRST_RE.captures(input) else {
        return input.to_string();
    };

    let number = caps[1].trim_start_matches('0');
    let number = if number.is_empty() { "0" } else { number };

    format!("{} {number}", &caps[2])
}

/// Expands the `str.` abbreviation to `straat`.
#[must_use]
pub fn expand_street_abbreviation(input: &str) -> String {
    input.replace("str.", "straat ")
}

/// Uppercases the first character.
#[must_use]
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
