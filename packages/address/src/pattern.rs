//! The composed street / number / suffix pattern.
//!
//! The whole cleaned address must match:
//!
//! * **street** — optional leading digits (`"1e Deltageul"`), a letter,
//!   then anything that is neither a digit nor one of `$ % @ # *`
//! * **number** — digits, the first of which directly follows a letter, a
//!   dash or a space
//! * **suffix** — whatever follows the number, limited to letters, digits
//!   and `- / + , . ( ) # &` plus whitespace
//!
//! Number and suffix are optional as a pair. The number needs a lookbehind
//! assertion, which the `regex` crate does not support, so this pattern is
//! compiled with `fancy-regex`.

use std::sync::LazyLock;

use fancy_regex::Regex;

/// Street name: optional digits, a letter, then non-digit filler.
const STREET: &str = r"[0-9]*[a-z][^0-9$%@#*]+";

/// House number, preceded by a letter, dash or space.
const NUMBER: &str = r"(?<=[a-z\- ])[0-9]+";

/// Everything after the number. Only ASCII whitespace is allowed.
const SUFFIX: &str = r"[a-z0-9\-/ \t\n\x0B\x0C\r+,.()#&]*";

/// Characters trimmed from both ends of every capture.
const CAPTURE_TRIM: &[char] = &[' ', '-', '.', '/'];

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<street>{STREET})(?:(?P<number>{NUMBER})(?P<suffix>{SUFFIX}))?$"
    ))
    .expect("valid regex")
});

/// The three trimmed captures of a matched address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParts {
    /// Street name, still containing special-token placeholders.
    pub street: String,
    /// House number, empty when the address has none.
    pub number: String,
    /// Number suffix, empty when there is none.
    pub suffix: String,
}

/// Matches a cleaned address against the composed pattern.
///
/// Returns `None` when the address does not match. A match aborted by the
/// regex engine (backtrack limit) is logged and also reported as `None`.
#[must_use]
pub fn match_address(cleaned: &str) -> Option<AddressParts> {
    let caps = match ADDRESS_RE.captures(cleaned) {
        Ok(caps) => caps?,
        Err(e) => {
            log::warn!("Address pattern aborted on \"{cleaned}\": {e}");
            return None;
        }
    };

    let group = |name: &str| {
        caps.name(name)
            .map_or("", |m| m.as_str().trim_matches(CAPTURE_TRIM))
            .to_string()
    };

    Some(AddressParts {
        street: group("street"),
        number: group("number"),
        suffix: group("suffix"),
    })
}

/// Length of the longest run of consecutive ASCII letters.
#[must_use]
pub fn longest_alpha_run(input: &str) -> usize {
    input
        .split(|c: char| !c.is_ascii_alphabetic())
        .map(str::len)
        .max()
        .unwrap_or(0)
}
