#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for the street address normalizer.
//!
//! This crate contains only data types and configuration structs. It has
//! no heavyweight dependencies (no regex engine, no I/O).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Keywords stripped from every address when no configuration is given.
pub const DEFAULT_STRIPPABLE_KEYWORDS: &[&str] = &["recreatie", "verlaagd"];

/// Default length of the alphabetic run that makes a number suffix invalid.
pub const DEFAULT_MAX_SUFFIX_ALPHA_RUN: usize = 5;

/// Configuration for an address normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Words or phrases deleted (case-insensitively, as literal substrings)
    /// before the address is matched.
    #[serde(default = "default_strippable_keywords")]
    pub strippable_keywords: Vec<String>,

    /// A number suffix containing a run of this many letters (or more) is
    /// rejected. Long words in the suffix slot usually mean a second street
    /// or locality was swallowed by the match.
    #[serde(default = "default_max_suffix_alpha_run")]
    pub max_suffix_alpha_run: usize,
}

fn default_strippable_keywords() -> Vec<String> {
    DEFAULT_STRIPPABLE_KEYWORDS
        .iter()
        .map(ToString::to_string)
        .collect()
}

const fn default_max_suffix_alpha_run() -> usize {
    DEFAULT_MAX_SUFFIX_ALPHA_RUN
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strippable_keywords: default_strippable_keywords(),
            max_suffix_alpha_run: default_max_suffix_alpha_run(),
        }
    }
}

impl NormalizerConfig {
    /// Creates a configuration from a keyword list and a suffix threshold.
    #[must_use]
    pub fn new<I, S>(strippable_keywords: I, max_suffix_alpha_run: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strippable_keywords: strippable_keywords.into_iter().map(Into::into).collect(),
            max_suffix_alpha_run,
        }
    }
}

/// A street address split into street name and canonical street number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    /// Street name, e.g. `"Laan van Rijnwijk"`.
    pub street: String,
    /// Canonical street number with its suffix tokens joined by dashes,
    /// e.g. `"1-A7"`. `None` when the address has no number.
    pub number: Option<String>,
    /// The matched house number before the suffix was merged in.
    pub number_without_suffix: Option<String>,
    /// The matched suffix as it appeared after cleanup.
    pub suffix: Option<String>,
    /// Street and canonical number recombined, e.g. `"Laan van Rijnwijk 1-A7"`.
    pub address: String,
}

impl ParsedAddress {
    /// Builds a parsed address, deriving [`Self::address`] from the street
    /// and the canonical number.
    #[must_use]
    pub fn new(
        street: String,
        number: Option<String>,
        number_without_suffix: Option<String>,
        suffix: Option<String>,
    ) -> Self {
        let address = format!("{street} {}", number.as_deref().unwrap_or_default())
            .trim()
            .to_string();

        Self {
            street,
            number,
            number_without_suffix,
            suffix,
            address,
        }
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
