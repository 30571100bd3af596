#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Street address normalization.
//!
//! Address data arrives from many sources in many shapes:
//! - HTML-escaped: `"De Ruyterstra&#8203;at"`
//! - With noise: `"Antwerpsestraat 102 -VERLAAGD!"`
//! - Number first: `"25 witton street"`
//! - With odd suffixes: `"Laan van Rijnwijk 1*A7*"`, `"Herengracht 67 ³"`
//!
//! [`AddressNormalizer::parse`] cleans such a string up (see [`normalize`]),
//! splits it into street, number and suffix (see [`pattern`]) and joins the
//! number and suffix into one canonical dashed token (see [`number`]).

pub mod config;
pub mod normalize;
pub mod number;
pub mod pattern;
pub mod special_tokens;

use regex::Regex;
use street_address_models::{NormalizerConfig, ParsedAddress};
use thiserror::Error;

/// An address that could not be split into street and number.
///
/// Parsing is deterministic, so retrying will not help. Records failing
/// with this error need manual review.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAddressError {
    /// The cleaned address does not match the street/number pattern.
    #[error("Unable to parse address \"{address}\"")]
    Unparseable {
        /// The address after cleanup.
        address: String,
    },

    /// The number suffix contains a word that is too long to be part of a
    /// house number, e.g. a second street name.
    #[error("Unable to parse number suffix \"{suffix}\"")]
    SuffixOverrun {
        /// The offending suffix.
        suffix: String,
    },
}

impl InvalidAddressError {
    /// The part of the input that could not be parsed.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Unparseable { address } => address,
            Self::SuffixOverrun { suffix } => suffix,
        }
    }
}

/// Errors from building a normalizer or loading its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or has wrong types.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The keyword list could not be compiled into a pattern.
    #[error("Keyword pattern error: {0}")]
    Keywords(#[from] regex::Error),
}

/// Parses free-form street addresses into [`ParsedAddress`]es.
///
/// The configuration is fixed at construction. Parsing keeps no state
/// between calls, so one normalizer can be shared across threads.
#[derive(Debug, Clone)]
pub struct AddressNormalizer {
    config: NormalizerConfig,
    keywords: Option<Regex>,
}

impl Default for AddressNormalizer {
    fn default() -> Self {
        let config = config::default_config();
        let keywords = compile_keywords(&config.strippable_keywords)
            .unwrap_or_else(|e| panic!("Failed to compile default keywords: {e}"));

        Self { config, keywords }
    }
}

/// Builds one case-insensitive alternation of the escaped keywords.
fn compile_keywords(keywords: &[String]) -> Result<Option<Regex>, regex::Error> {
    let escaped: Vec<String> = keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(k))
        .collect();

    if escaped.is_empty() {
        return Ok(None);
    }

    Regex::new(&format!("(?i){}", escaped.join("|"))).map(Some)
}

impl AddressNormalizer {
    /// Creates a normalizer for the given configuration.
    ///
    /// # Errors
    ///
    /// * If the keyword list is too large to compile into a pattern
    pub fn new(config: NormalizerConfig) -> Result<Self, ConfigError> {
        let keywords = compile_keywords(&config.strippable_keywords)?;
        Ok(Self { config, keywords })
    }

    /// Creates a normalizer from a TOML configuration string.
    ///
    /// # Errors
    ///
    /// * If the TOML is invalid
    /// * If the keyword list cannot be compiled
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Self::new(config::from_toml_str(toml_str)?)
    }

    /// The configuration this normalizer was built with.
    #[must_use]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Parses an address into street and number.
    ///
    /// Returns `Ok(None)` for empty input and for `"0"`.
    ///
    /// # Errors
    ///
    /// * If the cleaned address does not have a street/number shape
    /// * If the number suffix contains a run of letters at least
    ///   `max_suffix_alpha_run` long
    pub fn parse(&self, address: &str) -> Result<Option<ParsedAddress>, InvalidAddressError> {
        if address.is_empty() || address == "0" {
            return Ok(None);
        }

        let cleaned = normalize::normalize_address(address, self.keywords.as_ref());
        log::trace!("Normalized address \"{address}\" to \"{cleaned}\"");

        let Some(parts) = pattern::match_address(&cleaned) else {
            log::debug!("Rejecting address \"{address}\": no street/number match");
            return Err(InvalidAddressError::Unparseable { address: cleaned });
        };

        if !parts.suffix.is_empty()
            && pattern::longest_alpha_run(&parts.suffix) >= self.config.max_suffix_alpha_run
        {
            log::debug!(
                "Rejecting address \"{address}\": suffix \"{}\" is too wordy",
                parts.suffix
            );
            return Err(InvalidAddressError::SuffixOverrun {
                suffix: parts.suffix,
            });
        }

        let number = number::normalize_number(&parts.number, &parts.suffix);
        let street = special_tokens::restore(&parts.street).trim().to_string();

        Ok(Some(ParsedAddress::new(
            street,
            number,
            non_empty(parts.number),
            non_empty(parts.suffix),
        )))
    }

    /// Like [`Self::parse`], treating `None` as empty input.
    ///
    /// # Errors
    ///
    /// * See [`Self::parse`]
    pub fn parse_optional(
        &self,
        address: Option<&str>,
    ) -> Result<Option<ParsedAddress>, InvalidAddressError> {
        address.map_or(Ok(None), |address| self.parse(address))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
