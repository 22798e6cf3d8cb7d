//! Validation of the old/new URL pair supplied by the operator.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// An absolute URL: `http://` or `https://` followed by at least one character.
pub const URL_PATTERN: &str = r"^https?://.+";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(URL_PATTERN).expect("valid regex"));

/// Message shown when either argument fails [`URL_PATTERN`].
pub const INVALID_URL_MESSAGE: &str =
    "The given urls are expected to be full urls starting with http:// or https://";

/// The search and replacement URLs for a single run.
///
/// Only constructed through [`ReplacementSpec::parse`], so both fields are
/// always quote-free and match [`URL_PATTERN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSpec {
    old_url: String,
    new_url: String,
}

impl ReplacementSpec {
    /// Strip single quotes from both raw arguments and validate them.
    pub fn parse(raw_old: &str, raw_new: &str) -> Result<Self, CoreError> {
        let old_url = strip_single_quotes(raw_old);
        let new_url = strip_single_quotes(raw_new);

        if !is_absolute_url(&old_url) || !is_absolute_url(&new_url) {
            return Err(CoreError::Validation(INVALID_URL_MESSAGE.to_string()));
        }

        Ok(Self { old_url, new_url })
    }

    pub fn old_url(&self) -> &str {
        &self.old_url
    }

    pub fn new_url(&self) -> &str {
        &self.new_url
    }
}

/// Remove every `'` from the input.
pub fn strip_single_quotes(raw: &str) -> String {
    raw.replace('\'', "")
}

/// Check a value against [`URL_PATTERN`]. Syntactic only.
pub fn is_absolute_url(value: &str) -> bool {
    URL_RE.is_match(value)
}
