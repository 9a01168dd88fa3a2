//! Token extraction
//!
//! Pre-processes file content according to the run options and cuts it into
//! tokens with the run's [`MatchRule`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::core::model::{RunOptions, Token};
use crate::core::pattern::MatchRule;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid WHITESPACE_RE regex"));

/// Apply whitespace stripping and case folding, in that order
pub fn prepare<'a>(content: &'a str, rule: &MatchRule, options: &RunOptions) -> Cow<'a, str> {
    let mut text = if options.ignore_whitespace && rule.allows_whitespace_strip() {
        WHITESPACE_RE.replace_all(content, "")
    } else {
        Cow::Borrowed(content)
    };

    if options.ignore_case {
        text = Cow::Owned(text.to_lowercase());
    }

    text
}

/// Extract every token from `content`
pub fn extract_tokens(content: &str, rule: &MatchRule, options: &RunOptions) -> Vec<Token> {
    rule.tokens(&prepare(content, rule, options))
}
