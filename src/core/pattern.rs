//! Pattern resolution
//!
//! Turns `--expression` / `--library` into the single [`MatchRule`] used for
//! every file in a run.

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::core::model::{CharfreqError, Token};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w").expect("Invalid WORD_RE regex"));
static WORD_OR_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w\s]").expect("Invalid WORD_OR_SPACE_RE regex"));
static CJK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{4E00}-\x{9FFF}]").expect("Invalid CJK_RE regex"));
static ASCII_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z]").expect("Invalid ASCII_LETTER_RE regex"));
static ALNUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9]").expect("Invalid ALNUM_RE regex"));
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("Invalid DIGIT_RE regex"));
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("Invalid SPACE_RE regex"));
static PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid PUNCT_RE regex"));

/// Named character-class library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Library {
    /// `c`: word characters (letters, digits, underscore)
    Word,
    /// `cp`: word or whitespace characters
    WordOrSpace,
    /// `cn`: CJK Unified Ideographs
    Cjk,
    /// `en`: ASCII letters
    AsciiLetter,
    /// `alnum`: ASCII letters and digits
    Alnum,
    /// `num`: digits
    Digit,
    /// `sp`: whitespace
    Space,
    /// `punc`: neither word nor whitespace
    Punct,
}

impl Library {
    pub const ALL: [Library; 8] = [
        Library::Word,
        Library::WordOrSpace,
        Library::Cjk,
        Library::AsciiLetter,
        Library::Alnum,
        Library::Digit,
        Library::Space,
        Library::Punct,
    ];

    /// The name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Library::Word => "c",
            Library::WordOrSpace => "cp",
            Library::Cjk => "cn",
            Library::AsciiLetter => "en",
            Library::Alnum => "alnum",
            Library::Digit => "num",
            Library::Space => "sp",
            Library::Punct => "punc",
        }
    }

    /// The compiled class pattern
    pub fn regex(&self) -> &'static Regex {
        match self {
            Library::Word => &WORD_RE,
            Library::WordOrSpace => &WORD_OR_SPACE_RE,
            Library::Cjk => &CJK_RE,
            Library::AsciiLetter => &ASCII_LETTER_RE,
            Library::Alnum => &ALNUM_RE,
            Library::Digit => &DIGIT_RE,
            Library::Space => &SPACE_RE,
            Library::Punct => &PUNCT_RE,
        }
    }

    /// Whitespace is the subject of these classes, so it is never stripped
    pub fn keeps_whitespace(&self) -> bool {
        matches!(self, Library::WordOrSpace | Library::Space)
    }

    fn names() -> String {
        Self::ALL
            .iter()
            .map(|lib| lib.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Library {
    type Err = CharfreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lib| lib.name() == s)
            .ok_or_else(|| {
                CharfreqError::config(format!(
                    "Unknown library `{}` (expected one of: {})",
                    s,
                    Self::names()
                ))
            })
    }
}

/// The rule used to cut file content into tokens
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// User-supplied regular expression
    Expression(Regex),
    /// Named library class
    Library(Library),
    /// Every character is a token
    EveryChar,
}

impl MatchRule {
    /// Whether whitespace may be stripped before matching under this rule
    pub fn allows_whitespace_strip(&self) -> bool {
        match self {
            MatchRule::Expression(_) => false,
            MatchRule::Library(lib) => !lib.keeps_whitespace(),
            MatchRule::EveryChar => true,
        }
    }

    /// Cut `content` into tokens (non-overlapping matches, empty matches dropped)
    pub fn tokens(&self, content: &str) -> Vec<Token> {
        match self {
            MatchRule::Expression(re) => find_all(re, content),
            MatchRule::Library(lib) => find_all(lib.regex(), content),
            MatchRule::EveryChar => content.chars().map(String::from).collect(),
        }
    }
}

fn find_all(re: &Regex, content: &str) -> Vec<Token> {
    re.find_iter(content)
        .filter(|m| !m.is_empty())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Resolve the match rule for a run
///
/// An empty expression is treated as absent.
pub fn resolve(expression: Option<&str>, library: Option<&str>) -> Result<MatchRule, CharfreqError> {
    let expression = expression.filter(|e| !e.is_empty());

    match (expression, library) {
        (Some(_), Some(_)) => Err(CharfreqError::config(
            "--expression and --library options cannot be used together",
        )),
        (Some(expr), None) => Regex::new(expr)
            .map(MatchRule::Expression)
            .map_err(|e| CharfreqError::config(format!("Invalid expression `{}`: {}", expr, e))),
        (None, Some(name)) => name.parse::<Library>().map(MatchRule::Library),
        (None, None) => Ok(MatchRule::EveryChar),
    }
}
