//! The ordered pattern registry.
//!
//! The registry is an explicit ordered list of `(kind, matcher)` pairs.
//! The order is a fixed contract, not an artifact: at a given scan position
//! several patterns may match (every keyword is also a valid identifier),
//! and the first entry that matches wins regardless of match length.

use super::keyword::parse_keyword;
use super::literal::{parse_number, parse_string};
use super::symbol::{parse_delimiter, parse_operator};
use super::token::{parse_identifier, ParserResult, Token, TokenKind};

/// An anchored matcher for one token kind.
pub type Matcher = for<'a> fn(&'a str) -> ParserResult<'a, Token>;

/// Ordered list of token patterns, fixed at construction.
///
/// Immutable after construction; may be shared read-only without
/// synchronization.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entries: Vec<(TokenKind, Matcher)>,
}

impl PatternRegistry {
    /// The canonical registry:
    /// `keyword, identifier, operator, number, string, delimiter`.
    ///
    /// Whitespace and newlines are consumed by the scan loop before the
    /// registry is consulted, so they are never entries here.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                (TokenKind::Keyword, parse_keyword as Matcher),
                (TokenKind::Identifier, parse_identifier as Matcher),
                (TokenKind::Operator, parse_operator as Matcher),
                (TokenKind::Number, parse_number as Matcher),
                (TokenKind::String, parse_string as Matcher),
                (TokenKind::Delimiter, parse_delimiter as Matcher),
            ],
        }
    }

    /// The declared token kinds, in priority order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.entries.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn is_registered(&self, kind: TokenKind) -> bool {
        self.entries.iter().any(|(k, _)| *k == kind)
    }

    /// Tries each entry in order, anchored at the start of `input`.
    /// Returns the remaining input and the first token that matched.
    ///
    /// `after_word_char` says whether the character just before `input`
    /// was a word character. Keywords need a word boundary on both sides,
    /// and the leading one only the caller can see: `9if` is a number
    /// followed by the identifier `if`, not the keyword.
    pub(crate) fn try_match<'a>(
        &self,
        input: &'a str,
        after_word_char: bool,
    ) -> Option<(&'a str, Token)> {
        for (kind, matcher) in &self.entries {
            if *kind == TokenKind::Keyword && after_word_char {
                continue;
            }
            if let Ok((rest, token)) = matcher(input) {
                return Some((rest, token));
            }
        }
        None
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
