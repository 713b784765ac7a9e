//! # Tokenizer
//!
//! Single-pass lexical scanner that turns source text into a stream of
//! positioned tokens, enriching every identifier with its morphological
//! decomposition and naming-convention tag as it is emitted.
//!
//! ## Component Structure
//!
//! * [`token`]: Token types, the [`Tokenizer`] itself and its scan loop
//! * [`pattern`]: The ordered pattern registry that decides match priority
//! * [`keyword`]: Keyword parsing
//! * [`symbol`]: Operator and delimiter parsing
//! * [`literal`]: Number and string literal parsing
//!
//! ## Match Priority
//!
//! At any scan position several patterns may match. The registry order
//! (`keyword, identifier, operator, number, string, delimiter`) decides the
//! winner, not the match length; see [`pattern::PatternRegistry`].
//!
//! ## Error Recovery
//!
//! An unrecognized character never aborts the scan: it is recorded as a
//! [`token::LexicalError`], skipped, and scanning resumes at the next
//! character.

pub mod keyword;
pub mod literal;
pub mod pattern;
pub mod symbol;
pub mod token;

pub use keyword::Keyword;
pub use pattern::{Matcher, PatternRegistry};
pub use symbol::Delimiter;
pub use token::{
    Identifier, LexicalError, ParserResult, Token, TokenKind, TokenSpan, Tokenizer,
};
