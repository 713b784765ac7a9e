use std::time::Instant;

use nom::{
    bytes::complete::{take_while, take_while1},
    combinator::recognize,
    error::{context, VerboseError},
    sequence::pair,
    IResult,
};
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::config::MorphologyConfig;
use crate::metrics::{MetricsCollector, MetricsReport};
use crate::morphology::{classify, Decomposer, NamingConvention};

use super::keyword::{word_char, Keyword};
use super::pattern::PatternRegistry;
use super::symbol::Delimiter;

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// A classified token. The payload carries what the kind needs; the raw
/// matched text always lives in the surrounding [`TokenSpan`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Token {
    Keyword(Keyword),
    Identifier(Identifier),
    /// The full run of operator characters, e.g. `==` or `+`.
    Operator(String),
    Number(String),
    /// String content without the surrounding quotes.
    Str(String),
    Delimiter(Delimiter),
}

/// The closed set of token kinds the registry can declare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Number,
    String,
    Delimiter,
}

/// An identifier with its morphological analysis attached.
///
/// `morphemes` and `convention` are filled in by the scan loop right before
/// the token is emitted; a bare `Identifier::new` has neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub morphemes: Vec<String>,
    pub convention: Option<NamingConvention>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            morphemes: Vec::new(),
            convention: None,
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Operator(_) => TokenKind::Operator,
            Token::Number(_) => TokenKind::Number,
            Token::Str(_) => TokenKind::String,
            Token::Delimiter(_) => TokenKind::Delimiter,
        }
    }

    /// Morphemes of an identifier; empty for every other kind.
    pub fn morphemes(&self) -> &[String] {
        match self {
            Token::Identifier(identifier) => &identifier.morphemes,
            _ => &[],
        }
    }

    /// Naming convention of an identifier; `None` for every other kind.
    pub fn convention(&self) -> Option<NamingConvention> {
        match self {
            Token::Identifier(identifier) => identifier.convention,
            _ => None,
        }
    }

    fn heap_bytes(&self) -> usize {
        match self {
            Token::Keyword(_) | Token::Delimiter(_) => 0,
            Token::Operator(s) | Token::Number(s) | Token::Str(s) => s.len(),
            Token::Identifier(identifier) => {
                identifier.name.len()
                    + identifier.morphemes.len() * std::mem::size_of::<String>()
                    + identifier.morphemes.iter().map(String::len).sum::<usize>()
            }
        }
    }

    fn heap_reserved(&self) -> usize {
        match self {
            Token::Keyword(_) | Token::Delimiter(_) => 0,
            Token::Operator(s) | Token::Number(s) | Token::Str(s) => s.capacity(),
            Token::Identifier(identifier) => {
                identifier.name.capacity()
                    + identifier.morphemes.capacity() * std::mem::size_of::<String>()
                    + identifier
                        .morphemes
                        .iter()
                        .map(String::capacity)
                        .sum::<usize>()
            }
        }
    }
}

/// A token together with its position in the source.
///
/// Immutable once emitted. `start`/`end` are byte offsets, `line` is
/// 1-based and `column` is 0-based in characters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSpan {
    pub token: Token,
    /// The exact matched substring.
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl TokenSpan {
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }

    pub fn morphemes(&self) -> &[String] {
        self.token.morphemes()
    }

    pub fn convention(&self) -> Option<NamingConvention> {
        self.token.convention()
    }
}

/// A position where no registered pattern matched. Recovered by skipping
/// one character; only ever surfaced as a diagnostic, never as a failure
/// of `tokenize`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unrecognized character {character:?} at line {line}, column {column} (offset {position})")]
pub struct LexicalError {
    pub character: char,
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

// Estimated heap footprint of an emitted token buffer, in bytes.
// Used = exact content bytes; reserved = upper bound from `capacity`,
// the buffer's allocated slot count.
fn memory_footprint(tokens: &[TokenSpan], capacity: usize) -> (usize, usize) {
    let fixed = std::mem::size_of::<TokenSpan>();
    let used = tokens.len() * fixed
        + tokens
            .iter()
            .map(|t| t.value.len() + t.token.heap_bytes())
            .sum::<usize>();
    let reserved = capacity * fixed
        + tokens
            .iter()
            .map(|t| t.value.capacity() + t.token.heap_reserved())
            .sum::<usize>();
    (used, reserved)
}

/// Parser for identifiers: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Tried after the keyword pattern, so a whole word that happens to be a
/// keyword only reaches this parser when the keyword entry was skipped
/// for want of a leading word boundary.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_identifier(input: &str) -> ParserResult<Token> {
    let (input, id) = context(
        "identifier",
        recognize(pair(
            take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        )),
    )(input)?;

    Ok((input, Token::Identifier(Identifier::new(id))))
}

/// The scanner. One instance owns its pattern registry, its morpheme
/// decomposer, and the metrics accumulated across its `tokenize` calls.
///
/// `tokenize` takes `&mut self`, so the metrics fold is exclusive by
/// construction; the registry and affix tables themselves are immutable
/// after `new`.
#[derive(Debug)]
pub struct Tokenizer {
    registry: PatternRegistry,
    decomposer: Decomposer,
    metrics: MetricsCollector,
    errors: Vec<LexicalError>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_config(MorphologyConfig::default())
    }

    pub fn with_config(config: MorphologyConfig) -> Self {
        Self {
            registry: PatternRegistry::standard(),
            decomposer: Decomposer::new(config),
            metrics: MetricsCollector::default(),
            errors: Vec::new(),
        }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Lexical errors recovered during the most recent `tokenize` call.
    pub fn last_errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Metrics accumulated so far; `None` before the first `tokenize` call.
    pub fn get_metrics(&self) -> Option<MetricsReport> {
        self.metrics.report()
    }

    /// Scans `source` into tokens, left to right, in a single pass.
    ///
    /// Never fails: whitespace is consumed silently and an unrecognized
    /// character is recorded as a [`LexicalError`] and skipped. Identical
    /// input always yields an identical token sequence.
    #[tracing::instrument(level = "debug", skip(self, source))]
    pub fn tokenize(&mut self, source: &str) -> Vec<TokenSpan> {
        let started = Instant::now();
        self.errors.clear();

        let mut tokens = Vec::new();
        let mut remaining = source;
        let mut position = 0;
        let mut line = 1;
        let mut column = 0;
        // Whether the character just consumed was a word character; the
        // keyword pattern needs a word boundary on its left as well as
        // its right, so `9if` lexes as a number then the identifier `if`.
        let mut after_word_char = false;

        while let Some(c) = remaining.chars().next() {
            // Newlines reset the column; other whitespace just advances it.
            if c == '\n' {
                line += 1;
                column = 0;
                position += 1;
                remaining = &remaining[1..];
                after_word_char = false;
                continue;
            }
            if c.is_whitespace() {
                position += c.len_utf8();
                column += 1;
                remaining = &remaining[c.len_utf8()..];
                after_word_char = false;
                continue;
            }

            match self.registry.try_match(remaining, after_word_char) {
                Some((rest, mut token)) => {
                    let consumed = &remaining[..remaining.len() - rest.len()];

                    if let Token::Identifier(identifier) = &mut token {
                        identifier.morphemes = self.decomposer.decompose(&identifier.name);
                        identifier.convention = classify(&identifier.name);
                    }

                    tokens.push(TokenSpan {
                        token,
                        value: consumed.to_string(),
                        start: position,
                        end: position + consumed.len(),
                        line,
                        column,
                    });

                    position += consumed.len();
                    column += consumed.chars().count();
                    after_word_char = consumed.chars().last().map_or(false, word_char);
                    remaining = rest;
                }
                None => {
                    let error = LexicalError {
                        character: c,
                        position,
                        line,
                        column,
                    };
                    tracing::warn!("{}", error);
                    self.errors.push(error);

                    position += c.len_utf8();
                    column += 1;
                    remaining = &remaining[c.len_utf8()..];
                    after_word_char = word_char(c);
                }
            }
        }

        let (memory_used, memory_reserved) = memory_footprint(&tokens, tokens.capacity());
        self.metrics.record(
            started.elapsed(),
            tokens.len(),
            self.errors.len(),
            memory_used,
            memory_reserved,
        );

        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
