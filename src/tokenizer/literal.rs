use nom::{
    branch::alt,
    character::complete::{char, digit1, satisfy},
    combinator::{map, opt, recognize},
    error::context,
    multi::many0,
    sequence::{delimited, pair, preceded},
};

use super::token::{ParserResult, Token};

/// Parses a decimal number, optionally with a fractional part.
///
/// A trailing dot is not consumed: `1.` lexes as the number `1` followed by
/// whatever the dot turns out to be.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_number(input: &str) -> ParserResult<Token> {
    context(
        "number literal",
        map(
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            |n: &str| Token::Number(n.to_string()),
        ),
    )(input)
}

// One character of string content: either a backslash escape or a plain
// character. An escaped newline is not a valid escape.
fn string_fragment(input: &str) -> ParserResult<&str> {
    alt((
        recognize(preceded(char('\\'), satisfy(|c| c != '\n'))),
        recognize(satisfy(|c| c != '"' && c != '\\')),
    ))(input)
}

/// Parses a double-quoted string literal with backslash escapes.
///
/// An unterminated string never matches; the opening quote is then handled
/// by the scanner's error recovery.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_string(input: &str) -> ParserResult<Token> {
    context(
        "string literal",
        map(
            delimited(char('"'), recognize(many0(string_fragment)), char('"')),
            |content: &str| Token::Str(content.to_string()),
        ),
    )(input)
}
