//! # Symbol Token Handling
//!
//! Operators and delimiters recognized by the scanner.
//!
//! ## Symbol Types
//!
//! * Operators: a maximal run of operator characters (`+ - * / = < > ! & | ^ %`)
//!   is emitted as a single `operator` token, so `==` or `<=` is one token,
//!   not two.
//! * [`Delimiter`]: single structural characters such as parentheses,
//!   brackets, braces, and punctuation.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::{map, value},
    error::context,
};
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::token::{ParserResult, Token};

/// Constant for the close brace character, used because direct serialization
/// in strum causes errors.
const CLOSE_BRACE: &str = "}";

/// Represents delimiters: structural single-character tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr, Serialize,
)]
pub enum Delimiter {
    /// Opening parenthesis (`(`)
    #[strum(serialize = "(")]
    OpenParen,
    /// Closing parenthesis (`)`)
    #[strum(serialize = ")")]
    CloseParen,
    /// Opening bracket (`[`)
    #[strum(serialize = "[")]
    OpenBracket,
    /// Closing bracket (`]`)
    #[strum(serialize = "]")]
    CloseBracket,
    /// Opening brace (`{`)
    #[strum(serialize = "{")]
    OpenBrace,
    /// Closing brace (`}`)
    #[strum(serialize = "CLOSE_BRACE")]
    CloseBrace,
    /// Comma (`,`)
    #[strum(serialize = ",")]
    Comma,
    /// Semicolon (`;`)
    #[strum(serialize = ";")]
    Semicolon,
    /// Colon (`:`)
    #[strum(serialize = ":")]
    Colon,
}

fn operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '%'
    )
}

/// Parses a maximal run of operator characters as one operator token.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<Token> {
    context(
        "operator",
        map(take_while1(operator_char), |op: &str| {
            Token::Operator(op.to_string())
        }),
    )(input)
}

/// Parses a single delimiter character.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_delimiter(input: &str) -> ParserResult<Token> {
    context(
        "delimiter",
        map(
            alt((
                value(Delimiter::OpenParen, tag("(")),
                value(Delimiter::CloseParen, tag(")")),
                value(Delimiter::OpenBracket, tag("[")),
                value(Delimiter::CloseBracket, tag("]")),
                value(Delimiter::OpenBrace, tag("{")),
                value(Delimiter::CloseBrace, tag(CLOSE_BRACE)),
                value(Delimiter::Comma, tag(",")),
                value(Delimiter::Semicolon, tag(";")),
                value(Delimiter::Colon, tag(":")),
            )),
            Token::Delimiter,
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_match_greedily() {
        let test_cases = [
            ("== x", "=="),
            ("<= x", "<="),
            ("&& x", "&&"),
            ("=-+ x", "=-+"),
            ("+ x", "+"),
            ("% x", "%"),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, token) = parse_operator(input).unwrap();
            assert_eq!(token, Token::Operator(expected.to_string()));
            assert_eq!(rest, " x");
        }
    }

    #[test]
    fn test_delimiters() {
        let test_cases = [
            ("(", Delimiter::OpenParen),
            (")", Delimiter::CloseParen),
            ("[", Delimiter::OpenBracket),
            ("]", Delimiter::CloseBracket),
            ("{", Delimiter::OpenBrace),
            ("}", Delimiter::CloseBrace),
            (",", Delimiter::Comma),
            (";", Delimiter::Semicolon),
            (":", Delimiter::Colon),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, token) = parse_delimiter(input).unwrap();
            assert_eq!(token, Token::Delimiter(*expected));
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_dot_is_not_a_symbol() {
        assert!(parse_operator(".").is_err());
        assert!(parse_delimiter(".").is_err());
    }
}
