use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::satisfy,
    combinator::{not, value},
    error::context,
    sequence::terminated,
};
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::token::{ParserResult, Token};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Def,
    Class,
    Return,
    If,
    While,
    For,
    Import,
    From,
    As,
}

pub(crate) fn word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// Parser for keywords. A keyword only matches on a whole word, so
// `definition` is left for the identifier pattern. The leading word
// boundary cannot be checked here (the parser never sees what came
// before), so the registry skips this pattern after a word character.
pub fn parse_keyword(input: &str) -> ParserResult<Token> {
    let (input, kw) = context(
        "keyword",
        terminated(
            alt((
                value(Keyword::Def, tag("def")),
                value(Keyword::Class, tag("class")),
                value(Keyword::Return, tag("return")),
                value(Keyword::If, tag("if")),
                value(Keyword::While, tag("while")),
                value(Keyword::For, tag("for")),
                value(Keyword::Import, tag("import")),
                value(Keyword::From, tag("from")),
                value(Keyword::As, tag("as")),
            )),
            not(satisfy(word_char)),
        ),
    )(input)?;
    Ok((input, Token::Keyword(kw)))
}
