use serde::Serialize;
use thiserror::Error;

use crate::tokenizer::{PatternRegistry, Token, TokenKind, TokenSpan};

/// A defect found in an already-produced token stream.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    #[error("token {index} has unregistered kind `{kind}`")]
    UnregisteredKind { index: usize, kind: TokenKind },

    #[error("token {index} has an empty value")]
    EmptyValue { index: usize },

    #[error("token {index} has span {start}..{end}, which is empty or inverted")]
    InvalidSpan {
        index: usize,
        start: usize,
        end: usize,
    },

    #[error("token {index} starts at {start}, before the previous token ended at {previous_end}")]
    OverlappingSpan {
        index: usize,
        start: usize,
        previous_end: usize,
    },

    #[error("identifier token {index} is missing its morphological analysis")]
    MissingMorphology { index: usize },
}

/// Outcome of validating one token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub total_tokens: usize,
    pub valid_tokens: usize,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Share of tokens with no defects; 0 for an empty stream.
    pub fn validity_ratio(&self) -> f64 {
        if self.total_tokens == 0 {
            return 0.0;
        }
        self.valid_tokens as f64 / self.total_tokens as f64
    }

    /// Turns the report into a hard failure on the first defect.
    pub fn ensure_valid(&self) -> crate::error::LexResult<()> {
        match self.errors.first() {
            Some(error) => Err(error.clone().into()),
            None => Ok(()),
        }
    }
}

/// Post-hoc checks over a token stream against the registry that produced
/// it. Read-only: operates strictly after a complete `tokenize` call and
/// never alters scanner state.
#[derive(Debug, Clone)]
pub struct ValidationFramework {
    registered_kinds: Vec<TokenKind>,
}

impl ValidationFramework {
    pub fn new(registry: &PatternRegistry) -> Self {
        Self {
            registered_kinds: registry.kinds(),
        }
    }

    /// Checks every token's kind against the registered set, its span
    /// against its neighbours, and each identifier for attached morphology.
    pub fn validate(&self, tokens: &[TokenSpan]) -> ValidationReport {
        let mut errors = Vec::new();
        let mut invalid_tokens = 0;
        let mut previous_end = 0;

        for (index, token) in tokens.iter().enumerate() {
            let before = errors.len();

            if !self.registered_kinds.contains(&token.kind()) {
                errors.push(ValidationError::UnregisteredKind {
                    index,
                    kind: token.kind(),
                });
            }
            if token.value.is_empty() {
                errors.push(ValidationError::EmptyValue { index });
            }
            if token.start >= token.end {
                errors.push(ValidationError::InvalidSpan {
                    index,
                    start: token.start,
                    end: token.end,
                });
            }
            if token.start < previous_end {
                errors.push(ValidationError::OverlappingSpan {
                    index,
                    start: token.start,
                    previous_end,
                });
            }
            if let Token::Identifier(identifier) = &token.token {
                if identifier.morphemes.is_empty() || identifier.convention.is_none() {
                    errors.push(ValidationError::MissingMorphology { index });
                }
            }

            if errors.len() > before {
                invalid_tokens += 1;
            }
            previous_end = token.end;
        }

        ValidationReport {
            total_tokens: tokens.len(),
            valid_tokens: tokens.len() - invalid_tokens,
            errors,
        }
    }
}
