use std::fmt;

use thiserror::Error;

use crate::toolchain::lexer::{TokenIndex, TokenKind};

/// A grammar production that chooses between alternatives by looking at the current token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Production {
    Statement,
    LogicExpression,
    Term,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Production::Statement => "statement",
            Production::LogicExpression => "logic expression",
            Production::Term => "term",
        };
        f.write_str(s)
    }
}

/// The first grammar violation in a token sequence.
///
/// `found` is `None` when the violation is running out of tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// One particular token was required and a different one, or none, was found.
    #[error("Unexpected token: {} at index: {index}, expected: {expected}", found_name(.found))]
    MissingToken { expected: TokenKind, found: Option<TokenKind>, index: TokenIndex },

    /// No alternative of `production` starts with the token found.
    #[error("Unexpected token in {production}: {} at index: {index}", found_name(.found))]
    UnexpectedToken { production: Production, found: Option<TokenKind>, index: TokenIndex },

    /// The parenthesis or block opened by `found` would nest deeper than `limit`.
    #[error("Nesting deeper than {limit}: {} at index: {index}", found_name(.found))]
    NestingTooDeep { limit: usize, found: Option<TokenKind>, index: TokenIndex },
}

impl SyntaxError {
    /// Index of the offending token, equal to the token count when input ran out.
    pub fn index(&self) -> TokenIndex {
        match self {
            SyntaxError::MissingToken { index, .. } => *index,
            SyntaxError::UnexpectedToken { index, .. } => *index,
            SyntaxError::NestingTooDeep { index, .. } => *index,
        }
    }

    pub fn found(&self) -> Option<TokenKind> {
        match self {
            SyntaxError::MissingToken { found, .. } => *found,
            SyntaxError::UnexpectedToken { found, .. } => *found,
            SyntaxError::NestingTooDeep { found, .. } => *found,
        }
    }
}

fn found_name(found: &Option<TokenKind>) -> &'static str {
    match found {
        Some(kind) => kind.name(),
        None => "end of input",
    }
}
