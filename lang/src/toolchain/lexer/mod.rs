//! The toy language lexer, which splits source text into a sequence of [TokenKind]s.
//!
//! Scanning is maximal munch: runs of word characters (ASCII letters, digits and underscore) are
//! accumulated and classified as a reserved word, identifier or numeric literal once a
//! non-word character ends them. Every other character is either blank space, which separates
//! tokens, or a one- or two-character operator. Anything else stops lexing with a [LexError].
//!
//! The lexer keeps the starting line and column of each token but none of the token text.
//!

use thiserror::Error;

pub mod token;
pub mod tokenized_buffer;

mod cursor;

#[cfg(test)]
mod tokenized_buffer_unittests;

pub use token::TokenKind;
pub use tokenized_buffer::TokenizedBuffer;

/// Index of a token within a [TokenizedBuffer].
pub type TokenIndex = usize;

/// A 1-based position in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Location {
        Location { line, column }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A word or character that is not a reserved word, identifier, literal or operator.
    #[error("Unidentified token")]
    UnidentifiedToken,

    /// The input bytes are not valid utf-8. Lexing halts at the first bad sequence.
    #[error("Invalid utf-8 sequence")]
    InvalidUtf8,
}

/// Lexing failure. Carries the offending lexeme (or single character) and where it started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}: {lexeme}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub lexeme: String,
    pub location: Location,
}

impl LexError {
    pub fn unidentified(lexeme: impl Into<String>, location: Location) -> LexError {
        LexError { kind: LexErrorKind::UnidentifiedToken, lexeme: lexeme.into(), location }
    }
}

/// Tokenizes `text`, returning only the token kinds.
///
/// The final word is flushed at end of input, so `text` need not end in blank space.
pub fn tokenize(text: &str) -> Result<Vec<TokenKind>, LexError> {
    let mut cursor = cursor::Cursor::new(text.as_bytes());
    let mut tokens = Vec::new();
    while let Some(token) = cursor.next_token()? {
        tokens.push(token.kind);
    }
    tracing::debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}
