//! Source handling, lexing, recognition and diagnostics for the toy language.
//!
//! The two entry points most callers want are [lex_source()], which reports the token kinds in a
//! program, and [parse_source()], which reports whether a program is syntactically well-formed.
//! Both are pure functions of their input.
//!

use thiserror::Error;

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;

use lexer::LexError;
use parser::SyntaxError;

/// The first failure encountered while checking a program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Tokenizes `text` and returns the display name of every token kind, in order.
pub fn lex_source(text: &str) -> Result<Vec<&'static str>, LexError> {
    let tokens = lexer::tokenize(text)?;
    Ok(tokens.iter().map(|kind| kind.name()).collect())
}

/// Tokenizes `text` and checks the tokens against the grammar.
///
/// Returns the lexical error if tokenizing fails, otherwise the first syntax error, if any.
pub fn parse_source(text: &str) -> Result<(), CheckError> {
    let tokens = lexer::tokenize(text)?;
    parser::recognize(&tokens)?;
    Ok(())
}
