use super::context::Context;
use super::error::{Production, SyntaxError};
use crate::toolchain::lexer::{TokenIndex, TokenKind};

/// Checks `tokens` against the grammar, starting from the `program` production.
///
/// Tokens after the closing `end_program` are not examined.
pub fn recognize(tokens: &[TokenKind]) -> Result<(), SyntaxError> {
    recognize_program(tokens).map(|_| ())
}

/// Like [recognize], but on success returns the index just past `end_program`.
///
/// Any tokens from that index on were ignored.
pub fn recognize_program(tokens: &[TokenKind]) -> Result<TokenIndex, SyntaxError> {
    let mut context = Context::new(tokens);
    let result = handle_program::handle_program(&mut context).map(|()| context.token_index());
    match &result {
        Ok(end) => tracing::debug!(tokens = tokens.len(), end, "recognized program"),
        Err(error) => tracing::debug!(%error, "rejected program"),
    }
    result
}

mod handle_assignment;
mod handle_conditional;
mod handle_expression;
mod handle_logic_expression;
mod handle_loop;
mod handle_program;
mod handle_statement;
mod handle_term;
