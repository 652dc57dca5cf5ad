//! Tools for the production and management of diagnostic feedback from the toolchain.
//!
//! This design loosely follows the Carbon toolchain design. Lexing and recognition stop at the
//! first error and return it as a value; the functions here turn those errors into located
//! [Diagnostic]s for a [DiagnosticConsumer], which delivers the messages to the user.
//!
//! Syntax errors refer to token indices, which a [DiagnosticLocationTranslator] (the
//! [TokenizedBuffer]) maps back to lines and columns.
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

pub use diagnostic_emitter::{
    Diagnostic, DiagnosticConsumer, DiagnosticEmitter, DiagnosticLevel, DiagnosticLocation,
    DiagnosticLocationTranslator, DiagnosticMessage,
};
pub use diagnostic_kind::{DiagnosticKind, LexerDiagnosticKind, SyntaxDiagnosticKind};

use crate::toolchain::lexer::{LexError, LexErrorKind, TokenIndex, TokenKind, TokenizedBuffer};
use crate::toolchain::parser::SyntaxError;

/// Sends a diagnostic for `error`, found while lexing the file `file_name`.
pub fn report_lex_error(consumer: &mut dyn DiagnosticConsumer, file_name: &str, error: &LexError) {
    // We manually build lexer messages, as the lexer produced no tokens to translate from.
    let kind = match error.kind {
        LexErrorKind::UnidentifiedToken => LexerDiagnosticKind::UnidentifiedToken,
        LexErrorKind::InvalidUtf8 => LexerDiagnosticKind::InvalidUtf8,
    };
    let location = DiagnosticLocation {
        file_name,
        line_number: error.location.line,
        column_number: error.location.column,
    };
    let message = DiagnosticMessage {
        kind: DiagnosticKind::LexerError { kind },
        location,
        body: error.to_string(),
    };
    let diag = Diagnostic::new(DiagnosticLevel::Error, message, Vec::new());
    consumer.handle_diagnostic(&diag);
}

/// Sends a diagnostic for `error`, found while recognizing the tokens of `tokens`.
///
/// A missing block terminator also gets a note pointing at the token that opened the block.
pub fn report_syntax_error(
    consumer: &mut dyn DiagnosticConsumer,
    tokens: &TokenizedBuffer,
    error: &SyntaxError,
) {
    let kind = match error {
        SyntaxError::MissingToken { .. } => SyntaxDiagnosticKind::MissingToken,
        SyntaxError::UnexpectedToken { .. } => SyntaxDiagnosticKind::UnexpectedToken,
        SyntaxError::NestingTooDeep { .. } => SyntaxDiagnosticKind::NestingTooDeep,
    };
    let kind = DiagnosticKind::SyntaxError { kind };
    let mut emitter = DiagnosticEmitter::new(consumer, tokens);
    let mut builder =
        emitter.build(DiagnosticLevel::Error, kind, &error.index(), error.to_string());
    if let SyntaxError::MissingToken { expected, index, .. } = error {
        if let Some(opener) = block_opener(tokens.tokens(), *index, *expected) {
            builder = builder.note(kind, &opener, String::from("block opened here"));
        }
    }
    let diag = builder.emit();
    emitter.emit(&diag);
}

/// Sends a note if recognition ended at `end` with tokens left over.
pub fn report_trailing_tokens(
    consumer: &mut dyn DiagnosticConsumer,
    tokens: &TokenizedBuffer,
    end: TokenIndex,
) {
    if end >= tokens.len() {
        return;
    }
    let kind = DiagnosticKind::SyntaxError { kind: SyntaxDiagnosticKind::TrailingTokens };
    let body = format!("ignoring {} tokens after END_PROGRAM", tokens.len() - end);
    let mut emitter = DiagnosticEmitter::new(consumer, tokens);
    let diag = emitter.build(DiagnosticLevel::Note, kind, &end, body).emit();
    emitter.emit(&diag);
}

// Index of the innermost unclosed block opener before `index` that `terminator` would close.
fn block_opener(
    tokens: &[TokenKind],
    index: TokenIndex,
    terminator: TokenKind,
) -> Option<TokenIndex> {
    let opener = match terminator {
        TokenKind::EndProgram => TokenKind::StartProgram,
        TokenKind::EndConditional => TokenKind::StartConditional,
        TokenKind::EndLoop => TokenKind::StartLoop,
        _ => return None,
    };
    let end = index.min(tokens.len());
    let mut closed = 0;
    for (i, kind) in tokens[..end].iter().enumerate().rev() {
        if *kind == terminator {
            closed += 1;
        } else if *kind == opener {
            if closed == 0 {
                return Some(i);
            }
            closed -= 1;
        }
    }
    None
}
