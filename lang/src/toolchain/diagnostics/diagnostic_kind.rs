/// The enumerated type of all diagnostics the toolchain emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    LexerError { kind: LexerDiagnosticKind },
    SyntaxError { kind: SyntaxDiagnosticKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerDiagnosticKind {
    /// Word or character doesn't match any reserved word, identifier, literal or operator.
    UnidentifiedToken,

    /// Input is not valid utf-8, halting lexing.
    InvalidUtf8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxDiagnosticKind {
    /// We were expecting one particular token and didn't encounter it.
    MissingToken,

    /// No alternative of the production being parsed starts with this token.
    UnexpectedToken,

    /// Parentheses and blocks nest too deeply to recognize.
    NestingTooDeep,

    /// Tokens after the end of the program, which recognition skips.
    TrailingTokens,
}
