use super::error::{Production, SyntaxError};
use crate::toolchain::lexer::{TokenIndex, TokenKind};

/// Deepest allowed nesting of parentheses, conditionals and loops, counted together.
pub const MAX_DEPTH: usize = 256;

/// The parse cursor: the token sequence being recognized and the index of the current token.
///
/// The index only ever moves forward, and never past the end of the sequence. Productions recurse
/// once per nesting level, so `depth` bounds the recursion.
pub struct Context<'tb> {
    tokens: &'tb [TokenKind],
    token_index: TokenIndex,
    depth: usize,
}

impl<'tb> Context<'tb> {
    pub fn new(tokens: &'tb [TokenKind]) -> Context<'tb> {
        Context { tokens, token_index: 0, depth: 0 }
    }

    pub fn token_index(&self) -> TokenIndex {
        self.token_index
    }

    pub fn token_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.token_index).copied()
    }

    // Returns the current token index before advancing to the next token.
    pub fn consume(&mut self) -> TokenIndex {
        let index = self.token_index;
        tracing::trace!(index, kind = ?self.token_kind(), "consume");
        if index < self.tokens.len() {
            self.token_index += 1;
        }
        index
    }

    /// Consumes the current token if it is `expected`, otherwise reports what was there instead.
    pub fn expect(&mut self, expected: TokenKind) -> Result<TokenIndex, SyntaxError> {
        match self.token_kind() {
            Some(kind) if kind == expected => Ok(self.consume()),
            found => Err(SyntaxError::MissingToken { expected, found, index: self.token_index }),
        }
    }

    /// Builds the error for a current token that starts no alternative of `production`.
    pub fn unexpected(&self, production: Production) -> SyntaxError {
        SyntaxError::UnexpectedToken {
            production,
            found: self.token_kind(),
            index: self.token_index,
        }
    }

    /// Enters the parenthesis or block opened by the current token.
    pub fn enter(&mut self) -> Result<(), SyntaxError> {
        if self.depth == MAX_DEPTH {
            return Err(SyntaxError::NestingTooDeep {
                limit: MAX_DEPTH,
                found: self.token_kind(),
                index: self.token_index,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves the innermost parenthesis or block. Must pair with a successful [Context::enter].
    pub fn leave(&mut self) {
        self.depth -= 1;
    }

    /// True while a block body should keep parsing statements.
    ///
    /// The body ends at `terminator`, or once the cursor reaches the last token. Stopping one
    /// short of the end leaves a missing terminator to be reported by [Context::expect] against
    /// the final token instead of reading past it.
    pub fn in_block_body(&self, terminator: TokenKind) -> bool {
        self.token_kind() != Some(terminator) && self.token_index + 1 < self.tokens.len()
    }
}
