//! Recursive-descent recognizer for the toy language grammar.
//!
//! The recognizer only answers whether a token sequence is well-formed. Each grammar production
//! is a function taking the shared parse [context::Context], which owns the only mutable state:
//! the index of the current token. Recognition stops at the first violation and reports it as a
//! [SyntaxError]; there is no recovery and no syntax tree.
//!
//! ```text
//! program         = START_PROGRAM {statement} END_PROGRAM
//! statement       = assignment SEMICOLON | conditional | loop
//! assignment      = IDENT ASSIGN expression
//! conditional     = START_CONDITIONAL OPEN_PAREN logicExpression CLOSE_PAREN
//!                   {statement} END_CONDITIONAL
//! loop            = START_LOOP OPEN_PAREN assignment COLON expression CLOSE_PAREN
//!                   {statement} END_LOOP
//! logicExpression = term relOp term
//! expression      = term {arithOp term}
//! term            = IDENT | LITERAL | OPEN_PAREN expression CLOSE_PAREN
//! ```
//!

pub mod error;
pub mod recognizer;

mod context;

#[cfg(test)]
mod recognizer_unittests;

pub use error::{Production, SyntaxError};
pub use context::MAX_DEPTH;
pub use recognizer::{recognize, recognize_program};
