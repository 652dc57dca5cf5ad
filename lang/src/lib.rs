//! Tokenizer and syntax recognizer for a small imperative teaching language.
//!
//! Programs in the language are built from assignments, arithmetic and comparison expressions,
//! `if` conditionals and counted `loop`s, all wrapped in a `program` ... `end_program` block.
//! This crate answers two questions about such a program: which tokens does the text contain,
//! and is the token stream syntactically well-formed. It builds no syntax tree and evaluates
//! nothing.
//!
//! ```
//! let tokens = toylang::lex_source("program x = 1; end_program\n").unwrap();
//! assert_eq!(tokens, ["START_PROGRAM", "IDENT", "ASSIGN", "LITERAL", "SEMICOLON", "END_PROGRAM"]);
//! assert!(toylang::parse_source("program x = 1; end_program\n").is_ok());
//! ```
//!

#[macro_use]
extern crate static_assertions;

#[doc(hidden)]
pub use const_format;

pub mod toolchain;

pub use toolchain::{lex_source, parse_source, CheckError};
