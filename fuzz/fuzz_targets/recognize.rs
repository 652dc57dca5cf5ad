#![no_main]

use libfuzzer_sys::fuzz_target;
use toylang::toolchain::lexer::tokenize;
use toylang::toolchain::parser::recognize;

fuzz_target!(|data: &[u8]| {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };
    let tokens = match tokenize(text) {
        Ok(tokens) => tokens,
        Err(_) => return,
    };
    if let Err(err) = recognize(&tokens) {
        assert!(err.index() <= tokens.len());
    }
});
