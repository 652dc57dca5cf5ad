#![no_main]

use libfuzzer_sys::fuzz_target;
use toylang::toolchain::lexer::TokenizedBuffer;
use toylang::toolchain::source::SourceBuffer;

fuzz_target!(|data: &[u8]| {
    // Raw bytes, so invalid utf-8 reaches the lexer too.
    let source = match SourceBuffer::new_from_reader(data, "fuzz_targets/tokenize.rs") {
        Ok(source) => source,
        Err(_) => return,
    };
    if let Ok(tokens) = TokenizedBuffer::tokenize(&source) {
        for i in 0..=tokens.len() {
            let _ = tokens.location_at(i);
        }
    }
});
