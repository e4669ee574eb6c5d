#![no_main]

use gidl_syntax::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            // Errors are fine; panics and out-of-range spans are not.
            if let Err(err) = parser::parse(&tokens) {
                assert!(err.span.end <= s.len());
            }
        }
    }
});
