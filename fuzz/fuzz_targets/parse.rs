#![no_main]

use fidl_syntax::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the scanner, then the parser on the same input
        let _ = lexer::lex(s);
        let _ = parser::parse(s);
    }
});
