#![no_main]

use libfuzzer_sys::fuzz_target;
use minipas::{Locale, lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The tokenizer never fails and always ends with a single end-of-input token
        let tokens = lexer::lex(s);
        assert!(tokens.last().is_some_and(|t| t.is_eof()));

        // Both locales must agree on where the first error is
        let en = parser::parse_with_locale(s, Locale::En);
        let zh = parser::parse_with_locale(s, Locale::Zh);
        match (en, zh) {
            (Ok(a), Ok(b)) => assert_eq!(a.node_count(), b.node_count()),
            (Err(a), Err(b)) => assert_eq!((a.kind, a.line, a.col), (b.kind, b.line, b.col)),
            _ => panic!("locales disagree on acceptance"),
        }
    }
});
