//! Encoding of a URL into the form it takes inside a stored JSON string.
//!
//! JSON columns hold the encoder's output, not the raw text, so a search
//! for `http://host` has to look for `http:\/\/host`. The fragment is the
//! JSON string literal without its surrounding quotes. Escaping follows the
//! writer of those columns: `/` is escaped and output is ASCII-only.

use std::fmt::Write as _;

/// Encode `value` as the body of a JSON string literal.
pub fn encode(value: &str) -> String {
    let literal = serde_json::Value::String(value.to_owned()).to_string();
    let body = &literal[1..literal.len() - 1];

    let mut out = String::with_capacity(body.len() + 8);
    for ch in body.chars() {
        match ch {
            '/' => out.push_str("\\/"),
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04x}");
                }
            }
        }
    }
    out
}
