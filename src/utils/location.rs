//! Conversion of stored target URLs into `Location` header values.
//!
//! Targets are stored exactly as submitted. Characters that may not appear in a
//! header value (controls, spaces, non-ASCII) or that are unsafe in a URL
//! (`"<>\^`{|}`) are percent-encoded as UTF-8 bytes. Everything else, including
//! existing `%XX` escapes and reserved delimiters, is left untouched.

use std::borrow::Cow;

fn needs_encoding(c: char) -> bool {
    !c.is_ascii_graphic() || matches!(c, '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}')
}

/// Percent-encodes a target URL so it is always a valid header value.
///
/// Returns the input unchanged when nothing needs encoding.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode_location("https://a.com/a b"), "https://a.com/a%20b");
/// ```
pub fn encode_location(url: &str) -> Cow<'_, str> {
    if !url.chars().any(needs_encoding) {
        return Cow::Borrowed(url);
    }

    let mut encoded = String::with_capacity(url.len() + 8);
    let mut buf = [0u8; 4];

    for c in url.chars() {
        if needs_encoding(c) {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        } else {
            encoded.push(c);
        }
    }

    Cow::Owned(encoded)
}
