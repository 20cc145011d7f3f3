//! Percent-encoding primitives and the character classes of
//! [RFC 3986](https://tools.ietf.org/html/rfc3986#section-2) and
//! [RFC 3987](https://tools.ietf.org/html/rfc3987#section-2.2).
//!
//! Encoding works per component: each component of an IRI has its own safe
//! set, and every byte outside that set is written as an uppercase `%HH`
//! triplet for each byte of its UTF-8 encoding.

use std::fmt;

use crate::{IriError, Result};

/// Match the `unreserved` rule of RFC 3986.
pub fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

/// Match the `sub-delims` rule of RFC 3986.
pub fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// Match the `ucschar` rule of RFC 3987.
pub fn is_ucschar(c: char) -> bool {
    matches!(c,
        '\u{A0}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFEF}'
        | '\u{10000}'..='\u{1FFFD}'
        | '\u{20000}'..='\u{2FFFD}'
        | '\u{30000}'..='\u{3FFFD}'
        | '\u{40000}'..='\u{4FFFD}'
        | '\u{50000}'..='\u{5FFFD}'
        | '\u{60000}'..='\u{6FFFD}'
        | '\u{70000}'..='\u{7FFFD}'
        | '\u{80000}'..='\u{8FFFD}'
        | '\u{90000}'..='\u{9FFFD}'
        | '\u{A0000}'..='\u{AFFFD}'
        | '\u{B0000}'..='\u{BFFFD}'
        | '\u{C0000}'..='\u{CFFFD}'
        | '\u{D0000}'..='\u{DFFFD}'
        | '\u{E1000}'..='\u{EFFFD}'
    )
}

/// Match the `iprivate` rule of RFC 3987 (only allowed in queries).
pub fn is_iprivate(c: char) -> bool {
    matches!(c,
        '\u{E000}'..='\u{F8FF}'
        | '\u{F0000}'..='\u{FFFFD}'
        | '\u{100000}'..='\u{10FFFD}'
    )
}

/// Match the `iunreserved` rule of RFC 3987.
pub fn is_iunreserved(c: char) -> bool {
    is_unreserved(c) || is_ucschar(c)
}

/// Match the `ipchar` rule of RFC 3987, percent-escapes excluded.
pub fn is_segment_char(c: char) -> bool {
    is_iunreserved(c) || is_sub_delim(c) || c == ':' || c == '@'
}

// the first segment of a relative path must not contain ':'
// (isegment-nz-nc), lest it be mistaken for a scheme
pub(crate) fn is_segment_nz_nc_char(c: char) -> bool {
    is_iunreserved(c) || is_sub_delim(c) || c == '@'
}

pub(crate) fn is_userinfo_char(c: char) -> bool {
    is_iunreserved(c) || is_sub_delim(c) || c == ':'
}

pub(crate) fn is_reg_name_char(c: char) -> bool {
    is_iunreserved(c) || is_sub_delim(c)
}

pub(crate) fn is_fragment_char(c: char) -> bool {
    is_segment_char(c) || c == '/' || c == '?'
}

// raw query text, before it is split on '&' and '='
pub(crate) fn is_query_char(c: char) -> bool {
    is_fragment_char(c) || is_iprivate(c)
}

// decoded query keys and values must re-encode '&' and '=' to stay unambiguous
pub(crate) fn is_query_text_safe(c: char) -> bool {
    is_query_char(c) && c != '&' && c != '='
}

// URN r/q component content; '?' is excluded so that the
// `?+`/`?=` delimiters of RFC 8141 stay unambiguous on output
pub(crate) fn is_urn_component_char(c: char) -> bool {
    is_segment_char(c) || c == '/'
}

/// Percent-encode `s` into `w`.
///
/// Characters accepted by `safe` are copied verbatim; every other character
/// is written as one `%HH` triplet (uppercase hex) per UTF-8 byte. With
/// `ascii` set, non-ASCII characters are percent-encoded even when `safe`
/// accepts them, producing the URI form.
pub fn encode_into<W: fmt::Write>(
    w: &mut W,
    s: &str,
    safe: fn(char) -> bool,
    ascii: bool,
) -> fmt::Result {
    let mut buf = [0u8; 4];
    for c in s.chars() {
        if safe(c) && !(ascii && !c.is_ascii()) {
            w.write_char(c)?;
        } else {
            for b in c.encode_utf8(&mut buf).bytes() {
                write!(w, "%{:02X}", b)?;
            }
        }
    }
    Ok(())
}

/// Percent-encode `s` against the given safe set, returning a new string.
///
/// See [`encode_into`].
pub fn encode(s: &str, safe: fn(char) -> bool, ascii: bool) -> String {
    struct Encoded<'a>(&'a str, fn(char) -> bool, bool);
    impl fmt::Display for Encoded<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            encode_into(f, self.0, self.1, self.2)
        }
    }
    Encoded(s, safe, ascii).to_string()
}

/// Reverse percent-encoding: replace every `%HH` triplet by the byte it
/// denotes, and check that the resulting byte sequence is valid UTF-8.
///
/// Fails with [`IriError::InvalidPercentEncoding`] when a `%` is not
/// followed by two hex digits, or when the decoded bytes are not UTF-8.
pub fn decode(s: &str) -> Result<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match (
                bytes.get(i + 1).copied().and_then(hex_value),
                bytes.get(i + 2).copied().and_then(hex_value),
            ) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => return Err(IriError::InvalidPercentEncoding(s.to_string())),
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| IriError::InvalidPercentEncoding(s.to_string()))
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("", ""; "empty")]
    #[test_case("abc-._~", "abc-._~"; "unreserved kept")]
    #[test_case("a b", "a%20b"; "space")]
    #[test_case("a/b", "a%2Fb"; "slash outside segment set")]
    #[test_case("100%", "100%25"; "percent sign")]
    #[test_case("£", "%C2%A3"; "two byte utf8")]
    #[test_case("\u{10348}", "%F0%90%8D%88"; "four byte utf8")]
    fn encode_uri_form(input: &str, expected: &str) {
        assert_eq!(encode(input, is_segment_char, true), expected);
    }

    #[test]
    fn encode_iri_form_keeps_ucschar() {
        assert_eq!(encode("£", is_segment_char, false), "£");
        assert_eq!(encode("£ ", is_segment_char, false), "£%20");
    }

    #[test_case("a%20b", "a b")]
    #[test_case("%C2%A3", "£")]
    #[test_case("%c2%a3", "£"; "lowercase hex")]
    #[test_case("plain", "plain")]
    #[test_case("100%25", "100%")]
    fn decode_ok(input: &str, expected: &str) {
        assert_eq!(decode(input).unwrap(), expected);
    }

    #[test_case("%"; "truncated")]
    #[test_case("%2"; "one digit")]
    #[test_case("%zz"; "not hex")]
    #[test_case("%C3%28"; "invalid utf8")]
    #[test_case("%C2"; "lone continuation lead")]
    fn decode_err(input: &str) {
        assert!(matches!(
            decode(input),
            Err(IriError::InvalidPercentEncoding(_))
        ));
    }

    #[test]
    fn roundtrip() {
        for s in ["", "a£b", "a b/c?d#e", "100%", "\u{10348}x"] {
            let enc = encode(s, is_segment_char, true);
            assert!(enc.is_ascii());
            assert_eq!(decode(&enc).unwrap(), s);
        }
    }
}
