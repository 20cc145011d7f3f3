//! Arrays of well-formed and malformed IRIs, useful for testing purposes,
//! possibly in other crates.

/// An array of well-formed absolute IRIs.
pub const POSITIVE_ABSOLUTE_IRIS: &[&str] = &[
    "http:",
    "http://example.org",
    "http://127.0.0.1",
    "http://[::]",
    "http://%0D",
    "http://example.org/",
    "http://éxample.org/",
    "http://user:pw@example.org:1234/",
    "http://example.org/foo/bar/baz",
    "http://example.org/foo/bar/",
    "http://example.org/foo/bar/bàz",
    "http://example.org/foo/.././/bar",
    "http://example.org/!$&'()*+,=:@/foo%0D",
    "http://example.org/?abc",
    "http://example.org/?!$&'()*+,=:@/?\u{E000}",
    "http://example.org/#def",
    "http://example.org/?abc#def",
    "http://example.org/#Andr%C3%A9",
    "http://example.org/?Andr%C3%A9",
    "tag:abc/def",
    "tag:",
    "file:///etc/hosts",
    "urn:isbn:0451450523",
    "urn:example:a£/b?+res?=a=b#frag",
    "urn:EXAMPLE:a?=q?+r",
];

/// An array of well-formed relative IRI references.
pub const POSITIVE_RELATIVE_IRIS: &[&str] = &[
    "",
    "foo",
    "..",
    ".",
    "//example.org",
    "//user@example.org:80/a/b",
    "/a/b/c",
    "a/b/./c",
    "?",
    "#",
    "?#",
    "?Andr%C3%A9#Andr%C3%A9",
    ";x",
];

/// An array of malformed IRI references.
pub const NEGATIVE_IRIS: &[&str] = &[
    "http://[/",
    "http://a/[",
    "http://a/]",
    "http://a/|",
    "http://a/ ",
    "http://a/\u{E000}",
    "[",
    "]",
    "|",
    " ",
    "\u{E000}",
    "1:2",
    "a:b c",
    "http://a:port/",
    "http://a/%zz",
    "http://a/%C3%28",
    "urn:x:y",
    "urn:example:",
    "urn:example:a?+",
    "urn:example:a?=",
];

#[cfg(test)]
mod roundtrip {
    use super::*;
    use crate::{AbsoluteIri, Iri, RelativeIri};

    #[test]
    fn positive_absolute() {
        for txt in POSITIVE_ABSOLUTE_IRIS {
            let iri = AbsoluteIri::parse(txt).unwrap_or_else(|e| panic!("{txt}: {e}"));
            assert!(Iri::parse(txt).unwrap().is_absolute(), "{txt}");
            // the IRI form re-parses to the same value
            assert_eq!(
                AbsoluteIri::parse(&iri.to_string()).unwrap(),
                iri,
                "{txt} via as_string"
            );
            // the URI form is pure ASCII and re-parses to the same value
            let uri = iri.to_uri_string();
            assert!(uri.is_ascii(), "{txt} -> {uri}");
            assert_eq!(AbsoluteIri::parse(&uri).unwrap(), iri, "{txt} via as_uri");
        }
    }

    #[test]
    fn positive_relative() {
        for txt in POSITIVE_RELATIVE_IRIS {
            let rel = RelativeIri::parse(txt).unwrap_or_else(|e| panic!("{txt}: {e}"));
            assert!(Iri::parse(txt).unwrap().is_relative(), "{txt}");
            assert_eq!(
                RelativeIri::parse(&rel.to_string()).unwrap(),
                rel,
                "{txt} via as_string"
            );
            let uri = rel.to_uri_string();
            assert!(uri.is_ascii(), "{txt} -> {uri}");
            assert_eq!(RelativeIri::parse(&uri).unwrap(), rel, "{txt} via as_uri");
        }
    }

    #[test]
    fn negative() {
        for txt in NEGATIVE_IRIS {
            assert!(Iri::parse(txt).is_err(), "{txt}");
        }
    }
}
