//! URLs: absolute IRIs with a scheme other than `urn`.

use std::fmt;
use std::str::FromStr;

use crate::_fmt::{impl_display, WriteForm};
use crate::{parser, Authority, Fragment, IriError, Path, Query, Result, Scheme};

/// An absolute IRI with a hierarchical body
/// ([RFC 3986 §3](https://tools.ietf.org/html/rfc3986#section-3)):
/// `scheme ":" ["//" authority] path ["?" query] ["#" fragment]`.
///
/// A `Url` is normalized on construction: the scheme and named host are
/// lowercase, percent-escapes are decoded, the query is canonically sorted,
/// and a port matching the scheme's default is dropped.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Url {
    scheme: Scheme,
    authority: Option<Authority>,
    path: Path,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

impl Url {
    /// Build a new `Url` from its components,
    /// dropping a port that matches the scheme's default.
    pub fn new(
        scheme: Scheme,
        authority: Option<Authority>,
        path: Path,
        query: Option<Query>,
        fragment: Option<Fragment>,
    ) -> Url {
        let mut authority = authority;
        if let (Some(auth), Some(default)) = (authority.as_mut(), scheme.default_port()) {
            if auth.port().map(|p| p.number()) == Some(default) {
                auth.clear_port();
            }
        }
        Url {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Parse a URL from its textual form.
    pub fn parse(txt: &str) -> Result<Url> {
        parser::parse_url(txt)
    }

    /// The scheme.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// The authority, if any.
    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// The path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The query, if any.
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// The fragment, if any.
    pub fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }
}

impl WriteForm for Url {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        self.scheme.write_form(w, ascii)?;
        w.write_char(':')?;
        if let Some(authority) = &self.authority {
            w.write_str("//")?;
            authority.write_form(w, ascii)?;
        }
        self.path.write_form(w, ascii)?;
        if let Some(query) = &self.query {
            w.write_char('?')?;
            query.write_form(w, ascii)?;
        }
        if let Some(fragment) = &self.fragment {
            w.write_char('#')?;
            fragment.write_form(w, ascii)?;
        }
        Ok(())
    }
}

impl_display!(Url);

impl FromStr for Url {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self> {
        Url::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(
        "hTtps://me:me@hOst:443/a/b?a&e=f&b=c#frag",
        "https://me:me@host/a/b?a&b=c&e=f#frag";
        "case default port and query order"
    )]
    #[test_case("HTTP://EXAMPLE.ORG:80/", "http://example.org/"; "default port dropped")]
    #[test_case("http://example.org:8080/", "http://example.org:8080/"; "other port kept")]
    #[test_case("http://example.org", "http://example.org"; "empty path")]
    #[test_case("mailto:John.Doe@example.com", "mailto:John.Doe@example.com"; "no authority")]
    #[test_case("file:///etc/hosts", "file:///etc/hosts"; "empty host")]
    #[test_case("http://example.org/a%2Fb", "http://example.org/a%2Fb"; "encoded slash stays encoded")]
    fn canonical(input: &str, expected: &str) {
        assert_eq!(Url::parse(input).unwrap().to_string(), expected);
    }

    #[test]
    fn iri_vs_uri_form() {
        let url = Url::parse("hTtp://hOst%C2%A3:80/a%C2%A3/b%C3%86c//:://").unwrap();
        assert_eq!(url.to_string(), "http://host£/a£/bÆc//:://");
        assert_eq!(url.to_uri_string(), "http://host%C2%A3/a%C2%A3/b%C3%86c//:://");
    }

    #[test]
    fn equality_is_on_the_normalized_value() {
        let a = Url::parse("HTTPS://Example.org:443/x?b=2&a=1").unwrap();
        let b = Url::parse("https://example.org/x?a=1&b=2").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn accessors() {
        let url = Url::parse("https://me@example.org:1234/a/b?k=v#f").unwrap();
        assert_eq!(url.scheme().as_str(), "https");
        let auth = url.authority().unwrap();
        assert_eq!(auth.userinfo().unwrap().as_str(), "me");
        assert_eq!(auth.port().unwrap().number(), 1234);
        assert_eq!(url.path().to_string(), "/a/b");
        assert!(url.query().unwrap().contains_key("k"));
        assert_eq!(url.fragment().unwrap().as_str(), "f");
    }

    #[test_case("urn:example:x"; "urn scheme is not a url")]
    #[test_case("http://a/ "; "space in path")]
    #[test_case("http://[::1"; "unterminated ipv6")]
    #[test_case("http://a:99999/"; "port out of range")]
    #[test_case("1http://a/"; "bad scheme")]
    fn rejected(input: &str) {
        assert!(Url::parse(input).is_err());
    }
}
