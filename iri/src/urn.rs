//! URNs per [RFC 8141](https://tools.ietf.org/html/rfc8141):
//! the `urn` scheme, namespace identifiers, and r/q components.

use std::fmt;
use std::str::FromStr;

use crate::_fmt::{impl_display, WriteForm};
use crate::{parser, pct, Fragment, IriError, Path, Query, Result};

/// A URN namespace identifier
/// ([RFC 8141 §2](https://tools.ietf.org/html/rfc8141#section-2)),
/// stored lowercase.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nid(String);

impl Nid {
    /// Build a new `Nid`, checking the RFC 8141 shape: 2 to 32 characters,
    /// alphanumeric at both ends, alphanumeric or `-` in between.
    /// The identifier is lowercased.
    pub fn new(nid: &str) -> Result<Nid> {
        let bytes = nid.as_bytes();
        if bytes.len() < 2 || bytes.len() > 32 {
            return Err(IriError::Parse {
                expected: "nid",
                offset: bytes.len().min(32),
            });
        }
        for (i, b) in bytes.iter().enumerate() {
            let edge = i == 0 || i == bytes.len() - 1;
            let ok = b.is_ascii_alphanumeric() || (!edge && *b == b'-');
            if !ok {
                return Err(IriError::Parse {
                    expected: "nid",
                    offset: i,
                });
            }
        }
        Ok(Nid(nid.to_ascii_lowercase()))
    }

    /// The namespace identifier as a (lowercase) string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl WriteForm for Nid {
    fn write_form<W: fmt::Write>(&self, w: &mut W, _ascii: bool) -> fmt::Result {
        w.write_str(&self.0)
    }
}

impl_display!(Nid);

impl FromStr for Nid {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self> {
        Nid::new(s)
    }
}

/// The r-component of a URN, stored percent-decoded.
///
/// On output a literal `?` is percent-encoded, so that the `?+` and `?=`
/// delimiters of RFC 8141 stay unambiguous.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UrnComponent(String);

impl UrnComponent {
    /// Build a new `UrnComponent` from its decoded text.
    pub fn new(component: impl Into<String>) -> UrnComponent {
        UrnComponent(component.into())
    }

    /// The decoded component text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl WriteForm for UrnComponent {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        pct::encode_into(w, &self.0, pct::is_urn_component_char, ascii)
    }
}

impl_display!(UrnComponent);

/// A URN: `urn:<nid>:<nss>[?+r][?=q][#fragment]`
/// ([RFC 8141 §2](https://tools.ietf.org/html/rfc8141#section-2)).
///
/// On input the `?+` (r) and `?=` (q) components may appear in either
/// order; the canonical form always renders r before q.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Urn {
    nid: Nid,
    nss: Path,
    r: Option<UrnComponent>,
    q: Option<Query>,
    fragment: Option<Fragment>,
}

impl Urn {
    /// Build a new `Urn` from its components.
    pub fn new(
        nid: Nid,
        nss: Path,
        r: Option<UrnComponent>,
        q: Option<Query>,
        fragment: Option<Fragment>,
    ) -> Urn {
        Urn {
            nid,
            nss,
            r,
            q,
            fragment,
        }
    }

    /// Parse a URN from its textual form.
    pub fn parse(txt: &str) -> Result<Urn> {
        parser::parse_urn(txt)
    }

    /// The namespace identifier.
    pub fn nid(&self) -> &Nid {
        &self.nid
    }

    /// The namespace-specific string, as a (rootless) path.
    pub fn nss(&self) -> &Path {
        &self.nss
    }

    /// The r-component, if any.
    pub fn r_component(&self) -> Option<&UrnComponent> {
        self.r.as_ref()
    }

    /// The q-component, if any.
    pub fn q_component(&self) -> Option<&Query> {
        self.q.as_ref()
    }

    /// The fragment, if any.
    pub fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }
}

impl WriteForm for Urn {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        w.write_str("urn:")?;
        self.nid.write_form(w, ascii)?;
        w.write_char(':')?;
        self.nss.write_form(w, ascii)?;
        if let Some(r) = &self.r {
            w.write_str("?+")?;
            r.write_form(w, ascii)?;
        }
        if let Some(q) = &self.q {
            w.write_str("?=")?;
            q.write_form(w, ascii)?;
        }
        if let Some(fragment) = &self.fragment {
            w.write_char('#')?;
            fragment.write_form(w, ascii)?;
        }
        Ok(())
    }
}

impl_display!(Urn);

impl FromStr for Urn {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self> {
        Urn::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("ab")]
    #[test_case("examp-le")]
    #[test_case("a2345678901234567890123456789012"; "32 chars")]
    fn valid_nid(txt: &str) {
        assert!(Nid::new(txt).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case("a"; "too short")]
    #[test_case("a23456789012345678901234567890123"; "33 chars")]
    #[test_case("-ab"; "leading hyphen")]
    #[test_case("ab-"; "trailing hyphen")]
    #[test_case("a_b"; "underscore")]
    fn invalid_nid(txt: &str) {
        assert!(Nid::new(txt).is_err());
    }

    #[test]
    fn nid_lowercased() {
        assert_eq!(Nid::new("ISBN").unwrap().as_str(), "isbn");
    }

    #[test_case(
        "urn:examp-lE:foo-bar-baz-qux?=a=b?+CCResolve:cc=uk",
        "urn:examp-le:foo-bar-baz-qux?+CCResolve:cc=uk?=a=b";
        "r and q reordered"
    )]
    #[test_case("urn:isbn:0451450523", "urn:isbn:0451450523")]
    #[test_case("urn:example:a/b/c?=x#frag", "urn:example:a/b/c?=x#frag")]
    #[test_case("urn:example:a?+r1?+r2", "urn:example:a?+r1%3F+r2"; "second r delimiter is content")]
    fn canonical(input: &str, expected: &str) {
        assert_eq!(Urn::parse(input).unwrap().to_string(), expected);
    }

    #[test]
    fn nid_case_insensitive_equality() {
        assert_eq!(
            Urn::parse("urn:examp-lE:foo").unwrap(),
            Urn::parse("urn:examp-le:foo").unwrap(),
        );
    }

    #[test_case("urn:example:"; "empty nss")]
    #[test_case("urn:example:a?+"; "empty r component")]
    #[test_case("urn:example:a?="; "empty q component")]
    #[test_case("urn:a:b"; "nid too short")]
    #[test_case("http://example.org/"; "not a urn")]
    fn rejected(input: &str) {
        assert!(Urn::parse(input).is_err());
    }
}
