//! The top-level IRI sum types.

use std::fmt;
use std::str::FromStr;

use crate::_fmt::{impl_display, WriteForm};
use crate::scheme::URN_SCHEME;
use crate::{
    parser, Authority, Fragment, IriError, Path, Query, RelativeIri, Result, Scheme, Url, Urn,
};

/// An IRI reference: a URL, a URN, or a relative reference.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Iri {
    /// An absolute IRI with a hierarchical body.
    Url(Url),
    /// An absolute IRI in the `urn` scheme.
    Urn(Urn),
    /// A relative reference.
    Relative(RelativeIri),
}

/// An absolute IRI: a URL or a URN.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AbsoluteIri {
    /// An absolute IRI with a hierarchical body.
    Url(Url),
    /// An absolute IRI in the `urn` scheme.
    Urn(Urn),
}

impl Iri {
    /// Parse an IRI reference, trying the absolute grammar first and the
    /// relative one second.
    pub fn parse(txt: &str) -> Result<Iri> {
        parser::parse_iri(txt)
    }

    /// The scheme: `urn` for URNs, none for relative references.
    pub fn scheme(&self) -> Option<&Scheme> {
        match self {
            Iri::Url(url) => Some(url.scheme()),
            Iri::Urn(_) => Some(&URN_SCHEME),
            Iri::Relative(_) => None,
        }
    }

    /// The authority, if any; URNs never have one.
    pub fn authority(&self) -> Option<&Authority> {
        match self {
            Iri::Url(url) => url.authority(),
            Iri::Urn(_) => None,
            Iri::Relative(rel) => rel.authority(),
        }
    }

    /// The path; for URNs, the namespace-specific string.
    pub fn path(&self) -> &Path {
        match self {
            Iri::Url(url) => url.path(),
            Iri::Urn(urn) => urn.nss(),
            Iri::Relative(rel) => rel.path(),
        }
    }

    /// The query, if any; for URNs, the q-component.
    pub fn query(&self) -> Option<&Query> {
        match self {
            Iri::Url(url) => url.query(),
            Iri::Urn(urn) => urn.q_component(),
            Iri::Relative(rel) => rel.query(),
        }
    }

    /// The fragment, if any.
    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            Iri::Url(url) => url.fragment(),
            Iri::Urn(urn) => urn.fragment(),
            Iri::Relative(rel) => rel.fragment(),
        }
    }

    /// Whether this reference is a URL.
    pub fn is_url(&self) -> bool {
        matches!(self, Iri::Url(_))
    }

    /// Whether this reference is a URN.
    pub fn is_urn(&self) -> bool {
        matches!(self, Iri::Urn(_))
    }

    /// Whether this reference is relative.
    pub fn is_relative(&self) -> bool {
        matches!(self, Iri::Relative(_))
    }

    /// Whether this reference is absolute (a URL or a URN).
    pub fn is_absolute(&self) -> bool {
        !self.is_relative()
    }

    /// This reference as a URL, if it is one.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Iri::Url(url) => Some(url),
            _ => None,
        }
    }

    /// This reference as a URN, if it is one.
    pub fn as_urn(&self) -> Option<&Urn> {
        match self {
            Iri::Urn(urn) => Some(urn),
            _ => None,
        }
    }

    /// This reference as a relative reference, if it is one.
    pub fn as_relative(&self) -> Option<&RelativeIri> {
        match self {
            Iri::Relative(rel) => Some(rel),
            _ => None,
        }
    }
}

impl AbsoluteIri {
    /// Parse an absolute IRI, trying the URL grammar first and the URN
    /// grammar second.
    pub fn parse(txt: &str) -> Result<AbsoluteIri> {
        parser::parse_absolute(txt)
    }

    /// The scheme; `urn` for URNs.
    pub fn scheme(&self) -> &Scheme {
        match self {
            AbsoluteIri::Url(url) => url.scheme(),
            AbsoluteIri::Urn(_) => &URN_SCHEME,
        }
    }

    /// Whether this IRI is a URL.
    pub fn is_url(&self) -> bool {
        matches!(self, AbsoluteIri::Url(_))
    }

    /// Whether this IRI is a URN.
    pub fn is_urn(&self) -> bool {
        matches!(self, AbsoluteIri::Urn(_))
    }

    /// This IRI as a URL, if it is one.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            AbsoluteIri::Url(url) => Some(url),
            _ => None,
        }
    }

    /// This IRI as a URN, if it is one.
    pub fn as_urn(&self) -> Option<&Urn> {
        match self {
            AbsoluteIri::Urn(urn) => Some(urn),
            _ => None,
        }
    }
}

impl WriteForm for Iri {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        match self {
            Iri::Url(url) => url.write_form(w, ascii),
            Iri::Urn(urn) => urn.write_form(w, ascii),
            Iri::Relative(rel) => rel.write_form(w, ascii),
        }
    }
}

impl_display!(Iri);

impl WriteForm for AbsoluteIri {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        match self {
            AbsoluteIri::Url(url) => url.write_form(w, ascii),
            AbsoluteIri::Urn(urn) => urn.write_form(w, ascii),
        }
    }
}

impl_display!(AbsoluteIri);

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self> {
        Iri::parse(s)
    }
}

impl FromStr for AbsoluteIri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self> {
        AbsoluteIri::parse(s)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Iri {
        Iri::Url(url)
    }
}

impl From<Urn> for Iri {
    fn from(urn: Urn) -> Iri {
        Iri::Urn(urn)
    }
}

impl From<RelativeIri> for Iri {
    fn from(rel: RelativeIri) -> Iri {
        Iri::Relative(rel)
    }
}

impl From<Url> for AbsoluteIri {
    fn from(url: Url) -> AbsoluteIri {
        AbsoluteIri::Url(url)
    }
}

impl From<Urn> for AbsoluteIri {
    fn from(urn: Urn) -> AbsoluteIri {
        AbsoluteIri::Urn(urn)
    }
}

impl From<AbsoluteIri> for Iri {
    fn from(iri: AbsoluteIri) -> Iri {
        match iri {
            AbsoluteIri::Url(url) => Iri::Url(url),
            AbsoluteIri::Urn(urn) => Iri::Urn(urn),
        }
    }
}

impl TryFrom<Iri> for AbsoluteIri {
    type Error = IriError;

    fn try_from(iri: Iri) -> Result<AbsoluteIri> {
        match iri {
            Iri::Url(url) => Ok(AbsoluteIri::Url(url)),
            Iri::Urn(urn) => Ok(AbsoluteIri::Urn(urn)),
            Iri::Relative(rel) => Err(IriError::Domain(format!(
                "relative IRI reference <{rel}> is not absolute"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dispatch() {
        assert!(Iri::parse("http://example.org/").unwrap().is_url());
        assert!(Iri::parse("urn:example:x").unwrap().is_urn());
        assert!(Iri::parse("a/b").unwrap().is_relative());
        assert!(Iri::parse("urn:example:x").unwrap().is_absolute());
        assert!(!Iri::parse("a/b").unwrap().is_absolute());
    }

    #[test]
    fn urn_scheme_accessor() {
        let iri = Iri::parse("urn:example:x").unwrap();
        assert_eq!(iri.scheme().unwrap().as_str(), "urn");
        assert!(iri.authority().is_none());
    }

    #[test]
    fn absolute_rejects_relative() {
        assert!(AbsoluteIri::parse("a/b").is_err());
        let iri = Iri::parse("a/b").unwrap();
        assert!(AbsoluteIri::try_from(iri).is_err());
    }
}
