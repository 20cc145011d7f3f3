//! Relative IRI references.

use std::fmt;
use std::str::FromStr;

use crate::_fmt::{impl_display, WriteForm};
use crate::{parser, Authority, Fragment, IriError, Path, Query, Result};

/// A relative IRI reference
/// ([RFC 3986 §4.2](https://tools.ietf.org/html/rfc3986#section-4.2)):
/// an IRI without a scheme, to be resolved against an absolute base.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RelativeIri {
    authority: Option<Authority>,
    path: Path,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

impl RelativeIri {
    /// Build a new `RelativeIri` from its components.
    pub fn new(
        authority: Option<Authority>,
        path: Path,
        query: Option<Query>,
        fragment: Option<Fragment>,
    ) -> RelativeIri {
        RelativeIri {
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Parse a relative IRI reference from its textual form.
    pub fn parse(txt: &str) -> Result<RelativeIri> {
        parser::parse_relative(txt)
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

impl WriteForm for RelativeIri {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
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

impl_display!(RelativeIri);

impl FromStr for RelativeIri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self> {
        RelativeIri::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(""; "empty")]
    #[test_case("g")]
    #[test_case("./g"; "leading dot segment")]
    #[test_case("//g"; "network path")]
    #[test_case("/g"; "absolute path")]
    #[test_case("?y"; "query only")]
    #[test_case("#s"; "fragment only")]
    #[test_case("..")]
    #[test_case(";x"; "semicolon segment")]
    fn accepted(txt: &str) {
        assert!(RelativeIri::parse(txt).is_ok());
    }

    #[test_case("a:b"; "colon in first segment")]
    #[test_case("a b"; "space")]
    fn rejected(txt: &str) {
        assert!(RelativeIri::parse(txt).is_err());
    }

    #[test]
    fn roundtrip() {
        for txt in ["", "g", "//u@h:1/p?a&b=c#f", "/a/b", "?", "#f"] {
            let rel = RelativeIri::parse(txt).unwrap();
            assert_eq!(RelativeIri::parse(&rel.to_string()).unwrap(), rel);
        }
    }
}
