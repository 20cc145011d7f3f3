//! The scheme component of a URL.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::_fmt::{impl_display, WriteForm};
use crate::{IriError, Result};

/// A URI scheme per
/// [RFC 3986 §3.1](https://tools.ietf.org/html/rfc3986#section-3.1),
/// stored lowercase.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Scheme(String);

pub(crate) static URN_SCHEME: LazyLock<Scheme> = LazyLock::new(|| Scheme("urn".to_string()));

impl Scheme {
    /// Build a new `Scheme`, checking the RFC 3986 shape
    /// (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`) and lowercasing.
    pub fn new(scheme: &str) -> Result<Scheme> {
        let mut chars = scheme.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => {
                return Err(IriError::Parse {
                    expected: "scheme",
                    offset: 0,
                })
            }
        }
        for (i, c) in chars.enumerate() {
            if !(c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
                return Err(IriError::Parse {
                    expected: "scheme",
                    offset: i + 1,
                });
            }
        }
        Ok(Scheme(scheme.to_ascii_lowercase()))
    }

    /// The scheme as a (lowercase) string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default port registered for this scheme, if any.
    ///
    /// An authority whose port equals the default port of its scheme
    /// renders without the port.
    pub fn default_port(&self) -> Option<u16> {
        match self.0.as_str() {
            "ftp" => Some(21),
            "ssh" => Some(22),
            "telnet" => Some(23),
            "smtp" => Some(25),
            "domain" => Some(53),
            "tftp" => Some(69),
            "http" | "ws" => Some(80),
            "pop3" => Some(110),
            "nntp" => Some(119),
            "imap" => Some(143),
            "snmp" => Some(161),
            "ldap" => Some(389),
            "https" | "wss" => Some(443),
            "imaps" => Some(993),
            "nfs" => Some(2049),
            _ => None,
        }
    }
}

impl WriteForm for Scheme {
    fn write_form<W: fmt::Write>(&self, w: &mut W, _ascii: bool) -> fmt::Result {
        w.write_str(&self.0)
    }
}

impl_display!(Scheme);

impl FromStr for Scheme {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self> {
        Scheme::new(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http", "http")]
    #[test_case("hTtPs", "https"; "lowercased")]
    #[test_case("coap+tcp", "coap+tcp")]
    #[test_case("x-1.2", "x-1.2")]
    fn valid(input: &str, expected: &str) {
        assert_eq!(Scheme::new(input).unwrap().as_str(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("1http"; "leading digit")]
    #[test_case("ht tp"; "space")]
    #[test_case("ht:tp"; "colon")]
    fn invalid(input: &str) {
        assert!(Scheme::new(input).is_err());
    }

    #[test]
    fn default_ports() {
        assert_eq!(Scheme::new("https").unwrap().default_port(), Some(443));
        assert_eq!(Scheme::new("ws").unwrap().default_port(), Some(80));
        assert_eq!(Scheme::new("example").unwrap().default_port(), None);
    }
}
