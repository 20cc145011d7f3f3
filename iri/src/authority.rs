//! The authority component of a URL: user info, host and port.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::_fmt::{impl_display, WriteForm};
use crate::{parser, pct, Result};

/// The user-information sub-component of an authority, stored decoded.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UserInfo(String);

impl UserInfo {
    /// Build a new `UserInfo` from its decoded text.
    pub fn new(userinfo: impl Into<String>) -> UserInfo {
        UserInfo(userinfo.into())
    }

    /// The decoded user information.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl WriteForm for UserInfo {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        pct::encode_into(w, &self.0, pct::is_userinfo_char, ascii)
    }
}

impl_display!(UserInfo);

/// The host sub-component of an authority.
///
/// IP addresses are stored as fixed-length byte arrays, so the length
/// invariants (4 and 16 bytes) are enforced by the type rather than checked
/// at run time. Named hosts are stored decoded and lowercased.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Host {
    /// An IPv4 address.
    IpV4([u8; 4]),
    /// An IPv6 address.
    IpV6([u8; 16]),
    /// A registered name.
    Named(String),
}

impl Host {
    /// Build a named host; the name is lowercased (ASCII case folding).
    pub fn named(name: impl Into<String>) -> Host {
        let mut name = name.into();
        name.make_ascii_lowercase();
        Host::Named(name)
    }

    /// Whether this host is an IPv4 address.
    pub fn is_ipv4(&self) -> bool {
        matches!(self, Host::IpV4(_))
    }

    /// Whether this host is an IPv6 address.
    pub fn is_ipv6(&self) -> bool {
        matches!(self, Host::IpV6(_))
    }

    /// Whether this host is a registered name.
    pub fn is_named(&self) -> bool {
        matches!(self, Host::Named(_))
    }

    /// The registered name, if this host is one.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Host::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl From<[u8; 4]> for Host {
    fn from(bytes: [u8; 4]) -> Host {
        Host::IpV4(bytes)
    }
}

impl From<[u8; 16]> for Host {
    fn from(bytes: [u8; 16]) -> Host {
        Host::IpV6(bytes)
    }
}

impl WriteForm for Host {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        match self {
            Host::IpV4(bytes) => write!(w, "{}", Ipv4Addr::from(*bytes)),
            Host::IpV6(bytes) => write!(w, "[{}]", Ipv6Addr::from(*bytes)),
            Host::Named(name) => pct::encode_into(w, name, pct::is_reg_name_char, ascii),
        }
    }
}

impl_display!(Host);

impl FromStr for Host {
    type Err = crate::IriError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_host(s)
    }
}

/// A port number.
///
/// The `[0, 65535]` range is enforced by `u16`; the textual form never has
/// leading zeros.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Port(u16);

impl Port {
    /// Build a new `Port`.
    pub fn new(number: u16) -> Port {
        Port(number)
    }

    /// The port number.
    pub fn number(self) -> u16 {
        self.0
    }
}

impl From<u16> for Port {
    fn from(number: u16) -> Port {
        Port(number)
    }
}

impl WriteForm for Port {
    fn write_form<W: fmt::Write>(&self, w: &mut W, _ascii: bool) -> fmt::Result {
        write!(w, "{}", self.0)
    }
}

impl_display!(Port);

/// The authority component of a URL:
/// `[userinfo "@"] host [":" port]`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Authority {
    userinfo: Option<UserInfo>,
    host: Host,
    port: Option<Port>,
}

impl Authority {
    /// Build a new `Authority`.
    pub fn new(userinfo: Option<UserInfo>, host: Host, port: Option<Port>) -> Authority {
        Authority {
            userinfo,
            host,
            port,
        }
    }

    /// The user information, if any.
    pub fn userinfo(&self) -> Option<&UserInfo> {
        self.userinfo.as_ref()
    }

    /// The host.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// The port, if any.
    pub fn port(&self) -> Option<Port> {
        self.port
    }

    // used by Url::new to drop a port matching the scheme's default
    pub(crate) fn clear_port(&mut self) {
        self.port = None;
    }
}

impl From<Host> for Authority {
    fn from(host: Host) -> Authority {
        Authority::new(None, host, None)
    }
}

impl WriteForm for Authority {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        if let Some(userinfo) = &self.userinfo {
            userinfo.write_form(w, ascii)?;
            w.write_char('@')?;
        }
        self.host.write_form(w, ascii)?;
        if let Some(port) = &self.port {
            w.write_char(':')?;
            port.write_form(w, ascii)?;
        }
        Ok(())
    }
}

impl_display!(Authority);

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn named_host_lowercased() {
        assert_eq!(Host::named("ExAmple.ORG"), Host::Named("example.org".into()));
    }

    #[test_case("127.0.0.1", Host::IpV4([127, 0, 0, 1]))]
    #[test_case("[::1]", Host::IpV6([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]))]
    #[test_case("example.org", Host::Named("example.org".into()))]
    #[test_case("127.0.0.256", Host::Named("127.0.0.256".into()); "not quite an ipv4 address")]
    fn host_from_str(txt: &str, expected: Host) {
        assert_eq!(txt.parse::<Host>().unwrap(), expected);
    }

    #[test_case("[::1]")]
    #[test_case("[2001:db8::8:800:200c:417a]"; "rfc 5952 example")]
    #[test_case("[::ffff:192.0.2.1]"; "embedded ipv4 is normalized")]
    fn ipv6_roundtrip(txt: &str) {
        let host: Host = txt.parse().unwrap();
        let shown = host.to_string();
        assert_eq!(shown.parse::<Host>().unwrap(), host);
    }

    #[test]
    fn authority_forms() {
        let auth = Authority::new(
            Some(UserInfo::new("me:me")),
            Host::named("hôst"),
            Some(Port::new(8080)),
        );
        assert_eq!(auth.to_string(), "me:me@hôst:8080");
        assert_eq!(auth.to_uri_string(), "me:me@h%C3%B4st:8080");
    }
}
