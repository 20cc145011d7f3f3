//! The low-level parser: a single-pass character cursor over the input,
//! with one function per grammar production.
//!
//! All normalization mandated by RFC 3986/3987/8141 happens here: schemes,
//! named hosts and URN nids are lowercased, percent-escapes are decoded,
//! default ports are dropped (by [`Url::new`]), queries are canonically
//! sorted, and URN r/q components are put in canonical order.

use crate::path::PathNode;
use crate::{
    pct, AbsoluteIri, Authority, Fragment, Host, Iri, IriError, Nid, Path, Port, Query,
    RelativeIri, Result, Scheme, Url, Urn, UrnComponent, UserInfo,
};

pub(crate) fn parse_iri(input: &str) -> Result<Iri> {
    match parse_absolute(input) {
        Ok(abs) => Ok(abs.into()),
        Err(abs_err) => match parse_relative(input) {
            Ok(rel) => Ok(Iri::Relative(rel)),
            Err(rel_err) => Err(abs_err.furthest(rel_err)),
        },
    }
}

pub(crate) fn parse_absolute(input: &str) -> Result<AbsoluteIri> {
    match parse_url(input) {
        Ok(url) => Ok(AbsoluteIri::Url(url)),
        Err(url_err) => match parse_urn(input) {
            Ok(urn) => Ok(AbsoluteIri::Urn(urn)),
            Err(urn_err) => Err(url_err.furthest(urn_err)),
        },
    }
}

pub(crate) fn parse_url(input: &str) -> Result<Url> {
    let mut cur = Cursor::new(input);
    let scheme = scheme(&mut cur)?;
    if scheme.as_str() == "urn" {
        // keep Url and Urn disjoint: urn:... is never a Url
        return Err(IriError::Parse {
            expected: "scheme other than 'urn'",
            offset: 0,
        });
    }
    if !cur.eat(':') {
        return Err(cur.err("':'"));
    }
    let (authority, path) = hier_part(&mut cur)?;
    let query = opt_query(&mut cur)?;
    let fragment = opt_fragment(&mut cur)?;
    cur.expect_end()?;
    Ok(Url::new(scheme, authority, path, query, fragment))
}

pub(crate) fn parse_urn(input: &str) -> Result<Urn> {
    let mut cur = Cursor::new(input);
    let scheme = scheme(&mut cur)?;
    if scheme.as_str() != "urn" {
        return Err(IriError::Parse {
            expected: "'urn' scheme",
            offset: 0,
        });
    }
    if !cur.eat(':') {
        return Err(cur.err("':'"));
    }
    let nid_start = cur.pos;
    while matches!(cur.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '-') {
        cur.bump();
    }
    let nid = Nid::new(cur.slice_from(nid_start)).map_err(|_| IriError::Parse {
        expected: "nid",
        offset: nid_start,
    })?;
    if !cur.eat(':') {
        return Err(cur.err("':'"));
    }
    let raw = cur.take_pct(pct::is_segment_char)?;
    if raw.is_empty() {
        return Err(cur.err("nss"));
    }
    let mut nss = Path::Empty;
    nss.push_outer(PathNode::Segment(pct::decode(raw)?));
    path_slashes(&mut cur, &mut nss)?;
    let (r, q) = urn_rq(&mut cur)?;
    let fragment = opt_fragment(&mut cur)?;
    cur.expect_end()?;
    Ok(Urn::new(nid, nss, r, q, fragment))
}

pub(crate) fn parse_relative(input: &str) -> Result<RelativeIri> {
    let mut cur = Cursor::new(input);
    let (authority, path) = if cur.eat_str("//") {
        let authority = authority(&mut cur)?;
        (Some(authority), path_abempty(&mut cur)?)
    } else if cur.peek() == Some('/') {
        (None, path_abempty(&mut cur)?)
    } else {
        // the first segment must not contain ':' (isegment-nz-nc),
        // lest it be mistaken for a scheme
        let raw = cur.take_pct(pct::is_segment_nz_nc_char)?;
        if raw.is_empty() {
            (None, Path::Empty)
        } else {
            let mut path = Path::Empty;
            path.push_outer(PathNode::Segment(pct::decode(raw)?));
            path_slashes(&mut cur, &mut path)?;
            (None, path)
        }
    };
    let query = opt_query(&mut cur)?;
    let fragment = opt_fragment(&mut cur)?;
    cur.expect_end()?;
    Ok(RelativeIri::new(authority, path, query, fragment))
}

pub(crate) fn parse_path(input: &str) -> Result<Path> {
    let mut cur = Cursor::new(input);
    let mut path = Path::Empty;
    if cur.peek() != Some('/') {
        let raw = cur.take_pct(pct::is_segment_char)?;
        if !raw.is_empty() {
            path.push_outer(PathNode::Segment(pct::decode(raw)?));
        }
    }
    path_slashes(&mut cur, &mut path)?;
    cur.expect_end()?;
    Ok(path)
}

pub(crate) fn parse_query(input: &str) -> Result<Query> {
    let mut cur = Cursor::new(input);
    let raw = cur.take_pct(pct::is_query_char)?;
    cur.expect_end()?;
    Query::parse_raw(raw)
}

pub(crate) fn parse_host(input: &str) -> Result<Host> {
    let mut cur = Cursor::new(input);
    let host = host(&mut cur)?;
    cur.expect_end()?;
    Ok(host)
}

fn scheme(cur: &mut Cursor) -> Result<Scheme> {
    let start = cur.pos;
    match cur.peek() {
        Some(c) if c.is_ascii_alphabetic() => {
            cur.bump();
        }
        _ => return Err(cur.err("scheme")),
    }
    while matches!(cur.peek(), Some(c) if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        cur.bump();
    }
    Scheme::new(cur.slice_from(start))
}

fn hier_part(cur: &mut Cursor) -> Result<(Option<Authority>, Path)> {
    if cur.eat_str("//") {
        let authority = authority(cur)?;
        Ok((Some(authority), path_abempty(cur)?))
    } else if cur.peek() == Some('/') {
        Ok((None, path_abempty(cur)?))
    } else {
        // path-rootless or path-empty
        let raw = cur.take_pct(pct::is_segment_char)?;
        if raw.is_empty() {
            Ok((None, Path::Empty))
        } else {
            let mut path = Path::Empty;
            path.push_outer(PathNode::Segment(pct::decode(raw)?));
            path_slashes(cur, &mut path)?;
            Ok((None, path))
        }
    }
}

fn authority(cur: &mut Cursor) -> Result<Authority> {
    let rest = cur.rest();
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let userinfo = if rest[..end].contains('@') {
        let raw = cur.take_pct(pct::is_userinfo_char)?;
        let userinfo = UserInfo::new(pct::decode(raw)?);
        if !cur.eat('@') {
            return Err(cur.err("'@'"));
        }
        Some(userinfo)
    } else {
        None
    };
    let host = host(cur)?;
    let port = if cur.eat(':') { port(cur)? } else { None };
    Ok(Authority::new(userinfo, host, port))
}

fn host(cur: &mut Cursor) -> Result<Host> {
    if cur.eat('[') {
        let start = cur.pos;
        let rest = cur.rest();
        let Some(close) = rest.find(']') else {
            return Err(cur.err("']'"));
        };
        let bytes = ipv6(&rest[..close]).ok_or(IriError::Parse {
            expected: "IPv6 address",
            offset: start,
        })?;
        cur.pos += close + 1;
        Ok(Host::IpV6(bytes))
    } else {
        let rest = cur.rest();
        let end = rest.find([':', '/', '?', '#']).unwrap_or(rest.len());
        if let Some(bytes) = ipv4(&rest[..end]) {
            cur.pos += end;
            Ok(Host::IpV4(bytes))
        } else {
            let raw = cur.take_pct(pct::is_reg_name_char)?;
            Ok(Host::named(pct::decode(raw)?))
        }
    }
}

fn port(cur: &mut Cursor) -> Result<Option<Port>> {
    let start = cur.pos;
    while matches!(cur.peek(), Some(c) if c.is_ascii_digit()) {
        cur.bump();
    }
    let digits = cur.slice_from(start);
    if digits.is_empty() {
        // RFC 3986 allows "host:" with an empty port
        Ok(None)
    } else {
        match digits.parse::<u16>() {
            Ok(number) => Ok(Some(Port::new(number))),
            Err(_) => Err(IriError::Domain(format!("port out of range: {digits}"))),
        }
    }
}

// *( "/" segment ), appended to an already started path
fn path_slashes(cur: &mut Cursor, path: &mut Path) -> Result<()> {
    while cur.eat('/') {
        path.push_outer(PathNode::Slash);
        let raw = cur.take_pct(pct::is_segment_char)?;
        if !raw.is_empty() {
            path.push_outer(PathNode::Segment(pct::decode(raw)?));
        }
    }
    Ok(())
}

fn path_abempty(cur: &mut Cursor) -> Result<Path> {
    let mut path = Path::Empty;
    path_slashes(cur, &mut path)?;
    Ok(path)
}

fn opt_query(cur: &mut Cursor) -> Result<Option<Query>> {
    if cur.eat('?') {
        let raw = cur.take_pct(pct::is_query_char)?;
        Ok(Some(Query::parse_raw(raw)?))
    } else {
        Ok(None)
    }
}

fn opt_fragment(cur: &mut Cursor) -> Result<Option<Fragment>> {
    if cur.eat('#') {
        let raw = cur.take_pct(pct::is_fragment_char)?;
        Ok(Some(Fragment::new(pct::decode(raw)?)))
    } else {
        Ok(None)
    }
}

// RFC 8141 accepts ?+r and ?=q in either order; within an opened component
// the other delimiter only terminates it while that component is still
// unseen, and a repeated delimiter is always literal content.
fn urn_rq(cur: &mut Cursor) -> Result<(Option<UrnComponent>, Option<Query>)> {
    let mut r = None;
    let mut q = None;
    if cur.eat_str("?+") {
        let raw = urn_component_raw(cur, Some("?="), "r-component")?;
        r = Some(UrnComponent::new(pct::decode(raw)?));
        if cur.eat_str("?=") {
            let raw = urn_component_raw(cur, None, "q-component")?;
            q = Some(Query::parse_raw(raw)?);
        }
    } else if cur.eat_str("?=") {
        let raw = urn_component_raw(cur, Some("?+"), "q-component")?;
        q = Some(Query::parse_raw(raw)?);
        if cur.eat_str("?+") {
            let raw = urn_component_raw(cur, None, "r-component")?;
            r = Some(UrnComponent::new(pct::decode(raw)?));
        }
    }
    Ok((r, q))
}

fn urn_component_raw<'a>(
    cur: &mut Cursor<'a>,
    stop: Option<&str>,
    what: &'static str,
) -> Result<&'a str> {
    let start = cur.pos;
    loop {
        match cur.peek() {
            None | Some('#') => break,
            Some('?') => {
                if stop.is_some_and(|s| cur.rest().starts_with(s)) {
                    break;
                }
                cur.bump();
            }
            Some('%') => cur.take_escape()?,
            Some(c) if pct::is_urn_component_char(c) => {
                cur.bump();
            }
            Some(_) => break,
        }
    }
    let raw = cur.slice_from(start);
    if raw.is_empty() {
        Err(cur.err(what))
    } else {
        Ok(raw)
    }
}

fn ipv4(text: &str) -> Option<[u8; 4]> {
    let mut bytes = [0u8; 4];
    let mut parts = text.split('.');
    for slot in &mut bytes {
        *slot = dec_octet(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(bytes)
}

// dec-octet: 1-3 digits, value <= 255, no leading zero
fn dec_octet(part: &str) -> Option<u8> {
    if part.is_empty()
        || part.len() > 3
        || (part.len() > 1 && part.starts_with('0'))
        || !part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    part.parse().ok()
}

fn ipv6(text: &str) -> Option<[u8; 16]> {
    let (head, tail) = match text.find("::") {
        Some(i) => (&text[..i], Some(&text[i + 2..])),
        None => (text, None),
    };
    let head_groups = ipv6_groups(head, tail.is_none())?;
    let groups = match tail {
        None => {
            if head_groups.len() != 8 {
                return None;
            }
            head_groups
        }
        Some(tail) => {
            if tail.contains("::") {
                return None;
            }
            let tail_groups = ipv6_groups(tail, true)?;
            if head_groups.len() + tail_groups.len() > 7 {
                return None;
            }
            let mut groups = head_groups;
            groups.resize(8 - tail_groups.len(), 0);
            groups.extend(tail_groups);
            groups
        }
    };
    let mut bytes = [0u8; 16];
    for (i, group) in groups.iter().enumerate() {
        bytes[2 * i] = (group >> 8) as u8;
        bytes[2 * i + 1] = *group as u8;
    }
    Some(bytes)
}

fn ipv6_groups(text: &str, v4_allowed: bool) -> Option<Vec<u16>> {
    if text.is_empty() {
        return Some(Vec::new());
    }
    let parts: Vec<&str> = text.split(':').collect();
    let mut groups = Vec::with_capacity(parts.len());
    for (i, part) in parts.iter().enumerate() {
        if part.contains('.') {
            // embedded IPv4, only in the final position
            if !v4_allowed || i != parts.len() - 1 {
                return None;
            }
            let b = ipv4(part)?;
            groups.push(u16::from(b[0]) << 8 | u16::from(b[1]));
            groups.push(u16::from(b[2]) << 8 | u16::from(b[3]));
        } else {
            if part.is_empty() || part.len() > 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            groups.push(u16::from_str_radix(part, 16).ok()?);
        }
    }
    Some(groups)
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.input[self.pos..].starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    fn err(&self, expected: &'static str) -> IriError {
        IriError::Parse {
            expected,
            offset: self.pos,
        }
    }

    fn expect_end(&self) -> Result<()> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.err("end of input"))
        }
    }

    /// Advance over a `%HH` escape, validating the two hex digits.
    fn take_escape(&mut self) -> Result<()> {
        let bytes = self.input.as_bytes();
        for i in 1..=2 {
            if !bytes.get(self.pos + i).is_some_and(u8::is_ascii_hexdigit) {
                return Err(IriError::Parse {
                    expected: "hex digit",
                    offset: self.pos + i,
                });
            }
        }
        self.pos += 3;
        Ok(())
    }

    /// Consume a run of characters accepted by `allowed`, plus `%HH`
    /// escapes, returning the raw (still encoded) slice.
    fn take_pct(&mut self, allowed: fn(char) -> bool) -> Result<&'a str> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some('%') => self.take_escape()?,
                Some(c) if allowed(c) => {
                    self.pos += c.len_utf8();
                }
                _ => break,
            }
        }
        Ok(self.slice_from(start))
    }
}
