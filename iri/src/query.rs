//! The query component of an IRI, as a canonically sorted multimap.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::_fmt::{impl_display, WriteForm};
use crate::{parser, pct, Result};

/// The query component of an IRI, as a mapping from decoded keys to ordered
/// sets of decoded values.
///
/// The canonical ordering is load-bearing: keys are sorted, values are
/// sorted within a key, and duplicate pairs coalesce, so equality and
/// rendering are independent of the order in which pairs were written.
/// A pair with an empty value is preserved and serialized as the bare key.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Query(BTreeMap<String, BTreeSet<String>>);

impl Query {
    /// An empty query.
    pub fn new() -> Query {
        Query(BTreeMap::new())
    }

    /// Whether this query holds no pair at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of (key, value) pairs.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// Add a (key, value) pair; adding an existing pair is a no-op.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().insert(value.into());
    }

    /// The values recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.0.get(key)
    }

    /// Whether any pair has the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over all (key, value) pairs, sorted by key then value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Split raw (still percent-encoded) query text on `&` and the first
    /// `=` of each pair, then decode keys and values.
    pub(crate) fn parse_raw(raw: &str) -> Result<Query> {
        let mut query = Query::new();
        for pair in raw.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            query.insert(pct::decode(key)?, pct::decode(value)?);
        }
        Ok(query)
    }
}

impl WriteForm for Query {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                w.write_char('&')?;
            }
            pct::encode_into(w, key, pct::is_query_text_safe, ascii)?;
            if !value.is_empty() {
                w.write_char('=')?;
                pct::encode_into(w, value, pct::is_query_text_safe, ascii)?;
            }
        }
        Ok(())
    }
}

impl_display!(Query);

impl FromStr for Query {
    type Err = crate::IriError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_query(s)
    }
}
