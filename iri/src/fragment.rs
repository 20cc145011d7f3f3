//! The fragment component of an IRI.

use std::fmt;

use crate::_fmt::{impl_display, WriteForm};
use crate::pct;

/// The fragment of an IRI, stored percent-decoded.
///
/// Any UTF-8 string is a valid decoded fragment, since every character can
/// be percent-encoded on output.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Fragment(String);

impl Fragment {
    /// Build a new `Fragment` from its decoded text.
    pub fn new(fragment: impl Into<String>) -> Fragment {
        Fragment(fragment.into())
    }

    /// The decoded fragment text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl WriteForm for Fragment {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        pct::encode_into(w, &self.0, pct::is_fragment_char, ascii)
    }
}

impl_display!(Fragment);
