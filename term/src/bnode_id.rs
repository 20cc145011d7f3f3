//! I define the [`BnodeId`] wrapper type,
//! which guarantees that the underlying `str` is a valid blank node
//! identifier: a letter followed by letters, digits, `_` or `-`.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// Matches the whole input (`^...$`): a leading ASCII letter,
    /// then any number of letters, digits, underscores and hyphens.
    static ref BNODE_ID: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap();
}

/// A blank node identifier.
///
/// The identifier must start with a letter and contain only letters,
/// digits, `_` and `-`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BnodeId(String);

impl BnodeId {
    /// Build a new `BnodeId`, checking that the identifier is valid.
    pub fn new(id: impl Into<String>) -> Result<BnodeId, InvalidBnodeId> {
        let id = id.into();
        if BNODE_ID.is_match(&id) {
            Ok(BnodeId(id))
        } else {
            Err(InvalidBnodeId(id))
        }
    }

    /// The identifier, without the `_:` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BnodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// This error is raised when trying to build an invalid blank node identifier.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' is not valid")]
pub struct InvalidBnodeId(pub String);

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("a"; "single letter")]
    #[test_case("a-_"; "letter with punctuation")]
    #[test_case("a123"; "alphanumeric")]
    #[test_case("XyZ-9_b"; "mixed case with punctuation")]
    fn valid(id: &str) {
        assert!(BnodeId::new(id).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case(" "; "space")]
    #[test_case("a#"; "hash")]
    #[test_case("_"; "underscore")]
    #[test_case("-"; "hyphen")]
    #[test_case("-a"; "leading hyphen")]
    #[test_case("_a"; "leading underscore")]
    #[test_case("1a"; "leading digit")]
    #[test_case("a b"; "inner space")]
    fn invalid(id: &str) {
        assert!(BnodeId::new(id).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(BnodeId::new("b1").unwrap().to_string(), "_:b1");
    }
}
