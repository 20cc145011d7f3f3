//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying `str`
//! is a valid [BCP47](https://tools.ietf.org/search/bcp47) language tag.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;
use thiserror::Error;

/// This wrapper guarantees that the underlying `str`
/// is a valid [BCP47](https://tools.ietf.org/search/bcp47) language tag.
///
/// NB: it is actually slightly more permissive than BCP47,
/// as it does not check that the different subtags are registered
/// (language, country...) codes.
///
/// The original case of the tag is preserved, but comparison, ordering and
/// hashing are case-insensitive, as mandated by RFC 5646 §2.1.1.
#[derive(Clone, Debug)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Build a new [`LanguageTag`] from `tag`,
    /// returning an error if it is not a valid BCP47 language tag.
    pub fn new(tag: impl Into<String>) -> Result<LanguageTag, InvalidLanguageTag> {
        let tag = tag.into();
        if LANG_TAG.is_match(&tag) {
            Ok(LanguageTag(tag))
        } else {
            Err(InvalidLanguageTag(tag))
        }
    }

    /// The tag, in its original case.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &LanguageTag) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Eq for LanguageTag {}

impl PartialOrd for LanguageTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LanguageTag {
    fn cmp(&self, other: &LanguageTag) -> Ordering {
        let iter1 = self.0.chars().map(|c| c.to_ascii_lowercase());
        let iter2 = other.0.chars().map(|c| c.to_ascii_lowercase());
        iter1.cmp(iter2)
    }
}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .for_each(|c| c.hash(state));
    }
}

/// This error is raised when trying to parse an invalid language tag.
#[derive(Debug, Error)]
#[error("The given language tag '{0}' does not comply with BCP47")]
pub struct InvalidLanguageTag(pub String);

static LANG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(LANG_TAG_SRC).unwrap());

/// Match a valid BCP47 language tag
static LANG_TAG_SRC: &str = r"(?xi-u)^
(
  (?:
    (?: #language
      (?:
        [A-Z]{2,3}
        (?: #extlang
          (?:
            -[A-Z]{3}
          ){0,3}
        )
      )
    |
      [A-Z]{4,8}
    )
    (?: #script
      -[A-Z]{4}
    )?
    (?: #region
      -
      (?:
        [A-Z]{2}
      |
        [0-9]{3}
      )
    )?
    (?: #variant
      -
      (?:
        [A-Z0-9]{5,8}
      |
        [0-9][A-Z0-9]{3}
      )
    )*
    (?: #extension
      -[0-9A-WY-Z]
      (?:
        -[A-Z0-9]{2,8}
      )+
    )*
    (?: #privateUse
      -X
      (?:
        -[A-Z0-9]{1,8}
      )+
    )?
  )
|
  (?: #privateUse
    X
    (?:
      -[A-Z0-9]{1,8}
    )+
  )
|
  (?: #grandfathered
    en-GB-oed|i-ami|i-bnn|i-default|i-enochian|i-hak|i-klingon|i-lux|i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu|sgn-BE-FR|sgn-BE-NL|sgn-CH-DE
    # NB regular grandfathered tags are not included,
    # as they will be matched by the normal case
  )
)$";

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("en")]
    #[test_case("zh-Hans")]
    #[test_case("sgn-BE-FR"; "irregular grandfathered")]
    #[test_case("i-default"; "irregular grandfathered i")]
    #[test_case("en-US-x-twain"; "private use suffix")]
    #[test_case("de-Latn-DE-1996"; "script region variant")]
    #[test_case("en-GB")]
    #[test_case("fr-CA")]
    #[test_case("x-whatever"; "pure private use")]
    #[test_case("art-lojban"; "regular grandfathered")]
    fn valid(tag: &str) {
        assert!(LanguageTag::new(tag).is_ok(), "{tag}");
    }

    #[test_case(""; "empty")]
    #[test_case("a"; "too short")]
    #[test_case("213456475869707865433"; "digits")]
    #[test_case("!"; "punctuation")]
    #[test_case("abcdefghi"; "too long")]
    #[test_case("en US"; "space")]
    #[test_case("ab-a-b"; "bad singleton use")]
    fn invalid(tag: &str) {
        assert!(LanguageTag::new(tag).is_err(), "{tag}");
    }

    #[test_case("fr", "FR")]
    #[test_case("en-us", "en-US")]
    #[test_case("zh-hans", "zh-Hans")]
    fn case_insensitive_eq(tag1: &str, tag2: &str) {
        let ltag1 = LanguageTag::new(tag1).unwrap();
        let ltag2 = LanguageTag::new(tag2).unwrap();
        assert_eq!(ltag1, ltag2);
        assert_eq!(ltag1, *tag2);
    }

    #[test]
    fn case_preserved_in_display() {
        assert_eq!(LanguageTag::new("en-US").unwrap().to_string(), "en-US");
    }

    #[test]
    fn case_insensitive_ord_and_hash() {
        use std::collections::BTreeSet;
        let mut set = BTreeSet::new();
        set.insert(LanguageTag::new("en-US").unwrap());
        assert!(set.contains(&LanguageTag::new("EN-us").unwrap()));
    }
}
