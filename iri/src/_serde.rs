//! Serde support: IRIs serialize as their IRI-form string and deserialize
//! through the parser.

use serde::{
    de::{Error, Unexpected},
    Deserialize, Serialize,
};

use crate::{AbsoluteIri, Iri, RelativeIri, Url, Urn};

macro_rules! impl_serde {
    ($ty:ident, $expecting:expr) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let txt = String::deserialize(deserializer)?;
                txt.parse()
                    .map_err(|_| D::Error::invalid_value(Unexpected::Str(&txt), &$expecting))
            }
        }
    };
}

impl_serde!(Iri, "a valid IRI reference");
impl_serde!(AbsoluteIri, "a valid absolute IRI");
impl_serde!(Url, "a valid URL");
impl_serde!(Urn, "a valid URN");
impl_serde!(RelativeIri, "a valid relative IRI reference");

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Deserialize, Serialize)]
    struct MyTable {
        base: Option<Url>,
        name: Option<Urn>,
        target: Option<Iri>,
    }

    #[test]
    fn roundtrip() {
        let json = r#"{
            "base": "http://example.org/a",
            "name": "urn:isbn:0451450523",
            "target": "../b"
        }"#;
        let table: MyTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.base.as_ref().unwrap().to_string(), "http://example.org/a");
        let out = serde_json::to_string(&table).unwrap();
        let back: MyTable = serde_json::from_str(&out).unwrap();
        assert_eq!(back.name.unwrap().to_string(), "urn:isbn:0451450523");
    }

    #[test]
    fn invalid_input_is_rejected() {
        let r: Result<MyTable, _> = serde_json::from_str(r#"{"base": "not a url"}"#);
        assert!(r.is_err());
    }
}
