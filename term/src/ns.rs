//! Vocabulary constants for the namespaces used by this crate.
//!
//! Terms are lazily parsed [`IriNode`](crate::IriNode)s:
//!
//! ```
//! use lodestar_term::ns::xsd;
//!
//! assert_eq!(
//!     xsd::integer.to_string(),
//!     "<http://www.w3.org/2001/XMLSchema#integer>",
//! );
//! ```

/// Build one lazily-parsed vocabulary term per identifier,
/// named after its suffix in the namespace.
macro_rules! ns_terms {
    ($ns:literal, $($term:ident),* $(,)?) => {
        $(
            #[doc = concat!("The `", stringify!($term), "` term.")]
            #[allow(non_upper_case_globals)]
            pub static $term: std::sync::LazyLock<$crate::IriNode> =
                std::sync::LazyLock::new(|| {
                    concat!($ns, stringify!($term))
                        .parse()
                        .expect("vocabulary IRIs are well-formed")
                });
        )*
    };
}

/// The `xsd:` namespace, restricted to the datatypes this crate uses.
#[rustfmt::skip]
pub mod xsd {
    ns_terms!(
        "http://www.w3.org/2001/XMLSchema#",
        string,
        boolean,
        decimal,
        integer,
        long,
        int,
        short,
        byte,
        float,
        double,
        date,
        dateTime,
        time,
        nonNegativeInteger,
        nonPositiveInteger,
        negativeInteger,
        positiveInteger,
        unsignedLong,
        unsignedInt,
        unsignedShort,
        unsignedByte,
    );
}

/// The `rdf:` namespace, restricted to the terms this crate uses.
pub mod rdf {
    ns_terms!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        langString,
        value,
    );

    /// The `type` term (`type` is a reserved keyword in Rust).
    #[allow(non_upper_case_globals)]
    pub static type_: std::sync::LazyLock<crate::IriNode> = std::sync::LazyLock::new(|| {
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
            .parse()
            .expect("vocabulary IRIs are well-formed")
    });
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn xsd_terms() {
        assert_eq!(
            xsd::string.iri().to_string(),
            "http://www.w3.org/2001/XMLSchema#string"
        );
        assert_eq!(
            xsd::dateTime.iri().to_string(),
            "http://www.w3.org/2001/XMLSchema#dateTime"
        );
    }

    #[test]
    fn rdf_terms() {
        assert_eq!(
            rdf::langString.iri().to_string(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"
        );
        assert_eq!(
            rdf::type_.iri().to_string(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
        );
    }
}
