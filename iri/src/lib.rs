//! This crate provides parsing, normalization and resolution of IRIs
//! ([RFC 3987](https://tools.ietf.org/html/rfc3987)), URIs
//! ([RFC 3986](https://tools.ietf.org/html/rfc3986)) and URNs
//! ([RFC 8141](https://tools.ietf.org/html/rfc8141)).
//!
//! It is developed as a part of lodestar,
//! an [RDF] and [Linked Data] toolkit in Rust,
//! but can be used independently.
//!
//! Parsing produces a fully typed, normalized, immutable value:
//! schemes, named hosts and URN namespace identifiers are lowercased,
//! percent-escapes are decoded, default ports are dropped,
//! queries are canonically sorted,
//! and URN r/q components are put in canonical order.
//! Every value renders in two forms: the UTF-8 IRI form (`Display`)
//! and the pure-ASCII URI form (`to_uri_string`).
//!
//! # Feature gates
//!
//! - **serde** enables serializing and deserializing IRIs as strings.
//!
//! - **test_data** exposes the [`test`](`mod@test`) module,
//!   which contains arrays of good and bad IRIs,
//!   useful for testing purposes, possibly in other crates.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/

#![deny(missing_docs)]

mod _error;
pub use _error::*;
mod _fmt;
pub(crate) use _fmt::WriteForm;

pub mod pct;

mod authority;
pub use authority::*;
mod fragment;
pub use fragment::*;
mod path;
pub use path::*;
mod query;
pub use query::*;
mod scheme;
pub use scheme::*;
mod url;
pub use self::url::*;
mod urn;
pub use urn::*;
mod relative;
pub use relative::*;
mod _iri;
pub use _iri::*;

mod parser;
mod resolve;

#[cfg(feature = "serde")]
mod _serde;

#[cfg(any(test, feature = "test_data"))]
pub mod test;
