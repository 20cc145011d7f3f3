//! This crate is the facade of lodestar,
//! a toolkit for [RDF] and [Linked Data] in Rust.
//!
//! It re-exports the crates of the lodestar workspace:
//!
//! * [`iri`]: parsing, normalization and resolution of IRIs
//!   (RFC 3987), URIs (RFC 3986) and URNs (RFC 8141);
//! * [`term`]: the RDF node model (IRIs, blank nodes, literals);
//! * [`graph`]: the immutable in-memory triple set.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/

pub use lodestar_graph as graph;
pub use lodestar_iri as iri;
pub use lodestar_term as term;

/// Re-exports the most commonly used types.
pub mod prelude {
    pub use crate::graph::{Graph, Triple};
    pub use crate::iri::{AbsoluteIri, Iri, IriError, Path, Query, RelativeIri, Url, Urn};
    pub use crate::term::{BnodeId, IriNode, IriOrBNode, LanguageTag, Literal, Node};
}
