//! This crate provides the RDF node model of lodestar,
//! an [RDF] and [Linked Data] toolkit in Rust.
//!
//! An RDF [`Node`] is an IRI, a blank node, or a literal; the
//! [`IriOrBNode`] subset is the type of nodes that may appear as the
//! subject of a triple. Rather than inheritance, the model is a pair of
//! tagged sums with `is_*` and `as_*` accessors.
//!
//! Literals carry a lexical form, a datatype IRI and an optional
//! [BCP47](https://tools.ietf.org/search/bcp47) language tag;
//! native Rust values convert to literals with the matching XSD datatype:
//!
//! ```
//! use lodestar_term::Node;
//!
//! assert_eq!(
//!     Node::literal(2).to_string(),
//!     "\"2\"^^<http://www.w3.org/2001/XMLSchema#integer>",
//! );
//! assert_eq!(Node::literal("a").to_string(), "\"a\"");
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/

mod bnode_id;
pub use bnode_id::*;
mod language_tag;
pub use language_tag::*;
mod literal;
pub use literal::*;
mod node;
pub use node::*;

pub mod ns;
