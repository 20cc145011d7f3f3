//! This crate provides the in-memory RDF graph of lodestar,
//! an [RDF] and [Linked Data] toolkit in Rust.
//!
//! A [`Graph`] is an immutable, duplicate-free set of [`Triple`]s.
//! Mutation is functional: `add`, `remove`, `union` and `difference`
//! return new graphs. Beyond iteration and filtered accessors, the graph
//! answers structural queries: [`Graph::is_cyclic`] and
//! [`Graph::is_connected`].
//!
//! ```
//! use lodestar_graph::{Graph, Triple};
//! use lodestar_term::{BnodeId, IriNode, IriOrBNode};
//!
//! let alice = BnodeId::new("alice").unwrap();
//! let name: IriNode = "http://example.org/name".parse().unwrap();
//! let g: Graph = [Triple::new(alice, name, "Alice")].into_iter().collect();
//! assert_eq!(g.len(), 1);
//! assert!(g.is_acyclic());
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/

mod connectivity;
mod graph;
pub use graph::*;
mod triple;
pub use triple::*;
