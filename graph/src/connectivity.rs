//! Cyclicity and connectivity queries over the graph.
//!
//! Both queries see the graph as a graph over [`IriOrBNode`] vertices,
//! with one edge per triple whose object is itself an IRI or blank node;
//! literal objects are leaves and contribute no vertex. Traversals use an
//! explicit work list, so deep graphs cannot overflow the stack.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use lodestar_term::{BnodeId, IriNode, IriOrBNode, Node};

use crate::Graph;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Vertex<'a> {
    Iri(&'a IriNode),
    BNode(&'a BnodeId),
}

fn subject_vertex(s: &IriOrBNode) -> Vertex<'_> {
    match s {
        IriOrBNode::Iri(iri) => Vertex::Iri(iri),
        IriOrBNode::BNode(id) => Vertex::BNode(id),
    }
}

fn object_vertex(o: &Node) -> Option<Vertex<'_>> {
    match o {
        Node::Iri(iri) => Some(Vertex::Iri(iri)),
        Node::BNode(id) => Some(Vertex::BNode(id)),
        Node::Literal(_) => None,
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

impl Graph {
    /// Whether the directed graph induced by the triples has a cycle.
    ///
    /// Edges run from subject to object; a triple whose object equals its
    /// subject is a self-loop and makes the graph cyclic.
    pub fn is_cyclic(&self) -> bool {
        let adjacency = self.directed_adjacency();
        let mut color: BTreeMap<Vertex, Color> =
            adjacency.keys().map(|&v| (v, Color::White)).collect();
        for &start in adjacency.keys() {
            if color[&start] != Color::White {
                continue;
            }
            // iterative three-color depth-first search
            let mut stack: Vec<(Vertex, usize)> = vec![(start, 0)];
            color.insert(start, Color::Gray);
            loop {
                let Some(&mut (v, ref mut i)) = stack.last_mut() else {
                    break;
                };
                let next = adjacency[&v].get(*i).copied();
                if next.is_some() {
                    *i += 1;
                }
                match next {
                    Some(w) => match color[&w] {
                        Color::Gray => return true,
                        Color::White => {
                            color.insert(w, Color::Gray);
                            stack.push((w, 0));
                        }
                        Color::Black => {}
                    },
                    None => {
                        color.insert(v, Color::Black);
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// Whether the directed graph induced by the triples has no cycle.
    pub fn is_acyclic(&self) -> bool {
        !self.is_cyclic()
    }

    /// Whether the undirected graph induced by the triples has a single
    /// connected component.
    ///
    /// The empty graph is vacuously connected. Literal objects are not
    /// vertices, so two triples with distinct subjects and only literal
    /// objects make a disconnected graph.
    pub fn is_connected(&self) -> bool {
        let adjacency = self.undirected_adjacency();
        let Some(&start) = adjacency.keys().next() else {
            return true;
        };
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            for &w in &adjacency[&v] {
                if seen.insert(w) {
                    queue.push_back(w);
                }
            }
        }
        seen.len() == adjacency.len()
    }

    fn directed_adjacency(&self) -> BTreeMap<Vertex<'_>, Vec<Vertex<'_>>> {
        let mut adjacency: BTreeMap<Vertex, Vec<Vertex>> = BTreeMap::new();
        for triple in self.triples() {
            let s = subject_vertex(triple.s());
            adjacency.entry(s).or_default();
            if let Some(o) = object_vertex(triple.o()) {
                adjacency.entry(o).or_default();
                adjacency.entry(s).or_default().push(o);
            }
        }
        adjacency
    }

    fn undirected_adjacency(&self) -> BTreeMap<Vertex<'_>, Vec<Vertex<'_>>> {
        let mut adjacency = self.directed_adjacency();
        let edges: Vec<(Vertex, Vertex)> = adjacency
            .iter()
            .flat_map(|(&v, ws)| ws.iter().map(move |&w| (w, v)))
            .collect();
        for (v, w) in edges {
            adjacency.entry(v).or_default().push(w);
        }
        adjacency
    }
}
