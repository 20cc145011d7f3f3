//! The immutable triple-set graph.

use std::collections::BTreeSet;

use lodestar_term::{IriNode, IriOrBNode, Node};

use crate::Triple;

/// An RDF graph: a duplicate-free set of [`Triple`]s.
///
/// The graph is a value: `add`, `remove`, `union` and `difference` leave
/// the receiver untouched and return a new graph. Equality and hashing are
/// those of the underlying ordered set, and are therefore independent of
/// insertion order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// The empty graph.
    pub fn new() -> Graph {
        Graph {
            triples: BTreeSet::new(),
        }
    }

    /// The number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether this graph holds no triple.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Whether this graph holds the given triple.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// A new graph with `triple` added; adding an existing triple yields
    /// an equal graph.
    pub fn add(&self, triple: impl Into<Triple>) -> Graph {
        let mut triples = self.triples.clone();
        triples.insert(triple.into());
        Graph { triples }
    }

    /// A new graph with `triple` removed; removing an absent triple yields
    /// an equal graph.
    pub fn remove(&self, triple: &Triple) -> Graph {
        let mut triples = self.triples.clone();
        triples.remove(triple);
        Graph { triples }
    }

    /// A new graph with the triples of both graphs.
    pub fn union(&self, other: &Graph) -> Graph {
        Graph {
            triples: self.triples.union(&other.triples).cloned().collect(),
        }
    }

    /// A new graph with the triples of `self` that are not in `other`.
    pub fn difference(&self, other: &Graph) -> Graph {
        Graph {
            triples: self.triples.difference(&other.triples).cloned().collect(),
        }
    }

    /// Iterate over all triples.
    pub fn triples(&self) -> impl Iterator<Item = &Triple> + '_ {
        self.triples.iter()
    }

    /// Iterate over the distinct subjects.
    pub fn subjects(&self) -> impl Iterator<Item = &IriOrBNode> + '_ {
        self.triples
            .iter()
            .map(Triple::s)
            .collect::<BTreeSet<_>>()
            .into_iter()
    }

    /// Iterate over the distinct predicates.
    pub fn predicates(&self) -> impl Iterator<Item = &IriNode> + '_ {
        self.triples
            .iter()
            .map(Triple::p)
            .collect::<BTreeSet<_>>()
            .into_iter()
    }

    /// Iterate over the distinct objects.
    pub fn objects(&self) -> impl Iterator<Item = &Node> + '_ {
        self.triples
            .iter()
            .map(Triple::o)
            .collect::<BTreeSet<_>>()
            .into_iter()
    }

    /// The distinct subjects of triples with the given predicate and object.
    pub fn subjects_with<'s>(
        &'s self,
        p: &'s IriNode,
        o: &'s Node,
    ) -> impl Iterator<Item = &'s IriOrBNode> + 's {
        self.subjects_by(move |t| t.p() == p && t.o() == o)
    }

    /// The distinct predicates of triples with the given subject and object.
    pub fn predicates_with<'s>(
        &'s self,
        s: &'s IriOrBNode,
        o: &'s Node,
    ) -> impl Iterator<Item = &'s IriNode> + 's {
        self.predicates_by(move |t| t.s() == s && t.o() == o)
    }

    /// The distinct objects of triples with the given subject and predicate.
    pub fn objects_with<'s>(
        &'s self,
        s: &'s IriOrBNode,
        p: &'s IriNode,
    ) -> impl Iterator<Item = &'s Node> + 's {
        self.objects_by(move |t| t.s() == s && t.p() == p)
    }

    /// The distinct subjects of triples matching `f`.
    pub fn subjects_by<F>(&self, mut f: F) -> impl Iterator<Item = &IriOrBNode> + '_
    where
        F: FnMut(&Triple) -> bool,
    {
        self.triples
            .iter()
            .filter(move |t| f(t))
            .map(Triple::s)
            .collect::<BTreeSet<_>>()
            .into_iter()
    }

    /// The distinct predicates of triples matching `f`.
    pub fn predicates_by<F>(&self, mut f: F) -> impl Iterator<Item = &IriNode> + '_
    where
        F: FnMut(&Triple) -> bool,
    {
        self.triples
            .iter()
            .filter(move |t| f(t))
            .map(Triple::p)
            .collect::<BTreeSet<_>>()
            .into_iter()
    }

    /// The distinct objects of triples matching `f`.
    pub fn objects_by<F>(&self, mut f: F) -> impl Iterator<Item = &Node> + '_
    where
        F: FnMut(&Triple) -> bool,
    {
        self.triples
            .iter()
            .filter(move |t| f(t))
            .map(Triple::o)
            .collect::<BTreeSet<_>>()
            .into_iter()
    }
}

impl<T: Into<Triple>> FromIterator<T> for Graph {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Graph {
        Graph {
            triples: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lodestar_term::BnodeId;

    fn iri(suffix: &str) -> IriNode {
        format!("http://example.org/{suffix}").parse().unwrap()
    }

    fn bnode(id: &str) -> BnodeId {
        BnodeId::new(id).unwrap()
    }

    fn sample() -> Graph {
        [
            (bnode("alice"), iri("knows"), Node::from(IriOrBNode::from(bnode("bob")))),
            (bnode("alice"), iri("name"), Node::from("Alice")),
            (bnode("bob"), iri("name"), Node::from("Bob")),
            (bnode("bob"), iri("age"), Node::from(42)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn set_semantics() {
        let g = sample();
        let t = Triple::new(bnode("carol"), iri("name"), "Carol");
        let g2 = g.add(t.clone());
        assert_eq!(g.len(), 4, "add is functional");
        assert_eq!(g2.len(), 5);
        assert!(g2.contains(&t));
        assert_eq!(g2.add(t.clone()), g2, "add is idempotent");
        assert_eq!(g2.remove(&t), g);
        assert_eq!(g.remove(&t), g, "removing an absent triple is a no-op");
    }

    #[test]
    fn add_remove_law() {
        let g = sample();
        let t = Triple::new(bnode("x"), iri("p"), "o");
        assert_eq!(g.add(t.clone()).remove(&t), g.remove(&t));
    }

    #[test]
    fn union_difference() {
        let g = sample();
        let h: Graph = [(bnode("carol"), iri("name"), Node::from("Carol"))]
            .into_iter()
            .collect();
        let u = g.union(&h);
        assert_eq!(u.len(), 5);
        assert_eq!(u.difference(&h), g);
        assert_eq!(g.difference(&g), Graph::new());
        assert_eq!(g.union(&g), g);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let g1 = sample();
        let mut triples: Vec<Triple> = g1.triples().cloned().collect();
        triples.reverse();
        let g2: Graph = triples.into_iter().collect();
        assert_eq!(g1, g2);
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let hash = |g: &Graph| {
            let mut h = DefaultHasher::new();
            g.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&g1), hash(&g2));
    }

    #[test]
    fn column_iterators() {
        let g = sample();
        assert_eq!(g.subjects().count(), 2);
        assert_eq!(g.predicates().count(), 3);
        assert_eq!(g.objects().count(), 4);
    }

    #[test]
    fn filtered_accessors() {
        let g = sample();
        let name = iri("name");
        let alice = Node::from("Alice");
        let subjects: Vec<_> = g.subjects_with(&name, &alice).collect();
        assert_eq!(subjects, vec![&IriOrBNode::from(bnode("alice"))]);

        let bob = IriOrBNode::from(bnode("bob"));
        let objects: Vec<_> = g.objects_with(&bob, &name).collect();
        assert_eq!(objects, vec![&Node::from("Bob")]);

        let forty_two = Node::from(42);
        let predicates: Vec<_> = g.predicates_with(&bob, &forty_two).collect();
        assert_eq!(predicates, vec![&iri("age")]);

        let with_literals: Vec<_> = g.subjects_by(|t| t.o().is_literal()).collect();
        assert_eq!(with_literals.len(), 2);
    }
}
