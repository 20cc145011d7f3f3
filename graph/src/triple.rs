//! RDF triples.

use std::fmt;

use lodestar_term::{IriNode, IriOrBNode, Node};

/// An RDF statement: subject, predicate, object.
///
/// The subject is an IRI or a blank node, the predicate is an IRI,
/// and the object is any node.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Triple {
    s: IriOrBNode,
    p: IriNode,
    o: Node,
}

impl Triple {
    /// Build a new `Triple`.
    pub fn new(s: impl Into<IriOrBNode>, p: impl Into<IriNode>, o: impl Into<Node>) -> Triple {
        Triple {
            s: s.into(),
            p: p.into(),
            o: o.into(),
        }
    }

    /// The subject of this triple.
    pub fn s(&self) -> &IriOrBNode {
        &self.s
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &IriNode {
        &self.p
    }

    /// The object of this triple.
    pub fn o(&self) -> &Node {
        &self.o
    }
}

impl<S, P, O> From<(S, P, O)> for Triple
where
    S: Into<IriOrBNode>,
    P: Into<IriNode>,
    O: Into<Node>,
{
    fn from((s, p, o): (S, P, O)) -> Triple {
        Triple::new(s, p, o)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lodestar_term::BnodeId;

    #[test]
    fn display() {
        let s = BnodeId::new("b1").unwrap();
        let p: IriNode = "http://example.org/name".parse().unwrap();
        let t = Triple::new(s, p, "Alice");
        assert_eq!(t.to_string(), "_:b1 <http://example.org/name> \"Alice\" .");
    }
}
