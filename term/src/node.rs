//! The RDF node sum types.

use std::fmt;
use std::str::FromStr;

use lodestar_iri::{AbsoluteIri, IriError, Url, Urn};

use crate::{BnodeId, InvalidBnodeId, Literal};

/// An RDF node naming a resource by an absolute IRI.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IriNode(AbsoluteIri);

impl IriNode {
    /// Build a new `IriNode` from an absolute IRI.
    pub fn new(iri: AbsoluteIri) -> IriNode {
        IriNode(iri)
    }

    /// The underlying IRI.
    pub fn iri(&self) -> &AbsoluteIri {
        &self.0
    }

    /// The pure-ASCII (URI) form of the underlying IRI.
    pub fn to_uri_string(&self) -> String {
        self.0.to_uri_string()
    }
}

impl fmt::Display for IriNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl FromStr for IriNode {
    type Err = IriError;

    fn from_str(s: &str) -> Result<IriNode, IriError> {
        AbsoluteIri::parse(s).map(IriNode)
    }
}

impl From<AbsoluteIri> for IriNode {
    fn from(iri: AbsoluteIri) -> IriNode {
        IriNode(iri)
    }
}

impl From<Url> for IriNode {
    fn from(url: Url) -> IriNode {
        IriNode(url.into())
    }
}

impl From<Urn> for IriNode {
    fn from(urn: Urn) -> IriNode {
        IriNode(urn.into())
    }
}

/// The subset of RDF nodes that may appear as the subject of a triple:
/// an IRI or a blank node, but not a literal.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IriOrBNode {
    /// An IRI node.
    Iri(IriNode),
    /// A blank node.
    BNode(BnodeId),
}

impl IriOrBNode {
    /// Whether this node is an IRI node.
    pub fn is_iri(&self) -> bool {
        matches!(self, IriOrBNode::Iri(_))
    }

    /// Whether this node is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, IriOrBNode::BNode(_))
    }

    /// This node as an IRI node, if it is one.
    pub fn as_iri(&self) -> Option<&IriNode> {
        match self {
            IriOrBNode::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// This node as a blank node identifier, if it is one.
    pub fn as_blank(&self) -> Option<&BnodeId> {
        match self {
            IriOrBNode::BNode(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for IriOrBNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IriOrBNode::Iri(iri) => iri.fmt(f),
            IriOrBNode::BNode(id) => id.fmt(f),
        }
    }
}

impl From<IriNode> for IriOrBNode {
    fn from(iri: IriNode) -> IriOrBNode {
        IriOrBNode::Iri(iri)
    }
}

impl From<BnodeId> for IriOrBNode {
    fn from(id: BnodeId) -> IriOrBNode {
        IriOrBNode::BNode(id)
    }
}

/// An RDF node: an IRI, a blank node, or a literal.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Node {
    /// An IRI node.
    Iri(IriNode),
    /// A blank node.
    BNode(BnodeId),
    /// A literal.
    Literal(Literal),
}

impl Node {
    /// Build a blank node, checking the identifier.
    pub fn blank(id: impl Into<String>) -> Result<Node, InvalidBnodeId> {
        BnodeId::new(id).map(Node::BNode)
    }

    /// Build an IRI node, parsing `txt` as an absolute IRI.
    pub fn iri(txt: &str) -> Result<Node, IriError> {
        AbsoluteIri::parse(txt).map(|iri| Node::Iri(IriNode(iri)))
    }

    /// Build a literal node from anything convertible to a [`Literal`]
    /// (strings, booleans, and the native numeric types).
    pub fn literal(value: impl Into<Literal>) -> Node {
        Node::Literal(value.into())
    }

    /// Whether this node is an IRI node.
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    /// Whether this node is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::BNode(_))
    }

    /// Whether this node is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// This node as an IRI node, if it is one.
    pub fn as_iri(&self) -> Option<&IriNode> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// This node as a blank node identifier, if it is one.
    pub fn as_blank(&self) -> Option<&BnodeId> {
        match self {
            Node::BNode(id) => Some(id),
            _ => None,
        }
    }

    /// This node as a literal, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => iri.fmt(f),
            Node::BNode(id) => id.fmt(f),
            Node::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<IriNode> for Node {
    fn from(iri: IriNode) -> Node {
        Node::Iri(iri)
    }
}

impl From<BnodeId> for Node {
    fn from(id: BnodeId) -> Node {
        Node::BNode(id)
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Node {
        Node::Literal(lit)
    }
}

// native values convert straight to literal nodes,
// so they can be used as triple objects in code
macro_rules! impl_node_from_native {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Node {
                    Node::Literal(value.into())
                }
            }
        )*
    };
}

impl_node_from_native!(&str, String, bool, i8, i16, i32, i64, f32, f64);

impl From<IriOrBNode> for Node {
    fn from(node: IriOrBNode) -> Node {
        match node {
            IriOrBNode::Iri(iri) => Node::Iri(iri),
            IriOrBNode::BNode(id) => Node::BNode(id),
        }
    }
}

impl TryFrom<Node> for IriOrBNode {
    // the rejected node is handed back to the caller
    type Error = Node;

    fn try_from(node: Node) -> Result<IriOrBNode, Node> {
        match node {
            Node::Iri(iri) => Ok(IriOrBNode::Iri(iri)),
            Node::BNode(id) => Ok(IriOrBNode::BNode(id)),
            literal => Err(literal),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn iri_node_display() {
        let node: IriNode = "http://example.org/x".parse().unwrap();
        assert_eq!(node.to_string(), "<http://example.org/x>");
    }

    #[test]
    fn iri_node_uri_form() {
        let node: IriNode = "http://example.org/a£".parse().unwrap();
        assert_eq!(node.to_string(), "<http://example.org/a£>");
        assert_eq!(node.to_uri_string(), "http://example.org/a%C2%A3");
    }

    #[test_case("a"; "single letter")]
    #[test_case("a-_"; "letter with punctuation")]
    #[test_case("a123"; "alphanumeric")]
    fn valid_blank(id: &str) {
        assert!(Node::blank(id).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case(" "; "space")]
    #[test_case("a#"; "hash")]
    #[test_case("_"; "underscore")]
    #[test_case("-"; "hyphen")]
    #[test_case("-a"; "leading hyphen")]
    #[test_case("_a"; "leading underscore")]
    fn invalid_blank(id: &str) {
        assert!(Node::blank(id).is_err());
    }

    #[test]
    fn predicates() {
        let iri = Node::iri("urn:example:x").unwrap();
        let blank = Node::blank("b1").unwrap();
        let lit = Node::literal("hello");
        assert!(iri.is_iri() && !iri.is_blank() && !iri.is_literal());
        assert!(blank.is_blank());
        assert!(lit.is_literal());
        assert!(iri.as_iri().is_some());
        assert!(blank.as_blank().is_some());
        assert!(lit.as_literal().is_some());
    }

    #[test]
    fn literal_is_not_a_subject() {
        assert!(IriOrBNode::try_from(Node::literal(42)).is_err());
        assert!(IriOrBNode::try_from(Node::blank("b").unwrap()).is_ok());
    }

    #[test]
    fn relative_iri_rejected() {
        assert!(Node::iri("a/b").is_err());
    }
}
