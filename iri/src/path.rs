//! The path component of an IRI, and its algebra:
//! concatenation, reversal, and dot-segment removal
//! ([RFC 3986 §5.2.4](https://tools.ietf.org/html/rfc3986#section-5.2.4)).

use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;

use crate::_fmt::{impl_display, WriteForm};
use crate::{parser, pct, Result};

/// The path component of an IRI
/// ([RFC 3986 §3.3](https://tools.ietf.org/html/rfc3986#section-3.3)).
///
/// A path is a list growing to the right: the outermost constructor is the
/// *end* of the textual form, so `"/a/b"` is
/// `Segment("b", Slash(Segment("a", Slash(Empty))))`.
///
/// Segments are stored percent-decoded, and two paths are equal when their
/// decoded constructor sequences are equal. A `Segment` never holds an
/// empty string: an empty segment is expressed by two adjacent `Slash`es.
///
/// All traversals (including `Clone`, `PartialEq`, `Hash` and `Drop`) are
/// iterative, so paths of tens of thousands of segments are safe.
#[derive(Debug)]
pub enum Path {
    /// The empty path.
    Empty,
    /// The inner path followed by `/`.
    Slash(Box<Path>),
    /// The inner path followed by a non-empty, decoded segment.
    Segment(String, Box<Path>),
}

// owned counterpart of one constructor, used by the iterative traversals
// and by the parser when building a path in textual order
pub(crate) enum PathNode {
    Slash,
    Segment(String),
}

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum NodeRef<'a> {
    Slash,
    Segment(&'a str),
}

impl NodeRef<'_> {
    fn to_owned(self) -> PathNode {
        match self {
            NodeRef::Slash => PathNode::Slash,
            NodeRef::Segment(s) => PathNode::Segment(s.to_string()),
        }
    }
}

// iterates constructors from the outermost inwards, i.e. in reverse textual order
struct Nodes<'a>(&'a Path);

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        match self.0 {
            Path::Empty => None,
            Path::Slash(t) => {
                self.0 = t;
                Some(NodeRef::Slash)
            }
            Path::Segment(s, t) => {
                self.0 = t;
                Some(NodeRef::Segment(s))
            }
        }
    }
}

impl Path {
    /// The empty path.
    pub fn new() -> Path {
        Path::Empty
    }

    /// Whether this path is [`Path::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Path::Empty)
    }

    /// Whether the textual form of this path begins with `/`.
    pub fn starts_with_slash(&self) -> bool {
        self.nodes().last() == Some(NodeRef::Slash)
    }

    /// Whether the textual form of this path ends with `/`.
    pub fn ends_with_slash(&self) -> bool {
        matches!(self, Path::Slash(_))
    }

    /// Iterate over the decoded segments, in textual order.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes_in_order().into_iter().filter_map(|n| match n {
            NodeRef::Segment(s) => Some(s),
            NodeRef::Slash => None,
        })
    }

    /// Structural reversal: the constructor sequence is read in the
    /// opposite direction, so `reverse("/a/b")` is `"b/a/"`.
    ///
    /// Reversal is an involution: `p.reverse().reverse() == p`.
    pub fn reverse(mut self) -> Path {
        let mut out = Path::Empty;
        while let Some(node) = self.pop_outer() {
            out.push_outer(node);
        }
        out
    }

    /// Append `segment` at the end of the path, inserting a `/` separator
    /// unless the path already ends with one. An empty `segment` is the
    /// identity.
    pub fn push_segment(self, segment: &str) -> Path {
        if segment.is_empty() {
            return self;
        }
        let mut out = match self {
            p @ Path::Slash(_) => p,
            p => Path::Slash(Box::new(p)),
        };
        out.push_outer(PathNode::Segment(segment.to_string()));
        out
    }

    /// Append `s` to the terminal segment of the path; when the path does
    /// not end with a segment, behaves as [`Path::push_segment`].
    pub fn push_str(mut self, s: &str) -> Path {
        if s.is_empty() {
            return self;
        }
        if let Path::Segment(seg, _) = &mut self {
            seg.push_str(s);
            self
        } else {
            self.push_segment(s)
        }
    }

    /// Concatenate, with `front` preceding `self` in textual order.
    ///
    /// The result reads as the concatenation of the two textual forms:
    /// an `Empty` operand is the identity, and a segment ending `front`
    /// merges with a segment starting `self`
    /// (`"/a/b" joined after "c"` is `"/a/bc"`).
    pub fn prepend(self, front: Path) -> Path {
        let mut out = front;
        let mut nodes = self.into_nodes_in_order().into_iter();
        if let Some(first) = nodes.next() {
            match first {
                PathNode::Slash => out.push_outer(PathNode::Slash),
                PathNode::Segment(s) => {
                    if let Path::Segment(seg, _) = &mut out {
                        seg.push_str(&s);
                    } else {
                        out.push_outer(PathNode::Segment(s));
                    }
                }
            }
        }
        for node in nodes {
            out.push_outer(node);
        }
        out
    }

    /// Remove the terminal segment, if any, keeping its leading `/`.
    ///
    /// This is the "all but the last segment" step of the merge operation
    /// of [RFC 3986 §5.2.3](https://tools.ietf.org/html/rfc3986#section-5.2.3).
    pub fn drop_last_segment(mut self) -> Path {
        if matches!(self, Path::Segment(..)) {
            self.pop_outer();
        }
        self
    }

    /// Remove `.` and `..` segments, per
    /// [RFC 3986 §5.2.4](https://tools.ietf.org/html/rfc3986#section-5.2.4).
    ///
    /// This operation is idempotent.
    pub fn remove_dot_segments(self) -> Path {
        use PathNode::{Segment, Slash};
        let mut input: VecDeque<PathNode> = self.into_nodes_in_order().into();
        let mut output: Vec<PathNode> = Vec::new();
        while let Some(node) = input.pop_front() {
            match node {
                // "../" or "./" at the start of the input, or a bare "." or ".."
                Segment(s) if s == "." || s == ".." => {
                    if matches!(input.front(), Some(Slash)) {
                        input.pop_front();
                    }
                }
                Segment(s) => output.push(Segment(s)),
                Slash => match input.front() {
                    // "/./" or a trailing "/." collapses to "/"
                    Some(Segment(s)) if s == "." => {
                        input.pop_front();
                        if !matches!(input.front(), Some(Slash)) {
                            input.push_front(Slash);
                        }
                    }
                    // "/../" or a trailing "/.." collapses to "/" and drops
                    // the last output segment with its preceding "/"
                    Some(Segment(s)) if s == ".." => {
                        input.pop_front();
                        if !matches!(input.front(), Some(Slash)) {
                            input.push_front(Slash);
                        }
                        if matches!(output.last(), Some(Segment(_))) {
                            output.pop();
                        }
                        if matches!(output.last(), Some(Slash)) {
                            output.pop();
                        }
                    }
                    _ => output.push(Slash),
                },
            }
        }
        Path::from_nodes_in_order(output)
    }

    /// Detach and return the outermost constructor, leaving the rest in `self`.
    pub(crate) fn pop_outer(&mut self) -> Option<PathNode> {
        let (node, tail) = match self {
            Path::Empty => return None,
            Path::Slash(t) => (PathNode::Slash, mem::replace(t.as_mut(), Path::Empty)),
            Path::Segment(s, t) => (
                PathNode::Segment(mem::take(s)),
                mem::replace(t.as_mut(), Path::Empty),
            ),
        };
        *self = tail;
        Some(node)
    }

    /// Wrap `self` in one more constructor, making `node` the outermost one.
    pub(crate) fn push_outer(&mut self, node: PathNode) {
        let tail = Box::new(mem::replace(self, Path::Empty));
        *self = match node {
            PathNode::Slash => Path::Slash(tail),
            PathNode::Segment(s) => Path::Segment(s, tail),
        };
    }

    fn nodes(&self) -> Nodes<'_> {
        Nodes(self)
    }

    fn nodes_in_order(&self) -> Vec<NodeRef<'_>> {
        let mut nodes: Vec<_> = self.nodes().collect();
        nodes.reverse();
        nodes
    }

    fn into_nodes_in_order(mut self) -> Vec<PathNode> {
        let mut nodes = Vec::new();
        while let Some(node) = self.pop_outer() {
            nodes.push(node);
        }
        nodes.reverse();
        nodes
    }

    fn from_nodes_in_order(nodes: impl IntoIterator<Item = PathNode>) -> Path {
        let mut path = Path::Empty;
        for node in nodes {
            path.push_outer(node);
        }
        path
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::Empty
    }
}

impl Drop for Path {
    // default drop glue would recurse once per constructor
    fn drop(&mut self) {
        let mut tail = match self {
            Path::Empty => return,
            Path::Slash(t) | Path::Segment(_, t) => mem::replace(t.as_mut(), Path::Empty),
        };
        loop {
            let next = match &mut tail {
                Path::Empty => break,
                Path::Slash(t) | Path::Segment(_, t) => mem::replace(t.as_mut(), Path::Empty),
            };
            tail = next;
        }
    }
}

impl Clone for Path {
    fn clone(&self) -> Self {
        let mut out = Path::Empty;
        for node in self.nodes_in_order() {
            out.push_outer(node.to_owned());
        }
        out
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes())
    }
}

impl Eq for Path {}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.nodes().cmp(other.nodes())
    }
}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in self.nodes() {
            match node {
                NodeRef::Slash => state.write_u8(0),
                NodeRef::Segment(s) => {
                    state.write_u8(1);
                    s.hash(state);
                }
            }
        }
    }
}

impl WriteForm for Path {
    fn write_form<W: fmt::Write>(&self, w: &mut W, ascii: bool) -> fmt::Result {
        for node in self.nodes_in_order() {
            match node {
                NodeRef::Slash => w.write_char('/')?,
                NodeRef::Segment(s) => pct::encode_into(w, s, pct::is_segment_char, ascii)?,
            }
        }
        Ok(())
    }
}

impl_display!(Path);

impl FromStr for Path {
    type Err = crate::IriError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_path(s)
    }
}
