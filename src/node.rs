//! The types of nodes that can appear in a document tree.
use crate::XmlResult;

mod tag;
pub use tag::*;

mod attributes;
pub use attributes::*;

mod children;
pub use children::*;

mod plain;
pub use plain::*;

mod value;
pub use value::*;

mod parent;
pub use parent::*;

mod root;
pub use root::*;

/// A node in the document tree. Can be any of:
/// - `Plain` - a leaf element with no content
/// - `Value` - an element with a single scalar text value
/// - `Parent` - an element holding other elements
///
/// This is the common type children are stored as; the concrete kind is
/// recovered with a pattern match, [`Node::downcast_ref`], or the typed
/// child accessors on the containers. A [`RootNode`] is not a `Node`, since
/// it cannot itself be added as a child.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf element.
    Plain(PlainNode),

    /// An element holding a scalar value.
    Value(ValueNode),

    /// An element holding other elements.
    Parent(ParentNode),
}
impl Node {
    /// Returns the kind of the node, for branching without narrowing.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Plain(_) => NodeKind::Plain,
            Self::Value(_) => NodeKind::Value,
            Self::Parent(_) => NodeKind::Parent,
        }
    }

    /// Returns the tag of the node.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Plain(node) => node.tag(),
            Self::Value(node) => node.tag(),
            Self::Parent(node) => node.tag(),
        }
    }

    /// Rename the node. Returns `false` and leaves the tag unchanged if the
    /// new name is empty.
    pub fn set_tag(&mut self, tag: impl Into<String>) -> bool {
        match self {
            Self::Plain(node) => node.set_tag(tag),
            Self::Value(node) => node.set_tag(tag),
            Self::Parent(node) => node.set_tag(tag),
        }
    }

    /// Returns the attribute set of the node.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Plain(node) => node.attributes(),
            Self::Value(node) => node.attributes(),
            Self::Parent(node) => node.attributes(),
        }
    }

    /// Returns the inner plain node, if this is one.
    #[must_use]
    pub fn as_plain(&self) -> Option<&PlainNode> {
        match self {
            Self::Plain(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the inner plain node mutably, if this is one.
    pub fn as_plain_mut(&mut self) -> Option<&mut PlainNode> {
        match self {
            Self::Plain(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the inner value node, if this is one.
    #[must_use]
    pub fn as_value(&self) -> Option<&ValueNode> {
        match self {
            Self::Value(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the inner value node mutably, if this is one.
    pub fn as_value_mut(&mut self) -> Option<&mut ValueNode> {
        match self {
            Self::Value(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the inner parent node, if this is one.
    #[must_use]
    pub fn as_parent(&self) -> Option<&ParentNode> {
        match self {
            Self::Parent(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the inner parent node mutably, if this is one.
    pub fn as_parent_mut(&mut self) -> Option<&mut ParentNode> {
        match self {
            Self::Parent(node) => Some(node),
            _ => None,
        }
    }

    /// Narrow the node to a concrete kind.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::TypeMismatch`] if the node is of a
    /// different kind.
    pub fn downcast_ref<T: NodeVariant>(&self) -> XmlResult<&T> {
        T::from_node(self).ok_or(crate::XmlError::TypeMismatch {
            expected: T::KIND,
            found: self.kind(),
        })
    }

    /// Narrow the node to a concrete kind, mutably.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::TypeMismatch`] if the node is of a
    /// different kind.
    pub fn downcast_mut<T: NodeVariant>(&mut self) -> XmlResult<&mut T> {
        let found = self.kind();
        T::from_node_mut(self).ok_or(crate::XmlError::TypeMismatch {
            expected: T::KIND,
            found,
        })
    }
}

impl From<PlainNode> for Node {
    fn from(node: PlainNode) -> Self {
        Self::Plain(node)
    }
}
impl From<ValueNode> for Node {
    fn from(node: ValueNode) -> Self {
        Self::Value(node)
    }
}
impl From<ParentNode> for Node {
    fn from(node: ParentNode) -> Self {
        Self::Parent(node)
    }
}

/// The kind of a node, used to branch on a heterogeneous forest without
/// attempting a narrowing cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A [`PlainNode`]
    Plain,

    /// A [`ValueNode`]
    Value,

    /// A [`ParentNode`]
    Parent,
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Value => f.write_str("value"),
            Self::Parent => f.write_str("parent"),
        }
    }
}

/// A concrete node kind that can be recovered from the common [`Node`] type.
///
/// Implemented by [`PlainNode`], [`ValueNode`], and [`ParentNode`]; this is
/// the seam the typed child accessors narrow through.
pub trait NodeVariant: Into<Node> {
    /// The kind tag of this variant.
    const KIND: NodeKind;

    /// Returns the variant if the node holds it.
    fn from_node(node: &Node) -> Option<&Self>;

    /// Returns the variant mutably if the node holds it.
    fn from_node_mut(node: &mut Node) -> Option<&mut Self>;
}

impl NodeVariant for PlainNode {
    const KIND: NodeKind = NodeKind::Plain;

    fn from_node(node: &Node) -> Option<&Self> {
        node.as_plain()
    }

    fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
        node.as_plain_mut()
    }
}
impl NodeVariant for ValueNode {
    const KIND: NodeKind = NodeKind::Value;

    fn from_node(node: &Node) -> Option<&Self> {
        node.as_value()
    }

    fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
        node.as_value_mut()
    }
}
impl NodeVariant for ParentNode {
    const KIND: NodeKind = NodeKind::Parent;

    fn from_node(node: &Node) -> Option<&Self> {
        node.as_parent()
    }

    fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
        node.as_parent_mut()
    }
}
