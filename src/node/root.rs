use super::Children;
use crate::{Node, NodeVariant, XmlResult};

/// The untagged top-level holder of a forest of elements.
///
/// A root node has no tag, no attributes, and no value; it exists solely to
/// hold children. It serializes as the concatenation of its children's
/// output with no enclosing tag, so a root with no children generates only
/// the XML declaration line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootNode {
    children: Children,
}
impl RootNode {
    /// Create a new, empty root node.
    ///
    /// # Example
    /// ```rust
    /// use xmlforge::{PlainNode, RootNode, ToXml};
    ///
    /// let mut root = RootNode::new();
    /// root.add_child(PlainNode::new("test")?);
    /// assert_eq!(
    ///     root.generate(),
    ///     "<?xml version=\"1.0\" encoding=\"Windows-1250\"?>\n<test/>\n"
    /// );
    /// # Ok::<(), xmlforge::XmlError>(())
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child node, returning `self` for chaining.
    pub fn add_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Builder form of [`RootNode::add_child`].
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the number of children.
    #[must_use]
    pub fn children_count(&self) -> usize {
        self.children.len()
    }

    /// Remove the child at the given index. Returns `false` if the index is
    /// out of range.
    pub fn remove_child(&mut self, index: usize) -> bool {
        self.children.remove(index)
    }

    /// Get the child at the given index as the common [`Node`] type.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::IndexOutOfRange`] if the index is invalid.
    pub fn child_at(&self, index: usize) -> XmlResult<&Node> {
        self.children.get(index)
    }

    /// Get a mutable reference to the child at the given index.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::IndexOutOfRange`] if the index is invalid.
    pub fn child_at_mut(&mut self, index: usize) -> XmlResult<&mut Node> {
        self.children.get_mut(index)
    }

    /// Get the child at the given index, narrowed to a concrete node kind.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::IndexOutOfRange`] if the index is invalid,
    /// or [`crate::XmlError::TypeMismatch`] if the child is of a different
    /// kind.
    pub fn child_as<T: NodeVariant>(&self, index: usize) -> XmlResult<&T> {
        self.children.get_as(index)
    }

    /// Get a mutable reference to the child at the given index, narrowed to a
    /// concrete node kind.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::IndexOutOfRange`] if the index is invalid,
    /// or [`crate::XmlError::TypeMismatch`] if the child is of a different
    /// kind.
    pub fn child_as_mut<T: NodeVariant>(&mut self, index: usize) -> XmlResult<&mut T> {
        self.children.get_as_mut(index)
    }

    /// Returns the child list of the node.
    #[must_use]
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Returns the child list of the node, mutably.
    pub fn children_mut(&mut self) -> &mut Children {
        &mut self.children
    }
}
