use crate::{Node, NodeVariant, XmlError, XmlResult};

/// An ordered list of owned child nodes.
///
/// Children are stored behind the common [`Node`] sum type and can be
/// recovered as their concrete kind with [`Children::get_as`]. Insertion
/// order is preserved through append, indexed removal, and iteration;
/// removing a child shifts later children down by one index.
///
/// The container takes each child by value, so a node inside a tree is
/// reachable only through its container. Clone a node explicitly to keep a
/// caller-side original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Children {
    nodes: Vec<Node>,
}
impl Children {
    /// Create an empty child list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child node.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.nodes.push(child.into());
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list holds no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove the child at the given index, shifting later children down.
    ///
    /// Returns `false` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.nodes.len() {
            return false;
        }
        self.nodes.remove(index);
        true
    }

    /// Get the child at the given index as the common [`Node`] type.
    /// This access never fails on node kind.
    ///
    /// # Errors
    /// Returns [`XmlError::IndexOutOfRange`] if the index is invalid.
    pub fn get(&self, index: usize) -> XmlResult<&Node> {
        self.nodes.get(index).ok_or(XmlError::IndexOutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Get a mutable reference to the child at the given index.
    ///
    /// # Errors
    /// Returns [`XmlError::IndexOutOfRange`] if the index is invalid.
    pub fn get_mut(&mut self, index: usize) -> XmlResult<&mut Node> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(index)
            .ok_or(XmlError::IndexOutOfRange { index, len })
    }

    /// Get the child at the given index, narrowed to a concrete node kind.
    ///
    /// # Errors
    /// Returns [`XmlError::IndexOutOfRange`] if the index is invalid, or
    /// [`XmlError::TypeMismatch`] if the stored child is of a different kind.
    pub fn get_as<T: NodeVariant>(&self, index: usize) -> XmlResult<&T> {
        let node = self.get(index)?;
        T::from_node(node).ok_or(XmlError::TypeMismatch {
            expected: T::KIND,
            found: node.kind(),
        })
    }

    /// Get a mutable reference to the child at the given index, narrowed to a
    /// concrete node kind.
    ///
    /// # Errors
    /// Returns [`XmlError::IndexOutOfRange`] if the index is invalid, or
    /// [`XmlError::TypeMismatch`] if the stored child is of a different kind.
    pub fn get_as_mut<T: NodeVariant>(&mut self, index: usize) -> XmlResult<&mut T> {
        let found = self.get(index)?.kind();
        let node = self.get_mut(index)?;
        T::from_node_mut(node).ok_or(XmlError::TypeMismatch {
            expected: T::KIND,
            found,
        })
    }

    /// Iterate over the children in insertion order.
    /// The iterator is double-ended, so `.rev()` walks the list backwards.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Iterate mutably over the children in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.nodes.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Children {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
impl<'a> IntoIterator for &'a mut Children {
    type Item = &'a mut Node;
    type IntoIter = std::slice::IterMut<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter_mut()
    }
}
impl IntoIterator for Children {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl std::ops::Index<usize> for Children {
    type Output = Node;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}
impl std::ops::IndexMut<usize> for Children {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}
