use super::{Attributes, Children, Tag};
use crate::{Node, NodeVariant, XmlFloat, XmlResult, XmlText};

/// An element holding other elements:
/// `<tag attr="value">...</tag>`
///
/// Serializes as a self-closing tag when it has no children, otherwise as an
/// open tag, one line per child indented one level deeper, and a matching
/// close tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentNode {
    tag: Tag,
    attributes: Attributes,
    children: Children,
}
impl ParentNode {
    /// Create a new parent node with no children.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::EmptyTag`] if the tag is empty.
    ///
    /// # Example
    /// ```rust
    /// use xmlforge::{ParentNode, PlainNode, ToXml};
    ///
    /// let node = ParentNode::new("test")?.with_child(PlainNode::new("test")?);
    /// assert!(node.generate().ends_with("<test>\n\t<test/>\n</test>\n"));
    /// # Ok::<(), xmlforge::XmlError>(())
    /// ```
    pub fn new(tag: impl Into<String>) -> XmlResult<Self> {
        Ok(Self {
            tag: Tag::new(tag)?,
            attributes: Attributes::new(),
            children: Children::new(),
        })
    }

    /// Append a child node, returning `self` for chaining.
    ///
    /// The child is taken by value; clone it first if you want to keep a
    /// caller-side original.
    pub fn add_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Builder form of [`ParentNode::add_child`].
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

    /// Returns the tag of the node.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    /// Rename the node. Returns `false` and leaves the tag unchanged if the
    /// new name is empty.
    pub fn set_tag(&mut self, tag: impl Into<String>) -> bool {
        self.tag.set(tag)
    }

    /// Add or overwrite an attribute, returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::EmptyAttributeName`] if the name is empty.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl XmlText,
    ) -> XmlResult<&mut Self> {
        self.attributes.set(name, value)?;
        Ok(self)
    }

    /// Add or overwrite a fixed-precision floating-point attribute,
    /// returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::EmptyAttributeName`] if the name is empty.
    pub fn set_attribute_fixed(
        &mut self,
        name: impl Into<String>,
        value: impl XmlFloat,
        precision: usize,
    ) -> XmlResult<&mut Self> {
        self.attributes.set_fixed(name, value, precision)?;
        Ok(self)
    }

    /// Builder form of [`ParentNode::set_attribute`].
    ///
    /// # Errors
    /// Returns [`crate::XmlError::EmptyAttributeName`] if the name is empty.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl XmlText,
    ) -> XmlResult<Self> {
        self.attributes.set(name, value)?;
        Ok(self)
    }

    /// Builder form of [`ParentNode::set_attribute_fixed`].
    ///
    /// # Errors
    /// Returns [`crate::XmlError::EmptyAttributeName`] if the name is empty.
    pub fn with_attribute_fixed(
        mut self,
        name: impl Into<String>,
        value: impl XmlFloat,
        precision: usize,
    ) -> XmlResult<Self> {
        self.attributes.set_fixed(name, value, precision)?;
        Ok(self)
    }

    /// Check whether an attribute with the given name is present.
    #[must_use]
    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Remove an attribute. Returns `false` if the name is empty or absent.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        self.attributes.remove(name)
    }

    /// Get the value of an attribute.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::EmptyAttributeName`] or
    /// [`crate::XmlError::AttributeNotFound`].
    pub fn get_attribute(&self, name: &str) -> XmlResult<&str> {
        self.attributes.get(name)
    }

    /// Get a mutable reference to the stored value of an attribute.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::EmptyAttributeName`] or
    /// [`crate::XmlError::AttributeNotFound`].
    pub fn get_attribute_mut(&mut self, name: &str) -> XmlResult<&mut String> {
        self.attributes.get_mut(name)
    }

    /// Returns the attribute set of the node.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Indexed-access sugar for attribute reads: `&node["name"]`.
///
/// # Panics
/// Panics if the name is empty or the attribute is absent. Use
/// [`ParentNode::get_attribute`] for a fallible lookup.
impl std::ops::Index<&str> for ParentNode {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        &self.attributes[name]
    }
}
