use super::{Attributes, Tag};
use crate::{XmlFloat, XmlResult, XmlText};

/// A leaf element with a tag and attributes, but no value and no children:
/// `<tag attr="value"/>`
///
/// Always serializes as a single self-closing tag.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainNode {
    tag: Tag,
    attributes: Attributes,
}
impl PlainNode {
    /// Create a new plain node.
    ///
    /// # Errors
    /// Returns [`crate::XmlError::EmptyTag`] if the tag is empty.
    ///
    /// # Example
    /// ```rust
    /// use xmlforge::{PlainNode, ToXml};
    ///
    /// let node = PlainNode::new("test")?.with_attribute("id", 1)?;
    /// assert!(node.generate().ends_with("<test id=\"1\"/>\n"));
    /// # Ok::<(), xmlforge::XmlError>(())
    /// ```
    pub fn new(tag: impl Into<String>) -> XmlResult<Self> {
        Ok(Self {
            tag: Tag::new(tag)?,
            attributes: Attributes::new(),
        })
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

    /// Builder form of [`PlainNode::set_attribute`].
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

    /// Builder form of [`PlainNode::set_attribute_fixed`].
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
/// [`PlainNode::get_attribute`] for a fallible lookup.
impl std::ops::Index<&str> for PlainNode {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        &self.attributes[name]
    }
}
