use super::{Attributes, Tag};
use crate::{XmlError, XmlFloat, XmlResult, XmlText};

/// An element holding a single scalar text value:
/// `<tag attr="value">text</tag>`
///
/// The value is stored as already-formatted text and is never empty.
/// Serializes as an open tag, the value, and a close tag on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueNode {
    tag: Tag,
    attributes: Attributes,
    value: String,
}
impl ValueNode {
    /// Create a new value node.
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyTag`] if the tag is empty, or
    /// [`XmlError::EmptyValue`] if the converted value is the empty string.
    ///
    /// # Example
    /// ```rust
    /// use xmlforge::{ToXml, ValueNode};
    ///
    /// let node = ValueNode::new("test", 123)?;
    /// assert!(node.generate().ends_with("<test>123</test>\n"));
    /// # Ok::<(), xmlforge::XmlError>(())
    /// ```
    pub fn new(tag: impl Into<String>, value: impl XmlText) -> XmlResult<Self> {
        let value = value.to_xml_text();
        if value.is_empty() {
            return Err(XmlError::EmptyValue);
        }
        Ok(Self {
            tag: Tag::new(tag)?,
            attributes: Attributes::new(),
            value,
        })
    }

    /// Create a new value node holding a floating-point value with a fixed
    /// number of fractional digits. Fixed-precision output is never empty,
    /// so only the tag is validated.
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyTag`] if the tag is empty.
    pub fn new_fixed(
        tag: impl Into<String>,
        value: impl XmlFloat,
        precision: usize,
    ) -> XmlResult<Self> {
        Ok(Self {
            tag: Tag::new(tag)?,
            attributes: Attributes::new(),
            value: value.to_xml_text_fixed(precision),
        })
    }

    /// Returns the stored value of the node.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value of the node.
    ///
    /// Returns `false` and leaves the value unchanged if the converted value
    /// is empty.
    pub fn set_value(&mut self, value: impl XmlText) -> bool {
        let value = value.to_xml_text();
        if value.is_empty() {
            return false;
        }
        self.value = value;
        true
    }

    /// Replace the value of the node with a fixed-precision floating-point
    /// value. Always succeeds.
    pub fn set_value_fixed(&mut self, value: impl XmlFloat, precision: usize) -> bool {
        self.value = value.to_xml_text_fixed(precision);
        true
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
    /// Returns [`XmlError::EmptyAttributeName`] if the name is empty.
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
    /// Returns [`XmlError::EmptyAttributeName`] if the name is empty.
    pub fn set_attribute_fixed(
        &mut self,
        name: impl Into<String>,
        value: impl XmlFloat,
        precision: usize,
    ) -> XmlResult<&mut Self> {
        self.attributes.set_fixed(name, value, precision)?;
        Ok(self)
    }

    /// Builder form of [`ValueNode::set_attribute`].
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyAttributeName`] if the name is empty.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl XmlText,
    ) -> XmlResult<Self> {
        self.attributes.set(name, value)?;
        Ok(self)
    }

    /// Builder form of [`ValueNode::set_attribute_fixed`].
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyAttributeName`] if the name is empty.
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
    /// Returns [`XmlError::EmptyAttributeName`] or
    /// [`XmlError::AttributeNotFound`].
    pub fn get_attribute(&self, name: &str) -> XmlResult<&str> {
        self.attributes.get(name)
    }

    /// Get a mutable reference to the stored value of an attribute.
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyAttributeName`] or
    /// [`XmlError::AttributeNotFound`].
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
/// [`ValueNode::get_attribute`] for a fallible lookup.
impl std::ops::Index<&str> for ValueNode {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        &self.attributes[name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_rejected() {
        assert_eq!(ValueNode::new("test", ""), Err(XmlError::EmptyValue));
    }

    #[test]
    fn test_set_value_refuses_empty() {
        let mut node = ValueNode::new("test", "abc").unwrap();
        assert!(!node.set_value(""));
        assert_eq!(node.value(), "abc");

        assert!(node.set_value(123));
        assert_eq!(node.value(), "123");
    }

    #[test]
    fn test_fixed_precision_value() {
        let node = ValueNode::new_fixed("test", 123.456f64, 5).unwrap();
        assert_eq!(node.value(), "123.45600");
    }

    #[test]
    fn test_set_value_fixed_always_succeeds() {
        let mut node = ValueNode::new("test", "abc").unwrap();
        assert!(node.set_value_fixed(14.2f64, 4));
        assert_eq!(node.value(), "14.2000");
    }
}
