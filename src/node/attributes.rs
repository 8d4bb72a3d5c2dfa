use crate::{XmlError, XmlFloat, XmlResult, XmlText};
use std::collections::BTreeMap;

/// The attribute set of a node: `name="value"` pairs with unique names.
///
/// Values are stored as already-formatted strings regardless of the input
/// type; the origin type is not retained. Setting an attribute that already
/// exists always overwrites the old value.
///
/// Serialization lists attributes in ascending order by name, not in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: BTreeMap<String, String>,
}
impl Attributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite an attribute.
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyAttributeName`] if the name is empty; the set
    /// is left unchanged.
    pub fn set(&mut self, name: impl Into<String>, value: impl XmlText) -> XmlResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(XmlError::EmptyAttributeName);
        }
        self.entries.insert(name, value.to_xml_text());
        Ok(())
    }

    /// Add or overwrite a floating-point attribute with a fixed number of
    /// fractional digits.
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyAttributeName`] if the name is empty.
    pub fn set_fixed(
        &mut self,
        name: impl Into<String>,
        value: impl XmlFloat,
        precision: usize,
    ) -> XmlResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(XmlError::EmptyAttributeName);
        }
        self.entries.insert(name, value.to_xml_text_fixed(precision));
        Ok(())
    }

    /// Check whether an attribute with the given name is present.
    /// Returns `false` for an empty name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.entries.contains_key(name)
    }

    /// Remove an attribute.
    ///
    /// Returns `false` if the name is empty or no such attribute exists.
    pub fn remove(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.entries.remove(name).is_some()
    }

    /// Get the value of an attribute.
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyAttributeName`] for an empty name, or
    /// [`XmlError::AttributeNotFound`] if the attribute is absent.
    pub fn get(&self, name: &str) -> XmlResult<&str> {
        if name.is_empty() {
            return Err(XmlError::EmptyAttributeName);
        }
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| XmlError::AttributeNotFound(name.to_string()))
    }

    /// Get a mutable reference to the stored value of an attribute, for
    /// in-place mutation.
    ///
    /// This is the only way to change a stored value without reformatting;
    /// a shared reference to a node hands out `&str` only, so frozen
    /// subtrees cannot be mutated through any accessor.
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyAttributeName`] for an empty name, or
    /// [`XmlError::AttributeNotFound`] if the attribute is absent.
    pub fn get_mut(&mut self, name: &str) -> XmlResult<&mut String> {
        if name.is_empty() {
            return Err(XmlError::EmptyAttributeName);
        }
        self.entries
            .get_mut(name)
            .ok_or_else(|| XmlError::AttributeNotFound(name.to_string()))
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the attributes in ascending name order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Write the attributes as ` name="value"` fragments, one leading space
    /// each, in ascending name order. Values are emitted verbatim, with no
    /// entity escaping.
    pub(crate) fn write(&self, out: &mut String) {
        for (name, value) in &self.entries {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

/// Indexed-access sugar for attribute reads: `&attributes["name"]`.
///
/// Reads only; writing goes through [`Attributes::get_mut`], so a shared
/// reference to a node cannot be mutated through this path.
///
/// # Panics
/// Panics if the name is empty or the attribute is absent. Use
/// [`Attributes::get`] for a fallible lookup.
impl std::ops::Index<&str> for Attributes {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_upsert() {
        let mut attributes = Attributes::new();
        attributes.set("test", "abc").unwrap();
        attributes.set("test", "xyz").unwrap();

        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get("test"), Ok("xyz"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut attributes = Attributes::new();
        assert_eq!(attributes.set("", "abc"), Err(XmlError::EmptyAttributeName));
        assert_eq!(
            attributes.set_fixed("", 1.5, 2),
            Err(XmlError::EmptyAttributeName)
        );
        assert_eq!(attributes.get(""), Err(XmlError::EmptyAttributeName));
        assert!(!attributes.contains(""));
        assert!(!attributes.remove(""));
        assert!(attributes.is_empty());
    }

    #[test]
    fn test_missing_name_is_a_distinct_error() {
        let attributes = Attributes::new();
        assert_eq!(
            attributes.get("missing"),
            Err(XmlError::AttributeNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_remove() {
        let mut attributes = Attributes::new();
        attributes.set("test", 123).unwrap();

        assert!(attributes.remove("test"));
        assert!(!attributes.remove("test"));
        assert!(!attributes.contains("test"));
    }

    #[test]
    fn test_values_are_stored_formatted() {
        let mut attributes = Attributes::new();
        attributes.set("int", 123).unwrap();
        attributes.set("flag", true).unwrap();
        attributes.set_fixed("float", 12.52f64, 8).unwrap();

        assert_eq!(attributes.get("int"), Ok("123"));
        assert_eq!(attributes.get("flag"), Ok("true"));
        assert_eq!(attributes.get("float"), Ok("12.52000000"));
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut attributes = Attributes::new();
        attributes.set("test", "abc").unwrap();

        *attributes.get_mut("test").unwrap() = "xyz".to_string();
        assert_eq!(attributes.get("test"), Ok("xyz"));
    }

    #[test]
    fn test_write_is_name_ordered() {
        let mut attributes = Attributes::new();
        attributes.set("b", 2).unwrap();
        attributes.set("a", 1).unwrap();
        attributes.set("c", 3).unwrap();

        let mut out = String::new();
        attributes.write(&mut out);
        assert_eq!(out, r#" a="1" b="2" c="3""#);
    }

    #[test]
    fn test_write_does_not_escape() {
        let mut attributes = Attributes::new();
        attributes.set("test", "a<b&\"c").unwrap();

        let mut out = String::new();
        attributes.write(&mut out);
        assert_eq!(out, " test=\"a<b&\"c\"");
    }
}
