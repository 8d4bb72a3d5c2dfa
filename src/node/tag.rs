use crate::{XmlError, XmlResult};

/// The element name of a node: `<tag>`.
///
/// A tag is never empty once constructed. It is otherwise an opaque string;
/// colon-containing names like `dat:dataPack` are passed through as-is with
/// no namespace processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);
impl Tag {
    /// Create a new tag.
    ///
    /// # Errors
    /// Returns [`XmlError::EmptyTag`] if the name is empty.
    pub fn new(name: impl Into<String>) -> XmlResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(XmlError::EmptyTag);
        }
        Ok(Self(name))
    }

    /// Rename the tag.
    ///
    /// Returns `false` and leaves the tag unchanged if the new name is empty.
    pub fn set(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() {
            return false;
        }
        self.0 = name;
        true
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag_is_rejected() {
        assert_eq!(Tag::new(""), Err(XmlError::EmptyTag));
    }

    #[test]
    fn test_set_refuses_empty() {
        let mut tag = Tag::new("test").unwrap();
        assert!(!tag.set(""));
        assert_eq!(tag, "test");

        assert!(tag.set("test2"));
        assert_eq!(tag, "test2");
    }

    #[test]
    fn test_namespace_prefix_is_opaque() {
        let tag = Tag::new("dat:dataPack").unwrap();
        assert_eq!(tag.as_str(), "dat:dataPack");
    }
}
