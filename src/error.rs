//! Error handling for tree construction and lookup
use crate::NodeKind;

/// A result type for tree operations, which can be either a successful value or an error.
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// An error that occurred while building or inspecting a document tree.
///
/// Operations that are expected to sometimes fail in normal use (`set_tag`,
/// `remove_attribute`, `remove_child`, `set_value`) return `bool` instead and
/// never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XmlError {
    /// A node was constructed or renamed with an empty tag
    #[error("Tag cannot be empty")]
    EmptyTag,

    /// An attribute operation was called with an empty name
    #[error("Attribute name cannot be empty")]
    EmptyAttributeName,

    /// A value node was constructed with an empty value
    #[error("Node value cannot be empty")]
    EmptyValue,

    /// An attribute lookup used a name that is not present on the node
    #[error("No attribute named {0:?}")]
    AttributeNotFound(String),

    /// A child index was beyond the container's current size
    #[error("Child index {index} is out of range for {len} children")]
    IndexOutOfRange {
        /// The requested index
        index: usize,

        /// The number of children in the container
        len: usize,
    },

    /// A child was narrowed to a concrete kind that does not match its stored kind
    #[error("Requested a {expected} node, but the child is a {found} node")]
    TypeMismatch {
        /// The kind that was requested
        expected: NodeKind,

        /// The kind actually stored in the container
        found: NodeKind,
    },
}
