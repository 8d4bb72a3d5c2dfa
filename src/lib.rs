//! ## xmlforge: In-memory XML tree builder and writer
//!
//! Build a tree of typed nodes, attach attributes, and generate a complete
//! XML document string with a declaration, tab indentation, and self-closing
//! tags where applicable.
//!
//! There are four node types:
//! - [`PlainNode`] - a leaf element with a tag and attributes: `<tag/>`
//! - [`ValueNode`] - an element with a single scalar value: `<tag>text</tag>`
//! - [`ParentNode`] - an element holding other elements
//! - [`RootNode`] - an untagged top-level holder of a forest of elements
//!
//! Attribute and node values accept any [`XmlText`] type (strings, booleans,
//! integers, floats), or a float with an explicit fixed precision via
//! [`XmlFloat`]. Values are stored as already-formatted strings; attributes
//! are serialized in ascending name order.
//!
//! Call [`ToXml::generate`] on any node to produce the document:
//!
//! ```rust
//! use xmlforge::{ParentNode, PlainNode, RootNode, ToXml, ValueNode};
//!
//! let invoice = ParentNode::new("invoice")?
//!     .with_attribute("id", 1042)?
//!     .with_child(ValueNode::new("customer", "ACME")?)
//!     .with_child(ValueNode::new_fixed("total", 123.456f64, 2)?)
//!     .with_child(PlainNode::new("paid")?);
//!
//! let root = RootNode::new().with_child(invoice);
//! assert_eq!(
//!     root.generate(),
//!     "<?xml version=\"1.0\" encoding=\"Windows-1250\"?>\n\
//!      <invoice id=\"1042\">\n\
//!      \t<customer>ACME</customer>\n\
//!      \t<total>123.46</total>\n\
//!      \t<paid/>\n\
//!      </invoice>\n"
//! );
//! # Ok::<(), xmlforge::XmlError>(())
//! ```
//!
//! Children are stored behind the common [`Node`] sum type; recover the
//! concrete kind with the typed accessors ([`ParentNode::child_as`],
//! [`Node::downcast_ref`]) or branch on [`Node::kind`] without narrowing.
//!
//! ### Limitations
//! - No parsing: this crate only writes XML, it does not read it back.
//! - No entity escaping: `<`, `&`, `"` and friends are emitted verbatim in
//!   tags, values, and attribute values. Supply already-safe text.
//! - No namespace processing: `dat:dataPack` is just a tag string.
#![warn(missing_docs)]

mod error;
pub use error::*;

mod text;
pub use text::*;

mod node;
pub use node::*;

mod to_xml;
pub use to_xml::*;
