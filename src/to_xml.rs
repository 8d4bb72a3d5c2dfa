//! XML generation module
//!
//! [`ToXml::generate`] turns any top-level node into a complete document
//! string; the other entry points are thin wrappers around it.
//!
//! Output is emitted verbatim: no entity escaping is performed on tags,
//! values, or attribute values. Callers are responsible for supplying
//! already-safe text.
use crate::{Node, ParentNode, PlainNode, RootNode, ValueNode};

const TAB: &str = "\t";

/// The XML version written into the declaration when none is given.
pub const DEFAULT_VERSION: &str = "1.0";

/// The encoding name written into the declaration when none is given.
pub const DEFAULT_ENCODING: &str = "Windows-1250";

/// Generation of XML document text from a node tree.
///
/// Implemented by every node type; calling [`ToXml::generate`] on a node
/// treats it as the top of the document. Emission is a recursive depth-first
/// walk, one line per element, indented with one tab character per depth
/// level.
pub trait ToXml {
    /// Write this node's XML representation to `out` at the given depth.
    ///
    /// This is the recursive step used by [`ToXml::generate`]; most callers
    /// want that instead.
    #[doc(hidden)]
    fn write_node(&self, out: &mut String, depth: usize);

    /// Generate the full document text with the default declaration
    /// (`version="1.0" encoding="Windows-1250"`).
    #[must_use]
    fn generate(&self) -> String {
        self.generate_with(DEFAULT_VERSION, DEFAULT_ENCODING)
    }

    /// Generate the full document text with the given declaration values.
    #[must_use]
    fn generate_with(&self, version: &str, encoding: &str) -> String {
        let mut out = format!("<?xml version=\"{version}\" encoding=\"{encoding}\"?>\n");
        self.write_node(&mut out, 0);
        out
    }

    /// Generate the document and write it to the given writer.
    ///
    /// # Errors
    /// This function will return an error if the writer fails to write the
    /// XML string.
    fn write_xml(&self, writer: &mut dyn std::io::Write) -> std::io::Result<()> {
        writer.write_all(self.generate().as_bytes())
    }
}

impl ToXml for PlainNode {
    fn write_node(&self, out: &mut String, depth: usize) {
        let tab = TAB.repeat(depth);
        out.push_str(&format!("{tab}<{}", self.tag()));
        self.attributes().write(out);
        out.push_str("/>\n");
    }
}

impl ToXml for ValueNode {
    fn write_node(&self, out: &mut String, depth: usize) {
        let tab = TAB.repeat(depth);
        out.push_str(&format!("{tab}<{}", self.tag()));
        self.attributes().write(out);
        out.push_str(&format!(">{}</{}>\n", self.value(), self.tag()));
    }
}

impl ToXml for ParentNode {
    fn write_node(&self, out: &mut String, depth: usize) {
        let tab = TAB.repeat(depth);
        out.push_str(&format!("{tab}<{}", self.tag()));
        self.attributes().write(out);

        if self.children().is_empty() {
            out.push_str("/>\n");
            return;
        }

        out.push_str(">\n");
        for child in self.children() {
            child.write_node(out, depth + 1);
        }
        out.push_str(&format!("{tab}</{}>\n", self.tag()));
    }
}

impl ToXml for RootNode {
    fn write_node(&self, out: &mut String, depth: usize) {
        for child in self.children() {
            child.write_node(out, depth);
        }
    }
}

impl ToXml for Node {
    fn write_node(&self, out: &mut String, depth: usize) {
        match self {
            Self::Plain(node) => node.write_node(out, depth),
            Self::Value(node) => node.write_node(out, depth),
            Self::Parent(node) => node.write_node(out, depth),
        }
    }
}

macro_rules! impl_display_via_generate {
    ($($ty:ty),+) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.generate())
            }
        }
    )+};
}
impl_display_via_generate!(PlainNode, ValueNode, ParentNode, RootNode, Node);

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_HEADER: &str = "<?xml version=\"1.0\" encoding=\"Windows-1250\"?>\n";

    #[test]
    fn test_empty_root_is_header_only() {
        let root = RootNode::new();
        assert_eq!(root.generate(), DEFAULT_HEADER);
    }

    #[test]
    fn test_custom_header() {
        let root = RootNode::new();
        assert_eq!(
            root.generate_with("2.0", "random-encoding"),
            "<?xml version=\"2.0\" encoding=\"random-encoding\"?>\n"
        );
    }

    #[test]
    fn test_plain_node_is_self_closing() {
        let root = RootNode::new().with_child(PlainNode::new("test").unwrap());
        assert_eq!(root.generate(), format!("{DEFAULT_HEADER}<test/>\n"));
    }

    #[test]
    fn test_value_node_is_one_line() {
        let node = ValueNode::new("test", "value").unwrap();
        assert_eq!(node.generate(), format!("{DEFAULT_HEADER}<test>value</test>\n"));
    }

    #[test]
    fn test_childless_parent_is_self_closing() {
        let node = ParentNode::new("test").unwrap();
        assert_eq!(node.generate(), format!("{DEFAULT_HEADER}<test/>\n"));
    }

    #[test]
    fn test_parent_indents_children() {
        let node =
            ParentNode::new("test").unwrap().with_child(PlainNode::new("test").unwrap());
        assert_eq!(
            node.generate(),
            format!("{DEFAULT_HEADER}<test>\n\t<test/>\n</test>\n")
        );
    }

    #[test]
    fn test_write_xml_matches_generate() {
        let node = ValueNode::new("test", 123).unwrap();

        let mut out = Vec::new();
        node.write_xml(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), node.generate());
    }

    #[test]
    fn test_display_matches_generate() {
        let root = RootNode::new().with_child(PlainNode::new("test").unwrap());
        assert_eq!(root.to_string(), root.generate());
    }

    #[test]
    fn test_values_are_not_escaped() {
        let node = ValueNode::new("test", "a<b&c").unwrap();
        assert_eq!(
            node.generate(),
            format!("{DEFAULT_HEADER}<test>a<b&c</test>\n")
        );
    }
}
