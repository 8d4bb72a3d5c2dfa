#![allow(clippy::unwrap_used)]

use proptest::{collection::vec, prelude::*};

use xmlforge::{ParentNode, PlainNode, ToXml, ValueNode};

// Strategy for valid attribute names and values (no XML-reserved characters,
// since the writer emits everything verbatim)
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,11}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\. ]{0,20}"
}

proptest! {
    // Attributes always serialize in ascending name order, no matter the
    // insertion order, with last-write-wins values
    #[test]
    fn test_attribute_ordering(entries in vec((name_strategy(), value_strategy()), 0..12)) {
        let mut node = PlainNode::new("test").unwrap();
        let mut expected = std::collections::BTreeMap::new();
        for (name, value) in entries {
            node.set_attribute(name.as_str(), value.as_str()).unwrap();
            expected.insert(name, value);
        }

        let mut line = String::from("<test");
        for (name, value) in &expected {
            line.push_str(&format!(" {name}=\"{value}\""));
        }
        line.push_str("/>\n");

        let generated = node.generate();
        let body = generated.split_once('\n').unwrap().1;
        prop_assert_eq!(body, line);
    }

    // A parent with no children is always self-closing; with children it
    // always emits a separate closing tag
    #[test]
    fn test_self_closing_invariant(child_count in 0usize..6) {
        let mut parent = ParentNode::new("test").unwrap();
        for i in 0..child_count {
            parent.add_child(PlainNode::new(format!("child{i}")).unwrap());
        }

        let generated = parent.generate();
        if child_count == 0 {
            prop_assert!(generated.ends_with("<test/>\n"));
            prop_assert!(!generated.contains("</test>"));
        } else {
            prop_assert!(generated.contains("<test>\n"));
            prop_assert!(generated.ends_with("</test>\n"));
        }
    }

    // A node nested at depth d is prefixed by exactly d tab characters
    #[test]
    fn test_depth_indentation(depth in 1usize..16) {
        let mut node = ParentNode::new("leafparent").unwrap();
        node.add_child(PlainNode::new("leaf").unwrap());
        for level in (0..depth - 1).rev() {
            node = ParentNode::new(format!("level{level}")).unwrap().with_child(node);
        }

        let generated = node.generate();
        let leaf_line = generated
            .lines()
            .find(|line| line.trim_start_matches('\t').starts_with("<leaf/"))
            .unwrap();
        let tabs = leaf_line.chars().take_while(|c| *c == '\t').count();
        prop_assert_eq!(tabs, depth);
    }

    // Fixed-precision formatting always shows exactly the requested number
    // of fractional digits
    #[test]
    fn test_precision_fidelity(value in -1000.0..1000.0f64, precision in 0usize..10) {
        let node = ValueNode::new_fixed("test", value, precision).unwrap();
        let text = node.value();

        match text.split_once('.') {
            Some((_, frac)) => prop_assert_eq!(frac.len(), precision),
            None => prop_assert_eq!(precision, 0),
        }
    }

    // Attaching a clone isolates the tree from later mutation of the original
    #[test]
    fn test_clone_isolation(before in value_strategy(), after in value_strategy()) {
        prop_assume!(!before.is_empty() && before != after);

        let mut original = ValueNode::new("child", before.as_str()).unwrap();
        let mut parent = ParentNode::new("parent").unwrap();
        parent.add_child(original.clone());

        let snapshot = parent.generate();
        if !after.is_empty() {
            original.set_value(after.as_str());
        }
        original.set_tag("renamed");

        prop_assert_eq!(parent.generate(), snapshot);
    }
}
