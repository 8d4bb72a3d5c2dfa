//! XML Builder Example
//!
//! This example builds a small order document from typed nodes and prints it,
//! demonstrating the four node kinds, fluent attribute chaining, and the
//! generation entry points.
use xmlforge::{ParentNode, PlainNode, RootNode, ToXml, ValueNode, XmlResult};

fn main() -> XmlResult<()> {
    //
    // A value node holds a single scalar; numbers can be formatted with a
    // fixed number of fractional digits.
    let total = ValueNode::new_fixed("total", 123.456f64, 2)?.with_attribute("currency", "EUR")?;

    //
    // A parent node holds other nodes. Attributes serialize in ascending
    // name order, no matter the order they are set in.
    let mut order = ParentNode::new("order")?;
    order
        .set_attribute("id", 1042)?
        .set_attribute("express", true)?;
    order
        .add_child(ValueNode::new("customer", "ACME Corp")?)
        .add_child(total)
        .add_child(PlainNode::new("paid")?);

    //
    // The root node is an untagged holder for the top-level forest.
    let mut root = RootNode::new();
    root.add_child(order);

    //
    // Generate with the default declaration...
    println!("{}", root.generate());

    //
    // ...or with explicit version/encoding values, or straight to a writer.
    println!("{}", root.generate_with("1.1", "UTF-8"));
    root.write_xml(&mut std::io::stdout().lock()).expect("stdout write failed");

    Ok(())
}
