use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use xmlforge::{ParentNode, PlainNode, RootNode, ToXml, ValueNode};

fn build_tree(width: usize, depth: usize) -> RootNode {
    fn build_parent(width: usize, depth: usize, level: usize) -> ParentNode {
        let mut parent = ParentNode::new(format!("level{level}")).unwrap();
        parent.set_attribute("depth", level).unwrap();

        for i in 0..width {
            if depth > 0 {
                parent.add_child(build_parent(width, depth - 1, level + 1));
            } else if i % 2 == 0 {
                parent.add_child(
                    ValueNode::new_fixed(format!("value{i}"), i as f64 * 1.5, 3).unwrap(),
                );
            } else {
                parent.add_child(
                    PlainNode::new(format!("leaf{i}"))
                        .unwrap()
                        .with_attribute("index", i)
                        .unwrap(),
                );
            }
        }
        parent
    }

    RootNode::new().with_child(build_parent(width, depth, 0))
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("build_tree", |b| b.iter(|| build_tree(black_box(8), black_box(4))));

    let tree = build_tree(8, 4);
    c.bench_function("generate", |b| b.iter(|| black_box(&tree).generate()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
