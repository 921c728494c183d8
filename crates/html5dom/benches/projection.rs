use criterion::{criterion_group, criterion_main, Criterion};
use html5dom::document::query::TreeIterator;
use html5dom_shared::node::NodeId;
use std::hint::black_box;

fn wide_table() -> String {
    let mut html = String::from("<!DOCTYPE html><table>");
    for row in 0..500 {
        html.push_str(&format!("<tr id=\"r{row}\"><td class=\"a b\">{row}</td><td><!-- c --></td></tr>"));
    }
    html.push_str("</table>");
    html
}

fn deep_nesting() -> String {
    "<div>".repeat(790)
}

fn parse_and_project(c: &mut Criterion) {
    // Criterion can report inconsistent results from run to run in some cases. We attempt to
    // minimize that in this setup.
    let mut group = c.benchmark_group("Projection");
    group.significance_level(0.1).sample_size(100);

    let table = wide_table();
    group.bench_function("wide table", |b| {
        b.iter(|| html5dom::parse(black_box(table.as_str())).unwrap());
    });

    let nested = deep_nesting();
    group.bench_function("deep nesting", |b| {
        b.iter(|| html5dom::parse(black_box(nested.as_str())).unwrap());
    });

    group.finish();
}

fn tree_iterator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Iterator");
    group.significance_level(0.1).sample_size(500);

    let document = html5dom::parse(wide_table()).unwrap();
    group.bench_function("wide table", |b| {
        b.iter(|| {
            let tree_iterator = TreeIterator::new(&document);
            let _ = tree_iterator.collect::<Vec<NodeId>>();
        })
    });

    group.finish();
}

criterion_group!(benches, parse_and_project, tree_iterator);
criterion_main!(benches);
