//! Benchmark formatting and markup insertion time.

use criterion::{criterion_group, criterion_main, Criterion};

use automat::markup::{Document, Tree};
use automat::{Formatter, Value};

criterion_main! { benches }
criterion_group! { benches, bench_init, bench_format, bench_append }

/// Benchmarks the time taken to create a formatter with the default patterns.
fn bench_init(c: &mut Criterion) {
    c.bench_function("init", |b| b.iter(Formatter::new));
}

/// Benchmarks the time taken to format a template.
fn bench_format(c: &mut Criterion) {
    let mut g = c.benchmark_group("format");

    let formatter = Formatter::new();
    let source = repeat("<li class=\"${0}\">%{1} ${2}</li>\n", 100);
    let values = replacements(3);

    g.bench_function("replacers and encoders", |b| {
        b.iter(|| formatter.format(source.as_str(), &values));
    });

    g.bench_function("no replacements", |b| {
        b.iter(|| formatter.format(source.as_str(), &[]));
    });
}

/// Benchmarks the time taken to append formatted markup to an element.
fn bench_append(c: &mut Criterion) {
    let formatter = Formatter::new();
    let source = repeat("<li class=\"${0}\">%{1}</li>", 20);
    let values = replacements(2);

    c.bench_function("append", |b| {
        b.iter(|| {
            let mut tree = Tree::new();
            let list = tree.create_element("ul");
            formatter
                .append_into(&mut tree, source.as_str(), &list, None, &values)
                .unwrap()
        });
    });
}

fn replacements(n: usize) -> Vec<Value> {
    (0..n).map(|i| Value::from(format!("<value {i}>"))).collect()
}

fn repeat(source: &str, n: usize) -> String {
    source.repeat(n)
}
