#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xml2record::{get_children, node_to_dict, parse};

fn catalog(entries: usize) -> String {
    let mut xml = String::from(r#"<catalog version="2">"#);
    for i in 0..entries {
        xml.push_str(&format!(
            r#"<book id="bk{i}"><title>Title {i}</title><author>Author {i}</author><price currency="USD">{i}.95</price></book>"#
        ));
    }
    xml.push_str("</catalog>");
    xml
}

fn bench_parse(c: &mut Criterion) {
    let input = catalog(2_000);

    c.bench_function("parse_catalog", |b| {
        b.iter(|| parse(black_box(&input)).unwrap())
    });
}

fn bench_convert(c: &mut Criterion) {
    let input = catalog(2_000);
    let doc = roxmltree::Document::parse(&input).unwrap();

    c.bench_function("node_to_dict", |b| {
        b.iter(|| node_to_dict(black_box(doc.root_element())))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let record = parse(&catalog(2_000)).unwrap();

    c.bench_function("get_children", |b| {
        b.iter(|| get_children(black_box(&record), black_box("book")).count())
    });
}

criterion_group!(benches, bench_parse, bench_convert, bench_lookup);
criterion_main!(benches);
