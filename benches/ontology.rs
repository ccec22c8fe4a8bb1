use godag::Ontology;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_ontology_benchmark(c: &mut Criterion) {
    let bytes = Ontology::from_obo("tests/example.obo")
        .expect("example.obo must be readable")
        .as_bytes();

    c.bench_function("parse obo", |b| {
        b.iter(|| {
            Ontology::from_obo(black_box("tests/example.obo"))
                .expect("requires a valid obo file")
                .len()
        })
    });

    c.bench_function("build ontology from bytes", |b| {
        b.iter(|| {
            Ontology::from_bytes(black_box(&bytes[..]))
                .expect("requires valid bytes")
                .len()
        })
    });
}

criterion_group! {
    name = ontology;
    config = Criterion::default().sample_size(20).measurement_time(Duration::from_secs(10));
    targets = build_ontology_benchmark
}
criterion_main!(ontology);
