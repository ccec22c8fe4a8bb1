use criterion::{black_box, criterion_group, criterion_main, Criterion};

use godag::{GoTermId, Ontology};

fn ancestors(ontology: &Ontology) -> usize {
    let mut count = 0;
    let mut terms: (GoTermId, GoTermId) = (GoTermId::default(), GoTermId::default());
    for term1 in ontology {
        for term2 in ontology {
            let overlap = term1.common_ancestor_ids(&term2).len();
            if overlap > count {
                count = overlap;
                terms = (term1.id(), term2.id());
            }
        }
    }
    black_box(terms);
    count
}

fn cordial(ontology: &Ontology) -> usize {
    ontology
        .terms()
        .filter_map(|term| ontology.cordial_cc(&term.id().to_string()).ok())
        .map(|cordial| cordial.len())
        .sum()
}

fn ancestors_benchmark(c: &mut Criterion) {
    let ontology = Ontology::from_obo("tests/example.obo").unwrap();

    c.bench_function("common-ancestors all", |b| {
        b.iter(|| ancestors(black_box(&ontology)))
    });
}

fn cordial_benchmark(c: &mut Criterion) {
    let ontology = Ontology::from_obo("tests/example.obo").unwrap();

    c.bench_function("cordial-cc all", |b| {
        b.iter(|| cordial(black_box(&ontology)))
    });
}

criterion_group!(common_ancestors, ancestors_benchmark, cordial_benchmark);
criterion_main!(common_ancestors);
