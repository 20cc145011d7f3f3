//! Compares the cost of parsing (with full normalization) against the cost
//! of resolving relative references over an already parsed base.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lodestar_iri::test::{NEGATIVE_IRIS, POSITIVE_ABSOLUTE_IRIS, POSITIVE_RELATIVE_IRIS};
use lodestar_iri::{Iri, RelativeIri, Url};

fn parse(c: &mut Criterion) {
    c.bench_with_input(
        BenchmarkId::new("parse", ""),
        black_box(&(POSITIVE_ABSOLUTE_IRIS, POSITIVE_RELATIVE_IRIS, NEGATIVE_IRIS)),
        |b, &i| {
            b.iter(|| {
                for _ in 0..42 {
                    for iri in i.0 {
                        black_box(Iri::parse(iri).is_ok());
                    }
                    for iri in i.1 {
                        black_box(Iri::parse(iri).is_ok());
                    }
                    for iri in i.2 {
                        black_box(Iri::parse(iri).is_err());
                    }
                }
            });
        },
    );
}

fn resolve(c: &mut Criterion) {
    c.bench_with_input(
        BenchmarkId::new("resolve", ""),
        black_box(&POSITIVE_RELATIVE_IRIS),
        |b, &i| {
            let base = Url::parse("http://a/b/c/d;p?q").unwrap();
            b.iter(|| {
                for _ in 0..42 {
                    for rel in i {
                        let rel = RelativeIri::parse(rel).unwrap();
                        black_box(base.resolve(&rel));
                    }
                }
            });
        },
    );
}

criterion_group!(benches, parse, resolve);
criterion_main!(benches);
