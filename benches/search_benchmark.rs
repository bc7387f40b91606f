use company_lookup::{CatalogSource, CatalogStore, SearchIndex};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn benchmark_search(c: &mut Criterion) {
    let mut store = CatalogStore::new();
    store
        .load(&CatalogSource::Embedded)
        .expect("Failed to load embedded listing");
    let index = store.index().expect("Index should be built");

    c.bench_function("search_exact_token", |b| {
        b.iter(|| index.search(black_box("tata"), black_box(8)))
    });

    c.bench_function("search_with_typo", |b| {
        b.iter(|| index.search(black_box("Relaince Industries"), black_box(8)))
    });

    let catalog = Arc::clone(index.catalog());
    c.bench_function("build_index", |b| {
        b.iter(|| SearchIndex::build(black_box(Arc::clone(&catalog))))
    });
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
