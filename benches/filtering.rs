//! Benchmarks for catalog filtering and query string handling.
//!
//! These benchmarks run the filter store over a large generated catalog.

use catalog_tui::catalog::{Catalog, Project};
use catalog_tui::filter::{query, ActiveFilters, FilterStore, FilterValue, Status, Theme};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fake::{Fake, Faker};

fn large_catalog(size: usize) -> Catalog {
    let projects = (0..size)
        .map(|i| {
            let mut project: Project = Faker.fake();
            project.id = format!("project-{}", i);
            project
        })
        .collect();
    Catalog::new(projects).expect("generated ids are unique")
}

fn bench_toggle_filter(c: &mut Criterion) {
    let mut store = FilterStore::new(large_catalog(5_000));
    let value = FilterValue::Theme(Theme::Build);
    c.bench_function("toggle_filter_5000", |b| {
        b.iter(|| {
            store.toggle_filter(black_box(value), "");
            store.toggle_filter(black_box(value), "");
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut store = FilterStore::new(large_catalog(5_000));
    store.toggle_filter(FilterValue::Status(Status::Active), "");
    c.bench_function("search_5000", |b| {
        b.iter(|| {
            store.on_filter_project(black_box("lorem"));
            store.filtered_len()
        })
    });
}

fn bench_query_codec(c: &mut Criterion) {
    let filters: ActiveFilters = FilterValue::all().into_iter().collect();
    let encoded = query::encode(&filters);
    c.bench_function("query_encode_all", |b| {
        b.iter(|| query::encode(black_box(&filters)))
    });
    c.bench_function("query_decode_all", |b| {
        b.iter(|| query::decode(black_box(&encoded)))
    });
}

criterion_group!(benches, bench_toggle_filter, bench_search, bench_query_codec);
criterion_main!(benches);
