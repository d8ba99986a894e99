//! Benchmarks for logpatterns registry queries

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logpatterns::{MemoryStore, PatternTable, Registry};

fn setup_registry(entries: usize) -> Registry<MemoryStore> {
    let mut table = PatternTable::new();
    for i in 0..entries {
        table.insert(format!("module{}.*", i), Some("debug".to_string()));
        table.insert(format!("exact.name{}", i), None);
    }
    table.insert("*", Some("warn".to_string()));

    let registry = Registry::new(MemoryStore::new());
    registry.set(&table);
    registry
}

fn registry_benchmarks(c: &mut Criterion) {
    let small = setup_registry(4);
    let large = setup_registry(256);

    c.bench_function("level_small_table", |b| {
        b.iter(|| small.level(black_box("module3.worker")))
    });

    c.bench_function("level_large_table_fallthrough", |b| {
        b.iter(|| large.level(black_box("unconfigured.name")))
    });

    c.bench_function("matches_large_table", |b| {
        b.iter(|| large.matches(black_box("exact.name200")))
    });

    c.bench_function("set_large_table", |b| {
        let table = large.get();
        b.iter(|| large.set(black_box(&table)))
    });
}

criterion_group!(benches, registry_benchmarks);
criterion_main!(benches);
