//! Performance benchmarks for AvoimuusExplorer
//!
//! Run with: cargo bench
//!
//! Establishes baseline metrics for the hot render-pass operations:
//! - Lookup table construction per registry fetch
//! - Batch target resolution across a full export

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use avoimuus_lib::locale::LocalizedInfo;
use avoimuus_lib::models::{ActivityTarget, TargetInfo, TargetRegistryItem};
use avoimuus_lib::resolver::{resolve_target, TargetLookup};

fn registry(size: i64) -> Vec<TargetRegistryItem> {
    (0..size)
        .map(|id| TargetRegistryItem {
            id,
            localized: LocalizedInfo {
                fi: Some(TargetInfo {
                    id,
                    name: format!("Henkilö {}", id),
                    organization: format!("Virasto {}", id % 40),
                    title: (id % 3 == 0).then(|| "Erityisasiantuntija".to_string()),
                    department: None,
                }),
                sv: None,
                en: None,
            },
        })
        .collect()
}

/// Benchmark lookup table construction
fn bench_build_lookup(c: &mut Criterion) {
    let items = registry(10_000);

    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("build_10k", |b| {
        b.iter(|| TargetLookup::build(black_box(&items)))
    });
    group.finish();
}

/// Benchmark batch resolution the way an export pass drives it
fn bench_resolve_batch(c: &mut Criterion) {
    let items = registry(10_000);
    let lookup = TargetLookup::build(&items);

    // A mix of live ids and dangling references, as real exports see.
    let refs: Vec<ActivityTarget> = (0..10_000)
        .map(|i| ActivityTarget {
            contacted_target_id: Some(if i % 5 == 0 { 50_000 + i } else { i }),
            ..Default::default()
        })
        .collect();

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(refs.len() as u64));
    group.bench_function("batch_10k", |b| {
        b.iter(|| {
            refs.iter()
                .map(|r| resolve_target(black_box(r), &lookup))
                .filter(|r| !r.is_unknown())
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build_lookup, bench_resolve_batch);
criterion_main!(benches);
