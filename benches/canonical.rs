//! Performance measurement for canonical-form selection and frontier scans

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use polyform::algorithm::growth::{GrowthConfig, GrowthEngine};
use polyform::algorithm::occupancy::frontier_cells;
use polyform::algorithm::symmetry::{Canonicalizer, SymmetryMode};
use polyform::geometry::Shape;
use std::hint::black_box;

/// Octominoes give a realistically sized working set for the hot path
fn sample_shapes() -> Vec<Shape> {
    let Ok(engine) = GrowthEngine::new(GrowthConfig {
        target_size: 8,
        mode: SymmetryMode::Free,
    }) else {
        return Vec::new();
    };
    engine
        .run()
        .map(polyform::algorithm::growth::Generation::into_sorted_shapes)
        .unwrap_or_default()
}

/// Measures orbit-minimum selection per mode over the sample set
fn bench_canonicalization(c: &mut Criterion) {
    let shapes = sample_shapes();
    let mut group = c.benchmark_group("canonical_form");

    let modes = [
        SymmetryMode::Free,
        SymmetryMode::OneSided,
        SymmetryMode::Fixed,
    ];
    for mode in modes {
        let canonicalizer = Canonicalizer::new(mode);
        group.bench_with_input(
            BenchmarkId::from_parameter(mode.label()),
            &canonicalizer,
            |b, canon| {
                b.iter(|| {
                    for shape in &shapes {
                        black_box(canon.canonical(black_box(shape)));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Measures frontier computation over the sample set
fn bench_frontier(c: &mut Criterion) {
    let shapes = sample_shapes();

    c.bench_function("frontier_cells", |b| {
        b.iter(|| {
            for shape in &shapes {
                black_box(frontier_cells(black_box(shape)));
            }
        });
    });
}

criterion_group!(benches, bench_canonicalization, bench_frontier);
criterion_main!(benches);
