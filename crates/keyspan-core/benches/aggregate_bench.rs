//! Criterion benchmarks for [`Aggregator::recompute`].
//!
//! A front-end recomputes after every edit, so the cost of a full recompute
//! over a long list is the figure that matters.
//!
//! Run with:
//! ```bash
//! cargo bench --package keyspan-core --bench aggregate_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyspan_core::{Aggregator, Selection, SelectionList};

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Creates a list of `n` selections cycling through one pair per row, with
/// every fourth selection left incomplete.
fn build_list(n: usize) -> SelectionList {
    const PAIRS: [(&str, &str); 4] = [("`", "="), ("q", "\\"), ("a", "'"), ("z", "/")];
    (0..n)
        .map(|i| {
            let (from, to) = PAIRS[i % PAIRS.len()];
            if i % 4 == 3 {
                Selection {
                    from: Some(from.to_string()),
                    to: None,
                }
            } else {
                Selection::complete(from, to)
            }
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let agg = Aggregator::standard();
    let mut group = c.benchmark_group("recompute");

    for n in [1usize, 10, 100] {
        let list = build_list(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &list, |b, list| {
            b.iter(|| agg.recompute(black_box(list)))
        });
    }

    group.finish();
}

fn bench_options_for_to(c: &mut Criterion) {
    let agg = Aggregator::standard();
    c.bench_function("options_for_to/q", |b| {
        b.iter(|| agg.options_for_to(black_box(Some("q"))))
    });
}

criterion_group!(benches, bench_recompute, bench_options_for_to);
criterion_main!(benches);
