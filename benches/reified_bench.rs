//! Benchmark for boxed optics.
//!
//! Compares evaluating a boxed getter or fold against calling the
//! equivalent generic optic directly, and measures how evaluation cost
//! grows with the depth of a combinator chain.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reified_optics::optics::{Fold, Getter, VecTraversal, folding, to};
use reified_optics::reified::{ReifiedFold, ReifiedGetter};
use std::hint::black_box;

// =============================================================================
// Boxed vs Direct
// =============================================================================

fn benchmark_getter_boxed_vs_direct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("getter_boxed_vs_direct");

    let direct = to(|pair: &(u64, u64)| pair.0.wrapping_add(pair.1));
    let boxed = ReifiedGetter::new(to(|pair: &(u64, u64)| pair.0.wrapping_add(pair.1)));

    group.bench_function("direct", |bencher| {
        bencher.iter(|| black_box(direct.view(black_box(&(3, 4)))));
    });

    group.bench_function("boxed", |bencher| {
        bencher.iter(|| black_box(boxed.view(black_box(&(3, 4)))));
    });

    group.finish();
}

fn benchmark_fold_boxed_vs_direct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold_boxed_vs_direct");

    for size in [10, 100, 1000] {
        let numbers: Vec<u64> = (0..size).collect();
        let direct = folding(|numbers: &Vec<u64>| numbers.clone());
        let boxed = ReifiedFold::from_traversal(VecTraversal::<u64>::new());

        group.bench_with_input(BenchmarkId::new("direct", size), &numbers, |bencher, numbers| {
            bencher.iter(|| black_box(direct.to_vec(black_box(numbers))));
        });

        group.bench_with_input(BenchmarkId::new("boxed", size), &numbers, |bencher, numbers| {
            bencher.iter(|| black_box(boxed.to_vec(black_box(numbers))));
        });
    }

    group.finish();
}

// =============================================================================
// Combinator Chains
// =============================================================================

fn benchmark_getter_fmap_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("getter_fmap_chain");

    for depth in [1, 10, 100] {
        let chained = (0..depth).fold(
            ReifiedGetter::from_fn(|n: &u64| *n),
            |getter, _| getter.fmap(|n| n.wrapping_add(1)),
        );

        group.bench_with_input(BenchmarkId::new("depth", depth), &chained, |bencher, chained| {
            bencher.iter(|| black_box(chained.view(black_box(&7))));
        });
    }

    group.finish();
}

fn benchmark_fold_product(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold_product");

    for size in [10, 100] {
        let numbers: Vec<u64> = (0..size).collect();
        let elements = || ReifiedFold::from_fn(|numbers: &Vec<u64>| numbers.clone());
        let product = elements().product(elements());

        group.bench_with_input(BenchmarkId::new("size", size), &numbers, |bencher, numbers| {
            bencher.iter(|| black_box(product.length(black_box(numbers))));
        });
    }

    group.finish();
}

fn benchmark_fold_union_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold_union_chain");

    for count in [2, 16, 128] {
        let unioned = ReifiedFold::concat(
            (0..count).map(|offset| ReifiedFold::from_fn(move |n: &u64| vec![n + offset])),
        );

        group.bench_with_input(BenchmarkId::new("folds", count), &unioned, |bencher, unioned| {
            bencher.iter(|| black_box(unioned.to_vec(black_box(&1))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_getter_boxed_vs_direct,
    benchmark_fold_boxed_vs_direct,
    benchmark_getter_fmap_chain,
    benchmark_fold_product,
    benchmark_fold_union_chain
);

criterion_main!(benches);
