use criterion::{black_box, criterion_group, criterion_main, Criterion};

use algokit::cs::dynamic::coin_change::{count_change_ways, min_coins_for_change};

fn bench_coin_change(c: &mut Criterion) {
    let coins = [1usize, 2, 5, 10, 20, 50, 100, 200];

    c.bench_function("count_change_ways_10k", |bencher| {
        bencher.iter(|| count_change_ways(black_box(&coins), black_box(10_000)))
    });

    c.bench_function("min_coins_for_change_10k", |bencher| {
        bencher.iter(|| min_coins_for_change(black_box(&coins), black_box(10_000)))
    });
}

criterion_group!(benches, bench_coin_change);
criterion_main!(benches);
