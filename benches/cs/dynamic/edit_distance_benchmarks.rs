use criterion::{black_box, criterion_group, criterion_main, Criterion};

use algokit::cs::dynamic::edit_distance::{edit_distance, levenshtein_distance};

fn bench_edit_distance(c: &mut Criterion) {
    let a: Vec<u32> = (0..500).map(|i| i % 17).collect();
    let b: Vec<u32> = (0..400).map(|i| i % 13).collect();

    c.bench_function("edit_distance_500x400", |bencher| {
        bencher.iter(|| edit_distance(black_box(&a), black_box(&b)))
    });

    c.bench_function("levenshtein_short_words", |bencher| {
        bencher.iter(|| levenshtein_distance(black_box("information"), black_box("informative")))
    });
}

criterion_group!(benches, bench_edit_distance);
criterion_main!(benches);
