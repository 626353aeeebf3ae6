use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dataset_mapper::DatasetMapper;
use ndarray::Array1;

fn bench_categorical_batch(c: &mut Criterion) {
    for size in [100, 1000, 10000, 100000].iter() {
        c.bench_with_input(BenchmarkId::new("categorical", size), size, |b, &n| {
            let tokens: Vec<String> = (0..n).map(|i| format!("level_{}", i % 64)).collect();
            let mut out = Array1::zeros(n);

            b.iter(|| {
                let mut mapper = DatasetMapper::new(1);
                mapper
                    .map_tokens(black_box(&tokens), 0, out.view_mut())
                    .unwrap();
                black_box(mapper.count_mappings(0));
            });
        });
    }
}

fn bench_numeric_batch(c: &mut Criterion) {
    for size in [100, 1000, 10000, 100000].iter() {
        c.bench_with_input(BenchmarkId::new("numeric", size), size, |b, &n| {
            let tokens: Vec<String> = (0..n).map(|i| format!("{}", i as f64 * 0.1)).collect();
            let mut out = Array1::zeros(n);

            b.iter(|| {
                let mut mapper = DatasetMapper::validating(["NA"], 1);
                mapper
                    .map_tokens(black_box(&tokens), 0, out.view_mut())
                    .unwrap();
                black_box(out[n - 1]);
            });
        });
    }
}

criterion_group!(benches, bench_categorical_batch, bench_numeric_batch);
criterion_main!(benches);
