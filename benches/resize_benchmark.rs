use batchresize::processing::compute_target_size;
use batchresize::ResizeMode;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_target_size(c: &mut Criterion) {
    let percent = ResizeMode::Percent { percent: 37.5 };
    let fit = ResizeMode::Dimensions {
        width: Some(1280),
        height: Some(720),
        keep_aspect: true,
    };
    let stretch = ResizeMode::Dimensions {
        width: Some(1280),
        height: None,
        keep_aspect: false,
    };

    c.bench_function("target_size_percent", |b| {
        b.iter(|| compute_target_size(black_box(6000), black_box(4000), &percent));
    });
    c.bench_function("target_size_fit", |b| {
        b.iter(|| compute_target_size(black_box(6000), black_box(4000), &fit));
    });
    c.bench_function("target_size_stretch", |b| {
        b.iter(|| compute_target_size(black_box(6000), black_box(4000), &stretch));
    });
}

criterion_group!(benches, benchmark_target_size);
criterion_main!(benches);
