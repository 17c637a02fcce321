use criterion::{black_box, criterion_group, criterion_main, Criterion};
use local_thresh::{threshold, GrayImageView, Method, ThresholdParams};

fn synthetic(width: usize, height: usize) -> Vec<u8> {
    (0..width * height).map(|i| (i % 251) as u8).collect()
}

fn bench_methods(c: &mut Criterion) {
    let width = 512usize;
    let height = 512usize;
    let data = synthetic(width, height);
    let view = GrayImageView::new(width, height, &data).expect("valid image");
    let params = ThresholdParams::new(15);

    for method in [Method::Sauvola, Method::Median, Method::Otsu] {
        c.bench_function(&format!("threshold_{method}_r15_512x512"), |b| {
            b.iter(|| {
                let out = threshold(black_box(&view), method, &params).expect("threshold");
                black_box(out);
            });
        });
    }
}

criterion_group!(benches, bench_methods);
criterion_main!(benches);
