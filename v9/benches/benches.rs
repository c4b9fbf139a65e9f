use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use v9::*;
mod test_paths;
use test_paths::*;

fn center_slices() -> Slices<f64> {
    Slices::from_rect(9.0, 7.0, 15.0, 13.0).unwrap()
}

fn bench_resize(b: &mut Bencher, resizer: &PathResizer<f64>) {
    let width = resizer.width() * 3.0;
    let height = resizer.height() * 2.0;
    b.iter(|| {
        resizer.resize(width, height).unwrap();
    })
}

fn bench_resize_into(b: &mut Bencher, resizer: &PathResizer<f64>) {
    let width = resizer.width() * 3.0;
    let height = resizer.height() * 2.0;
    let mut dst = Path::<f64>::with_capacity(resizer.segments().len());
    b.iter(|| {
        resizer.resize_into(width, height, &mut dst).unwrap();
    })
}

fn resize_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let assessment = assessment().resizer(center_slices());
    group.bench_function("assessment", |b| bench_resize(b, &assessment));
    group.bench_function("assessment_into", |b| bench_resize_into(b, &assessment));

    let segment_counts = &[25, 250, 2500, 25000];
    for &i in segment_counts {
        let resizer = wave(i).resizer(center_slices());
        group.bench_with_input(BenchmarkId::new("wave", i), &resizer, |b, r| {
            bench_resize(b, r)
        });
    }

    group.finish();
}

fn bounds_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("tight_bounds");
    let segment_counts = &[25, 250, 2500, 25000];
    for &i in segment_counts {
        group.bench_with_input(BenchmarkId::new("wave", i), &wave(i), |b, path| {
            b.iter(|| {
                path.tight_bounds();
            })
        });
    }

    group.finish();
}

criterion_group!(resize, resize_group, bounds_group);
criterion_main!(resize);
