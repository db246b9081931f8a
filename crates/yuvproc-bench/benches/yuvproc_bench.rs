//! Benchmarks for yuvproc transforms.
//!
//! Run with: `cargo bench -p yuvproc-bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use yuvproc_core::{FrameGeometry, PictureBuffer, PictureBufferMut};
use yuvproc_ops::{create, ArithmeticOp, ArithmeticParams, ProcessingMode, Transform};

/// Typical frame sizes.
const SIZES: [(u32, u32); 3] = [(640, 480), (1280, 720), (1920, 1080)];

fn frame(geometry: &FrameGeometry) -> Vec<u8> {
    let size = geometry.frame_size().unwrap_or(0);
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn bench_transform(c: &mut Criterion, group_name: &str, transform: &Transform) {
    let mut group = c.benchmark_group(group_name);

    for (w, h) in SIZES {
        let geometry = FrameGeometry::yuv420p(w, h, 40).unwrap();
        let src_data = frame(&geometry);
        let mut dst_data = vec![0u8; src_data.len()];

        group.throughput(Throughput::Bytes(src_data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{w}x{h}")), &src_data, |b, src_data| {
            let src = PictureBuffer::new(src_data, geometry).unwrap();
            b.iter(|| {
                let mut dst = PictureBufferMut::new(&mut dst_data, geometry).unwrap();
                transform.apply(black_box(&src), &mut dst).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_identity(c: &mut Criterion) {
    bench_transform(c, "identity", &Transform::Identity);
}

fn bench_arithmetic(c: &mut Criterion) {
    for op in [ArithmeticOp::Addition, ArithmeticOp::Subtraction, ArithmeticOp::Multiplication] {
        let transform = create(
            ProcessingMode::PixelWiseArithmetic,
            Some(ArithmeticParams::new(16, 8, 2, op)),
        )
        .unwrap();
        bench_transform(c, &format!("arithmetic_{op}"), &transform);
    }
}

criterion_group!(benches, bench_identity, bench_arithmetic);
criterion_main!(benches);
