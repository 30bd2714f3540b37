//! Benchmarks for CircularBuffer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kata_buffer::CircularBuffer;

fn bench_write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_buffer_write_read");

    for size in [16, 1024, 65536].iter() {
        group.bench_with_input(BenchmarkId::new("fill_drain", size), size, |b, &size| {
            let mut buf = CircularBuffer::<u64>::new(size).unwrap();
            b.iter(|| {
                for i in 0..size as u64 {
                    buf.write(i).unwrap();
                }
                while let Ok(v) = buf.read() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

fn bench_overwrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_buffer_overwrite");

    for size in [16, 1024, 65536].iter() {
        group.bench_with_input(BenchmarkId::new("steady_state", size), size, |b, &size| {
            let mut buf = CircularBuffer::<u64>::new(size).unwrap();
            for i in 0..size as u64 {
                buf.write(i).unwrap();
            }
            let mut next = 0u64;
            b.iter(|| {
                buf.overwrite(black_box(next));
                next = next.wrapping_add(1);
            });
        });
    }

    group.finish();
}

fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_buffer_clear");

    for size in [16, 1024, 65536].iter() {
        group.bench_with_input(BenchmarkId::new("full", size), size, |b, &size| {
            let mut buf = CircularBuffer::<String>::new(size).unwrap();
            b.iter(|| {
                for i in 0..size {
                    buf.overwrite(i.to_string());
                }
                buf.clear();
                black_box(&buf);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_read, bench_overwrite, bench_clear);
criterion_main!(benches);
