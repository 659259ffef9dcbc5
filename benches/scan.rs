use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A chain of `count` synthetic certificates, each with a 1000-byte body
/// beginning with an inner SEQUENCE.
fn synthetic_chain(count: usize) -> Vec<u8> {
    let mut data = vec![];
    for _ in 0..count {
        data.extend([0x30, 0x82, 0x03, 0xe8, 0x30]);
        data.resize(data.len() + 999, 0x5a);
    }
    data
}

fn bench_scan_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_chain");

    for count in [1, 8, 64] {
        let data = synthetic_chain(count);
        group.bench_with_input(format!("certs_{count}"), &count, |b, _| {
            b.iter(|| {
                let spans = dechain::scan(black_box(&data));
                black_box(spans)
            })
        });
    }
    group.finish();
}

fn bench_scan_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_noise");

    for size in [1000, 100000] {
        // Worst case for the byte-by-byte fallback: every position holds a
        // SEQUENCE tag but never a supported length.
        let data = vec![0x30u8; size];
        group.bench_with_input(format!("size_{size}"), &size, |b, _| {
            b.iter(|| {
                let spans = dechain::scan(black_box(&data));
                black_box(spans)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan_chain, bench_scan_noise);
criterion_main!(benches);
