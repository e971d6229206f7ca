//! Benchmarks for tree construction and validation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use merkle_buf::MerkleTree;

fn bench_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state: u32 = 0xDEAD_BEEF;
    for _ in 0..size {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((state >> 16) as u8);
    }
    data
}

fn bench_build(c: &mut Criterion) {
    let sizes: &[usize] = &[
        16 * 1024,   // 16 KB
        256 * 1024,  // 256 KB
        1024 * 1024, // 1 MB
    ];

    let mut group = c.benchmark_group("build");
    for &size in sizes {
        let data = bench_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let tree: MerkleTree = MerkleTree::new(data.clone(), 1024).unwrap();
                tree
            });
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let size = 256 * 1024;
    let tree: MerkleTree = MerkleTree::new(bench_data(size), 1024).unwrap();

    let mut group = c.benchmark_group("validate");
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function(BenchmarkId::from_parameter(size), |b| {
        b.iter(|| tree.validate());
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_validate);
criterion_main!(benches);
