use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rlp_encoder::{encode, Encodable};

fn nested_list(depth: usize, width: usize) -> Encodable {
    if depth == 0 {
        return Encodable::from("0xdeadbeef");
    }
    Encodable::List((0..width).map(|_| nested_list(depth - 1, width)).collect())
}

/// Benchmark string encoding across the short/long framing boundary
fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    for len in &[1usize, 55, 56, 1024, 65536] {
        let value = Encodable::from(vec![0xffu8; *len]);
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }

    group.finish();
}

/// Benchmark recursive list encoding
fn bench_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists");

    for depth in &[1usize, 3, 5] {
        let value = nested_list(*depth, 4);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strings, bench_lists);
criterion_main!(benches);
