use criterion::{black_box, criterion_group, criterion_main, Criterion};

use readlocate::index::fm::FMIndex;
use readlocate::index::sa::build_suffix_order;
use readlocate::search::{approximate_search, exact_search, naive_search, ExactIndex, SuffixArrayIndex};

fn make_reference(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_build_suffix_order(c: &mut Criterion) {
    let reference = make_reference(10_000);
    c.bench_function("build_suffix_order_10k", |b| {
        b.iter(|| {
            black_box(build_suffix_order(black_box(&reference)));
        })
    });
}

fn bench_exact(c: &mut Criterion) {
    let reference = make_reference(100_000);
    let order = build_suffix_order(&reference);
    let fm = FMIndex::from_reference(&reference, 64).unwrap();
    let read = reference[5_000..5_100].to_vec();

    c.bench_function("naive_search_100bp", |b| {
        b.iter(|| black_box(naive_search(black_box(&read), black_box(&reference))))
    });
    c.bench_function("exact_search_100bp", |b| {
        b.iter(|| black_box(exact_search(black_box(&read), &order, &reference)))
    });
    c.bench_function("fm_search_100bp", |b| b.iter(|| black_box(fm.search(black_box(&read)))));
}

fn bench_filtration(c: &mut Criterion) {
    let reference = make_reference(100_000);
    let idx = SuffixArrayIndex::build(&reference);
    let mut read = reference[20_000..20_100].to_vec();
    read[17] = if read[17] == b'A' { b'C' } else { b'A' };
    read[71] = if read[71] == b'G' { b'T' } else { b'G' };

    for k in [2usize, 4] {
        c.bench_function(&format!("filtration_100bp_k{}", k), |b| {
            b.iter(|| black_box(approximate_search(black_box(&read), &reference, &idx, k)))
        });
    }
}

criterion_group!(benches, bench_build_suffix_order, bench_exact, bench_filtration);
criterion_main!(benches);
