use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use mangler::Mutator;

fn bench_mutate(c: &mut Criterion) {
    c.bench_function("mutate_4_passes_printable", |b| {
        let mut mutator = Mutator::new(1024, 1337, true).unwrap();
        b.iter(|| {
            mutator.set_input(b"Something").unwrap();
            mutator.mutate(4);
            black_box(mutator.bytes());
            mutator.clear_input();
        });
    });

    c.bench_function("mutate_4_passes_raw", |b| {
        let mut mutator = Mutator::new(1024, 1337, false).unwrap();
        b.iter(|| {
            mutator.set_input(b"Something").unwrap();
            mutator.mutate(4);
            black_box(mutator.bytes());
            mutator.clear_input();
        });
    });

    c.bench_function("mutate_large_input", |b| {
        let input = vec![0xa5u8; 4096];
        let mut mutator = Mutator::new(8192, 0xdead, false).unwrap();
        b.iter(|| {
            mutator.set_input(&input).unwrap();
            mutator.mutate(16);
            black_box(mutator.bytes());
            mutator.clear_input();
        });
    });
}

criterion_group!(benches, bench_mutate);
criterion_main!(benches);
