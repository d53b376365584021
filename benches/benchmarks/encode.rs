use criterion::{black_box, criterion_group, Criterion};
use rowmask::encode::{encode, encode_literals};
use rowmask::presets::{SOLVED_TOP, TOP_TARGET};

pub fn encode_full_row(c: &mut Criterion) {
    c.bench_function("Encode solved top row", |b| {
        b.iter(|| {
            encode(black_box(SOLVED_TOP)).unwrap()
        })
    });
}

pub fn literals_full_row(c: &mut Criterion) {
    c.bench_function("Encode top target to literals", |b| {
        b.iter(|| {
            encode_literals(black_box(TOP_TARGET)).unwrap()
        })
    });
}

criterion_group!(benches, encode_full_row, literals_full_row,);
