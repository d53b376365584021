use criterion::{black_box, criterion_group, Criterion};
use rowmask::decode::describe_row;
use rowmask::encode::encode;
use rowmask::presets::SOLVED_BOTTOM;

pub fn describe_full_row(c: &mut Criterion) {
    let row = encode(SOLVED_BOTTOM).unwrap();
    c.bench_function("Describe solved bottom row", |b| {
        b.iter(|| {
            describe_row(black_box(row.pattern)).unwrap()
        })
    });
}

criterion_group!(benches, describe_full_row,);
