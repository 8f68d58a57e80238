use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lanewise::morse;
use lanewise::simd::{F32x4, I16x8, Register};

fn bench_register_ops(c: &mut Criterion) {
    let a = Register::<F32x4>::from_lanes([1.0, 2.0, 3.0, 4.0]);
    let b = Register::<F32x4>::splat(1.000001);

    c.bench_function("f32x4_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });

    c.bench_function("f32x4_fmadd", |bencher| {
        bencher.iter(|| black_box(a).fmadd(black_box(b), black_box(a)))
    });

    let x = Register::<I16x8>::from_lanes([1, 2, 3, 4, 5, 6, 7, 8]);
    let y = Register::<I16x8>::splat(3);

    c.bench_function("i16x8_add", |bencher| {
        bencher.iter(|| black_box(black_box(x) + black_box(y)))
    });

    c.bench_function("i16x8_all_lanes_ge", |bencher| {
        bencher.iter(|| black_box(black_box(x) >= black_box(y)))
    });
}

fn bench_morse(c: &mut Criterion) {
    let text = b"THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789 ".repeat(64);
    let tokens = morse::tokens_of(&morse::encode(&text));

    c.bench_function("morse_encode", |bencher| {
        bencher.iter(|| morse::encode(black_box(&text)))
    });

    c.bench_function("morse_decode", |bencher| {
        bencher.iter(|| morse::decode(black_box(&tokens)))
    });
}

criterion_group!(benches, bench_register_ops, bench_morse);
criterion_main!(benches);
