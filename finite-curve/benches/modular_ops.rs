use criterion::{criterion_group, criterion_main, Criterion};
use finite_curve::{mod_inverse, BigInt, BigUint};
use num_bigint::RandBigInt;

use rand::rngs::OsRng;
use rand::Rng;

fn bench_modular_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("modular_ops");

    let mut rng = OsRng;
    let p = BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .unwrap();
    let n = 50_usize;
    let random_values = (0..n)
        .map(|_| BigInt::from(rng.gen_biguint_range(&BigUint::from(1u8), &p)))
        .collect::<Vec<BigInt>>();

    group.bench_function("inverse", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| mod_inverse(&p, &random_values[i]))
    });

    group.finish();
}

criterion_group!(benches, bench_modular_ops);
criterion_main!(benches);
