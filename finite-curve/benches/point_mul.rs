use criterion::{criterion_group, criterion_main, Criterion};
use finite_curve::parse::CurveConfig;
use finite_curve::{BigInt, Curve};
use num_bigint::RandBigInt;

use rand::rngs::OsRng;
use rand::Rng;

const SECP256K1: &str = include_str!("../data/secp256k1.json");

fn bench_point_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_mul");

    let mut rng = OsRng;
    let config: CurveConfig = serde_json::from_str(SECP256K1).unwrap();
    let curve = Curve::try_from(config).unwrap();
    let generator_g = curve.generator().clone();
    let generator_h = curve.mul_generator(rng.gen_bigint(256)).unwrap();

    let n = 50_usize;
    let random_scalars = (0..n)
        .map(|_| BigInt::from(rng.gen_biguint_below(curve.params().order())))
        .collect::<Vec<BigInt>>();

    group.bench_function("double", |b| b.iter(|| curve.double(&generator_g)));

    group.bench_function("add", |b| {
        b.iter(|| curve.add(&generator_g, &generator_h))
    });

    group.bench_function("single_mul", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| curve.scalar_mul(&generator_g, random_scalars[i].clone()))
    });

    group.finish();
}

criterion_group!(benches, bench_point_mul);
criterion_main!(benches);
