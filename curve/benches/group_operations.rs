use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{random_scalar, secp256r1, Affine};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_affine_double(c: &mut Criterion) {
    let g = Affine::generator(secp256r1());
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = Affine::generator(secp256r1());
    let h = g.mul_u64(7);
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g) + black_box(&h)))
    });
}

fn bench_affine_scalar_mul(c: &mut Criterion) {
    let g = Affine::generator(secp256r1());
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(secp256r1(), &mut rng);

    c.bench_function("affine_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&g).scalar_mul(black_box(&scalar))))
    });
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_affine_add,
    bench_affine_scalar_mul
);
criterion_main!(benches);
