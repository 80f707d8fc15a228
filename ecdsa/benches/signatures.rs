use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ecdsa::{Ecdsa, WeierstrassCurve};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_sign(c: &mut Criterion) {
    let curve = WeierstrassCurve::p256();
    let ecdsa = Ecdsa::new(&curve);
    let mut rng = StdRng::seed_from_u64(42);
    let keys = ecdsa.generate_keys(&mut rng).expect("keygen");
    let msg = b"Send $100 to Bob now!";

    c.bench_function("ecdsa_p256_sign", |bencher| {
        bencher.iter(|| {
            let sig = ecdsa
                .sign(&mut rng, black_box(msg), keys.private_key())
                .expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let curve = WeierstrassCurve::p256();
    let ecdsa = Ecdsa::new(&curve);
    let mut rng = StdRng::seed_from_u64(42);
    let keys = ecdsa.generate_keys(&mut rng).expect("keygen");
    let msg = b"Send $100 to Bob now!";
    let sig = ecdsa.sign(&mut rng, msg, keys.private_key()).expect("sign");

    c.bench_function("ecdsa_p256_verify", |bencher| {
        bencher.iter(|| {
            let ok = ecdsa.verify(black_box(msg), keys.public_key(), black_box(&sig));
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
