use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hamming74::{decode, encode};
use rand::Rng;

fn bench_codec(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let data: Vec<u8> = (0..4096).map(|_| rng.gen()).collect();
    let encoded = encode(&data);

    c.bench_function("encode 4 KiB", |b| b.iter(|| encode(black_box(&data))));
    c.bench_function("decode 4 KiB", |b| {
        b.iter(|| decode(black_box(&encoded)).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
