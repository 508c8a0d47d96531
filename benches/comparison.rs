use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textbook_rsa::library::{decrypt_lib, encrypt_lib, LibKeyPair};
use textbook_rsa::rsa::bigint::from_u64;
use textbook_rsa::rsa::{build_key_pair, decrypt, encrypt};

const KEY_BITS: u32 = 2048;

fn benchmark_textbook(c: &mut Criterion) {
    let mut group = c.benchmark_group("textbook");

    group.bench_function("key_generation", |b| {
        b.iter(|| black_box(build_key_pair(KEY_BITS).unwrap()));
    });

    let key = build_key_pair(KEY_BITS).unwrap();
    let message = from_u64(12345);
    let ciphertext = encrypt(&message, &key).unwrap();

    group.bench_function("encryption", |b| {
        b.iter(|| black_box(encrypt(black_box(&message), &key).unwrap()));
    });
    group.bench_function("decryption", |b| {
        b.iter(|| black_box(decrypt(black_box(&ciphertext), &key).unwrap()));
    });

    group.finish();
}

fn benchmark_library(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsa_crate");

    group.bench_function("key_generation", |b| {
        b.iter(|| black_box(LibKeyPair::generate(KEY_BITS as usize).unwrap()));
    });

    let key = LibKeyPair::generate(KEY_BITS as usize).unwrap();
    let message = b"Hello, RSA!";
    let ciphertext = encrypt_lib(message, &key.public_key).unwrap();

    group.bench_function("encryption", |b| {
        b.iter(|| black_box(encrypt_lib(black_box(message), &key.public_key).unwrap()));
    });
    group.bench_function("decryption", |b| {
        b.iter(|| black_box(decrypt_lib(black_box(&ciphertext), &key.private_key).unwrap()));
    });

    group.finish();
}

fn benchmark_key_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("textbook_key_sizes");

    for bits in [512u32, 1024, 2048] {
        group.bench_function(format!("{}_bits", bits), |b| {
            b.iter(|| black_box(build_key_pair(bits).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_message_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("textbook_message_sizes");
    let key = build_key_pair(KEY_BITS).unwrap();

    for value in [100u64, 1000, 10000, 100000] {
        let message = from_u64(value);
        group.bench_function(format!("message_{}", value), |b| {
            b.iter(|| black_box(encrypt(black_box(&message), &key).unwrap()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .confidence_level(0.95)
        .significance_level(0.05);
    targets = benchmark_textbook, benchmark_library, benchmark_key_sizes, benchmark_message_sizes
}
criterion_main!(benches);
