use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use objid::collections::IdSet;
use objid::hex::{hex_decode, hex_to_string};
use objid::{HashBuilder, ObjectId};

fn hash_throughput(c: &mut Criterion) {
    let data = vec![0xABu8; 1024 * 1024]; // 1 MiB

    let mut group = c.benchmark_group("hash_throughput");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("oneshot_1mib", |b| {
        b.iter(|| ObjectId::digest(black_box(&data)))
    });

    group.bench_function("chunked_4k_1mib", |b| {
        b.iter(|| {
            let mut builder = HashBuilder::new();
            for chunk in black_box(&data).chunks(4096) {
                builder.update(chunk);
            }
            builder.compute_hash()
        })
    });

    group.finish();
}

fn hex_encode_decode(c: &mut Criterion) {
    let id = ObjectId::digest(b"bench");
    let hex = id.to_hex();

    let mut group = c.benchmark_group("hex");

    group.bench_function("encode_16bytes", |b| {
        b.iter(|| hex_to_string(black_box(&id.to_bytes())))
    });

    group.bench_function("decode_32chars", |b| {
        b.iter(|| {
            let mut buf = [0u8; 16];
            hex_decode(black_box(&hex), &mut buf).unwrap();
            buf
        })
    });

    group.bench_function("try_parse_hex", |b| {
        b.iter(|| ObjectId::try_parse_hex(black_box(&hex)))
    });

    group.finish();
}

fn id_comparison(c: &mut Criterion) {
    let a = ObjectId::from_words(0xda39_a3ee, 0x5e6b_4b0d, 0x3255_bfef, 0x9560_1890);
    let b = ObjectId::from_words(0xda39_a3ee, 0x5e6b_4b0d, 0x3255_bfef, 0x9560_1891);

    let mut group = c.benchmark_group("id");

    group.bench_function("eq", |b_iter| {
        b_iter.iter(|| black_box(&a) == black_box(&b))
    });

    group.bench_function("cmp", |b_iter| {
        b_iter.iter(|| black_box(&a).cmp(black_box(&b)))
    });

    let set: IdSet = (0..10_000u32).map(|n| ObjectId::digest(&n.to_le_bytes())).collect();
    group.bench_function("set_lookup", |b_iter| {
        b_iter.iter(|| set.contains(black_box(&a)))
    });

    group.finish();
}

criterion_group!(benches, hash_throughput, hex_encode_decode, id_comparison);
criterion_main!(benches);
