use objid::{HashBuilder, ObjectId};

// ── Pinned digest vectors ───────────────────────────────────────────
// First 16 bytes of SHA-256 over the raw content.

#[test]
fn empty_content() {
    let id = HashBuilder::new().compute_hash();
    assert_eq!(id.to_hex(), "e3b0c44298fc1c149afbf4c8996fb924");
    assert_eq!(id.words()[0], 0x42c4_b0e3);
}

#[test]
fn abc() {
    let id = ObjectId::digest(b"abc");
    assert_eq!(id.to_hex(), "ba7816bf8f01cfea414140de5dae2223");
}

#[test]
fn hello_world() {
    let id = ObjectId::digest(b"hello world");
    assert_eq!(id.to_hex(), "b94d27b9934d3e08a52e52d7da7dabfa");
}

#[test]
fn hello_via_from_content() {
    let id = ObjectId::from_content("hello".as_bytes(), 0, 5).unwrap();
    assert_eq!(id.to_hex(), "2cf24dba5fb0a30e26e83b2ac5b9e29e");
}

#[test]
fn empty_is_stable_across_entry_points() {
    let a = ObjectId::digest(b"");
    let b = ObjectId::from_content(&[], 0, 0).unwrap();
    let c = ObjectId::from_reader(std::io::empty()).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_ne!(a, ObjectId::EMPTY);
}

// ── Streaming hash (multi-chunk) ────────────────────────────────────

#[test]
fn streaming_matches_oneshot() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let oneshot = ObjectId::digest(data);

    let mut builder = HashBuilder::new();
    builder.write_range(data, 0, 10).unwrap();
    builder.write_range(data, 10, 10).unwrap();
    builder.write_range(data, 20, data.len() - 20).unwrap();

    assert_eq!(builder.compute_hash(), oneshot);
}

#[test]
fn streaming_small_chunks() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let mut builder = HashBuilder::new();
    for chunk in data.chunks(7) {
        builder.update(chunk);
    }
    assert_eq!(builder.compute_hash(), ObjectId::digest(data));
}

#[test]
fn every_split_point_agrees() {
    let data: Vec<u8> = (0..=255u8).collect();
    let expected = ObjectId::digest(&data);
    for k in 0..=data.len() {
        let mut builder = HashBuilder::new();
        builder.update(&data[..k]);
        builder.update(&data[k..]);
        assert_eq!(builder.compute_hash(), expected, "split at {k}");
    }
}

#[test]
fn block_boundary_lengths() {
    // SHA-256 pads in 64-byte blocks; lengths around the boundary must all differ.
    let data = [0x5au8; 130];
    let ids: Vec<ObjectId> = [55, 56, 63, 64, 65, 119, 120, 128]
        .iter()
        .map(|&n| ObjectId::from_content(&data, 0, n).unwrap())
        .collect();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// ── Write trait usage ───────────────────────────────────────────────

#[test]
fn write_trait() {
    use std::io::Write;

    let data = b"hello world";
    let mut builder = HashBuilder::new();
    builder.write_all(data).unwrap();
    assert_eq!(builder.compute_hash(), ObjectId::digest(data));
}

#[test]
fn io_copy_into_builder() {
    let data = vec![0xabu8; 300_000];
    let mut builder = HashBuilder::new();
    let n = std::io::copy(&mut &data[..], &mut builder).unwrap();
    assert_eq!(n, data.len() as u64);
    assert_eq!(builder.bytes_written(), n);
    assert_eq!(builder.compute_hash(), ObjectId::digest(&data));
}

// ── Content sensitivity ─────────────────────────────────────────────

#[test]
fn single_bit_changes_id() {
    let a = ObjectId::digest(b"content-addressed");
    let b = ObjectId::digest(b"content-addresseD");
    assert_ne!(a, b);
}

#[test]
fn hash_result_display_parse_roundtrip() {
    let id = ObjectId::digest(b"test content");
    let hex = id.to_string();
    let parsed: ObjectId = hex.parse().unwrap();
    assert_eq!(id, parsed);
}
