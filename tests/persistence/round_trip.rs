//! Round-trip tests: serialize -> write -> read -> deserialize.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use tempfile::TempDir;
use tsdb::{decode_chain, encode_chain, Block, ChainStore};

fn block(secs: i64, datapoint: f64) -> Block {
    Block::new(Utc.timestamp_opt(secs, 0).unwrap(), secs, datapoint)
}

#[test]
fn test_full_round_trip_preserves_fields_and_order() {
    let dir = TempDir::new().unwrap();
    let store = ChainStore::new(dir.path().join("chain.json"));

    let mut chain = vec![
        block(1_709_294_400, 1.0),
        block(1_709_294_460, 2.0),
        block(1_709_294_520, 3.0),
    ];
    // Chain-link metadata must not survive the trip.
    chain[2].hash = Some("deadbeef".to_string());
    chain[2].prev_hash = Some("cafe".to_string());

    store.save(&chain).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.len(), 3);
    for (got, want) in loaded.iter().zip(&chain) {
        assert_eq!(got.timestamp, want.timestamp);
        assert_eq!(got.normalized_time, want.normalized_time);
        assert_eq!(got.datapoint, want.datapoint);
        assert_eq!(got.hash, None);
        assert_eq!(got.prev_hash, None);
    }

    let datapoints: Vec<f64> = loaded.iter().map(|b| b.datapoint).collect();
    assert_eq!(datapoints, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_order_is_array_order_not_time_order() {
    let dir = TempDir::new().unwrap();
    let store = ChainStore::new(dir.path().join("chain.json"));

    // Deliberately not sorted by timestamp.
    let chain = vec![block(300, 1.0), block(100, 2.0), block(200, 3.0)];
    store.save(&chain).unwrap();
    let loaded = store.load().unwrap();

    let datapoints: Vec<f64> = loaded.iter().map(|b| b.datapoint).collect();
    assert_eq!(datapoints, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_empty_chain_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chain.json");
    let store = ChainStore::new(&path);

    store.save(&[]).unwrap();

    // Canonical empty representation on disk.
    assert_eq!(std::fs::read(&path).unwrap(), b"[]");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_subsecond_timestamps_round_trip_exactly() {
    let dir = TempDir::new().unwrap();
    let store = ChainStore::new(dir.path().join("chain.json"));

    let ts = Utc.timestamp_opt(1_709_294_400, 123_456_789).unwrap();
    let chain = vec![Block::new(ts, 1_709_294_400, 0.25)];

    store.save(&chain).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].timestamp, ts);
}

fn arb_block() -> impl Strategy<Value = Block> {
    (
        0i64..4_102_444_800,  // 1970..2100
        0u32..1_000_000_000,  // subsecond nanos
        any::<i64>(),
        -1.0e12..1.0e12f64,   // finite datapoints only
    )
        .prop_map(|(secs, nanos, normalized_time, datapoint)| {
            Block::new(
                Utc.timestamp_opt(secs, nanos).unwrap(),
                normalized_time,
                datapoint,
            )
        })
}

proptest! {
    #[test]
    fn prop_encode_decode_round_trips_projections(
        chain in prop::collection::vec(arb_block(), 0..32)
    ) {
        let bytes = encode_chain(&chain).unwrap();
        let records = decode_chain(&bytes).unwrap();

        prop_assert_eq!(records.len(), chain.len());
        for (record, original) in records.iter().zip(&chain) {
            prop_assert_eq!(record.timestamp, original.timestamp);
            prop_assert_eq!(record.normalized_time, original.normalized_time);
            prop_assert_eq!(record.datapoint, original.datapoint);
        }
    }
}
