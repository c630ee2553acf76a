//! Envelope encode/decode throughput
//!
//! Measures the per-message cost a relay pays to read routing fields and
//! claims from a received envelope.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use message_metadata::{Claim, MetadataEnvelope};
use std::collections::HashMap;

fn connection_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("conn-{:06}", i)).collect()
}

fn received_envelope() -> HashMap<String, String> {
    let mut meta = MetadataEnvelope::new();
    meta.add_action("sendToConnections")
        .add_connection_ids(&connection_ids(64))
        .add_excluded_ids(&connection_ids(4));
    meta.add_claims(&[
        Claim::new("sub", "user-42"),
        Claim::new("role", "admin"),
        Claim::new("tenant", "acme"),
    ])
    .unwrap();
    meta.into_map()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope_build");
    let ids = connection_ids(64);
    let claims = vec![Claim::new("sub", "user-42"), Claim::new("role", "admin")];

    group.bench_function("connection_ids_64", |b| {
        b.iter(|| {
            let mut meta = MetadataEnvelope::new();
            meta.add_connection_ids(black_box(&ids));
            meta
        })
    });

    group.bench_function("claims_2", |b| {
        b.iter(|| {
            let mut meta = MetadataEnvelope::new();
            meta.add_claims(black_box(&claims)).unwrap();
            meta
        })
    });

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope_read");
    let meta = MetadataEnvelope::from(received_envelope());

    group.bench_function("connection_ids_64", |b| {
        b.iter(|| black_box(&meta).try_get_connection_ids())
    });

    group.bench_function("claims_3", |b| {
        b.iter(|| black_box(&meta).try_get_claims().unwrap())
    });

    group.bench_function("absent_user_id", |b| {
        b.iter(|| black_box(&meta).try_get_user_id().is_none())
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_read);
criterion_main!(benches);
