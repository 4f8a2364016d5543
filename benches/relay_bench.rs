// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resource_relay::{mime, PendingRelays, RelayDelivery, ResourceUri};

fn uri_decoding_benchmark(c: &mut Criterion) {
    let query = "file%3A%2F%2F%2Fhome%2Fme%2F.vscode%2Fextensions%2Fpub.ext%2Fmedia%2Flogo.png";

    c.bench_function("decode_nested_uri", |b| {
        b.iter(|| black_box(ResourceUri::from_query(black_box(query)).unwrap()))
    });

    let uri = ResourceUri::from_query(query).unwrap();
    c.bench_function("media_mime_lookup", |b| {
        b.iter(|| black_box(mime::media_mime(black_box(&uri))))
    });
}

fn pending_table_benchmark(c: &mut Criterion) {
    let pending = PendingRelays::new();
    let tokens: Vec<String> = (0..256).map(|i| format!("token-{}", i)).collect();

    c.bench_function("register_and_complete", |b| {
        b.iter(|| {
            for token in &tokens {
                let _rx = pending.register(token.as_str()).unwrap();
                black_box(pending.complete(
                    token,
                    RelayDelivery {
                        data: bytes::Bytes::from_static(b"payload"),
                        is_extension_resource: false,
                    },
                ));
            }
        })
    });
}

criterion_group!(benches, uri_decoding_benchmark, pending_table_benchmark);
criterion_main!(benches);
