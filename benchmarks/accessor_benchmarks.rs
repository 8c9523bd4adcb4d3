#![allow(clippy::unwrap_used, clippy::expect_used)]

/// Parameter set and accessor benchmarks, with `url::form_urlencoded` as baseline
use criterion::{Criterion, criterion_group, criterion_main};
use pool_param::{SearchParams, SessionHistory, clear_pool_id, get_pool_id, set_pool_id};
use std::hint::black_box;
use url::form_urlencoded;

const QUERIES: &[&str] = &[
    "",
    "poolId=abc123",
    "foo=bar&poolId=p1&sort=name&page=2",
    "q=hello+world%21&lang=fr&name=Fran%C3%A7ois&poolId=a%26b",
    "&&a=1&&b&c=%zz&poolId=x&&",
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("pool_param", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(SearchParams::parse(black_box(query)));
            }
        });
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            for query in QUERIES {
                let pairs: Vec<(String, String)> = form_urlencoded::parse(black_box(query).as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                black_box(pairs);
            }
        });
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let parsed: Vec<SearchParams> = QUERIES.iter().map(|q| SearchParams::parse(q)).collect();
    let mut group = c.benchmark_group("serialize");

    group.bench_function("pool_param", |b| {
        b.iter(|| {
            for params in &parsed {
                black_box(params.to_string());
            }
        });
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            for params in &parsed {
                let out = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(params.iter())
                    .finish();
                black_box(out);
            }
        });
    });

    group.finish();
}

fn bench_accessor(c: &mut Criterion) {
    c.bench_function("set_get_clear", |b| {
        b.iter(|| {
            let mut history = SessionHistory::parse("/app?foo=bar&sort=name").unwrap();
            set_pool_id(&mut history, black_box("pool-42"));
            black_box(get_pool_id(&history));
            clear_pool_id(&mut history);
            black_box(history.len());
        });
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_accessor);
criterion_main!(benches);
