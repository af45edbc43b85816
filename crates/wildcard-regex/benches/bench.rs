#![allow(clippy::unwrap_used)]

use criterion::{Criterion, criterion_group, criterion_main};
use wildcard_regex::{Config, Preset};

const SIMPLE: &str = "src/**/*.rs";
const ALTERNATION: &str = "a{b,c{d,e},f}g{h,,i}*.{rs,toml,lock}";
const DEGENERATE: &str = r"{a{b,c\}d,e}{unbalanced\\\";

fn convert_simple(b: &mut Criterion) {
    let config = Config::preset(Preset::Unix);
    b.bench_function("convert_simple", |b| {
        b.iter(|| config.convert_str(SIMPLE));
    });
}

fn convert_alternation(b: &mut Criterion) {
    let config = Config::preset(Preset::Unix);
    b.bench_function("convert_alternation", |b| {
        b.iter(|| config.convert_str(ALTERNATION));
    });
}

fn convert_degenerate(b: &mut Criterion) {
    let config = Config::preset(Preset::Unix);
    b.bench_function("convert_degenerate", |b| {
        b.iter(|| config.convert_str(DEGENERATE));
    });
}

fn convert_deeply_nested(b: &mut Criterion) {
    let config = Config::preset(Preset::Unix);
    let mut pattern = String::new();
    for _ in 0..64 {
        pattern.push_str("{a");
    }
    pattern.push_str(&"}".repeat(64));
    b.bench_function("convert_deeply_nested", |b| {
        b.iter(|| config.convert_str(&pattern));
    });
}

criterion_group!(
    benches,
    convert_simple,
    convert_alternation,
    convert_degenerate,
    convert_deeply_nested,
);
criterion_main!(benches);
