//! Pipeline Benchmarks
//!
//! Per-stage and end-to-end cost with latency simulation disabled.
//!
//! Run: cargo bench -p trendcheck-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trendcheck_core::{recommend, run_pipeline, score, select_keywords, tokenize, PipelineConfig};

const SAMPLE: &str =
    "Trend XYZ is going viral on TikTok: chunky sneakers, metallic laces, bright outsole.";

fn bench_config() -> PipelineConfig {
    PipelineConfig::builder()
        .simulate_latency_ms(0)
        .build()
        .expect("benchmark config is valid")
}

fn bench_stages(c: &mut Criterion) {
    let config = bench_config();
    let tokens = tokenize(SAMPLE);
    let keywords = select_keywords(tokens.clone(), &config);
    let keyword_score = score(&keywords, SAMPLE, &config);

    c.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(SAMPLE))));
    c.bench_function("select_keywords", |b| {
        b.iter(|| select_keywords(black_box(tokens.clone()), &config))
    });
    c.bench_function("score", |b| {
        b.iter(|| score(black_box(&keywords), black_box(SAMPLE), &config))
    });
    c.bench_function("recommend", |b| {
        b.iter(|| recommend(black_box(&keywords), black_box(keyword_score), &config))
    });
}

fn bench_run_pipeline(c: &mut Criterion) {
    let config = bench_config();
    let mut group = c.benchmark_group("run_pipeline");

    for repeat in [1usize, 10, 100] {
        let text = SAMPLE.repeat(repeat);
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| run_pipeline(black_box(text), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stages, bench_run_pipeline);
criterion_main!(benches);
