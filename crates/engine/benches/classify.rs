use criterion::{Criterion, criterion_group, criterion_main};
use linetally_engine::processor::classify_text;
use linetally_engine::stats::{Aggregator, FileRecord};
use std::hint::black_box;
use std::path::PathBuf;

fn benchmark_classify(c: &mut Criterion) {
    let text = "fn main() {\n\n    println!(\"hello\");\r\n   \n}\n".repeat(2_000);
    c.bench_function("classify_text_10k_lines", |b| {
        b.iter(|| black_box(classify_text(black_box(&text))));
    });
}

fn benchmark_aggregate(c: &mut Criterion) {
    let records: Vec<FileRecord> = (0..10_000)
        .map(|i| {
            let ext = ["rs", "py", "md", "toml"][i % 4];
            FileRecord::new(PathBuf::from(format!("f{i}.{ext}")), i % 97, i % 13)
        })
        .collect();
    c.bench_function("aggregate_10k_records", |b| {
        b.iter(|| black_box(records.iter().collect::<Aggregator>().finish()));
    });
}

criterion_group!(benches, benchmark_classify, benchmark_aggregate);
criterion_main!(benches);
