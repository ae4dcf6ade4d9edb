//! Performance benchmarks for roster (de)serialization.
//!
//! These benchmarks measure the persisted-form conversion under different
//! dataset sizes:
//! - Model to JSON text
//! - JSON text back to a validated roster

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use staffbook::storage::{JsonLeave, JsonTag};
use staffbook::{JsonPerson, JsonRoster};

/// Build a roster document with `size` distinct, valid records.
fn sample_document(size: usize) -> JsonRoster {
    let persons = (0..size)
        .map(|i| JsonPerson {
            name: Some(format!("Staff Member {}", i)),
            nric: Some(format!("S{:07}A", i % 10_000_000)),
            phone: Some(format!("9{:07}", i)),
            email: Some(format!("staff{}@example.com", i)),
            address: Some(format!("{} Kent Ridge Rd", i + 1)),
            hire: Some("2023-01-01".to_string()),
            tags: vec![JsonTag::new("engineer"), JsonTag::new(format!("team {}", i % 7))],
            leaves: vec![JsonLeave {
                start: Some("2024-03-01".to_string()),
                end: Some("2024-03-05".to_string()),
            }],
            attendance: None,
        })
        .collect();
    JsonRoster { persons }
}

/// Benchmark reading JSON text into a validated roster.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_load");

    for size in [10usize, 100, 1000] {
        let text = serde_json::to_string(&sample_document(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let document: JsonRoster = serde_json::from_str(text).unwrap();
                document.to_model().unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark writing a validated roster to JSON text.
fn bench_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_save");

    for size in [10usize, 100, 1000] {
        let roster = sample_document(size).to_model().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| serde_json::to_string_pretty(&JsonRoster::from_model(roster)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_save);
criterion_main!(benches);
