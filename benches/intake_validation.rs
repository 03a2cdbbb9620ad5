// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for upload batch validation.

use criterion::{criterion_group, criterion_main, Criterion};
use crimewatch::domain::intake::{CandidateFile, IntakePolicy};
use crimewatch::intake;
use std::hint::black_box;

/// A mixed selection: supported, unsupported and oversized files.
fn mixed_selection(count: usize) -> Vec<CandidateFile> {
    (0..count)
        .map(|i| match i % 3 {
            0 => CandidateFile::new(format!("frame-{i}.png"), 2_048, "image/png"),
            1 => CandidateFile::new(format!("clip-{i}.mkv"), 4_096, "video/x-matroska"),
            _ => CandidateFile::new(format!("raw-{i}.mp4"), u64::MAX, "video/mp4"),
        })
        .collect()
}

fn bench_validate_and_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("intake_validation");

    let policy = IntakePolicy {
        max_batch_size: 64,
        ..IntakePolicy::default()
    };
    let existing = vec![CandidateFile::new("existing.jpg", 1_024, "image/jpeg")];
    let incoming = mixed_selection(96);

    group.bench_function("validate_96_files", |b| {
        b.iter(|| {
            black_box(intake::validate_and_merge(
                black_box(&existing),
                black_box(&incoming),
                &policy,
            ));
        });
    });

    group.bench_function("format_file_size", |b| {
        b.iter(|| black_box(intake::format_file_size(black_box(157_286_400))));
    });

    group.finish();
}

criterion_group!(benches, bench_validate_and_merge);
criterion_main!(benches);
