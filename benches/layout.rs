// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triton::model::TableId;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `layout.recompute`, `layout.move`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (e.g. `small`, `medium_grid`).
fn benches_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.recompute");
    for case in [
        fixtures::Case::Small,
        fixtures::Case::MediumGrid,
        fixtures::Case::LargeDense,
    ] {
        let canvas = fixtures::canvas(case);
        group.bench_function(case.id(), move |b| {
            let mut canvas = canvas.clone();
            b.iter(|| {
                canvas.viewport_resized();
                black_box(canvas.registry().table_count())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("layout.move");
    for case in [fixtures::Case::MediumGrid, fixtures::Case::LargeDense] {
        let canvas = fixtures::canvas(case);
        let table_id = TableId::new("t0").expect("table id");
        group.bench_function(case.id(), move |b| {
            let mut canvas = canvas.clone();
            let mut step = 0.0f64;
            b.iter(|| {
                step = (step + 1.0) % 17.0;
                canvas.move_node(black_box(&table_id), step, step * 0.5);
                black_box(canvas.connections().len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);
