// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triton::routing::{route_all, MidpointDrag, CURVE_SAMPLES};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `routing.route`, `routing.flatten`
// - Case IDs must remain stable across refactors.
fn benches_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing.route");
    for case in [
        fixtures::Case::Small,
        fixtures::Case::MediumGrid,
        fixtures::Case::LargeDense,
    ] {
        let canvas = fixtures::canvas(case);
        let drag = MidpointDrag::new();
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(route_all(canvas.connections(), &drag)).len())
        });
    }
    group.finish();

    let mut group = c.benchmark_group("routing.flatten");
    for case in [fixtures::Case::MediumGrid, fixtures::Case::LargeDense] {
        let canvas = fixtures::canvas(case);
        let drag = MidpointDrag::new();
        let paths = route_all(canvas.connections(), &drag);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let mut cells = 0usize;
                for path in &paths {
                    cells += black_box(path.curve_points(CURVE_SAMPLES)).len();
                }
                black_box(cells)
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_routing
}
criterion_main!(benches);
