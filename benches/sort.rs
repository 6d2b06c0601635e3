// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use algoscope::exec::Controller;
use algoscope::sorting::{self, SortAlgorithm};

mod fixtures;
mod profiler;

use fixtures::array::Case;

// Group names are `sort.<algorithm slug>`; case IDs stay stable so results compare over time.
fn benches_sort(c: &mut Criterion) {
    let runtime = profiler::runtime();

    for algorithm in SortAlgorithm::ALL {
        let mut group = c.benchmark_group(format!("sort.{}", algorithm.slug()));

        for (case_id, values) in [
            ("reversed_50", fixtures::array::fixture(Case::Reversed, 50)),
            ("sawtooth_50", fixtures::array::fixture(Case::Sawtooth, 50)),
            ("few_unique_50", fixtures::array::fixture(Case::FewUnique, 50)),
            ("sawtooth_400", fixtures::array::fixture(Case::Sawtooth, 400)),
        ] {
            group.throughput(Throughput::Elements(values.len() as u64));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let mut view = fixtures::NullView::default();
                    let ctl = Controller::with_delay(Duration::ZERO);
                    let report = runtime.block_on(sorting::run(algorithm, black_box(&values), &mut view, &ctl));
                    black_box((report.map(|r| r.counters.comparisons), view.events))
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_sort
}
criterion_main!(benches);
