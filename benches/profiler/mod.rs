// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok()).unwrap_or(default)
}

/// Criterion with a flamegraph profiler attached; `--profile-time` writes one per case.
pub fn criterion() -> Criterion {
    let frequency = env_or("PROFILE_FREQ", 100_i32).clamp(1, 1000);
    let sample_size = env_or("BENCH_SAMPLE_SIZE", 40_usize).clamp(10, 200);
    let warmup = env_or("BENCH_WARMUP_SECS", 2_u64).clamp(1, 60);
    let measurement = env_or("BENCH_MEASUREMENT_SECS", 5_u64).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}

/// Current-thread runtime on a paused clock, so step delays cost nothing but the yield.
pub fn runtime() -> tokio::runtime::Runtime {
    match tokio::runtime::Builder::new_current_thread().enable_time().start_paused(true).build() {
        Ok(runtime) => runtime,
        Err(err) => panic!("failed to build the bench runtime: {err}"),
    }
}
