// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Run counters shown next to the grid and the bars.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

/// Pathfinding statistics. `path_distance` is `-1` after an exhausted search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathStats {
    pub visited_cells: usize,
    pub path_distance: i64,
    #[serde(serialize_with = "serialize_millis")]
    elapsed: Duration,
    pub is_running: bool,
    #[serde(skip)]
    started_at: Option<Instant>,
}

fn serialize_millis<S: serde::Serializer>(value: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
}

impl PathStats {
    /// Fresh counters with the timer running.
    pub fn started(now: Instant) -> Self {
        Self { is_running: true, started_at: Some(now), ..Self::default() }
    }

    pub fn stop_timer(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at.take() {
            self.elapsed += now.saturating_duration_since(started_at);
        }
        self.is_running = false;
    }

    /// Elapsed run time, including the live portion while the timer runs.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self.elapsed + now.saturating_duration_since(started_at),
            None => self.elapsed,
        }
    }
}

/// Formats a duration as `seconds.millis` with three millisecond digits, e.g. `1.042s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortCounters {
    pub comparisons: u64,
    pub array_accesses: u64,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::{format_elapsed, PathStats};

    #[test]
    fn formats_seconds_and_padded_millis() {
        assert_eq!(format_elapsed(Duration::from_millis(0)), "0.000s");
        assert_eq!(format_elapsed(Duration::from_millis(1042)), "1.042s");
        assert_eq!(format_elapsed(Duration::from_millis(12_345)), "12.345s");
    }

    #[tokio::test(start_paused = true)]
    async fn timer_freezes_once_stopped() {
        let t0 = Instant::now();
        let mut stats = PathStats::started(t0);
        assert!(stats.is_running);

        tokio::time::advance(Duration::from_millis(250)).await;
        assert_eq!(stats.elapsed(Instant::now()), Duration::from_millis(250));

        stats.stop_timer(Instant::now());
        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(!stats.is_running);
        assert_eq!(stats.elapsed(Instant::now()), Duration::from_millis(250));

        stats.stop_timer(Instant::now());
        assert_eq!(stats.elapsed(Instant::now()), Duration::from_millis(250));
    }
}
