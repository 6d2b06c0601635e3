// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Instrumented, animated array sorts.
//!
//! Each algorithm orders a private copy of the values and mirrors every visible change to a
//! [`SortView`]. Ordering decisions never read back from the view, so whatever the renderer does
//! with its own copy cannot reorder the run.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::exec::{Aborted, Controller};
use crate::model::{ElementStatus, SortCounters};

mod bubble;
mod merge;
mod selection;
mod shaker;
mod verify;

pub use verify::VERIFY_STEP;

/// Callbacks from a running sort into whatever renders it.
pub trait SortView {
    fn update(&mut self, index: usize, status: ElementStatus, value: Option<u32>);
    /// Exchanges the values at two slots.
    fn swap(&mut self, i: usize, j: usize);
    fn counters(&mut self, counters: &SortCounters);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    Bubble,
    #[default]
    Selection,
    Shaker,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] =
        [SortAlgorithm::Selection, SortAlgorithm::Bubble, SortAlgorithm::Shaker, SortAlgorithm::Merge];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Shaker => "shaker",
            Self::Merge => "merge",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Shaker => "Shaker Sort",
            Self::Merge => "Merge Sort",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Bubble => {
                "Sweeps the unsorted prefix swapping adjacent pairs that are out of order, so the \
                 largest value bubbles to the end of each pass. Stops early after a pass with no swaps."
            }
            Self::Selection => {
                "Scans the unsorted suffix for its minimum and swaps it into the next position. \
                 Always makes the same number of comparisons, but at most one swap per position."
            }
            Self::Shaker => {
                "Bubble sort in both directions: a forward pass carries the largest value right, a \
                 backward pass carries the smallest value left, and the window shrinks from both ends."
            }
            Self::Merge => {
                "Splits the range in half, sorts each half, then merges them through two buffers. \
                 Equal values keep their relative order."
            }
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            Self::Bubble | Self::Shaker => "O(n^2) time, O(n) on sorted input, O(1) space",
            Self::Selection => "O(n^2) time in every case, O(1) space",
            Self::Merge => "O(n log n) time, O(n) space",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.slug() == slug)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sorting algorithm `{0}`")]
pub struct UnknownSortAlgorithm(String);

impl FromStr for SortAlgorithm {
    type Err = UnknownSortAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| UnknownSortAlgorithm(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortReport {
    pub counters: SortCounters,
    /// Whether the final verification pass found the values ascending.
    pub verified: bool,
    pub values: Vec<u32>,
}

/// Sorts `values`, then runs the verification pass. The run flag is cleared once verification
/// finishes, so a completed run reads as stopped.
pub async fn run(
    algorithm: SortAlgorithm,
    values: &[u32],
    view: &mut dyn SortView,
    ctl: &Controller,
) -> Result<SortReport, Aborted> {
    ctl.ensure_running()?;
    tracing::debug!(%algorithm, len = values.len(), "sort started");
    let mut sorter = Sorter { values: values.to_vec(), view, ctl, counters: SortCounters::default() };

    let sorted = match algorithm {
        SortAlgorithm::Bubble => bubble::sort(&mut sorter).await,
        SortAlgorithm::Selection => selection::sort(&mut sorter).await,
        SortAlgorithm::Shaker => shaker::sort(&mut sorter).await,
        SortAlgorithm::Merge => merge::sort(&mut sorter).await,
    };
    if let Err(aborted) = sorted {
        tracing::debug!(%algorithm, counters = ?sorter.counters, "sort aborted");
        return Err(aborted);
    }

    let verified = verify::verify(&mut sorter).await?;
    ctl.running().cancel();
    tracing::debug!(%algorithm, verified, counters = ?sorter.counters, "sort finished");
    Ok(SortReport { counters: sorter.counters, verified, values: sorter.values })
}

/// Shadow values plus the accounting every algorithm shares.
pub(crate) struct Sorter<'a> {
    values: Vec<u32>,
    view: &'a mut dyn SortView,
    ctl: &'a Controller,
    counters: SortCounters,
}

impl Sorter<'_> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn mark(&mut self, index: usize, status: ElementStatus) {
        self.view.update(index, status, None);
    }

    fn write(&mut self, index: usize, status: ElementStatus, value: u32) {
        self.values[index] = value;
        self.view.update(index, status, Some(value));
    }

    fn compared(&mut self, accesses: u64) {
        self.counters.comparisons += 1;
        self.counters.array_accesses += accesses;
        self.view.counters(&self.counters);
    }

    fn accessed(&mut self, accesses: u64) {
        self.counters.array_accesses += accesses;
        self.view.counters(&self.counters);
    }

    /// Two reads and two writes.
    fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        self.view.swap(i, j);
        self.accessed(4);
    }

    async fn step(&self) -> Result<(), Aborted> {
        self.ctl.stop_and_pause().await
    }

    /// Compares slots `i` and `i + 1` and swaps them when out of order. Returns whether a swap
    /// happened. Both slots are back to default afterwards.
    async fn compare_adjacent(&mut self, i: usize) -> Result<bool, Aborted> {
        self.ctl.ensure_running()?;
        self.mark(i, ElementStatus::PotentialSwap);
        self.mark(i + 1, ElementStatus::Comparing);
        self.compared(2);
        self.step().await?;

        let swapped = self.values[i] > self.values[i + 1];
        if swapped {
            self.mark(i + 1, ElementStatus::Swap);
            self.step().await?;
            self.swap(i, i + 1);
            self.mark(i, ElementStatus::Swap);
            self.mark(i + 1, ElementStatus::PotentialSwap);
            self.step().await?;
        }

        self.mark(i, ElementStatus::Default);
        self.mark(i + 1, ElementStatus::Default);
        Ok(swapped)
    }
}
