// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::future::Future;
use std::pin::Pin;

use super::Sorter;
use crate::exec::Aborted;
use crate::model::ElementStatus;

type Step<'s> = Pin<Box<dyn Future<Output = Result<(), Aborted>> + 's>>;

pub(super) async fn sort(s: &mut Sorter<'_>) -> Result<(), Aborted> {
    let n = s.len();
    if n < 2 {
        return Ok(());
    }
    sort_range(s, 0, n - 1).await?;

    for i in 0..n - 1 {
        if s.values[i] > s.values[i + 1] {
            tracing::error!(
                index = i,
                left = s.values[i],
                right = s.values[i + 1],
                "merge left adjacent elements out of order"
            );
        }
    }
    Ok(())
}

/// Sorts the inclusive range `start..=end`: flag it, sort both halves, merge.
fn sort_range<'s, 'a: 's>(s: &'s mut Sorter<'a>, start: usize, end: usize) -> Step<'s> {
    Box::pin(async move {
        if start >= end {
            return Ok(());
        }
        let mid = start + (end - start) / 2;

        s.ctl.ensure_running()?;
        for i in start..=end {
            s.mark(i, ElementStatus::PotentialSwap);
            s.accessed(1);
        }
        s.step().await?;

        sort_range(s, start, mid).await?;
        sort_range(s, mid + 1, end).await?;
        merge(s, start, mid, end).await
    })
}

/// Ties take from the left run, which keeps equal values in their original order.
fn takes_left(left: u32, right: u32) -> bool {
    left <= right
}

async fn merge(s: &mut Sorter<'_>, start: usize, mid: usize, end: usize) -> Result<(), Aborted> {
    let left = copy_run(s, start, mid).await?;
    let right = copy_run(s, mid + 1, end).await?;

    let (merged, compared) = merge_runs(&left, &right, |&value| value);
    for (offset, value) in merged.into_iter().enumerate() {
        if offset < compared {
            s.compared(0);
        }
        place(s, start + offset, value).await?;
    }
    Ok(())
}

/// Stable two-way merge by `key`. Also returns how many picks had both runs to choose from.
fn merge_runs<T: Copy>(left: &[T], right: &[T], key: impl Fn(&T) -> u32) -> (Vec<T>, usize) {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if takes_left(key(&left[i]), key(&right[j])) {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    let compared = merged.len();
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    (merged, compared)
}

/// Reads `start..=end` into a buffer, one highlighted read per step.
async fn copy_run(s: &mut Sorter<'_>, start: usize, end: usize) -> Result<Vec<u32>, Aborted> {
    let mut run = Vec::with_capacity(end + 1 - start);
    for index in start..=end {
        run.push(s.values[index]);
        s.accessed(1);
        s.mark(index, ElementStatus::Comparing);
        s.step().await?;
    }
    Ok(run)
}

async fn place(s: &mut Sorter<'_>, index: usize, value: u32) -> Result<(), Aborted> {
    s.write(index, ElementStatus::Swap, value);
    s.accessed(1);
    s.step().await?;
    s.mark(index, ElementStatus::Default);
    Ok(())
}
