// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Sorter;
use crate::exec::Aborted;
use crate::model::ElementStatus;

/// Cocktail shaker sort over a window `start..=end` that shrinks from both sides.
pub(super) async fn sort(s: &mut Sorter<'_>) -> Result<(), Aborted> {
    let n = s.len();
    if n < 2 {
        for i in 0..n {
            s.mark(i, ElementStatus::Sorted);
        }
        return Ok(());
    }

    let (mut start, mut end) = (0, n - 1);
    loop {
        let mut swapped = false;
        for i in start..end {
            swapped |= s.compare_adjacent(i).await?;
        }
        s.mark(end, ElementStatus::Sorted);
        if !swapped {
            for i in start..end {
                s.mark(i, ElementStatus::Sorted);
            }
            break;
        }
        end -= 1;

        let mut swapped = false;
        for i in (start..end).rev() {
            swapped |= s.compare_adjacent(i).await?;
        }
        s.mark(start, ElementStatus::Sorted);
        if !swapped {
            for i in start + 1..=end {
                s.mark(i, ElementStatus::Sorted);
            }
            break;
        }
        start += 1;
    }
    Ok(())
}
