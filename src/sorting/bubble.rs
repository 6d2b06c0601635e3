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

pub(super) async fn sort(s: &mut Sorter<'_>) -> Result<(), Aborted> {
    let n = s.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            swapped |= s.compare_adjacent(j).await?;
        }

        if !swapped {
            for k in 0..n - i {
                s.mark(k, ElementStatus::Sorted);
            }
            break;
        }

        s.mark(n - i - 1, ElementStatus::Sorted);
        s.step().await?;
    }

    if n > 0 {
        s.mark(0, ElementStatus::Sorted);
    }
    Ok(())
}
