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
        s.ctl.ensure_running()?;
        let mut min = i;
        s.mark(i, ElementStatus::PotentialSwap);

        for j in i + 1..n {
            s.ctl.ensure_running()?;
            s.mark(j, ElementStatus::Comparing);
            s.compared(2);
            s.step().await?;

            if s.values[j] < s.values[min] {
                if min != i {
                    s.mark(min, ElementStatus::Default);
                }
                min = j;
                s.mark(min, ElementStatus::Swap);
            } else {
                s.mark(j, ElementStatus::Default);
            }
            s.step().await?;
        }

        if min != i {
            s.mark(i, ElementStatus::Swap);
            s.step().await?;
            s.swap(min, i);
            s.mark(min, ElementStatus::Default);
        }

        s.mark(i, ElementStatus::Sorted);
        s.step().await?;
    }

    if n > 0 {
        s.mark(n - 1, ElementStatus::Sorted);
    }
    Ok(())
}
