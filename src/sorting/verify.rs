// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use super::Sorter;
use crate::exec::Aborted;
use crate::model::ElementStatus;

/// Pace of the final ascending sweep, independent of the speed setting.
pub const VERIFY_STEP: Duration = Duration::from_millis(20);

/// Sweeps left to right marking each checked slot sorted. Stops at the first inversion.
pub(super) async fn verify(s: &mut Sorter<'_>) -> Result<bool, Aborted> {
    let n = s.len();
    if n == 0 {
        return Ok(true);
    }

    s.mark(0, ElementStatus::Comparing);
    for i in 1..n {
        let (left, right) = (s.values[i - 1], s.values[i]);
        if left > right {
            tracing::error!(index = i - 1, left, right, "verification found elements out of order");
            return Ok(false);
        }
        s.mark(i - 1, ElementStatus::Sorted);
        s.mark(i, ElementStatus::Comparing);
        s.ctl.pause_checked(VERIFY_STEP).await?;
    }
    s.mark(n - 1, ElementStatus::Sorted);
    Ok(true)
}
