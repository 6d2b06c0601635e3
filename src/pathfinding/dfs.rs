// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};

use super::{Search, SearchResult};
use crate::exec::Aborted;
use crate::model::Coord;

/// Stack-based depth-first search. Cells are marked when pushed, so each is visited once; the
/// last neighbor pushed is explored first.
pub(crate) async fn search(s: &mut Search<'_>) -> Result<SearchResult, Aborted> {
    let mut stack = vec![s.start];
    let mut seen: HashSet<Coord> = HashSet::from([s.start]);
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();

    while let Some(current) = stack.pop() {
        s.ctl.ensure_running()?;
        if current == s.end {
            return s.found(current, &came_from).await;
        }

        for neighbor in s.grid.neighbors(current) {
            s.ctl.ensure_running()?;
            if seen.insert(neighbor) {
                came_from.insert(neighbor, current);
                stack.push(neighbor);
                s.visit(neighbor).await?;
            }
        }
    }

    s.exhausted()
}
