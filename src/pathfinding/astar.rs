// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use super::{Search, SearchResult};
use crate::exec::Aborted;
use crate::model::{heuristic, Coord};

#[derive(Debug, Clone, Copy)]
struct Node {
    coord: Coord,
    /// Cost so far plus the Manhattan estimate.
    f: usize,
}

/// Best-first search on `g + h`. Manhattan distance never overestimates on a 4-connected grid,
/// so the first time the goal is popped its route is a shortest one.
pub(crate) async fn search(s: &mut Search<'_>) -> Result<SearchResult, Aborted> {
    let mut open = vec![Node { coord: s.start, f: heuristic(s.start, s.end) }];
    let mut g_score: HashMap<Coord, usize> = HashMap::from([(s.start, 0)]);
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();

    while !open.is_empty() {
        s.ctl.ensure_running()?;
        open.sort_by_key(|node| node.f);
        let current = open.remove(0).coord;
        if current == s.end {
            return s.found(current, &came_from).await;
        }
        let current_g = g_score.get(&current).copied().unwrap_or(0);

        for neighbor in s.grid.neighbors(current) {
            s.ctl.ensure_running()?;
            let tentative = current_g + 1;
            if g_score.get(&neighbor).is_some_and(|&known| known <= tentative) {
                continue;
            }
            came_from.insert(neighbor, current);
            g_score.insert(neighbor, tentative);
            let f = tentative + heuristic(neighbor, s.end);
            if let Some(node) = open.iter_mut().find(|node| node.coord == neighbor) {
                node.f = f;
            } else {
                open.push(Node { coord: neighbor, f });
                s.visit(neighbor).await?;
            }
        }
    }

    s.exhausted()
}
