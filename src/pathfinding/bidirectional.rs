// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{Search, SearchResult};
use crate::exec::Aborted;
use crate::model::Coord;

/// One side of the search.
struct Frontier {
    queue: VecDeque<Coord>,
    seen: HashSet<Coord>,
    came_from: HashMap<Coord, Coord>,
}

impl Frontier {
    fn new(origin: Coord) -> Self {
        Self {
            queue: VecDeque::from([origin]),
            seen: HashSet::from([origin]),
            came_from: HashMap::new(),
        }
    }
}

/// Alternating breadth-first searches from both endpoints, one dequeued cell per side per round.
pub(crate) async fn search(s: &mut Search<'_>) -> Result<SearchResult, Aborted> {
    let mut forward = Frontier::new(s.start);
    let mut backward = Frontier::new(s.end);

    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        s.ctl.ensure_running()?;
        if let Some(meeting) = expand(s, &mut forward, &backward.seen).await? {
            return s.met(meeting, &forward.came_from, &backward.came_from).await;
        }
        s.ctl.ensure_running()?;
        if let Some(meeting) = expand(s, &mut backward, &forward.seen).await? {
            return s.met(meeting, &forward.came_from, &backward.came_from).await;
        }
    }

    s.exhausted()
}

/// Dequeues one cell and discovers its neighbors. Returns the first discovered cell the other
/// side has already seen.
async fn expand(
    s: &mut Search<'_>,
    side: &mut Frontier,
    other_seen: &HashSet<Coord>,
) -> Result<Option<Coord>, Aborted> {
    let Some(current) = side.queue.pop_front() else {
        return Ok(None);
    };
    for neighbor in s.grid.neighbors(current) {
        s.ctl.ensure_running()?;
        if !side.seen.insert(neighbor) {
            continue;
        }
        side.came_from.insert(neighbor, current);
        side.queue.push_back(neighbor);
        s.visit(neighbor).await?;
        if other_seen.contains(&neighbor) {
            return Ok(Some(neighbor));
        }
    }
    Ok(None)
}
