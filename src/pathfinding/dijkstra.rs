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
use crate::model::Coord;

/// Uniform-cost search over unit edges.
///
/// The frontier is a list re-sorted by distance before every pop. The sort is stable, so ties
/// go to the entry discovered first.
pub(crate) async fn search(s: &mut Search<'_>) -> Result<SearchResult, Aborted> {
    let mut frontier: Vec<(Coord, usize)> = vec![(s.start, 0)];
    let mut distances: HashMap<Coord, usize> = HashMap::from([(s.start, 0)]);
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();

    while !frontier.is_empty() {
        s.ctl.ensure_running()?;
        frontier.sort_by_key(|&(_, distance)| distance);
        let (current, current_distance) = frontier.remove(0);
        if current == s.end {
            return s.found(current, &came_from).await;
        }

        for neighbor in s.grid.neighbors(current) {
            s.ctl.ensure_running()?;
            let distance = current_distance + 1;
            if distances.get(&neighbor).is_some_and(|&known| known <= distance) {
                continue;
            }
            distances.insert(neighbor, distance);
            came_from.insert(neighbor, current);
            if let Some(entry) = frontier.iter_mut().find(|(cell, _)| *cell == neighbor) {
                entry.1 = distance;
            } else {
                frontier.push((neighbor, distance));
                s.visit(neighbor).await?;
            }
        }
    }

    s.exhausted()
}
