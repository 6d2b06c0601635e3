// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Turning predecessor maps into an ordered path, animated one cell at a time.

use std::collections::HashMap;

use super::SearchView;
use crate::exec::Controller;
use crate::model::Coord;

/// Follows predecessors from `from` until a cell with none. The result starts at `from`.
pub fn walk_back(from: Coord, came_from: &HashMap<Coord, Coord>) -> Vec<Coord> {
    let mut chain = vec![from];
    let mut current = from;
    while let Some(&previous) = came_from.get(&current) {
        if chain.len() > came_from.len() {
            break;
        }
        chain.push(previous);
        current = previous;
    }
    chain
}

/// Start chain up to and including `meeting`, then the end chain after it.
pub fn merge_chains(
    meeting: Coord,
    start_came_from: &HashMap<Coord, Coord>,
    end_came_from: &HashMap<Coord, Coord>,
) -> Vec<Coord> {
    let mut path = walk_back(meeting, start_came_from);
    path.reverse();
    path.extend(walk_back(meeting, end_came_from).into_iter().skip(1));
    path
}

/// Builds the start-to-goal path and animates it from the goal backwards.
///
/// Endpoints are never painted. If the run is cancelled mid-animation the remaining cells are
/// left unpainted and the full path is still returned.
pub async fn linear(
    goal: Coord,
    came_from: &HashMap<Coord, Coord>,
    endpoints: (Coord, Coord),
    view: &mut dyn SearchView,
    ctl: &Controller,
) -> Vec<Coord> {
    let mut path = walk_back(goal, came_from);
    let len = path.len();
    for (i, &cell) in path.iter().enumerate().skip(1) {
        if is_endpoint(cell, endpoints) {
            continue;
        }
        if ctl.trace_pause().await.is_err() {
            break;
        }
        view.trace(cell, (len - i) as f64 / len as f64);
    }
    path.reverse();
    path
}

/// Builds the merged path of a bidirectional search and animates it from start to end.
pub async fn bidirectional(
    meeting: Coord,
    start_came_from: &HashMap<Coord, Coord>,
    end_came_from: &HashMap<Coord, Coord>,
    endpoints: (Coord, Coord),
    view: &mut dyn SearchView,
    ctl: &Controller,
) -> Vec<Coord> {
    let path = merge_chains(meeting, start_came_from, end_came_from);
    let len = path.len();
    for (i, &cell) in path.iter().enumerate() {
        if is_endpoint(cell, endpoints) {
            continue;
        }
        if ctl.trace_pause().await.is_err() {
            break;
        }
        view.trace(cell, i as f64 / len as f64);
    }
    path
}

fn is_endpoint(cell: Coord, (start, end): (Coord, Coord)) -> bool {
    cell == start || cell == end
}
