// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Animated grid searches.
//!
//! Every search reads walls from a grid snapshot taken when the run starts and reports progress
//! through a [`SearchView`]. Each newly discovered cell costs one suspension, so the caller can
//! render between steps and cancel through the run's [`Controller`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::exec::{Aborted, Controller};
use crate::model::{Coord, Grid};

pub mod astar;
pub mod bidirectional;
pub mod dfs;
pub mod dijkstra;
pub mod reconstruct;

/// Callbacks from a running search into whatever renders it.
///
/// All calls are synchronous; the search awaits its own suspension before each of them.
pub trait SearchView {
    /// A cell entered the frontier for the first time.
    fn visit(&mut self, cell: Coord);
    /// A cell of the final path is being drawn; `progress` is in `0..=1`.
    fn trace(&mut self, cell: Coord, progress: f64);
    fn visited_count(&mut self, count: usize);
    /// The goal was reached or the frontier ran dry.
    fn stop_timer(&mut self);
    /// Final path length in steps, `-1` when no path exists.
    fn path_distance(&mut self, distance: i64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    AStar,
    DepthFirst,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] =
        [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::DepthFirst, Algorithm::Bidirectional];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::DepthFirst => "depth-first-search",
            Self::Bidirectional => "bidirectional",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra's",
            Self::AStar => "A*",
            Self::DepthFirst => "Depth-First Search",
            Self::Bidirectional => "Bidirectional",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Dijkstra => {
                "Explores cells in order of their distance from the start and relaxes each \
                 neighbour, so the first time the goal is reached the route is the shortest."
            }
            Self::AStar => {
                "Ranks frontier cells by cost so far plus the Manhattan distance to the goal, \
                 steering the search towards it while still returning a shortest route."
            }
            Self::DepthFirst => {
                "Follows one branch as deep as it goes before backtracking. It finds a route \
                 quickly on open grids but makes no promise that the route is short."
            }
            Self::Bidirectional => {
                "Runs two breadth-first searches, one from each end, and stops the moment the \
                 two frontiers touch."
            }
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            Self::Dijkstra => "O((V + E) log V) with a binary heap",
            Self::AStar => "O(b^d) worst case, far fewer expansions with a good heuristic",
            Self::DepthFirst => "O(V + E)",
            Self::Bidirectional => "O(b^(d/2)) against O(b^d) for a one-sided search",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.slug() == slug)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pathfinding algorithm `{0}`")]
pub struct UnknownAlgorithm(String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub success: bool,
    /// Ordered from start to end; empty when no path exists.
    pub path: Vec<Coord>,
    pub visited_count: usize,
}

impl SearchResult {
    pub fn path_distance(&self) -> i64 {
        if self.success {
            self.path.len() as i64 - 1
        } else {
            -1
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Start or end was missing; nothing ran.
    Skipped,
    /// Cancellation was observed; stats were not finalized.
    Aborted,
    Completed(SearchResult),
}

impl Outcome {
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Skipped | Self::Aborted => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Runs one search to completion, cancellation, or precondition failure.
pub async fn run(
    algorithm: Algorithm,
    grid: &Grid,
    start: Option<Coord>,
    end: Option<Coord>,
    view: &mut dyn SearchView,
    ctl: &Controller,
) -> Outcome {
    let (Some(start), Some(end)) = (start, end) else {
        return Outcome::Skipped;
    };
    tracing::debug!(%algorithm, %start, %end, "search started");

    let mut search = Search { grid, start, end, view, ctl, visited: 0 };
    let result = if start == end {
        search.trivial()
    } else {
        match algorithm {
            Algorithm::Dijkstra => dijkstra::search(&mut search).await,
            Algorithm::AStar => astar::search(&mut search).await,
            Algorithm::DepthFirst => dfs::search(&mut search).await,
            Algorithm::Bidirectional => bidirectional::search(&mut search).await,
        }
    };

    match result {
        Ok(result) => {
            tracing::debug!(
                %algorithm,
                success = result.success,
                visited = result.visited_count,
                distance = result.path_distance(),
                "search finished"
            );
            Outcome::Completed(result)
        }
        Err(Aborted) => {
            tracing::debug!(%algorithm, visited = search.visited, "search aborted");
            Outcome::Aborted
        }
    }
}

/// State shared by every search strategy for one run.
pub(crate) struct Search<'a> {
    grid: &'a Grid,
    start: Coord,
    end: Coord,
    view: &'a mut dyn SearchView,
    ctl: &'a Controller,
    visited: usize,
}

impl Search<'_> {
    /// Commits one new frontier entry: check, suspend, paint, count.
    async fn visit(&mut self, cell: Coord) -> Result<(), Aborted> {
        self.ctl.ensure_running()?;
        self.ctl.visit_pause().await?;
        self.view.visit(cell);
        self.visited += 1;
        self.view.visited_count(self.visited);
        Ok(())
    }

    fn trivial(&mut self) -> Result<SearchResult, Aborted> {
        self.ctl.ensure_running()?;
        self.view.stop_timer();
        self.view.path_distance(0);
        Ok(SearchResult { success: true, path: vec![self.start], visited_count: 0 })
    }

    fn exhausted(&mut self) -> Result<SearchResult, Aborted> {
        self.ctl.ensure_running()?;
        self.view.stop_timer();
        self.view.path_distance(-1);
        Ok(SearchResult { success: false, path: Vec::new(), visited_count: self.visited })
    }

    /// Goal reached by a single-frontier search.
    async fn found(
        &mut self,
        goal: Coord,
        came_from: &HashMap<Coord, Coord>,
    ) -> Result<SearchResult, Aborted> {
        self.ctl.ensure_running()?;
        self.view.stop_timer();
        let path = reconstruct::linear(goal, came_from, (self.start, self.end), self.view, self.ctl)
            .await;
        self.finalize(path)
    }

    /// Frontiers of a bidirectional search touched at `meeting`.
    async fn met(
        &mut self,
        meeting: Coord,
        start_came_from: &HashMap<Coord, Coord>,
        end_came_from: &HashMap<Coord, Coord>,
    ) -> Result<SearchResult, Aborted> {
        self.ctl.ensure_running()?;
        self.view.stop_timer();
        let path = reconstruct::bidirectional(
            meeting,
            start_came_from,
            end_came_from,
            (self.start, self.end),
            self.view,
            self.ctl,
        )
        .await;
        self.finalize(path)
    }

    fn finalize(&mut self, path: Vec<Coord>) -> Result<SearchResult, Aborted> {
        self.ctl.ensure_running()?;
        let result = SearchResult { success: true, path, visited_count: self.visited };
        self.view.path_distance(result.path_distance());
        Ok(result)
    }
}
