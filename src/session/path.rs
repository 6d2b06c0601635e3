// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use tokio::time::Instant;

use super::{GridEditor, Notice, Placement};
use crate::exec::{Controller, PauseFlag, RunFlag, StepDelay};
use crate::model::{CellKind, Coord, Grid, PathStats};
use crate::pathfinding::{self, Algorithm, Outcome, SearchView};
use crate::sound::{self, Tone};

pub const NO_PATH_MESSAGE: &str = "No path found! The destination is blocked by walls.";

#[derive(Debug, Clone)]
pub struct PathState {
    grid: Grid,
    editor: GridEditor,
    stats: PathStats,
    algorithm: Algorithm,
    notice: Option<Notice>,
}

impl PathState {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The endpoint picked up for a move, if any.
    pub fn selected(&self) -> Option<Coord> {
        self.editor.selected()
    }

    pub fn stats(&self) -> &PathStats {
        &self.stats
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

/// The pathfinding page: an editable grid and at most one live search.
pub struct PathSession {
    state: Rc<RefCell<PathState>>,
    run: RunFlag,
    delay: StepDelay,
}

impl PathSession {
    pub fn new(rows: usize, cols: usize, delay: Duration) -> Self {
        Self::with_grid(Grid::new(rows, cols), delay)
    }

    pub fn with_grid(grid: Grid, delay: Duration) -> Self {
        let state = PathState {
            grid,
            editor: GridEditor::default(),
            stats: PathStats::default(),
            algorithm: Algorithm::Dijkstra,
            notice: None,
        };
        Self { state: Rc::new(RefCell::new(state)), run: RunFlag::idle(), delay: StepDelay::new(delay) }
    }

    pub fn state(&self) -> Ref<'_, PathState> {
        self.state.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    pub fn delay(&self) -> &StepDelay {
        &self.delay
    }

    /// Applies one click. Every edit is rejected while a search runs.
    pub fn click(&self, at: Coord) -> Placement {
        if self.is_running() {
            return Placement::Rejected;
        }
        let mut state = self.state.borrow_mut();
        let PathState { grid, editor, .. } = &mut *state;
        editor.click(grid, at)
    }

    /// Cancels the live search, if any. Its timer freezes where it was.
    pub fn stop(&mut self) -> bool {
        let cancelled = self.run.cancel();
        if cancelled {
            self.state.borrow_mut().stats.stop_timer(Instant::now());
            tracing::debug!("search stopped");
        }
        cancelled
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.stop();
        let mut state = self.state.borrow_mut();
        state.algorithm = algorithm;
        state.grid.clear_overlay();
        state.stats = PathStats::default();
    }

    /// Removes the visited/path overlay and zeroes the stats; walls and endpoints stay.
    pub fn reset(&mut self) {
        self.stop();
        let mut state = self.state.borrow_mut();
        state.grid.clear_overlay();
        state.stats = PathStats::default();
        state.notice = None;
    }

    /// Replaces the grid with an empty one of the same size.
    pub fn clear(&mut self) {
        self.stop();
        let mut state = self.state.borrow_mut();
        state.grid = Grid::new(state.grid.rows(), state.grid.cols());
        state.editor.clear_selection();
        state.stats = PathStats::default();
        state.notice = None;
    }

    pub fn dismiss_notice(&self) {
        self.state.borrow_mut().notice = None;
    }

    pub fn expire_notice(&self, now: Instant) {
        let mut state = self.state.borrow_mut();
        if state.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            state.notice = None;
        }
    }

    /// Starts a search with the selected algorithm, cancelling any previous one.
    ///
    /// Returns `None` without touching the grid when start or end is missing. The returned future
    /// resolves once the search completes or observes its cancellation.
    pub fn start(&mut self) -> Option<impl Future<Output = Outcome> + 'static> {
        self.run.cancel();
        let (algorithm, snapshot, start, end) = {
            let mut state = self.state.borrow_mut();
            let start = state.grid.find(CellKind::Start);
            let end = state.grid.find(CellKind::End);
            if start.is_none() || end.is_none() {
                tracing::debug!("search skipped, start or end missing");
                return None;
            }
            state.grid.clear_overlay();
            state.editor.clear_selection();
            state.notice = None;
            state.stats = PathStats::started(Instant::now());
            (state.algorithm, state.grid.clone(), start, end)
        };

        self.run = RunFlag::new();
        let ctl = Controller::new(self.run.clone(), PauseFlag::new(), self.delay.clone());
        let mut view = LiveGrid {
            state: Rc::clone(&self.state),
            end,
            rows: snapshot.rows(),
            cols: snapshot.cols(),
        };
        let state = Rc::clone(&self.state);

        Some(async move {
            let outcome = pathfinding::run(algorithm, &snapshot, start, end, &mut view, &ctl).await;
            if let Outcome::Completed(result) = &outcome {
                if !result.success {
                    state.borrow_mut().notice = Some(Notice::new(NO_PATH_MESSAGE, Instant::now()));
                }
            }
            ctl.running().cancel();
            outcome
        })
    }
}

/// Mirrors search progress onto the session grid and plays tones.
struct LiveGrid {
    state: Rc<RefCell<PathState>>,
    end: Option<Coord>,
    rows: usize,
    cols: usize,
}

impl SearchView for LiveGrid {
    fn visit(&mut self, cell: Coord) {
        self.state.borrow_mut().grid.mark(cell, CellKind::Visited);
        sound::play(Tone::for_visit(cell, self.end, self.rows, self.cols));
    }

    fn trace(&mut self, cell: Coord, progress: f64) {
        self.state.borrow_mut().grid.mark(cell, CellKind::Path);
        sound::play(Tone::for_trace(progress));
    }

    fn visited_count(&mut self, count: usize) {
        self.state.borrow_mut().stats.visited_cells = count;
    }

    fn stop_timer(&mut self) {
        self.state.borrow_mut().stats.stop_timer(Instant::now());
    }

    fn path_distance(&mut self, distance: i64) {
        self.state.borrow_mut().stats.path_distance = distance;
    }
}
