// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Non-interactive runs behind the `path` and `sort` subcommands.
//!
//! Both drive the same sessions the TUI uses, then summarize the final state as text or JSON.

use std::fmt::Write as _;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::time::Instant;

use crate::error::AppError;
use crate::exec::Speed;
use crate::model::{format_elapsed, CellKind, Coord, Grid, SortArray};
use crate::pathfinding::Algorithm;
use crate::session::{PathSession, SortSession};
use crate::sorting::{SortAlgorithm, SortReport};

#[derive(Debug, Clone)]
pub struct PathRequest {
    pub algorithm: Algorithm,
    pub grid: Grid,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
    pub walls: Vec<Coord>,
    pub delay: Duration,
}

impl PathRequest {
    /// Places the requested endpoints and walls on the grid.
    ///
    /// Explicit endpoints replace those already on the grid. A grid without an endpoint gets the
    /// top-left corner as start and the bottom-right corner as end.
    pub fn prepare(&self) -> Result<Grid, AppError> {
        let mut grid = self.grid.clone();
        let (cols, rows) = (grid.cols(), grid.rows());
        let inside = |coord: Coord| {
            if grid_contains(cols, rows, coord) {
                Ok(coord)
            } else {
                Err(AppError::OutOfBounds { coord, cols, rows })
            }
        };

        let start = match self.start {
            Some(start) => inside(start)?,
            None => grid.find(CellKind::Start).unwrap_or(Coord::new(0, 0)),
        };
        let end = match self.end {
            Some(end) => inside(end)?,
            None => grid.find(CellKind::End).unwrap_or(Coord::new(cols.saturating_sub(1), rows.saturating_sub(1))),
        };
        if start == end {
            return Err(AppError::SameEndpoints(start));
        }

        for (kind, at) in [(CellKind::Start, start), (CellKind::End, end)] {
            if let Some(previous) = grid.find(kind) {
                grid.set_kind(previous, CellKind::Empty);
            }
            grid.set_kind(at, kind);
        }
        for &wall in &self.walls {
            inside(wall)?;
            if wall == start || wall == end {
                return Err(AppError::WallOnEndpoint(wall));
            }
            grid.set_kind(wall, CellKind::Wall);
        }
        Ok(grid)
    }
}

fn grid_contains(cols: usize, rows: usize, coord: Coord) -> bool {
    coord.x < cols && coord.y < rows
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub algorithm: &'static str,
    pub success: bool,
    pub visited_cells: usize,
    pub path_distance: i64,
    pub elapsed_ms: u64,
    pub path: Vec<Coord>,
    /// Final grid, one string per row, in the `.#SEo*` glyph alphabet.
    pub grid: Vec<String>,
}

pub async fn run_path(request: &PathRequest) -> Result<PathReport, AppError> {
    let grid = request.prepare()?;
    let mut session = PathSession::with_grid(grid, request.delay);
    session.select_algorithm(request.algorithm);
    let search = session.start().ok_or(AppError::Interrupted)?;
    let outcome = search.await;
    let result = outcome.result().cloned().ok_or(AppError::Interrupted)?;

    let state = session.state();
    let stats = state.stats();
    Ok(PathReport {
        algorithm: request.algorithm.slug(),
        success: result.success,
        visited_cells: stats.visited_cells,
        path_distance: stats.path_distance,
        elapsed_ms: millis(stats.elapsed(Instant::now())),
        path: result.path,
        grid: state.grid().to_ascii().lines().map(str::to_owned).collect(),
    })
}

pub fn render_path(report: &PathReport) -> String {
    let mut out = String::new();
    for row in &report.grid {
        out.push_str(row);
        out.push('\n');
    }
    let distance = match report.path_distance {
        d if d < 0 => "none".to_owned(),
        d => d.to_string(),
    };
    let _ = writeln!(out, "algorithm: {}", report.algorithm);
    let _ = writeln!(out, "visited:   {}", report.visited_cells);
    let _ = writeln!(out, "path:      {distance}");
    let _ = writeln!(out, "time:      {}", format_elapsed(Duration::from_millis(report.elapsed_ms)));
    out
}

#[derive(Debug, Clone)]
pub struct SortRequest {
    pub algorithm: SortAlgorithm,
    /// Explicit input; when absent `len` random values are drawn from `seed`.
    pub values: Option<Vec<u32>>,
    pub len: usize,
    pub seed: Option<u64>,
    pub speed: Speed,
    pub base_delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortSummary {
    pub algorithm: &'static str,
    pub input: Vec<u32>,
    #[serde(flatten)]
    pub report: SortReport,
}

pub async fn run_sort(request: &SortRequest) -> Result<SortSummary, AppError> {
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let array = match &request.values {
        Some(values) => SortArray::from_values(values.iter().copied()),
        None => SortArray::random(request.len, &mut rng),
    };
    let input = array.values();

    let mut session = SortSession::with_array(array, request.speed, request.base_delay, rng);
    session.select_algorithm(request.algorithm);
    let sort = session.start().ok_or(AppError::Interrupted)?;
    let report = sort.await.map_err(|_| AppError::Interrupted)?;
    Ok(SortSummary { algorithm: request.algorithm.slug(), input, report })
}

pub fn render_sort(summary: &SortSummary) -> String {
    let join = |values: &[u32]| values.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
    let mut out = String::new();
    let _ = writeln!(out, "algorithm:      {}", summary.algorithm);
    let _ = writeln!(out, "input:          {}", join(&summary.input));
    let _ = writeln!(out, "sorted:         {}", join(&summary.report.values));
    let _ = writeln!(out, "comparisons:    {}", summary.report.counters.comparisons);
    let _ = writeln!(out, "array accesses: {}", summary.report.counters.array_accesses);
    let _ = writeln!(out, "verified:       {}", summary.report.verified);
    out
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{render_path, render_sort, run_path, run_sort, PathRequest, SortRequest};
    use crate::error::AppError;
    use crate::exec::Speed;
    use crate::model::{CellKind, Coord, Grid, Maze};
    use crate::pathfinding::Algorithm;
    use crate::sorting::SortAlgorithm;

    fn request(grid: Grid) -> PathRequest {
        PathRequest {
            algorithm: Algorithm::Dijkstra,
            grid,
            start: None,
            end: None,
            walls: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    fn sort_request(values: Option<Vec<u32>>) -> SortRequest {
        SortRequest {
            algorithm: SortAlgorithm::Bubble,
            values,
            len: 12,
            seed: Some(9),
            speed: Speed::Instant,
            base_delay: Duration::from_millis(100),
        }
    }

    #[test]
    fn endpoints_default_to_opposite_corners() {
        let grid = request(Grid::new(3, 4)).prepare().expect("valid request");
        assert_eq!(grid.find(CellKind::Start), Some(Coord::new(0, 0)));
        assert_eq!(grid.find(CellKind::End), Some(Coord::new(3, 2)));
    }

    #[test]
    fn explicit_endpoints_replace_the_maze_ones() {
        let mut req = request(Maze::Spiral.grid());
        req.start = Some(Coord::new(9, 1));
        let grid = req.prepare().expect("valid request");

        assert_eq!(grid.count(CellKind::Start), 1);
        assert_eq!(grid.find(CellKind::Start), Some(Coord::new(9, 1)));
        assert_eq!(grid.find(CellKind::End), Maze::Spiral.grid().find(CellKind::End));
    }

    #[test]
    fn invalid_placements_are_rejected() {
        let mut req = request(Grid::new(2, 2));
        req.end = Some(Coord::new(2, 0));
        assert!(matches!(req.prepare(), Err(AppError::OutOfBounds { cols: 2, rows: 2, .. })));

        req.end = Some(Coord::new(0, 0));
        assert!(matches!(req.prepare(), Err(AppError::SameEndpoints(_))));

        req.end = None;
        req.walls = vec![Coord::new(1, 1)];
        assert!(matches!(req.prepare(), Err(AppError::WallOnEndpoint(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn open_grid_report_matches_the_optimal_path() {
        let report = run_path(&request(Grid::new(10, 20))).await.expect("search completes");

        assert!(report.success);
        assert_eq!(report.path_distance, 28);
        assert_eq!(report.path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(report.path.last(), Some(&Coord::new(19, 9)));
        assert_eq!(report.grid.len(), 10);
        assert!(render_path(&report).contains("path:      28"));
    }

    #[tokio::test(start_paused = true)]
    async fn walled_in_report_has_no_path() {
        let report = run_path(&request(Maze::WalledIn.grid())).await.expect("search completes");

        assert!(!report.success);
        assert_eq!(report.path_distance, -1);
        assert!(report.path.is_empty());
        assert!(render_path(&report).contains("path:      none"));
    }

    #[tokio::test(start_paused = true)]
    async fn sort_summary_reports_counters_and_verification() {
        let summary = run_sort(&sort_request(Some(vec![5, 3, 8, 1, 9, 2]))).await.expect("sort completes");

        assert_eq!(summary.report.values, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(summary.report.counters.comparisons, 15);
        assert!(summary.report.verified);
        assert!(render_sort(&summary).contains("sorted:         1 2 3 5 8 9"));

        let json = serde_json::to_value(&summary).expect("serializable");
        assert_eq!(json["algorithm"], "bubble");
        assert_eq!(json["counters"]["comparisons"], 15);
        assert_eq!(json["verified"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_sorts_draw_the_same_input() {
        let first = run_sort(&sort_request(None)).await.expect("sort completes");
        let second = run_sort(&sort_request(None)).await.expect("sort completes");

        assert_eq!(first.input.len(), 12);
        assert_eq!(first.input, second.input);
        assert!(first.report.values.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
