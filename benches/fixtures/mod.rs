// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use algoscope::model::{CellKind, Coord, ElementStatus, Grid, Maze, SortCounters};
use algoscope::pathfinding::SearchView;
use algoscope::sorting::SortView;

pub mod grid {
    use super::{CellKind, Coord, Grid, Maze};

    #[derive(Debug, Clone, Copy)]
    pub enum Case {
        Open,
        Spiral,
        Barriers,
        LargeScattered,
    }

    pub fn fixture(case: Case) -> Grid {
        match case {
            Case::Open => corners(Grid::new(10, 20)),
            Case::Spiral => Maze::Spiral.grid(),
            Case::Barriers => Maze::Barriers.grid(),
            Case::LargeScattered => scattered(60, 100),
        }
    }

    fn corners(mut grid: Grid) -> Grid {
        let (cols, rows) = (grid.cols(), grid.rows());
        grid.set_kind(Coord::new(0, 0), CellKind::Start);
        grid.set_kind(Coord::new(cols - 1, rows - 1), CellKind::End);
        grid
    }

    /// Walls on a fixed modular pattern that always leaves the border open.
    fn scattered(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for y in 1..rows - 1 {
            for x in 1..cols - 1 {
                if (x * 7 + y * 13) % 5 == 0 {
                    grid.set_kind(Coord::new(x, y), CellKind::Wall);
                }
            }
        }
        corners(grid)
    }
}

pub mod array {
    #[derive(Debug, Clone, Copy)]
    pub enum Case {
        Reversed,
        Sawtooth,
        FewUnique,
    }

    pub fn fixture(case: Case, len: u32) -> Vec<u32> {
        match case {
            Case::Reversed => (0..len).rev().map(|i| 10 + i * 6).collect(),
            Case::Sawtooth => (0..len).map(|i| 10 + (i * 37) % 300).collect(),
            Case::FewUnique => (0..len).map(|i| 10 + (i % 4) * 75).collect(),
        }
    }
}

/// Discards every callback; the bench measures the algorithms alone.
#[derive(Debug, Default)]
pub struct NullView {
    pub events: u64,
}

impl SearchView for NullView {
    fn visit(&mut self, _cell: Coord) {
        self.events += 1;
    }

    fn trace(&mut self, _cell: Coord, _progress: f64) {
        self.events += 1;
    }

    fn visited_count(&mut self, _count: usize) {}

    fn stop_timer(&mut self) {}

    fn path_distance(&mut self, _distance: i64) {}
}

impl SortView for NullView {
    fn update(&mut self, _index: usize, _status: ElementStatus, _value: Option<u32>) {
        self.events += 1;
    }

    fn swap(&mut self, _i: usize, _j: usize) {
        self.events += 1;
    }

    fn counters(&mut self, _counters: &SortCounters) {}
}
