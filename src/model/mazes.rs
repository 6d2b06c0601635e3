// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in grid layouts for the headless runner, benches and tests.

use super::grid::Grid;

/// A single corridor winding inwards from the top-left start to the centre end.
pub const SPIRAL: &str = "
###########
#S........#
#########.#
#.......#.#
#.#####.#.#
#.#E..#.#.#
#.#.###.#.#
#.#.....#.#
#.#######.#
#.........#
###########
";

/// The start is sealed off from the end by walls.
pub const WALLED_IN: &str = "
.#........
S#........
##........
.........E
";

/// Open field with a few barriers; every algorithm finds a path.
pub const BARRIERS: &str = "
....................
..S......#..........
.........#..........
.........#....#.....
..######.#....#.....
.........#....#.....
..............#..E..
..............#.....
....................
....................
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maze {
    Spiral,
    WalledIn,
    Barriers,
}

impl Maze {
    pub const ALL: [Maze; 3] = [Maze::Spiral, Maze::WalledIn, Maze::Barriers];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Spiral => "spiral",
            Self::WalledIn => "walled-in",
            Self::Barriers => "barriers",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|maze| maze.slug() == slug)
    }

    pub fn layout(self) -> &'static str {
        match self {
            Self::Spiral => SPIRAL,
            Self::WalledIn => WALLED_IN,
            Self::Barriers => BARRIERS,
        }
    }

    pub fn grid(self) -> Grid {
        match Grid::from_ascii(self.layout()) {
            Ok(grid) => grid,
            Err(err) => unreachable!("built-in maze {} is malformed: {err}", self.slug()),
        }
    }
}
