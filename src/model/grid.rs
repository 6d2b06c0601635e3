// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 20;

/// Grid position; `x` is the column, `y` the row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate `{0}` (expected `x,y`)")]
pub struct ParseCoordError(String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or_else(|| ParseCoordError(s.to_owned()))?;
        let x = x.trim().parse().map_err(|_| ParseCoordError(s.to_owned()))?;
        let y = y.trim().parse().map_err(|_| ParseCoordError(s.to_owned()))?;
        Ok(Self { x, y })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Visited,
    Path,
}

impl CellKind {
    pub fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Kinds an endpoint may be moved onto.
    pub fn accepts_endpoint(self) -> bool {
        matches!(self, Self::Empty | Self::Visited | Self::Path)
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }

    fn from_glyph(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Empty,
            '#' => Self::Wall,
            'S' => Self::Start,
            'E' => Self::End,
            'o' => Self::Visited,
            '*' => Self::Path,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub kind: CellKind,
}

impl Cell {
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged { row: usize, found: usize, expected: usize },
    #[error("unknown cell glyph {glyph:?} at {x},{y}")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
    #[error("more than one {0:?} cell")]
    DuplicateEndpoint(CellKind),
}

/// Row-major cell grid with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| Cell { x, y, kind: CellKind::Empty }))
            .collect();
        Self { rows, cols, cells }
    }

    /// Parses the glyph layout produced by [`Grid::to_ascii`]; blank lines are ignored.
    pub fn from_ascii(layout: &str) -> Result<Self, GridParseError> {
        let lines: Vec<&str> =
            layout.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        let Some(first) = lines.first() else {
            return Err(GridParseError::Empty);
        };
        let cols = first.chars().count();
        let mut grid = Self::new(lines.len(), cols);

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridParseError::Ragged { row: y, found, expected: cols });
            }
            for (x, glyph) in line.chars().enumerate() {
                let kind = CellKind::from_glyph(glyph)
                    .ok_or(GridParseError::UnknownGlyph { glyph, x, y })?;
                if kind.is_endpoint() && grid.find(kind).is_some() {
                    return Err(GridParseError::DuplicateEndpoint(kind));
                }
                grid.set_kind(Coord::new(x, y), kind);
            }
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.y * self.cols + coord.x)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|idx| &self.cells[idx])
    }

    pub fn kind(&self, coord: Coord) -> Option<CellKind> {
        self.cell(coord).map(|cell| cell.kind)
    }

    /// Re-types one cell. Returns `false` when `coord` is out of bounds.
    pub fn set_kind(&mut self, coord: Coord, kind: CellKind) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx].kind = kind;
                true
            }
            None => false,
        }
    }

    /// Paints a visited/path overlay; start and end cells are never overwritten.
    pub fn mark(&mut self, coord: Coord, kind: CellKind) -> bool {
        match self.index(coord) {
            Some(idx) if !self.cells[idx].kind.is_endpoint() => {
                self.cells[idx].kind = kind;
                true
            }
            _ => false,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.cols..(y + 1) * self.cols]
    }

    pub fn find(&self, kind: CellKind) -> Option<Coord> {
        self.cells.iter().find(|cell| cell.kind == kind).map(Cell::coord)
    }

    /// In-bounds, non-wall neighbours in the fixed order up, down, left, right.
    ///
    /// The order is the tie-break for every search that walks it sequentially.
    pub fn neighbors(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        let candidates = [
            coord.y.checked_sub(1).map(|y| Coord::new(coord.x, y)),
            Some(Coord::new(coord.x, coord.y + 1)),
            coord.x.checked_sub(1).map(|x| Coord::new(x, coord.y)),
            Some(Coord::new(coord.x + 1, coord.y)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter(|next| matches!(self.kind(*next), Some(kind) if kind != CellKind::Wall))
            .collect()
    }

    /// Copy of this grid with every visited/path overlay turned back into empty cells.
    pub fn reset_path_and_visited(&self) -> Self {
        let mut grid = self.clone();
        grid.clear_overlay();
        grid
    }

    pub fn clear_overlay(&mut self) {
        for cell in &mut self.cells {
            if matches!(cell.kind, CellKind::Visited | CellKind::Path) {
                cell.kind = CellKind::Empty;
            }
        }
    }

    pub fn has_visited_or_path(&self) -> bool {
        self.cells.iter().any(|cell| matches!(cell.kind, CellKind::Visited | CellKind::Path))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }

    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for y in 0..self.rows {
            out.extend(self.row(y).iter().map(|cell| cell.kind.glyph()));
            out.push('\n');
        }
        out
    }
}

/// Manhattan distance; admissible on a 4-connected unit-cost grid.
pub fn heuristic(a: Coord, b: Coord) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{heuristic, Cell, CellKind, Coord, Grid, GridParseError};

    #[test]
    fn new_grid_is_empty_and_positions_match() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 20);
        assert_eq!(grid.count(CellKind::Empty), 200);
        for (idx, cell) in grid.cells().enumerate() {
            assert_eq!(cell.coord(), Coord::new(idx % 20, idx / 20));
        }
    }

    #[test]
    fn interior_neighbors_follow_up_down_left_right() {
        let grid = Grid::new(5, 5);
        let neighbors = grid.neighbors(Coord::new(2, 2));
        assert_eq!(
            neighbors.as_slice(),
            &[Coord::new(2, 1), Coord::new(2, 3), Coord::new(1, 2), Coord::new(3, 2)]
        );
    }

    #[rstest]
    #[case(Coord::new(0, 0), vec![Coord::new(0, 1), Coord::new(1, 0)])]
    #[case(Coord::new(4, 4), vec![Coord::new(4, 3), Coord::new(3, 4)])]
    #[case(Coord::new(2, 0), vec![Coord::new(2, 1), Coord::new(1, 0), Coord::new(3, 0)])]
    fn boundary_neighbors_are_clipped(#[case] at: Coord, #[case] expected: Vec<Coord>) {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.neighbors(at).to_vec(), expected);
    }

    #[test]
    fn walls_are_not_neighbors() {
        let mut grid = Grid::new(3, 3);
        grid.set_kind(Coord::new(1, 0), CellKind::Wall);
        grid.set_kind(Coord::new(0, 1), CellKind::Wall);
        let neighbors = grid.neighbors(Coord::new(1, 1));
        assert_eq!(neighbors.as_slice(), &[Coord::new(1, 2), Coord::new(2, 1)]);
    }

    #[rstest]
    #[case(Coord::new(0, 0), Coord::new(19, 9), 28)]
    #[case(Coord::new(3, 7), Coord::new(3, 7), 0)]
    #[case(Coord::new(5, 1), Coord::new(2, 4), 6)]
    fn heuristic_is_symmetric_manhattan(#[case] a: Coord, #[case] b: Coord, #[case] d: usize) {
        assert_eq!(heuristic(a, b), d);
        assert_eq!(heuristic(b, a), d);
        assert_eq!(heuristic(a, b) == 0, a == b);
    }

    #[test]
    fn reset_only_clears_overlay() {
        let grid = Grid::from_ascii(
            "S.o*
             #o*E",
        )
        .expect("grid");
        let reset = grid.reset_path_and_visited();
        assert_eq!(reset.to_ascii(), "S...\n#..E\n");
        assert!(grid.has_visited_or_path());
        assert!(!reset.has_visited_or_path());
    }

    #[test]
    fn overlay_never_overwrites_endpoints() {
        let mut grid = Grid::from_ascii("S.E").expect("grid");
        assert!(!grid.mark(Coord::new(0, 0), CellKind::Visited));
        assert!(grid.mark(Coord::new(1, 0), CellKind::Path));
        assert!(!grid.mark(Coord::new(2, 0), CellKind::Path));
        assert!(!grid.mark(Coord::new(9, 0), CellKind::Path));
        assert_eq!(grid.to_ascii(), "S*E\n");
    }

    #[test]
    fn ascii_round_trip_keeps_layout() {
        let layout = "S..#\n.#..\n...E\n";
        let grid = Grid::from_ascii(layout).expect("grid");
        assert_eq!(grid.to_ascii(), layout);
        assert_eq!(grid.find(CellKind::Start), Some(Coord::new(0, 0)));
        assert_eq!(grid.find(CellKind::End), Some(Coord::new(3, 2)));
        assert_eq!(
            grid.cell(Coord::new(3, 0)),
            Some(&Cell { x: 3, y: 0, kind: CellKind::Wall })
        );
    }

    #[test]
    fn ascii_rejects_ragged_rows_and_duplicate_endpoints() {
        assert_eq!(
            Grid::from_ascii("...\n..").unwrap_err(),
            GridParseError::Ragged { row: 1, found: 2, expected: 3 }
        );
        assert_eq!(
            Grid::from_ascii("S.S").unwrap_err(),
            GridParseError::DuplicateEndpoint(CellKind::Start)
        );
        assert_eq!(Grid::from_ascii("\n\n").unwrap_err(), GridParseError::Empty);
        assert!(matches!(
            Grid::from_ascii("..x").unwrap_err(),
            GridParseError::UnknownGlyph { glyph: 'x', x: 2, y: 0 }
        ));
    }

    #[test]
    fn coord_parses_from_cli_form() {
        assert_eq!("3,4".parse::<Coord>().expect("coord"), Coord::new(3, 4));
        assert_eq!(" 7 , 0 ".parse::<Coord>().expect("coord"), Coord::new(7, 0));
        assert!("3;4".parse::<Coord>().is_err());
        assert!("-1,2".parse::<Coord>().is_err());
    }
}
