// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! The cell grid searched by the pathfinding algorithms, the render-facing array mutated by the
//! sorting algorithms, and the counters both report.

pub mod array;
pub mod grid;
pub mod mazes;
pub mod stats;

pub use array::{ArrayElement, ElementStatus, SortArray};
pub use grid::{heuristic, Cell, CellKind, Coord, Grid, GridParseError, ParseCoordError};
pub use mazes::Maze;
pub use stats::{format_elapsed, PathStats, SortCounters};
