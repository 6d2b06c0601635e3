// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{CellKind, Coord, Grid};

/// What a click did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// An endpoint was picked up for a move.
    Selected(CellKind),
    Moved { kind: CellKind, from: Coord, to: Coord },
    /// The picked-up endpoint was clicked again.
    Deselected,
    Placed(CellKind),
    Toggled(CellKind),
    Unchanged,
    Rejected,
}

/// Click-to-select endpoint placement and wall toggling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridEditor {
    selected: Option<Coord>,
}

impl GridEditor {
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn click(&mut self, grid: &mut Grid, at: Coord) -> Placement {
        let Some(kind) = grid.kind(at) else {
            return Placement::Rejected;
        };

        if let Some(from) = self.selected {
            match grid.kind(from) {
                Some(moving) if moving.is_endpoint() => {
                    if from == at {
                        self.selected = None;
                        return Placement::Deselected;
                    }
                    if !kind.accepts_endpoint() {
                        return Placement::Rejected;
                    }
                    grid.set_kind(from, CellKind::Empty);
                    grid.set_kind(at, moving);
                    self.selected = None;
                    return Placement::Moved { kind: moving, from, to: at };
                }
                // the endpoint went away underneath us; treat this as a fresh click
                _ => self.selected = None,
            }
        }

        if kind.is_endpoint() {
            self.selected = Some(at);
            return Placement::Selected(kind);
        }

        let placeable = matches!(kind, CellKind::Empty | CellKind::Wall);
        for endpoint in [CellKind::Start, CellKind::End] {
            if grid.find(endpoint).is_none() {
                if !placeable {
                    return Placement::Unchanged;
                }
                grid.set_kind(at, endpoint);
                return Placement::Placed(endpoint);
            }
        }

        let toggled = match kind {
            CellKind::Wall => CellKind::Empty,
            CellKind::Empty => CellKind::Wall,
            _ => return Placement::Unchanged,
        };
        grid.set_kind(at, toggled);
        Placement::Toggled(toggled)
    }
}
