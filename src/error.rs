// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::model::{Coord, GridParseError};

/// Everything the binary can fail with. Cancellation is not an error here; it surfaces as
/// [`crate::pathfinding::Outcome::Aborted`] or [`crate::exec::Aborted`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridParseError),
    #[error("{coord} is outside the {cols}x{rows} grid")]
    OutOfBounds { coord: Coord, cols: usize, rows: usize },
    #[error("start and end must differ, both are {0}")]
    SameEndpoints(Coord),
    #[error("a wall at {0} would cover an endpoint")]
    WallOnEndpoint(Coord),
    #[error("the run was interrupted before it finished")]
    Interrupted,
    #[error("invalid palette: {0}")]
    Theme(String),
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
