// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Algoscope: animated pathfinding and sorting algorithms.
//!
//! The engine ([`model`], [`exec`], [`pathfinding`], [`sorting`]) is independent of any front end.
//! [`session`] wraps it in the interactive state a UI renders; [`tui`] and [`headless`] are the two
//! front ends the binary ships.

pub mod config;
pub mod error;
pub mod exec;
pub mod headless;
pub mod model;
pub mod pathfinding;
pub mod session;
pub mod sorting;
pub mod sound;
pub mod tui;
