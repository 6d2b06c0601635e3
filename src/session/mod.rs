// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interactive sessions: the state a front end renders, and the runs it starts.
//!
//! A session owns its model behind `Rc<RefCell<_>>`. Starting a run cancels the previous run's
//! flag, mints a fresh one, and returns a `'static` future for the caller to drive (usually with
//! `tokio::task::spawn_local`). The future's callbacks borrow the model only for the duration of
//! one synchronous update.

use std::time::Duration;

use tokio::time::Instant;

mod editor;
mod path;
mod sort;

pub use editor::{GridEditor, Placement};
pub use path::{PathSession, PathState, NO_PATH_MESSAGE};
pub use sort::{SortSession, SortState, SHUFFLE_STEPS};

pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// A transient, dismissible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self { message: message.into(), expires_at: now + NOTICE_TTL }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
