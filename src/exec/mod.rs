// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cooperative execution control.
//!
//! Algorithms run as one long async task that suspends at every visible step. The caller keeps
//! clones of the shared flags and flips them from the UI loop; the algorithm observes the change
//! at its next check. Cancellation is never preemptive.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Poll interval while a sorting run is paused.
pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Pathfinding step delay.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(30);
/// Sorting delay at 1x speed.
pub const BASE_SORT_DELAY: Duration = Duration::from_millis(100);

/// The run observed cancellation and stopped without finalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("run aborted")]
pub struct Aborted;

/// Shared cancellation token.
///
/// Every run gets its own flag. Cancelling a flag is permanent, so a stale task from a previous
/// run can never be revived by the next run starting.
#[derive(Debug, Clone)]
pub struct RunFlag(Arc<AtomicBool>);

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RunFlag {
    /// A flag in the running state.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A flag that is already cancelled.
    pub fn idle() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Returns whether this call transitioned the flag.
    pub fn cancel(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn ensure_running(&self) -> Result<(), Aborted> {
        if self.is_running() {
            Ok(())
        } else {
            Err(Aborted)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PauseFlag(Arc<AtomicBool>);

impl PauseFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self, paused: bool) {
        self.0.store(paused, Ordering::SeqCst);
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::SeqCst)
    }
}

/// Per-step delay, adjustable while a run is in flight.
#[derive(Debug, Clone)]
pub struct StepDelay(Arc<AtomicU64>);

impl Default for StepDelay {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

impl StepDelay {
    pub fn new(delay: Duration) -> Self {
        Self(Arc::new(AtomicU64::new(duration_micros(delay))))
    }

    pub fn get(&self) -> Duration {
        Duration::from_micros(self.0.load(Ordering::SeqCst))
    }

    pub fn set(&self, delay: Duration) {
        self.0.store(duration_micros(delay), Ordering::SeqCst);
    }
}

fn duration_micros(delay: Duration) -> u64 {
    u64::try_from(delay.as_micros()).unwrap_or(u64::MAX)
}

/// Sorting speed multipliers offered by the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Fast,
    Instant,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Half, Speed::Normal, Speed::Fast, Speed::Instant];

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::Fast => 4.0,
            Self::Instant => 100.0,
        }
    }

    pub fn from_multiplier(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|speed| (speed.multiplier() - value).abs() < f64::EPSILON)
    }

    /// `base / multiplier`.
    pub fn delay(self, base: Duration) -> Duration {
        match self {
            Self::Half => base * 2,
            Self::Normal => base,
            Self::Fast => base / 4,
            Self::Instant => base / 100,
        }
    }

    pub fn faster(self) -> Self {
        match self {
            Self::Half => Self::Normal,
            Self::Normal => Self::Fast,
            Self::Fast | Self::Instant => Self::Instant,
        }
    }

    pub fn slower(self) -> Self {
        match self {
            Self::Instant => Self::Fast,
            Self::Fast => Self::Normal,
            Self::Normal | Self::Half => Self::Half,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}

/// The flags and delay one run observes.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    running: RunFlag,
    paused: PauseFlag,
    delay: StepDelay,
}

impl Controller {
    pub fn new(running: RunFlag, paused: PauseFlag, delay: StepDelay) -> Self {
        Self { running, paused, delay }
    }

    /// A running controller with the given step delay and its own pause flag.
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(RunFlag::new(), PauseFlag::new(), StepDelay::new(delay))
    }

    pub fn running(&self) -> &RunFlag {
        &self.running
    }

    pub fn paused(&self) -> &PauseFlag {
        &self.paused
    }

    pub fn delay(&self) -> &StepDelay {
        &self.delay
    }

    pub fn ensure_running(&self) -> Result<(), Aborted> {
        self.running.ensure_running()
    }

    /// Suspends for `duration`, then re-checks cancellation.
    ///
    /// A zero duration still yields to the scheduler so the UI loop keeps getting turns.
    pub async fn sleep_checked(&self, duration: Duration) -> Result<(), Aborted> {
        if duration.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(duration).await;
        }
        self.ensure_running()
    }

    /// One node visitation step.
    pub async fn visit_pause(&self) -> Result<(), Aborted> {
        self.sleep_checked(self.delay.get()).await
    }

    /// One path animation step, twice as fast as a visitation.
    pub async fn trace_pause(&self) -> Result<(), Aborted> {
        self.sleep_checked(self.delay.get() / 2).await
    }

    /// One sorting step: fails fast when cancelled, holds while paused, then waits one delay.
    pub async fn stop_and_pause(&self) -> Result<(), Aborted> {
        self.pause_checked(self.delay.get()).await
    }

    /// Like [`Controller::stop_and_pause`] with a fixed wait instead of the step delay.
    pub async fn pause_checked(&self, duration: Duration) -> Result<(), Aborted> {
        self.ensure_running()?;
        while self.paused.is_paused() {
            tokio::time::sleep(PAUSE_POLL_INTERVAL).await;
            self.ensure_running()?;
        }
        self.sleep_checked(duration).await
    }
}
