// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! "Play a tone" capability.
//!
//! Audio is a process-wide resource acquired on first use. Any failure (no terminal to ring, a
//! write error) is logged once and the process continues silently; sound never aborts a run.

use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::model::Coord;

const BELL_MIN_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f64,
    pub duration: Duration,
    /// 0..=100.
    pub intensity: f64,
}

impl Tone {
    pub fn new(frequency: f64, duration: Duration, intensity: f64) -> Self {
        Self { frequency, duration, intensity: intensity.clamp(0.0, 100.0) }
    }

    /// Maps a bar height (or any small magnitude) onto the 400..1200 Hz band.
    pub fn for_height(height: f64, intensity: f64) -> Self {
        Self::new(400.0 + (height / 310.0) * 800.0, Duration::from_millis(100), intensity)
    }

    /// Visitation tone; the closer the cell is to the goal, the higher the pitch.
    pub fn for_visit(cell: Coord, end: Option<Coord>, rows: usize, cols: usize) -> Self {
        let distance = end.map_or(0.0, |end| {
            let dx = cell.x as f64 - end.x as f64;
            let dy = cell.y as f64 - end.y as f64;
            (dx * dx + dy * dy).sqrt()
        });
        let max_distance = ((cols * cols + rows * rows) as f64).sqrt().max(1.0);
        Self::for_height((1.0 - distance / max_distance) * 40.0, 75.0)
    }

    /// Path animation tone, rising from 220 Hz to 880 Hz with `progress` in 0..=1.
    pub fn for_trace(progress: f64) -> Self {
        Self::new(220.0 + progress.clamp(0.0, 1.0) * 660.0, Duration::from_millis(50), 50.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AudioMode {
    Muted,
    /// Emit tones as `trace` log events.
    #[default]
    Trace,
    /// Ring the terminal bell, rate limited.
    Bell,
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("stdout is not a terminal; the bell backend needs one")]
    NoTerminal,
    #[error("audio output failed: {0}")]
    Io(#[from] io::Error),
}

pub trait ToneBackend: Send {
    fn name(&self) -> &'static str;
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError>;
}

struct TraceBackend;

impl ToneBackend for TraceBackend {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
        tracing::trace!(
            frequency = tone.frequency,
            duration_ms = tone.duration.as_millis() as u64,
            intensity = tone.intensity,
            "tone"
        );
        Ok(())
    }
}

struct BellBackend {
    last_ring: Option<Instant>,
}

impl BellBackend {
    fn open() -> Result<Self, AudioError> {
        if !io::stdout().is_terminal() {
            return Err(AudioError::NoTerminal);
        }
        Ok(Self { last_ring: None })
    }
}

impl ToneBackend for BellBackend {
    fn name(&self) -> &'static str {
        "bell"
    }

    fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
        if tone.intensity <= 0.0 {
            return Ok(());
        }
        let now = Instant::now();
        if self.last_ring.is_some_and(|last| now.duration_since(last) < BELL_MIN_INTERVAL) {
            return Ok(());
        }
        self.last_ring = Some(now);
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

/// An acquired (or degraded) audio output.
pub struct Audio {
    backend: Option<Box<dyn ToneBackend>>,
}

impl Audio {
    pub fn acquire(mode: AudioMode) -> Self {
        let backend: Result<Option<Box<dyn ToneBackend>>, AudioError> = match mode {
            AudioMode::Muted => Ok(None),
            AudioMode::Trace => Ok(Some(Box::new(TraceBackend))),
            AudioMode::Bell => BellBackend::open().map(|b| Some(Box::new(b) as Box<dyn ToneBackend>)),
        };
        match backend {
            Ok(backend) => {
                if let Some(backend) = &backend {
                    tracing::debug!(backend = backend.name(), "audio acquired");
                }
                Self { backend }
            }
            Err(err) => {
                tracing::warn!(%err, "audio unavailable, continuing without sound");
                Self { backend: None }
            }
        }
    }

    pub fn with_backend(backend: Box<dyn ToneBackend>) -> Self {
        Self { backend: Some(backend) }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Plays a tone; a failing backend is dropped after logging.
    pub fn play(&mut self, tone: &Tone) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if let Err(err) = backend.play(tone) {
            tracing::warn!(backend = backend.name(), %err, "audio failed, muting");
            self.backend = None;
        }
    }
}

static REQUESTED_MODE: OnceLock<AudioMode> = OnceLock::new();
static AUDIO: OnceLock<Mutex<Audio>> = OnceLock::new();

/// Selects the backend used on first playback. Returns `false` if a mode was already chosen.
pub fn configure(mode: AudioMode) -> bool {
    REQUESTED_MODE.set(mode).is_ok()
}

pub fn play(tone: Tone) {
    let audio = AUDIO.get_or_init(|| {
        Mutex::new(Audio::acquire(REQUESTED_MODE.get().copied().unwrap_or_default()))
    });
    match audio.lock() {
        Ok(mut audio) => audio.play(&tone),
        Err(poisoned) => poisoned.into_inner().play(&tone),
    }
}
