// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layered settings: defaults, then an optional TOML file, then `ALGOSCOPE_*` environment
//! variables, then command-line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

use crate::exec::{Speed, BASE_SORT_DELAY, DEFAULT_STEP_DELAY};
use crate::model::array::{DEFAULT_ELEMENT_COUNT, ELEMENT_COUNTS};
use crate::model::grid::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::sound::AudioMode;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_FILE_NAME: &str = "algoscope.toml";

const GRID_MIN: usize = 2;
const GRID_MAX: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value `{value}` for {key}")]
    Env { key: &'static str, value: String },
    #[error("{field} must be between {min} and {max}, got {value}", min = GRID_MIN, max = GRID_MAX)]
    GridSize { field: &'static str, value: usize },
    #[error("element count must be one of 10, 20, 30, 40 or 50, got {0}")]
    ElementCount(usize),
    #[error("speed must be one of 0.5, 1, 4 or 100, got {0}")]
    Speed(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    pub step_delay_ms: u64,
    pub sort_base_delay_ms: u64,
    pub speed: f64,
    pub elements: usize,
    pub audio: AudioMode,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            step_delay_ms: millis(DEFAULT_STEP_DELAY),
            sort_base_delay_ms: millis(BASE_SORT_DELAY),
            speed: 1.0,
            elements: DEFAULT_ELEMENT_COUNT,
            audio: AudioMode::default(),
            log_file: None,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Values given on the command line; `None` keeps the lower layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub step_delay_ms: Option<u64>,
    pub speed: Option<f64>,
    pub elements: Option<usize>,
    pub audio: Option<AudioMode>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Resolves every layer and validates the result.
    pub fn resolve(config: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut settings = Self::load(config)?;
        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.apply_overrides(overrides);
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults merged with a config file. An explicit path must exist; the default file name is
    /// optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_FILE_NAME);
                if !path.is_file() {
                    return Ok(Self::default());
                }
                path
            }
        };
        let text = fs::read_to_string(&path)
            .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
        let settings = Self::parse(&text, &path)?;
        tracing::debug!(path = %path.display(), "config file loaded");
        Ok(settings)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Applies `ALGOSCOPE_*` variables through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        fn parsed<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
            value.trim().parse().map_err(|_| ConfigError::Env { key, value })
        }

        if let Some(value) = lookup("ALGOSCOPE_ROWS") {
            self.rows = parsed("ALGOSCOPE_ROWS", value)?;
        }
        if let Some(value) = lookup("ALGOSCOPE_COLS") {
            self.cols = parsed("ALGOSCOPE_COLS", value)?;
        }
        if let Some(value) = lookup("ALGOSCOPE_STEP_DELAY_MS") {
            self.step_delay_ms = parsed("ALGOSCOPE_STEP_DELAY_MS", value)?;
        }
        if let Some(value) = lookup("ALGOSCOPE_ELEMENTS") {
            self.elements = parsed("ALGOSCOPE_ELEMENTS", value)?;
        }
        if let Some(value) = lookup("ALGOSCOPE_SPEED") {
            self.speed = parsed("ALGOSCOPE_SPEED", value)?;
        }
        if let Some(value) = lookup("ALGOSCOPE_AUDIO") {
            self.audio = AudioMode::from_str(value.trim(), true)
                .map_err(|_| ConfigError::Env { key: "ALGOSCOPE_AUDIO", value })?;
        }
        if let Some(value) = lookup("ALGOSCOPE_LOG_FILE") {
            self.log_file = (!value.is_empty()).then(|| PathBuf::from(value));
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        let Overrides { rows, cols, step_delay_ms, speed, elements, audio, log_file } = overrides;
        self.rows = rows.unwrap_or(self.rows);
        self.cols = cols.unwrap_or(self.cols);
        self.step_delay_ms = step_delay_ms.unwrap_or(self.step_delay_ms);
        self.speed = speed.unwrap_or(self.speed);
        self.elements = elements.unwrap_or(self.elements);
        self.audio = audio.unwrap_or(self.audio);
        if log_file.is_some() {
            self.log_file.clone_from(log_file);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("rows", self.rows), ("cols", self.cols)] {
            if !(GRID_MIN..=GRID_MAX).contains(&value) {
                return Err(ConfigError::GridSize { field, value });
            }
        }
        if !ELEMENT_COUNTS.contains(&self.elements) {
            return Err(ConfigError::ElementCount(self.elements));
        }
        self.sort_speed()?;
        Ok(())
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn sort_base_delay(&self) -> Duration {
        Duration::from_millis(self.sort_base_delay_ms)
    }

    pub fn sort_speed(&self) -> Result<Speed, ConfigError> {
        Speed::from_multiplier(self.speed).ok_or(ConfigError::Speed(self.speed))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;
    use std::time::Duration;

    use rstest::rstest;

    use super::{ConfigError, Overrides, Settings};
    use crate::exec::Speed;
    use crate::sound::AudioMode;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().expect("defaults validate");
        assert_eq!((settings.rows, settings.cols), (10, 20));
        assert_eq!(settings.step_delay(), Duration::from_millis(30));
        assert_eq!(settings.sort_base_delay(), Duration::from_millis(100));
        assert_eq!(settings.sort_speed().ok(), Some(Speed::Normal));
        assert_eq!(settings.audio, AudioMode::Trace);
    }

    #[test]
    fn file_values_fill_in_over_defaults() {
        let settings = Settings::parse(
            "rows = 15\nstep-delay-ms = 5\naudio = \"muted\"\n",
            Path::new("algoscope.toml"),
        )
        .expect("valid toml");
        assert_eq!(settings.rows, 15);
        assert_eq!(settings.cols, 20);
        assert_eq!(settings.step_delay_ms, 5);
        assert_eq!(settings.audio, AudioMode::Muted);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::parse("colour = \"red\"\n", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config file x.toml"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("algoscope-config-that-does-not-exist.toml");
        assert!(matches!(Settings::load(Some(&path)), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn explicit_file_is_read() {
        let path = std::env::temp_dir().join(format!("algoscope-config-{}.toml", std::process::id()));
        std::fs::write(&path, "elements = 40\nspeed = 4.0\n").expect("write temp config");
        let settings = Settings::load(Some(&path));
        let _ = std::fs::remove_file(&path);

        let settings = settings.expect("config loads");
        assert_eq!(settings.elements, 40);
        assert_eq!(settings.sort_speed().ok(), Some(Speed::Fast));
    }

    #[test]
    fn env_then_flags_override_the_file() {
        let mut settings = Settings::parse("rows = 12\ncols = 30\n", Path::new("a.toml")).expect("valid");
        settings
            .apply_env(env(&[("ALGOSCOPE_ROWS", "20"), ("ALGOSCOPE_AUDIO", "Bell"), ("ALGOSCOPE_SPEED", "0.5")]))
            .expect("valid env");
        settings.apply_overrides(&Overrides { rows: Some(8), ..Overrides::default() });

        assert_eq!(settings.rows, 8);
        assert_eq!(settings.cols, 30);
        assert_eq!(settings.audio, AudioMode::Bell);
        assert_eq!(settings.sort_speed().ok(), Some(Speed::Half));
    }

    #[test]
    fn malformed_env_value_names_the_variable() {
        let mut settings = Settings::default();
        let err = settings.apply_env(env(&[("ALGOSCOPE_COLS", "wide")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value `wide` for ALGOSCOPE_COLS");
    }

    #[rstest]
    #[case(Overrides { rows: Some(1), ..Overrides::default() }, "rows must be between 2 and 100, got 1")]
    #[case(Overrides { cols: Some(101), ..Overrides::default() }, "cols must be between 2 and 100, got 101")]
    #[case(Overrides { elements: Some(35), ..Overrides::default() }, "element count must be one of 10, 20, 30, 40 or 50, got 35")]
    #[case(Overrides { speed: Some(2.0), ..Overrides::default() }, "speed must be one of 0.5, 1, 4 or 100, got 2")]
    fn validation_rejects_out_of_range_values(#[case] overrides: Overrides, #[case] message: &str) {
        let mut settings = Settings::default();
        settings.apply_overrides(&overrides);
        assert_eq!(settings.validate().unwrap_err().to_string(), message);
    }
}
