// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

use crate::model::{CellKind, ElementStatus};

pub(crate) const PALETTE_ENV: &str = "ALGOSCOPE_PALETTE";

/// Colours for grid cells and bars, optionally overridden from `ALGOSCOPE_PALETTE`.
///
/// The override is a comma-separated list of `role=color` pairs, e.g.
/// `wall=#334155,visited=rgb:22/d3/ee`. Unlisted roles keep their default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TuiTheme {
    empty: Color,
    wall: Color,
    start: Color,
    end: Color,
    visited: Color,
    path: Color,
    bar: Color,
    comparing: Color,
    swap: Color,
    potential_swap: Color,
    sorted: Color,
}

impl Default for TuiTheme {
    fn default() -> Self {
        Self {
            empty: Color::Reset,
            wall: Color::DarkGray,
            start: Color::Green,
            end: Color::Red,
            visited: Color::Cyan,
            path: Color::Yellow,
            bar: Color::Blue,
            comparing: Color::Red,
            swap: Color::Yellow,
            potential_swap: Color::LightGreen,
            sorted: Color::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ThemeError {
    #[error("invalid env {name}: {reason}")]
    InvalidEnv { name: &'static str, reason: String },
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        match env::var(PALETTE_ENV) {
            Ok(value) => Self::default().with_overrides(&value).map_err(|reason| {
                ThemeError::InvalidEnv { name: PALETTE_ENV, reason }
            }),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ThemeError::InvalidEnv {
                name: PALETTE_ENV,
                reason: "value is not unicode".to_owned(),
            }),
        }
    }

    fn with_overrides(mut self, value: &str) -> Result<Self, String> {
        for pair in value.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (role, color) =
                pair.split_once('=').ok_or_else(|| format!("expected role=color, got `{pair}`"))?;
            let color = parse_color(color)?;
            let slot = match role.trim() {
                "empty" => &mut self.empty,
                "wall" => &mut self.wall,
                "start" => &mut self.start,
                "end" => &mut self.end,
                "visited" => &mut self.visited,
                "path" => &mut self.path,
                "bar" => &mut self.bar,
                "comparing" => &mut self.comparing,
                "swap" => &mut self.swap,
                "potential-swap" => &mut self.potential_swap,
                "sorted" => &mut self.sorted,
                other => return Err(format!("unknown role `{other}`")),
            };
            *slot = color;
        }
        Ok(self)
    }

    pub(crate) fn cell_style(&self, kind: CellKind) -> Style {
        let bg = match kind {
            CellKind::Empty => self.empty,
            CellKind::Wall => self.wall,
            CellKind::Start => self.start,
            CellKind::End => self.end,
            CellKind::Visited => self.visited,
            CellKind::Path => self.path,
        };
        Style::default().bg(bg)
    }

    pub(crate) fn bar_style(&self, status: ElementStatus) -> Style {
        let fg = match status {
            ElementStatus::Default => self.bar,
            ElementStatus::Comparing => self.comparing,
            ElementStatus::Swap => self.swap,
            ElementStatus::PotentialSwap => self.potential_swap,
            ElementStatus::Sorted => self.sorted,
        };
        Style::default().fg(fg)
    }

    pub(crate) fn cursor_style(&self, kind: CellKind) -> Style {
        self.cell_style(kind).add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// An endpoint picked up for a move blinks until dropped.
    pub(crate) fn selection_style(&self, kind: CellKind) -> Style {
        self.cell_style(kind).add_modifier(Modifier::SLOW_BLINK | Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn tab_style(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Black).bg(Color::LightGreen).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

fn parse_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let channels = rest
            .split('/')
            .map(|part| u8::from_str_radix(part, 16).map_err(|_| format!("invalid rgb: component `{part}`")))
            .collect::<Result<Vec<u8>, String>>()?;
        return match channels[..] {
            [r, g, b] => Ok(Color::Rgb(r, g, b)),
            _ => Err(format!("invalid rgb: value `{trimmed}`")),
        };
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid color `{trimmed}` (expected #RRGGBB or rgb:RR/GG/BB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid color `{trimmed}`"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::{parse_color, TuiTheme};
    use crate::model::{CellKind, ElementStatus};

    #[test]
    fn overrides_replace_only_named_roles() {
        let theme = TuiTheme::default()
            .with_overrides("wall=#112233, sorted=rgb:0a/0b/0c")
            .expect("valid overrides");

        assert_eq!(theme.cell_style(CellKind::Wall).bg, Some(Color::Rgb(0x11, 0x22, 0x33)));
        assert_eq!(theme.bar_style(ElementStatus::Sorted).fg, Some(Color::Rgb(10, 11, 12)));
        assert_eq!(theme.cell_style(CellKind::Path), TuiTheme::default().cell_style(CellKind::Path));
    }

    #[test]
    fn overrides_reject_unknown_roles_and_bad_colors() {
        assert!(TuiTheme::default().with_overrides("lava=#ff0000").unwrap_err().contains("lava"));
        assert!(TuiTheme::default().with_overrides("wall").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("rgb:ff/00").is_err());
    }
}
