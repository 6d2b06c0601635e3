// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Two pages (pathfinding and sorting) rendered with ratatui over crossterm. The event loop runs
//! as a task on a single-threaded [`LocalSet`]; searches, sorts, and shuffles are spawned next to
//! it with `spawn_local` and mutate the session models between frames.

use std::{io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tokio::{task::LocalSet, time::Instant};

use crate::config::Settings;
use crate::error::AppError;
use crate::model::array::MAX_VALUE;
use crate::model::{format_elapsed, CellKind, Coord, PathStats, SortArray};
use crate::pathfinding::Algorithm;
use crate::session::{PathSession, PathState, Placement, SortSession, SortState};
use crate::sorting::SortAlgorithm;

mod theme;

use theme::TuiTheme;

include!("chrome.rs");

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
/// Redraw cadence; input is drained once per frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Runs the interactive terminal UI until the user quits.
pub fn run(settings: &Settings) -> Result<(), AppError> {
    let theme = TuiTheme::from_env().map_err(|err| AppError::Theme(err.to_string()))?;
    let path = PathSession::new(settings.rows, settings.cols, settings.step_delay());
    let sort = SortSession::new(
        settings.elements,
        settings.sort_speed()?,
        settings.sort_base_delay(),
        StdRng::from_entropy(),
    );
    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(path, sort, theme);
    tracing::info!(rows = settings.rows, cols = settings.cols, "tui started");
    let local = LocalSet::new();
    let result = local.block_on(&runtime, event_loop(&mut terminal, &mut app));
    tracing::info!("tui stopped");
    result.map_err(AppError::from)
}

async fn event_loop(terminal: &mut TerminalSession, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| draw(frame, app, now))?;

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
        tokio::time::sleep(FRAME_INTERVAL).await;
    }
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let (tabs_area, main_area, status_area) = (layout[0], layout[1], layout[2]);

    frame.render_widget(Paragraph::new(tabs_line(app.page, &app.theme)), tabs_area);
    match app.page {
        Page::Pathfinding => draw_pathfinding(frame, app, main_area, now),
        Page::Sorting => draw_sorting(frame, app, main_area),
    }
    frame.render_widget(Paragraph::new(footer_help_line(app, now)), status_area);

    if app.show_help {
        render_help(frame, main_area);
    }
}

fn split_info_panel(area: Rect) -> (Rect, Rect) {
    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);
    (panes[0], panes[1])
}

fn draw_pathfinding(frame: &mut Frame<'_>, app: &App, area: Rect, now: Instant) {
    let state = app.path.state();
    let algorithm = state.algorithm();
    let (grid_area, info_area) = split_info_panel(area);

    let size = format!("{}x{}", state.grid().cols(), state.grid().rows());
    let grid_block = Block::default()
        .borders(Borders::ALL)
        .title(view_title(algorithm.name(), 'r', Some(&size)))
        .border_style(Style::default().fg(FOCUS_COLOR));
    frame.render_widget(Paragraph::new(grid_text(&state, Some(app.cursor), &app.theme)).block(grid_block), grid_area);

    let info = vec![
        algorithm_title(algorithm.name(), algorithm.complexity()),
        Line::from(algorithm.description().to_owned()),
        path_stats_line(state.stats(), now),
    ];
    let info_block = Block::default().borders(Borders::ALL).title(view_title("Info", '?', None));
    frame.render_widget(Paragraph::new(info).block(info_block).wrap(Wrap { trim: true }), info_area);
}

fn draw_sorting(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.sort.state();
    let algorithm = state.algorithm();
    let (bars_area, info_area) = split_info_panel(area);

    let count = format!("{} elements", state.array().len());
    let bars_block = Block::default()
        .borders(Borders::ALL)
        .title(view_title(algorithm.name(), 's', Some(&count)))
        .border_style(Style::default().fg(FOCUS_COLOR));
    let inner = bars_block.inner(bars_area);
    let bars = bars_text(state.array(), usize::from(inner.width), usize::from(inner.height), &app.theme);
    frame.render_widget(Paragraph::new(bars).block(bars_block), bars_area);

    let info = vec![
        algorithm_title(algorithm.name(), algorithm.complexity()),
        Line::from(algorithm.description().to_owned()),
        sort_stats_line(&state, app.sort.is_paused()),
    ];
    let info_block = Block::default().borders(Borders::ALL).title(view_title("Info", '?', None));
    frame.render_widget(Paragraph::new(info).block(info_block).wrap(Wrap { trim: true }), info_area);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Pathfinding,
    Sorting,
}

impl Page {
    const ALL: [Page; 2] = [Page::Pathfinding, Page::Sorting];

    fn label(self) -> &'static str {
        match self {
            Self::Pathfinding => "Pathfinding",
            Self::Sorting => "Sorting",
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Pathfinding => Self::Sorting,
            Self::Sorting => Self::Pathfinding,
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    page: Page,
    path: PathSession,
    sort: SortSession,
    cursor: Coord,
    theme: TuiTheme,
    show_help: bool,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(path: PathSession, sort: SortSession, theme: TuiTheme) -> Self {
        Self {
            page: Page::Pathfinding,
            path,
            sort,
            cursor: Coord::new(0, 0),
            theme,
            show_help: false,
            toast: None,
            should_quit: false,
        }
    }

    fn tick(&mut self, now: Instant) {
        self.path.expire_notice(now);
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.toast = None;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let interrupt = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if interrupt || self.handle_key_code(key.code) {
            self.quit();
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if code == KeyCode::Char('q') {
            return true;
        }
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return false;
        }

        match code {
            KeyCode::Tab | KeyCode::BackTab => self.switch_page(),
            KeyCode::Char('?') => self.show_help = true,
            _ => match self.page {
                Page::Pathfinding => self.handle_path_key(code),
                Page::Sorting => self.handle_sort_key(code),
            },
        }
        false
    }

    fn handle_path_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => self.click_cursor(),
            KeyCode::Char(ch @ '1'..='4') => {
                if let Some(&algorithm) = Algorithm::ALL.get(digit_index(ch)) {
                    self.path.select_algorithm(algorithm);
                    self.set_toast(format!("{} selected", algorithm.name()));
                }
            }
            KeyCode::Char('r') => self.start_search(),
            KeyCode::Char('x') => {
                if self.path.stop() {
                    self.set_toast("Search stopped");
                }
            }
            KeyCode::Char('e') => self.path.reset(),
            KeyCode::Char('c') => self.path.clear(),
            KeyCode::Esc => {
                self.path.dismiss_notice();
                self.toast = None;
            }
            _ => {}
        }
    }

    fn handle_sort_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(ch @ '1'..='4') => {
                if let Some(&algorithm) = SortAlgorithm::ALL.get(digit_index(ch)) {
                    self.sort.select_algorithm(algorithm);
                    self.set_toast(format!("{} selected", algorithm.name()));
                }
            }
            KeyCode::Char('s') => self.start_sort(),
            KeyCode::Char('p') => match self.sort.toggle_pause() {
                Some(true) => self.set_toast("Paused"),
                Some(false) => self.set_toast("Resumed"),
                None => {}
            },
            KeyCode::Char('n') => self.start_shuffle(),
            KeyCode::Char('[') => self.resize_array(false),
            KeyCode::Char(']') => self.resize_array(true),
            KeyCode::Char('-') => {
                self.sort.slower();
                self.speed_toast();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.sort.faster();
                self.speed_toast();
            }
            KeyCode::Char('x') => self.sort.stop(),
            KeyCode::Esc => self.toast = None,
            _ => {}
        }
    }

    fn switch_page(&mut self) {
        match self.page {
            Page::Pathfinding => {
                self.path.stop();
            }
            Page::Sorting => self.sort.stop(),
        }
        self.page = self.page.other();
    }

    fn quit(&mut self) {
        self.path.stop();
        self.sort.stop();
        self.should_quit = true;
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let (cols, rows) = {
            let state = self.path.state();
            (state.grid().cols(), state.grid().rows())
        };
        let x = self.cursor.x.saturating_add_signed(dx).min(cols.saturating_sub(1));
        let y = self.cursor.y.saturating_add_signed(dy).min(rows.saturating_sub(1));
        self.cursor = Coord::new(x, y);
    }

    fn click_cursor(&mut self) {
        match self.path.click(self.cursor) {
            Placement::Rejected => self.set_toast("Stop the search before editing the grid"),
            Placement::Selected(kind) => {
                self.set_toast(format!("Moving {}: press Space on a free cell", endpoint_label(kind)));
            }
            _ => {}
        }
    }

    fn start_search(&mut self) {
        match self.path.start() {
            Some(search) => {
                tokio::task::spawn_local(search);
            }
            None => self.set_toast("Place a start and an end first"),
        }
    }

    fn start_sort(&mut self) {
        if let Some(sort) = self.sort.start() {
            tokio::task::spawn_local(sort);
        }
    }

    fn start_shuffle(&mut self) {
        if let Some(shuffle) = self.sort.shuffle() {
            tokio::task::spawn_local(shuffle);
        }
    }

    fn resize_array(&mut self, up: bool) {
        if self.sort.cycle_element_count(up) {
            let count = self.sort.state().element_count();
            self.set_toast(format!("{count} elements"));
        }
    }

    fn speed_toast(&mut self) {
        let speed = self.sort.state().speed();
        self.set_toast(format!("Speed {speed}"));
    }

    fn path_notice_message(&self) -> Option<String> {
        self.path.state().notice().map(|notice| notice.message.clone())
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }
}

fn digit_index(ch: char) -> usize {
    (ch as usize).saturating_sub('1' as usize)
}

fn endpoint_label(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Start => "start",
        _ => "end",
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.hide_cursor().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
pub(crate) mod testing {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::text::Line;
    use tokio::time::Instant;

    use super::{footer_help_line, theme::TuiTheme, App, Page};
    use crate::model::Coord;
    use crate::session::{PathSession, SortSession};

    pub(crate) struct HeadlessTui {
        app: App,
    }

    impl HeadlessTui {
        pub(crate) fn new(path: PathSession, sort: SortSession) -> Self {
            Self { app: App::new(path, sort, TuiTheme::default()) }
        }

        pub(crate) fn press(&mut self, code: KeyCode) -> bool {
            self.app.handle_key_code(code)
        }

        pub(crate) fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
            self.app.handle_key(KeyEvent::new(code, modifiers));
        }

        pub(crate) fn tick(&mut self) {
            self.app.tick(Instant::now());
        }

        pub(crate) fn is_sorting_page(&self) -> bool {
            self.app.page == Page::Sorting
        }

        pub(crate) fn should_quit(&self) -> bool {
            self.app.should_quit
        }

        pub(crate) fn show_help(&self) -> bool {
            self.app.show_help
        }

        pub(crate) fn cursor(&self) -> Coord {
            self.app.cursor
        }

        pub(crate) fn toast(&self) -> Option<&str> {
            self.app.toast.as_ref().map(|toast| toast.message.as_str())
        }

        pub(crate) fn footer(&self) -> Line<'static> {
            footer_help_line(&self.app, Instant::now())
        }

        pub(crate) fn path(&self) -> &PathSession {
            &self.app.path
        }

        pub(crate) fn sort(&self) -> &SortSession {
            &self.app.sort
        }
    }
}
