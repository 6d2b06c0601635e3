// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Title, tab, footer, help, and cell/bar helpers used by TUI rendering.
fn view_title(label: &str, key: char, tail: Option<&str>) -> String {
    let mut title = format!("─[{key}]─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn tabs_line(active: Page, theme: &TuiTheme) -> Line<'static> {
    let mut spans = vec![Span::styled(" algoscope ".to_owned(), Style::default().fg(FOOTER_BRAND_COLOR))];
    for page in Page::ALL {
        spans.push(Span::raw(" ".to_owned()));
        spans.push(Span::styled(format!(" {} ", page.label()), theme.tab_style(page == active)));
    }
    spans.push(Span::styled("  Tab switches".to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
    Line::from(spans)
}

fn algorithm_title(name: &str, complexity: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(name.to_owned(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  ".to_owned()),
        Span::styled(complexity.to_owned(), Style::default().fg(Color::LightGreen)),
    ])
}

/// Two columns per cell so the grid keeps a roughly square aspect.
fn grid_text(state: &PathState, cursor: Option<Coord>, theme: &TuiTheme) -> Text<'static> {
    let grid = state.grid();
    let selected = state.selected();
    let mut lines = Vec::with_capacity(grid.rows());
    for y in 0..grid.rows() {
        let spans = grid
            .row(y)
            .iter()
            .map(|cell| {
                let at = cell.coord();
                let style = if cursor == Some(at) {
                    theme.cursor_style(cell.kind)
                } else if selected == Some(at) {
                    theme.selection_style(cell.kind)
                } else {
                    theme.cell_style(cell.kind)
                };
                let content = if cell.kind.is_endpoint() {
                    format!("{} ", cell.kind.glyph())
                } else {
                    "  ".to_owned()
                };
                Span::styled(content, style)
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

fn bar_height(value: u32, height: usize) -> usize {
    (value as usize * height).div_ceil(MAX_VALUE as usize).min(height)
}

/// Vertical bars, bottom-aligned, scaled against the largest value the generator can produce.
fn bars_text(array: &SortArray, width: usize, height: usize, theme: &TuiTheme) -> Text<'static> {
    if array.is_empty() || height == 0 {
        return Text::default();
    }
    let column = if width >= array.len() * 3 { 3 } else if width >= array.len() * 2 { 2 } else { 1 };
    let heights = array
        .elements()
        .iter()
        .map(|element| (bar_height(element.value, height), theme.bar_style(element.status)))
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let level = height - row;
        let spans = heights
            .iter()
            .map(|&(bar, style)| {
                let fill = if bar >= level { "█" } else { " " };
                let content =
                    if column == 1 { fill.to_owned() } else { format!("{} ", fill.repeat(column - 1)) };
                Span::styled(content, style)
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

fn path_stats_line(stats: &PathStats, now: Instant) -> Line<'static> {
    let mut spans = Vec::new();
    push_footer_entry(&mut spans, "visited", &stats.visited_cells.to_string());
    let distance = match stats.path_distance {
        d if d < 0 => "none".to_owned(),
        d => d.to_string(),
    };
    push_footer_entry(&mut spans, "path", &distance);
    push_footer_entry(&mut spans, "time", &format_elapsed(stats.elapsed(now)));
    if stats.is_running {
        spans.push(Span::styled("  searching…".to_owned(), Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn sort_stats_line(state: &SortState, paused: bool) -> Line<'static> {
    let counters = state.counters();
    let mut spans = Vec::new();
    push_footer_entry(&mut spans, "comparisons", &counters.comparisons.to_string());
    push_footer_entry(&mut spans, "array accesses", &counters.array_accesses.to_string());
    push_footer_entry(&mut spans, "speed", &state.speed().to_string());
    push_footer_entry(&mut spans, "elements", &state.element_count().to_string());
    let status = if state.is_shuffling() {
        Some("shuffling…")
    } else if state.is_sorting() && paused {
        Some("paused")
    } else if state.is_sorting() {
        Some("sorting…")
    } else {
        None
    };
    if let Some(status) = status {
        spans.push(Span::styled(format!("  {status}"), Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn footer_help_line(app: &App, now: Instant) -> Line<'static> {
    if let Some(message) = app.path_notice_message().filter(|_| app.page == Page::Pathfinding) {
        let mut spans = vec![Span::styled(message, app.theme.error_style())];
        push_footer_entry_with_separator(&mut spans, "esc", "dismiss", "  ");
        return Line::from(spans);
    }
    if let Some(toast) = app.toast.as_ref().filter(|toast| toast.expires_at > now) {
        return Line::from(Span::styled(toast.message.clone(), Style::default().fg(Color::White)));
    }

    let mut spans = Vec::new();
    match app.page {
        Page::Pathfinding => {
            let running = app.path.is_running();
            push_footer_entry(&mut spans, "1-4", "algorithm");
            push_footer_entry_maybe_disabled(&mut spans, "space", "place", running);
            push_footer_entry(&mut spans, "r", "run");
            push_footer_entry_maybe_disabled(&mut spans, "x", "stop", !running);
            push_footer_entry(&mut spans, "e", "reset");
            push_footer_entry(&mut spans, "c", "clear");
        }
        Page::Sorting => {
            let state = app.sort.state();
            let busy = state.is_sorting() || state.is_shuffling();
            push_footer_entry(&mut spans, "1-4", "algorithm");
            push_footer_entry_maybe_disabled(&mut spans, "s", "sort", busy);
            push_footer_entry_maybe_disabled(&mut spans, "p", "pause", !state.is_sorting());
            push_footer_entry(&mut spans, "n", "shuffle");
            push_footer_entry(&mut spans, "[ ]", "elements");
            push_footer_entry(&mut spans, "- +", "speed");
            push_footer_entry_maybe_disabled(&mut spans, "x", "stop", !busy);
        }
    }
    push_footer_entry(&mut spans, "?", "help");
    push_footer_entry(&mut spans, "q", "quit");
    Line::from(spans)
}

fn help_key_style() -> Style {
    Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<key_width$}"), help_key_style()),
        Span::raw(desc.to_owned()),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    const KEY_WIDTH: usize = 14;
    let mut lines = vec![Line::from(Span::styled("Global".to_owned(), help_header_style()))];
    for (key, desc) in [("Tab", "switch page (stops the active run)"), ("?", "toggle help"), ("q", "quit")] {
        lines.push(help_kv(key, desc, KEY_WIDTH));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Pathfinding".to_owned(), help_header_style())));
    for (key, desc) in [
        ("arrows / hjkl", "move the cursor"),
        ("Space / Enter", "place start, end, walls; pick up and move endpoints"),
        ("1-4", "Dijkstra, A*, DFS, bidirectional"),
        ("r", "run the selected algorithm"),
        ("x", "stop the search"),
        ("e", "reset visited cells and the path"),
        ("c", "clear the whole grid"),
        ("Esc", "dismiss a notice"),
    ] {
        lines.push(help_kv(key, desc, KEY_WIDTH));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Sorting".to_owned(), help_header_style())));
    for (key, desc) in [
        ("1-4", "selection, bubble, shaker, merge"),
        ("s", "start sorting"),
        ("p", "pause or resume"),
        ("n", "shuffle into a new array"),
        ("[ / ]", "fewer or more elements"),
        ("- / +", "slower or faster"),
        ("x", "stop"),
    ] {
        lines.push(help_kv(key, desc, KEY_WIDTH));
    }
    lines
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title("Help", '?', None))
        .border_style(Style::default().fg(FOCUS_COLOR));
    frame.render_widget(Paragraph::new(help_lines()).block(block).wrap(Wrap { trim: false }), popup);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(spans: &mut Vec<Span<'static>>, label: &str, value: &str, disabled: bool) {
    push_footer_entry_with_separator_maybe_disabled(spans, label, value, " | ", disabled);
}

fn push_footer_entry_with_separator(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
) {
    push_footer_entry_with_separator_maybe_disabled(spans, label, value, separator, false);
}

fn push_footer_entry_with_separator_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(separator.to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(format!("{}:", footer_label_ucfirst(label)), Style::default().fg(FOOTER_LABEL_COLOR)));
    let color = if disabled { Color::DarkGray } else { FOOTER_KEY_COLOR };
    spans.push(Span::styled(value.to_owned(), Style::default().fg(color)));
}

fn footer_label_ucfirst(label: &str) -> String {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
