// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Terminal front end for the query session. The loop owns the session;
//! backend calls run on worker threads and come back through an mpsc
//! channel, so all session mutation stays on the loop thread.
//!
//! Keys: Tab cycles focus (cells, group header, sort header, chips,
//! suggestions), arrows move within the zone, Enter acts on the focused
//! element, Space toggles a grouped checkbox, `a` adds the selection to
//! the filters, `e` edits the question, `h` toggles hover effects, `?`
//! shows help, `q` quits.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row as TableRow, Table, Wrap};
use scry_app::{
    Effect, Exchange, HoverReply, QueryBackend, QueryState, Session, SessionCommand, SortOrder,
    capitalize, cell_text, markup,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const SORT_MARK_ASC: &str = "▲";
const SORT_MARK_DESC: &str = "▼";
const SORT_MARK_NEUTRAL: &str = "↕";
const GROUP_MARK: &str = "◆";
const CHECKBOX_ON: &str = "[x]";
const CHECKBOX_OFF: &str = "[ ]";

/// Resolved backend exchanges delivered from worker threads back into
/// the loop thread.
pub enum InternalEvent {
    SyncFinished(Exchange<QueryState>),
    HoverResolved(Exchange<HoverReply>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FocusZone {
    #[default]
    Cells,
    GroupHeader,
    SortHeader,
    Chips,
    Suggestions,
}

impl FocusZone {
    const fn next(self) -> Self {
        match self {
            Self::Cells => Self::GroupHeader,
            Self::GroupHeader => Self::SortHeader,
            Self::SortHeader => Self::Chips,
            Self::Chips => Self::Suggestions,
            Self::Suggestions => Self::Cells,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Cells => "cells",
            Self::GroupHeader => "group",
            Self::SortHeader => "sort",
            Self::Chips => "chips",
            Self::Suggestions => "follow-ups",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    focus: FocusZone,
    row: usize,
    column: usize,
    chip: usize,
    suggestion: usize,
    editing: bool,
    help_visible: bool,
}

enum KeyOutcome {
    Continue(Vec<Effect>),
    Quit,
}

pub fn run_app<B>(session: &mut Session, backend: &B) -> Result<()>
where
    B: QueryBackend + Clone + Send + 'static,
{
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let crossterm_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(crossterm_backend).context("create terminal")?;

    let mut view = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    execute_effects(backend, &internal_tx, session.initial_sync());

    let mut result = Ok(());
    loop {
        process_internal_events(session, backend, &internal_tx, &internal_rx);
        clamp_cursor(session, &mut view);

        if let Err(error) = terminal.draw(|frame| render(frame, session, &view)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => match handle_key_event(session, &mut view, key) {
                    KeyOutcome::Quit => break,
                    KeyOutcome::Continue(effects) => {
                        execute_effects(backend, &internal_tx, effects);
                    }
                },
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events<B>(
    session: &mut Session,
    backend: &B,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) where
    B: QueryBackend + Clone + Send + 'static,
{
    while let Ok(event) = rx.try_recv() {
        let effects = match event {
            InternalEvent::SyncFinished(exchange) => {
                session.dispatch(SessionCommand::SyncFinished(exchange))
            }
            InternalEvent::HoverResolved(exchange) => {
                session.dispatch(SessionCommand::HoverResolved(exchange))
            }
        };
        execute_effects(backend, tx, effects);
    }
}

/// Runs each effect on its own worker thread. State submissions are
/// already single-flight guarded by the session; hover requests are
/// deliberately unguarded and may resolve out of order.
fn execute_effects<B>(backend: &B, tx: &Sender<InternalEvent>, effects: Vec<Effect>)
where
    B: QueryBackend + Clone + Send + 'static,
{
    for effect in effects {
        let backend = backend.clone();
        let tx = tx.clone();
        match effect {
            Effect::SubmitState(payload) => {
                thread::spawn(move || {
                    let _ = tx.send(InternalEvent::SyncFinished(backend.post_state(&payload)));
                });
            }
            Effect::SubmitHover(descriptor) => {
                thread::spawn(move || {
                    let _ = tx.send(InternalEvent::HoverResolved(
                        backend.post_hover_event(&descriptor),
                    ));
                });
            }
        }
    }
}

fn handle_key_event(session: &mut Session, view: &mut ViewData, key: KeyEvent) -> KeyOutcome {
    if view.editing {
        return handle_editing_key(session, view, key);
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    match key.code {
        KeyCode::Char('q') => KeyOutcome::Quit,
        KeyCode::Char('?') => {
            view.help_visible = !view.help_visible;
            KeyOutcome::Continue(Vec::new())
        }
        KeyCode::Char('e') => {
            view.editing = true;
            KeyOutcome::Continue(Vec::new())
        }
        KeyCode::Char('h') => {
            KeyOutcome::Continue(session.dispatch(SessionCommand::ToggleHoverEffects))
        }
        KeyCode::Char('a') => {
            KeyOutcome::Continue(session.dispatch(SessionCommand::AddSelectedToFilters))
        }
        KeyCode::Tab => {
            view.focus = view.focus.next();
            clamp_cursor(session, view);
            KeyOutcome::Continue(hover_transition(session, view))
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            move_cursor(session, view, key.code);
            KeyOutcome::Continue(hover_transition(session, view))
        }
        KeyCode::Enter => KeyOutcome::Continue(activate(session, view)),
        KeyCode::Char(' ') => KeyOutcome::Continue(toggle_checkbox(session, view)),
        KeyCode::Char('x') if view.focus == FocusZone::Chips => {
            KeyOutcome::Continue(remove_focused_chip(session, view))
        }
        _ => KeyOutcome::Continue(Vec::new()),
    }
}

fn handle_editing_key(session: &mut Session, view: &mut ViewData, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Esc => {
            view.editing = false;
            KeyOutcome::Continue(Vec::new())
        }
        KeyCode::Enter => {
            view.editing = false;
            KeyOutcome::Continue(session.dispatch(SessionCommand::SubmitDraft))
        }
        KeyCode::Backspace => {
            let mut draft = session.draft().to_owned();
            draft.pop();
            KeyOutcome::Continue(session.dispatch(SessionCommand::EditDraft(draft)))
        }
        KeyCode::Char(character) => {
            let mut draft = session.draft().to_owned();
            draft.push(character);
            KeyOutcome::Continue(session.dispatch(SessionCommand::EditDraft(draft)))
        }
        _ => KeyOutcome::Continue(Vec::new()),
    }
}

fn move_cursor(session: &Session, view: &mut ViewData, code: KeyCode) {
    let state = session.state();
    match view.focus {
        FocusZone::Cells => {
            let rows = state.result.len();
            let columns = table_headers(state).len();
            match code {
                KeyCode::Left => view.column = view.column.saturating_sub(1),
                KeyCode::Right if columns > 0 => {
                    view.column = (view.column + 1).min(columns - 1);
                }
                KeyCode::Up => view.row = view.row.saturating_sub(1),
                KeyCode::Down if rows > 0 => view.row = (view.row + 1).min(rows - 1),
                _ => {}
            }
        }
        FocusZone::GroupHeader | FocusZone::SortHeader => {
            let columns = table_headers(state).len();
            match code {
                KeyCode::Left => view.column = view.column.saturating_sub(1),
                KeyCode::Right if columns > 0 => {
                    view.column = (view.column + 1).min(columns - 1);
                }
                _ => {}
            }
        }
        FocusZone::Chips => {
            let chips = chip_entries(state).len();
            match code {
                KeyCode::Left | KeyCode::Up => view.chip = view.chip.saturating_sub(1),
                KeyCode::Right | KeyCode::Down if chips > 0 => {
                    view.chip = (view.chip + 1).min(chips - 1);
                }
                _ => {}
            }
        }
        FocusZone::Suggestions => {
            let suggestions = state.suggestions.len();
            match code {
                KeyCode::Up => view.suggestion = view.suggestion.saturating_sub(1),
                KeyCode::Down if suggestions > 0 => {
                    view.suggestion = (view.suggestion + 1).min(suggestions - 1);
                }
                _ => {}
            }
        }
    }
}

fn clamp_cursor(session: &Session, view: &mut ViewData) {
    let state = session.state();
    let columns = table_headers(state).len();
    if columns > 0 {
        view.column = view.column.min(columns - 1);
    } else {
        view.column = 0;
    }
    view.row = view.row.min(state.result.len().saturating_sub(1));
    view.chip = view.chip.min(chip_entries(state).len().saturating_sub(1));
    view.suggestion = view.suggestion.min(state.suggestions.len().saturating_sub(1));
}

/// Moving the focus is the keyboard analog of mouse hover: leave the old
/// element, then enter the new one. The session drops both while hover
/// effects are disabled.
fn hover_transition(session: &mut Session, view: &ViewData) -> Vec<Effect> {
    let target = hover_target(session, view);
    let mut effects = session.dispatch(SessionCommand::HoverLeave);
    if let Some(command) = target {
        effects.extend(session.dispatch(command));
    }
    effects
}

fn hover_target(session: &Session, view: &ViewData) -> Option<SessionCommand> {
    let state = session.state();
    let headers = table_headers(state);
    match view.focus {
        FocusZone::Cells => {
            let header = headers.get(view.column)?;
            let row = state.result.get(view.row)?;
            let value = row.get(header).map(cell_text).unwrap_or_default();
            Some(SessionCommand::HoverCell {
                column: header.clone(),
                value,
                row: row.clone(),
            })
        }
        FocusZone::GroupHeader => headers.get(view.column).map(|header| {
            SessionCommand::HoverGroup {
                column: header.clone(),
            }
        }),
        FocusZone::SortHeader => headers.get(view.column).map(|header| {
            SessionCommand::HoverSort {
                column: header.clone(),
            }
        }),
        FocusZone::Chips => {
            let (category, value) = chip_entries(state).into_iter().nth(view.chip)?;
            Some(SessionCommand::HoverFilter { category, value })
        }
        FocusZone::Suggestions => None,
    }
}

fn activate(session: &mut Session, view: &mut ViewData) -> Vec<Effect> {
    let state = session.state();
    let headers = table_headers(state);
    match view.focus {
        FocusZone::Cells => {
            let Some(header) = headers.get(view.column) else {
                return Vec::new();
            };
            let Some(row) = state.result.get(view.row) else {
                return Vec::new();
            };
            let value = row.get(header).map(cell_text).unwrap_or_default();
            let command = SessionCommand::CellClick {
                column: header.clone(),
                value,
                row: row.clone(),
            };
            session.dispatch(command)
        }
        FocusZone::GroupHeader => match headers.get(view.column) {
            Some(header) => session.dispatch(SessionCommand::GroupByClick {
                column: header.clone(),
            }),
            None => Vec::new(),
        },
        FocusZone::SortHeader => match headers.get(view.column) {
            Some(header) => session.dispatch(SessionCommand::SortClick {
                column: header.clone(),
            }),
            None => Vec::new(),
        },
        FocusZone::Chips => remove_focused_chip(session, view),
        FocusZone::Suggestions => match state.suggestions.get(view.suggestion) {
            Some(suggestion) => {
                let command = SessionCommand::SuggestionClick {
                    text: suggestion.clone(),
                };
                session.dispatch(command)
            }
            None => Vec::new(),
        },
    }
}

fn remove_focused_chip(session: &mut Session, view: &mut ViewData) -> Vec<Effect> {
    let Some((category, value)) = chip_entries(session.state()).into_iter().nth(view.chip) else {
        return Vec::new();
    };
    let effects = session.dispatch(SessionCommand::RemoveFilterChip { category, value });
    clamp_cursor(session, view);
    effects
}

/// Space toggles the checkbox of the focused cell, but only in the
/// grouped column; other cells have no selection affordance.
fn toggle_checkbox(session: &mut Session, view: &ViewData) -> Vec<Effect> {
    if view.focus != FocusZone::Cells {
        return Vec::new();
    }
    let state = session.state();
    let headers = table_headers(state);
    let Some(header) = headers.get(view.column) else {
        return Vec::new();
    };
    if !is_grouped_column(state, header) {
        return Vec::new();
    }
    let Some(row) = state.result.get(view.row) else {
        return Vec::new();
    };
    let value = row.get(header).map(cell_text).unwrap_or_default();
    if value.is_empty() {
        return Vec::new();
    }
    let checked = !session.selection().contains(&value);
    session.dispatch(SessionCommand::ToggleGroupedValue { value, checked })
}

fn is_grouped_column(state: &QueryState, header: &str) -> bool {
    state
        .group_by
        .as_deref()
        .is_some_and(|grouped| grouped.eq_ignore_ascii_case(header))
}

fn table_headers(state: &QueryState) -> Vec<String> {
    state
        .result
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

fn chip_entries(state: &QueryState) -> Vec<(String, String)> {
    state
        .filters
        .iter()
        .flat_map(|(category, values)| {
            values
                .iter()
                .map(move |value| (category.clone(), value.as_key()))
        })
        .collect()
}

fn sort_mark(state: &QueryState, header: &str) -> &'static str {
    if state.sorting.is_ordered_by(header) {
        match state.sorting.order {
            SortOrder::Asc => SORT_MARK_ASC,
            SortOrder::Desc => SORT_MARK_DESC,
        }
    } else {
        SORT_MARK_NEUTRAL
    }
}

fn header_label(state: &QueryState, header: &str) -> String {
    let mut label = capitalize(header);
    if is_grouped_column(state, header) {
        label = format!("{GROUP_MARK} {label}");
    }
    format!("{label} {}", sort_mark(state, header))
}

fn editor_title(session: &Session) -> String {
    let mut title = "Ask anything".to_owned();
    if session.hover_enabled() {
        title.push_str(" [hover]");
    }
    if session.is_syncing() {
        title.push_str(" [syncing]");
    }
    title
}

fn table_title(state: &QueryState) -> String {
    let count = state.result.len();
    let noun = if count == 1 { "result" } else { "results" };
    match state.group_by.as_deref() {
        Some(grouped) => format!("{count} {noun}, grouped by {grouped}"),
        None => format!("{count} {noun}"),
    }
}

fn footer_hints(session: &Session, view: &ViewData) -> String {
    let mut hints = format!(
        "[{}] Tab focus | arrows move | Enter act | e edit | h hover | ? help | q quit",
        view.focus.label()
    );
    if !session.selection().is_empty() {
        hints.push_str(&format!(" | a add ({})", session.selection().len()));
    }
    hints
}

fn emphasis_line(text: &str, base: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = markup::segments(text)
        .into_iter()
        .map(|segment| {
            let style = if segment.emphasized {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Span::styled(segment.text, style)
        })
        .collect();
    Line::from(spans)
}

fn render(frame: &mut Frame, session: &Session, view: &ViewData) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Length(1)];
    let show_data = session.should_show_data();
    let show_insights = session.should_show_insights();
    if show_data {
        constraints.push(Constraint::Min(6));
    } else {
        constraints.push(Constraint::Length(3));
    }
    if show_insights {
        constraints.push(Constraint::Length(insights_height(session.state())));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_editor(frame, session, view, chunks[0]);
    render_error(frame, session, chunks[1]);
    render_data(frame, session, view, chunks[2]);
    if show_insights {
        render_insights(frame, session, view, chunks[3]);
    }
    render_footer(frame, session, view, chunks[chunks.len() - 1]);

    if view.help_visible {
        render_help_overlay(frame);
    }
}

fn render_editor(frame: &mut Frame, session: &Session, view: &ViewData, area: Rect) {
    let mut text = session.draft().to_owned();
    if view.editing {
        text.push('█');
    }
    let style = if view.editing {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let editor = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(editor_title(session)),
        );
    frame.render_widget(editor, area);
}

fn render_error(frame: &mut Frame, session: &Session, area: Rect) {
    let Some(error) = session.error() else {
        return;
    };
    let line = Paragraph::new(error.to_owned()).style(Style::default().fg(Color::Red));
    frame.render_widget(line, area);
}

fn render_data(frame: &mut Frame, session: &Session, view: &ViewData, area: Rect) {
    if !session.should_show_data() {
        let placeholder =
            Paragraph::new("Loading data...").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    }

    let state = session.state();
    let chip_rows = state.filters.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(chip_rows), Constraint::Min(3)])
        .split(area);

    render_chips(frame, session, view, chunks[0]);
    render_table(frame, session, view, chunks[1]);
}

fn render_chips(frame: &mut Frame, session: &Session, view: &ViewData, area: Rect) {
    let state = session.state();
    let focused = view.focus == FocusZone::Chips;
    let mut flat_index = 0;
    let mut lines = Vec::new();
    for (category, values) in &state.filters {
        let mut spans = vec![Span::styled(
            format!("{}: ", capitalize(category)),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for value in values {
            let mut style = Style::default().fg(Color::Black).bg(Color::Gray);
            if focused && flat_index == view.chip {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ✕ ", value.as_key()), style));
            spans.push(Span::raw(" "));
            flat_index += 1;
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_table(frame: &mut Frame, session: &Session, view: &ViewData, area: Rect) {
    let state = session.state();
    let headers = table_headers(state);
    if headers.is_empty() {
        let placeholder =
            Paragraph::new("Loading data...").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    }

    let header_focused = matches!(
        view.focus,
        FocusZone::GroupHeader | FocusZone::SortHeader
    );
    let header_cells: Vec<Cell> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if header_focused && index == view.column {
                style = style.add_modifier(Modifier::REVERSED);
                if view.focus == FocusZone::SortHeader {
                    style = style.fg(Color::Yellow);
                }
            }
            Cell::from(Span::styled(header_label(state, header), style))
        })
        .collect();

    let rows: Vec<TableRow> = state
        .result
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let cells: Vec<Cell> = headers
                .iter()
                .enumerate()
                .map(|(column_index, header)| {
                    let value = row.get(header).map(cell_text).unwrap_or_default();
                    let text = if is_grouped_column(state, header) {
                        let mark = if session.selection().contains(&value) {
                            CHECKBOX_ON
                        } else {
                            CHECKBOX_OFF
                        };
                        format!("{mark} {value}")
                    } else {
                        value
                    };
                    let mut style = Style::default();
                    if view.focus == FocusZone::Cells
                        && row_index == view.row
                        && column_index == view.column
                    {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Cell::from(Span::styled(text, style))
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();

    let widths = vec![Constraint::Fill(1); headers.len()];
    let table = Table::new(rows, widths)
        .header(TableRow::new(header_cells))
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(table_title(state)),
        );
    frame.render_widget(table, area);
}

fn insights_height(state: &QueryState) -> u16 {
    let mut lines = 0;
    if !state.comments.is_empty() {
        lines += state.comments.len() + 1;
    }
    if !state.suggestions.is_empty() {
        lines += state.suggestions.len() + 1;
    }
    (lines as u16).saturating_add(2).min(14)
}

fn render_insights(frame: &mut Frame, session: &Session, view: &ViewData, area: Rect) {
    let state = session.state();
    let mut lines = Vec::new();

    if !state.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "Observations",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for comment in &state.comments {
            lines.push(emphasis_line(comment, Style::default()));
        }
    }

    if !state.suggestions.is_empty() {
        lines.push(Line::from(Span::styled(
            "Follow-up Questions",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (index, suggestion) in state.suggestions.iter().enumerate() {
            let mut base = Style::default().fg(Color::Blue);
            if view.focus == FocusZone::Suggestions && index == view.suggestion {
                base = base.add_modifier(Modifier::REVERSED);
            }
            lines.push(emphasis_line(suggestion, base));
        }
    }

    let insights = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Insights"));
    frame.render_widget(insights, area);
}

fn render_footer(frame: &mut Frame, session: &Session, view: &ViewData, area: Rect) {
    let footer =
        Paragraph::new(footer_hints(session, view)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let text = [
        "Tab        cycle focus zone",
        "arrows     move within the zone",
        "Enter      drill into a cell, group/sort a column,",
        "           remove a chip, or submit a follow-up",
        "Space      toggle a grouped checkbox",
        "a          add checked values to the filters",
        "e          edit the question (Enter submits)",
        "h          toggle hover effects",
        "q          quit",
    ]
    .join("\n");

    let area = centered_rect(frame.area(), 52, 12);
    frame.render_widget(Clear, area);
    let help = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(help, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
