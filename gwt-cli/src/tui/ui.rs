//! Rendering of the worktree list and branch picker

use super::app::App;
use super::state::{EntryKind, ListEntry, Mode};
use super::theme::Theme;
use super::widgets::{SelectList, VirtualList};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const INDICATOR: &str = "│ ";
const PADDING: &str = "  ";

/// Draw the whole screen
pub fn draw(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();
    let help_height = if app.settings.show_help { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(help_height),
        ])
        .split(area);

    let (title, list) = if app.mode.shows_branches() {
        let title = if app.branches_loading {
            " Select a branch (loading...) ".to_string()
        } else {
            " Select a branch ".to_string()
        };
        (title, &app.branches)
    } else {
        (format!(" {} ", app.settings.title), &app.worktrees)
    };

    let inner = draw_list(f, chunks[0], &title, list, app, theme);
    draw_status(f, chunks[1], app, theme);
    if app.settings.show_help {
        draw_help(f, chunks[2], app, theme);
    }

    // The synthetic row is first and selected while editing
    if let Mode::EditingNewBranchName { input } = &app.mode {
        f.set_cursor_position((
            inner.x + INDICATOR.width() as u16 + input.cursor_display_offset() as u16,
            inner.y,
        ));
    }
}

fn draw_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    list: &SelectList<ListEntry>,
    app: &App,
    theme: &Theme,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .title(Span::styled(title.to_string(), theme.title_style()));
    let inner = block.inner(area);

    let confirming = match &app.mode {
        Mode::ConfirmingDelete { index, .. } => Some(*index),
        _ => None,
    };

    let items: Vec<ListItem> = list
        .items()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry_item(entry, i == list.cursor(), confirming == Some(i), theme)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(list.cursor()));
    f.render_stateful_widget(List::new(items).block(block), area, &mut state);
    inner
}

fn entry_item<'a>(entry: &'a ListEntry, selected: bool, confirming: bool, theme: &Theme) -> ListItem<'a> {
    let title_style = if confirming {
        theme.confirm_style()
    } else if selected {
        theme.selection_style()
    } else if matches!(entry.kind, EntryKind::Action(_)) {
        theme.action_style()
    } else {
        theme.normal_style()
    };
    let (lead, lead_style) = if selected {
        (INDICATOR, theme.selection_style())
    } else {
        (PADDING, Style::default())
    };

    let title = Line::from(vec![
        Span::styled(lead, lead_style),
        Span::styled(entry.title.as_str(), title_style),
    ]);
    let mut description = vec![Span::styled(lead, lead_style)];
    description.extend(description_spans(&entry.description, theme));

    ListItem::new(vec![title, Line::from(description), Line::default()])
}

/// Color each `Label: value` segment (segments are separated by two or more spaces)
fn description_spans<'a>(description: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut rest = description;
    while !rest.is_empty() {
        let (segment, gap, next) = match rest.find("  ") {
            Some(at) => {
                let gap_end = rest[at..]
                    .find(|c: char| c != ' ')
                    .map_or(rest.len(), |n| at + n);
                (&rest[..at], &rest[at..gap_end], &rest[gap_end..])
            }
            None => (rest, "", ""),
        };
        match segment.split_once(": ") {
            Some((label, value)) => {
                spans.push(Span::styled(
                    format!("{}: ", label),
                    Style::default().fg(theme.label_color(label)),
                ));
                spans.push(Span::styled(value, theme.value_style()));
            }
            None => spans.push(Span::styled(segment, theme.muted_style())),
        }
        if !gap.is_empty() {
            spans.push(Span::raw(gap));
        }
        rest = next;
    }
    spans
}

fn draw_status(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let line = match app.visible_notice(Instant::now()) {
        Some(notice) => Line::from(Span::styled(
            format!(" {}", notice.text),
            theme.notice_style(notice.kind),
        )),
        None => Line::default(),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let help = match app.mode {
        Mode::Listing => "↑/↓ move • enter open • a add • d delete • r refresh • q quit",
        Mode::ConfirmingDelete { .. } => "enter confirm • esc cancel • ↑/↓ move",
        Mode::PickingBranch => "↑/↓ move • enter select • n new branch • esc back",
        Mode::EditingNewBranchName { .. } => "enter create • esc cancel • ctrl+u clear • ctrl+w delete word",
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {}", help), theme.help_style())),
        area,
    );
}
