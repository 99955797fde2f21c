//! Screen Rendering
//!
//! Pure presentation: each screen reads the app state and paints ratatui
//! widgets. Nothing in here mutates state or performs I/O; the app's key
//! handler owns all of that.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use herodex_core::{NoticeLevel, Screen};

use crate::app::{spaced_echo, App, MENU_ENTRIES};
use crate::theme;

/// Paint the frame for the app's current screen, plus overlays.
pub(crate) fn draw(frame: &mut Frame, app: &App) {
    match app.controller.screen() {
        Screen::PasswordGate => render_gate(frame, app),
        Screen::Menu => render_menu(frame, app),
        Screen::Search => render_search(frame, app),
        Screen::RosterList => render_roster(frame, app),
        Screen::Detail => render_detail(frame, app),
    }

    if let Some(path) = &app.export_prompt {
        render_export_prompt(frame, path);
    }

    if let Some(notice) = &app.notice {
        render_notice(frame, notice);
    }
}

/// Password gate: a single centered entry with the spaced-uppercase echo.
fn render_gate(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let echo = spaced_echo(&app.input);
    let entry = Paragraph::new(format!("{echo}_"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::TEXT_LIGHT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" PASSWORD ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(theme::PRIMARY)),
        );
    frame.render_widget(entry, middle);

    let hint = Paragraph::new("Enter to submit · Esc to quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::DIM_GRAY));
    frame.render_widget(hint, bottom_line(area));
}

/// Main menu: banner (or plain title) over the three options.
fn render_menu(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [banner_area, _, menu_area, _] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(MENU_ENTRIES.len() as u16 + 2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let title: Paragraph = match &app.banner {
        Some(art) => Paragraph::new(art.as_str()).style(Style::default().fg(theme::PRIMARY)),
        None => Paragraph::new("H E R O D E X")
            .style(
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
    };
    frame.render_widget(title.alignment(Alignment::Center), banner_area);

    let items: Vec<ListItem> = MENU_ENTRIES
        .iter()
        .map(|entry| ListItem::new(Line::from(*entry).alignment(Alignment::Center)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(theme::TEXT_LIGHT)
                .bg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default().with_selected(Some(app.menu_selected));
    frame.render_stateful_widget(list, centered(menu_area, 40), &mut state);

    let hint = Paragraph::new("Up/Down select · Enter confirm · q quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::DIM_GRAY));
    frame.render_widget(hint, bottom_line(area));
}

/// Search screen: label plus the query entry.
fn render_search(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    let row = centered(middle, 60);
    let [label_area, entry_area] =
        Layout::horizontal([Constraint::Length(10), Constraint::Fill(1)]).areas(row);

    let label = Paragraph::new("SEARCH:")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::TEXT_LIGHT).bg(theme::PRIMARY))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT));
    frame.render_widget(label, label_area);

    let entry = Paragraph::new(format!("{}_", app.input))
        .style(Style::default().fg(theme::TEXT_DARK).bg(theme::BACKDROP))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM | Borders::RIGHT));
    frame.render_widget(entry, entry_area);

    let hint = Paragraph::new("Enter to search · Esc back")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::DIM_GRAY));
    frame.render_widget(hint, bottom_line(area));
}

/// Roster list: alphabetical, uppercased, crimson highlight.
fn render_roster(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let panel = centered(area, 50);

    let items: Vec<ListItem> = app
        .roster_sorted
        .iter()
        .map(|name| ListItem::new(name.to_uppercase()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" PLAYABLE CHARACTERS ")
                .title_alignment(Alignment::Center),
        )
        .highlight_style(
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.list_selected));
    frame.render_stateful_widget(list, panel, &mut state);

    let hint = Paragraph::new("Up/Down select · Enter fetch · Esc back")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::DIM_GRAY));
    frame.render_widget(hint, bottom_line(area));
}

/// Detail view: portrait panel on the left, record fields on the right.
fn render_detail(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [body, hint_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    let [portrait_area, info_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Fill(1)]).areas(body);

    // Terminal cells can't carry the bitmap; the panel reports what was
    // fetched, or the placeholder when the portrait path degraded.
    let portrait_text = match app.controller.portrait() {
        Some(portrait) => format!("Portrait fetched\n{}x{} px", portrait.width(), portrait.height()),
        None => "Image not available".to_string(),
    };
    let portrait_panel = Paragraph::new(portrait_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::TEXT_LIGHT))
        .block(Block::default().borders(Borders::ALL).title(" PORTRAIT "));
    frame.render_widget(portrait_panel, portrait_area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(record) = app.controller.record() {
        lines.push(Line::from(Span::styled(
            record.name.clone(),
            Style::default()
                .fg(theme::TEXT_LIGHT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "PLACE OF BIRTH:",
            Style::default().fg(theme::TEXT_LIGHT),
        )));
        lines.push(Line::from(Span::styled(
            record.place_of_birth.clone(),
            Style::default().fg(theme::PRIMARY),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "BASE OF OPERATIONS:",
            Style::default().fg(theme::TEXT_LIGHT),
        )));
        lines.push(Line::from(Span::styled(
            record.base.clone(),
            Style::default().fg(theme::PRIMARY),
        )));
    }
    let info = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, info_area);

    let hint = Paragraph::new("e export to PDF · Esc back")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::DIM_GRAY));
    frame.render_widget(hint, hint_area);
}

/// Export prompt overlay: editable destination path.
fn render_export_prompt(frame: &mut Frame, path: &str) {
    let area = modal_rect(frame.area(), 70, 3);
    frame.render_widget(Clear, area);
    let prompt = Paragraph::new(format!("{path}_"))
        .style(Style::default().fg(theme::TEXT_LIGHT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Save PDF as (Enter to save, Esc to cancel) ")
                .border_style(Style::default().fg(theme::PRIMARY)),
        );
    frame.render_widget(prompt, area);
}

/// Modal notice overlay, colored by severity; any key dismisses it.
fn render_notice(frame: &mut Frame, notice: &herodex_core::Notice) {
    let width = (frame.area().width * 6 / 10).max(20);
    let wrapped = textwrap::wrap(&notice.body, width.saturating_sub(4) as usize);
    let height = wrapped.len() as u16 + 3;
    let area = modal_rect(frame.area(), width, height);

    let color = match notice.level {
        NoticeLevel::Info => theme::SUCCESS_GREEN,
        NoticeLevel::Warning => theme::WARNING_AMBER,
        NoticeLevel::Error => theme::ERROR_RED,
    };

    frame.render_widget(Clear, area);
    let mut lines: Vec<Line> = wrapped
        .iter()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(Span::styled(
        "(press any key)",
        Style::default().fg(theme::DIM_GRAY),
    )));
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", notice.title))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(body, area);
}

/// A horizontally centered sub-rect of `width` columns.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// A centered modal rect of fixed size.
fn modal_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// The last line of the frame, for key hints.
fn bottom_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    }
}
