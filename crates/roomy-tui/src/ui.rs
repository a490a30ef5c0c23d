//! Rendering.
//!
//! Draws the active view, the input line and any open notification. Reads
//! [`App`] only; the notification scroll offset in [`InputState`] is clamped
//! to the popup while drawing. Safe to call with a test backend.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Cell, Clear, List, ListItem, Paragraph, Row, Table, Tabs},
};
use roomy_app::{App, Notice, NoticeLevel, View};
use roomy_core::{Availability, Phase, SlotStatus, generate_slots};

use crate::input::InputState;

/// Slots per row of the grid.
const GRID_COLUMNS: usize = 6;

/// Outer width of the notification popup.
const POPUP_WIDTH: u16 = 90;

/// Draw the whole screen.
pub fn draw(frame: &mut Frame<'_>, app: &App, input: &mut InputState) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    draw_tabs(frame, app, header);
    match app.view() {
        View::Booking => draw_booking(frame, app, body),
        View::Availability => draw_availability(frame, app, body),
    }
    draw_input(frame, input, footer);

    if let Some(notice) = app.notice() {
        draw_notice(frame, notice, input);
    }
}

fn draw_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let selected = match app.view() {
        View::Booking => 0,
        View::Availability => 1,
    };
    let tabs = Tabs::new([View::Booking.title(), View::Availability.title()])
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(Block::bordered().title(" Room Reservation System "));
    frame.render_widget(tabs, area);
}

fn draw_booking(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let [rooms_area, right] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(40)]).areas(area);
    let [status_area, grid_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(7)]).areas(right);

    let selection = app.selection();
    let items: Vec<ListItem<'_>> = app
        .store()
        .rooms()
        .enumerate()
        .map(|(i, room)| {
            let chosen = selection.room() == Some(room);
            let marker = if chosen { '>' } else { ' ' };
            let style =
                if chosen { Style::default().add_modifier(Modifier::BOLD) } else { Style::default() };
            ListItem::new(Line::styled(format!("{marker}{}. {room}", i + 1), style))
        })
        .collect();
    frame.render_widget(List::new(items).block(Block::bordered().title(" Rooms ")), rooms_area);

    let room = selection.room().map_or_else(|| "Select a room".to_string(), ToString::to_string);
    let date = selection
        .date()
        .map_or_else(|| "-".to_string(), |date| date.format("%Y-%m-%d").to_string());
    let status = Text::from(vec![
        Line::from(format!("Room:  {room}")),
        Line::from(format!("Date:  {date}")),
        Line::from(format!("Step:  {}", phase_hint(selection.phase()))),
    ]);
    frame.render_widget(
        Paragraph::new(status).block(Block::bordered().title(" Selection ")),
        status_area,
    );

    let slots = generate_slots();
    let lines: Vec<Line<'_>> = slots
        .chunks(GRID_COLUMNS)
        .map(|row| {
            let spans = row
                .iter()
                .flat_map(|&slot| {
                    let (marker, style) = match selection.slot_status(slot) {
                        SlotStatus::Reserved => ('x', Style::default().fg(Color::Red)),
                        SlotStatus::Selected => {
                            ('*', Style::default().fg(Color::Black).bg(Color::LightBlue))
                        },
                        SlotStatus::Open => (' ', Style::default()),
                        SlotStatus::Unavailable => (' ', Style::default().fg(Color::DarkGray)),
                    };
                    [Span::styled(format!("[{marker}] {slot}"), style), Span::raw("  ")]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Time Slots ")),
        grid_area,
    );
}

fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "choose a room (/room)",
        Phase::RoomChosen => "choose a date (/date)",
        Phase::DateChosen => "select time slots (/slot)",
        Phase::SlotsSelected => "enter purpose and submit (/reserve)",
    }
}

fn draw_availability(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let rows: Vec<Row<'_>> = app
        .summaries()
        .into_iter()
        .enumerate()
        .map(|(i, summary)| {
            let color = match summary.status {
                Availability::Reserved => Color::Red,
                Availability::Available => Color::Green,
            };
            Row::new([
                Cell::from(format!("{}. {}", i + 1, summary.room)),
                Cell::from(summary.status.to_string()).style(Style::default().fg(color)),
                Cell::from(summary.reservations.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(24), Constraint::Length(12), Constraint::Length(12)],
    )
    .header(
        Row::new(["Room", "Status", "Bookings"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::bordered().title(" Room Availability (/show <room> for details) "));
    frame.render_widget(table, area);
}

fn draw_input(frame: &mut Frame<'_>, input: &InputState, area: Rect) {
    let line = Paragraph::new(input.buffer())
        .block(Block::bordered().title(" Command (/help, Tab: switch view, Ctrl-C: quit) "));
    frame.render_widget(line, area);

    let cursor_x = area.x.saturating_add(1).saturating_add(input.buffer().chars().count() as u16);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    frame.set_cursor_position((cursor_x.min(max_x), area.y.saturating_add(1)));
}

fn draw_notice(frame: &mut Frame<'_>, notice: &Notice, input: &mut InputState) {
    let color = match notice.level {
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Error => Color::Red,
    };
    let screen = frame.area();
    let width = POPUP_WIDTH.min(screen.width);
    let lines = wrap(&notice.body, usize::from(width.saturating_sub(2)));
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let height = total.saturating_add(2).min(screen.height);
    let visible = height.saturating_sub(2);
    input.clamp_scroll(total.saturating_sub(visible));
    let offset = input.scroll();
    let below = total.saturating_sub(offset).saturating_sub(visible);

    let mut block = Block::bordered()
        .title(format!(" {} ", notice.title))
        .title_bottom(" Enter/Esc: close ")
        .border_style(Style::default().fg(color));
    if offset > 0 || below > 0 {
        block = block.title_bottom(Line::from(format!(" {below} more (Up/Down) ")).right_aligned());
    }
    let body = Paragraph::new(lines).scroll((offset, 0)).block(block);

    let area = popup_area(screen, width, height);
    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}

/// Hard-wrap `text` to `width` columns, one line per screen row.
fn wrap(text: &str, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    text.lines()
        .flat_map(|line| {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                return vec![Line::default()];
            }
            chars.chunks(width).map(|row| Line::from(row.iter().collect::<String>())).collect()
        })
        .collect()
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
