pub mod badge;
pub mod search_input;
pub mod stat_card;

use tui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
};

/// Brand violet used for highlights and progress
pub const ACCENT: Color = Color::Rgb(0x59, 0x32, 0xea);
pub const MUTED: Color = Color::Rgb(0x9e, 0xa3, 0xb8);

pub fn highlight_style() -> Style {
    Style::default()
        .bg(ACCENT)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn progress_gauge(percent: u16) -> Gauge<'static> {
    let percent = percent.min(100);
    Gauge::default()
        .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
        .percent(percent)
        .label(format!("{}%", percent))
}

pub fn card(title: &str) -> Block<'_> {
    Block::default().title(title).borders(Borders::ALL)
}

/// Split `area` into `count` equal columns
pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let share = 100 / count as u16;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(share); count])
        .split(area)
}
