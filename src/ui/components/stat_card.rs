use tui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{badge::change_color, columns};
use crate::models::Stat;

/// A row of equal-width cards, one per stat
pub fn render_stat_cards<B: Backend>(frame: &mut Frame<B>, area: Rect, stats: &[Stat]) {
    for (stat, cell) in stats.iter().zip(columns(area, stats.len())) {
        let mut value_line = vec![Span::styled(
            stat.value.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(change) = &stat.change {
            value_line.push(Span::raw("  "));
            value_line.push(Span::styled(
                change.clone(),
                Style::default().fg(change_color(stat.is_positive())),
            ));
        }

        let card = Paragraph::new(vec![
            Spans::from(Span::styled(
                stat.label.clone(),
                Style::default().fg(Color::Gray),
            )),
            Spans::from(value_line),
        ])
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(card, cell);
    }
}
