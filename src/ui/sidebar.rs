use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::components::{highlight_style, MUTED};
use super::Tab;

pub fn render_sidebar<B: Backend>(frame: &mut Frame<B>, area: Rect, active: Tab) {
    let outer = Block::default().borders(Borders::RIGHT);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(inner);

    let brand = Paragraph::new(vec![
        Spans::from(Span::styled(
            " WebAgency",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Spans::from(Span::styled(" v.01", Style::default().fg(MUTED))),
    ]);
    frame.render_widget(brand, chunks[0]);

    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let marker = if *tab == active { " >" } else { "" };
            ListItem::new(Spans::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(MUTED)),
                Span::raw(tab.label()),
                Span::raw(marker),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Tab::ALL.iter().position(|t| *t == active));

    let menu = List::new(items).highlight_style(highlight_style());
    frame.render_stateful_widget(menu, chunks[1], &mut list_state);

    let user = Paragraph::new(vec![
        Spans::from(Span::styled(
            " Alex Morgan",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Spans::from(Span::styled(" Agency Owner", Style::default().fg(Color::Gray))),
    ])
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(user, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, terminal};

    #[test]
    fn lists_every_tab_and_marks_active() {
        let mut terminal = terminal(26, 20);
        terminal
            .draw(|f| render_sidebar(f, f.size(), Tab::Projects))
            .unwrap();

        let text = buffer_text(&terminal);
        for tab in Tab::ALL {
            assert!(text.contains(tab.label()), "missing {}", tab.label());
        }
        assert!(text.contains("Projects >"));
        assert!(!text.contains("Clients >"));
        assert!(text.contains("Alex Morgan"));
    }
}
