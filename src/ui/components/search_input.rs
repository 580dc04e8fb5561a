use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Apply a key to a text field; returns true when the text changed
pub fn edit_text(text: &mut String, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => {
            text.push(c);
            true
        }
        KeyCode::Backspace => text.pop().is_some(),
        _ => false,
    }
}

/// Search box on the left, status filter on the right
pub fn render_search_bar<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    text: &str,
    editing: bool,
    placeholder: &str,
    filter_label: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)].as_ref())
        .split(area);

    let content = if editing {
        Spans::from(vec![
            Span::styled(text.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("|"),
        ])
    } else if text.is_empty() {
        Spans::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Spans::from(Span::raw(text.to_string()))
    };

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .title("Search </>")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(search, chunks[0]);

    let filter = Paragraph::new(format!("{} v", filter_label))
        .block(Block::default().title("Status <F>").borders(Borders::ALL));
    frame.render_widget(filter, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace() {
        let mut text = String::new();
        assert!(edit_text(&mut text, KeyCode::Char('h')));
        assert!(edit_text(&mut text, KeyCode::Char('i')));
        assert_eq!(text, "hi");

        assert!(edit_text(&mut text, KeyCode::Backspace));
        assert_eq!(text, "h");
        assert!(edit_text(&mut text, KeyCode::Backspace));
        assert!(!edit_text(&mut text, KeyCode::Backspace));
        assert!(!edit_text(&mut text, KeyCode::Down));
    }
}
