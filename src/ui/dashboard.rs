use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::Paragraph,
    Frame,
};

use crate::data::SampleData;
use crate::ui::components::{
    badge::{badge, project_status_color},
    card, progress_gauge,
    stat_card::render_stat_cards,
    MUTED,
};

pub fn render_dashboard<B: Backend>(frame: &mut Frame<B>, area: Rect, data: &SampleData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(6),
            ]
            .as_ref(),
        )
        .split(area);

    let welcome = Paragraph::new(vec![
        Spans::from(Span::styled(
            "Welcome back, Alex!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Spans::from(Span::styled(
            "Here's what's happening with your clients today",
            Style::default().fg(MUTED),
        )),
    ]);
    frame.render_widget(welcome, chunks[0]);

    render_stat_cards(frame, chunks[1], data.dashboard_stats());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
        .split(chunks[2]);

    render_recent_projects(frame, body[0], data);
    render_quick_stats(frame, body[1], data);
}

fn render_recent_projects<B: Backend>(frame: &mut Frame<B>, area: Rect, data: &SampleData) {
    let outer = card("Recent Projects");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let projects = data.recent_projects();
    let mut constraints = vec![Constraint::Length(3); projects.len()];
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (project, slot) in projects.iter().zip(slots) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
            .split(slot);

        let trade = data
            .business_type_of(&project.client_name)
            .map_or("", |t| t.label());
        let title = Paragraph::new(Spans::from(vec![
            Span::styled(
                project.client_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}  ", trade), Style::default().fg(MUTED)),
            badge(project.status.label(), project_status_color(project.status)),
        ]));
        frame.render_widget(title, rows[0]);
        frame.render_widget(progress_gauge(project.progress), rows[1]);
    }
}

fn render_quick_stats<B: Backend>(frame: &mut Frame<B>, area: Rect, data: &SampleData) {
    let mut lines = Vec::new();
    for stat in data.quick_stats() {
        lines.push(Spans::from(Span::styled(
            stat.label.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Spans::from(Span::styled(
            stat.value.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Spans::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(card("Quick Stats")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, terminal};

    #[test]
    fn renders_stats_and_recent_projects() {
        let data = SampleData::load();
        let mut terminal = terminal(120, 30);
        terminal
            .draw(|f| render_dashboard(f, f.size(), &data))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Welcome back, Alex!"));
        assert!(text.contains("Total Clients"));
        assert!(text.contains("$18.2K"));
        assert!(text.contains("Fast Fix Plumbing"));
        assert!(text.contains("Client Satisfaction"));
        assert!(text.contains("4.8/5.0"));
        assert!(text.contains("Electrician"));
        assert!(!text.contains("New Website"));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let data = SampleData::load();
        let mut terminal = terminal(40, 10);
        let result = terminal.draw(|f| render_dashboard(f, f.size(), &data));
        assert!(result.is_ok());
    }
}
