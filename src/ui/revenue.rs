use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Span, Spans},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::data::SampleData;
use crate::format::{bar_width, compact_currency, display_date};
use crate::ui::components::{
    badge::{badge, payment_status_color},
    card,
    stat_card::render_stat_cards,
    ACCENT, MUTED,
};

// Month label, amount and client count around each bar
const BAR_GUTTER: u16 = 26;

pub fn render_revenue<B: Backend>(frame: &mut Frame<B>, area: Rect, data: &SampleData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)].as_ref())
        .split(area);

    render_stat_cards(frame, chunks[0], data.revenue_stats());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(chunks[1]);

    render_trend(frame, body[0], data);
    render_invoices(frame, body[1], data);
}

fn render_trend<B: Backend>(frame: &mut Frame<B>, area: Rect, data: &SampleData) {
    let block = card("Revenue Trend");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let months = data.monthly_revenue();
    let max = months.iter().map(|m| m.revenue).max().unwrap_or(0);
    let width = inner.width.saturating_sub(BAR_GUTTER);

    let mut lines: Vec<Spans> = months
        .iter()
        .map(|m| {
            let bar = bar_width(m.revenue, max, width) as usize;
            Spans::from(vec![
                Span::styled(format!("{:<4}", m.month), Style::default().fg(MUTED)),
                Span::styled("█".repeat(bar), Style::default().fg(ACCENT)),
                Span::raw(format!(" {}", compact_currency(m.revenue))),
                Span::styled(format!("  {} clients", m.clients), Style::default().fg(MUTED)),
            ])
        })
        .collect();

    lines.push(Spans::from(""));
    lines.push(Spans::from(vec![
        Span::styled("Average Monthly ", Style::default().fg(MUTED)),
        Span::styled(
            compact_currency(data.average_monthly_revenue()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Growth Rate ", Style::default().fg(MUTED)),
        Span::styled(
            data.growth_rate().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_invoices<B: Backend>(frame: &mut Frame<B>, area: Rect, data: &SampleData) {
    let items: Vec<ListItem> = data
        .invoices()
        .iter()
        .map(|invoice| {
            ListItem::new(vec![
                Spans::from(vec![
                    Span::styled(
                        invoice.client.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {}  ", invoice.amount)),
                    badge(invoice.status.label(), payment_status_color(invoice.status)),
                ]),
                Spans::from(Span::styled(
                    format!("{} - {}", invoice.kind, display_date(&invoice.date)),
                    Style::default().fg(MUTED),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(card("Recent Invoices")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, terminal};

    #[test]
    fn renders_trend_and_invoices() {
        let data = SampleData::load();
        let mut terminal = terminal(140, 30);
        terminal
            .draw(|f| render_revenue(f, f.size(), &data))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("$94,300"));
        assert!(text.contains("$12.4K"));
        assert!(text.contains("$18.2K"));
        assert!(text.contains("Average Monthly $15.7K"));
        assert!(text.contains("Climate Control Experts"));
        assert!(text.contains("[Overdue]"));
        assert!(text.contains("Jan 15, 2026"));
    }

    #[test]
    fn longest_bar_belongs_to_best_month() {
        let data = SampleData::load();
        let mut terminal = terminal(80, 12);
        terminal
            .draw(|f| render_trend(f, f.size(), &data))
            .unwrap();

        let text = buffer_text(&terminal);
        let bar_len = |month: &str| {
            text.lines()
                .find(|l| l.contains(&format!("{:<4}", month)) && l.contains('█'))
                .map(|l| l.chars().filter(|c| *c == '█').count())
                .unwrap_or(0)
        };
        assert!(bar_len("Jun") > bar_len("Jan"));
        assert!(bar_len("Jan") > 0);
    }
}
