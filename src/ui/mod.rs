pub mod client_detail;
pub mod clients;
pub mod components;
pub mod dashboard;
pub mod projects;
pub mod revenue;
pub mod sidebar;

use clap::ValueEnum;
use serde::Deserialize;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SIDEBAR_WIDTH: u16 = 26;

/// Top-level views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Clients,
    Projects,
    Revenue,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Clients, Tab::Projects, Tab::Revenue];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Clients => "Clients",
            Tab::Projects => "Projects",
            Tab::Revenue => "Revenue",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Number-key shortcut, '1' for the first tab
    pub fn from_shortcut(c: char) -> Option<Tab> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Tab::ALL.get(i).copied())
    }
}

/// Areas of the screen: sidebar, header and the active view
pub struct AppLayout {
    pub sidebar: Rect,
    pub header: Rect,
    pub content: Rect,
}

pub fn app_layout(size: Rect) -> AppLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)].as_ref())
        .split(size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)].as_ref())
        .split(columns[1]);

    AppLayout {
        sidebar: columns[0],
        header: rows[0],
        content: rows[1],
    }
}

pub fn render_header<B: Backend>(frame: &mut Frame<B>, area: Rect, title: &str) {
    let header = Paragraph::new(Spans::from(vec![Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )]))
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Key hints along the bottom edge of a view
pub fn render_help_bar<B: Backend>(frame: &mut Frame<B>, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string())
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(help, area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use tui::{backend::TestBackend, Terminal};

    pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    /// Rendered buffer as one line of text per row
    pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_both_ways() {
        assert_eq!(Tab::Dashboard.next(), Tab::Clients);
        assert_eq!(Tab::Revenue.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.previous(), Tab::Revenue);
    }

    #[test]
    fn number_shortcuts() {
        assert_eq!(Tab::from_shortcut('1'), Some(Tab::Dashboard));
        assert_eq!(Tab::from_shortcut('4'), Some(Tab::Revenue));
        assert_eq!(Tab::from_shortcut('0'), None);
        assert_eq!(Tab::from_shortcut('5'), None);
        assert_eq!(Tab::from_shortcut('x'), None);
    }

    #[test]
    fn layout_reserves_sidebar() {
        let layout = app_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
        assert_eq!(layout.content.height, 37);
    }
}
