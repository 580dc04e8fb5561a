use crossterm::event::{KeyCode, KeyEvent};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::listing::{ListQuery, PageButton, Pagination};
use crate::models::{Client, WebsiteStatus};
use crate::ui::components::{
    badge::{badge, website_status_color},
    highlight_style,
    search_input::{edit_text, render_search_bar},
    ACCENT,
};
use crate::ui::render_help_bar;

// Represents the state of the client list screen
pub struct ClientsState {
    clients: Vec<Client>,
    query: ListQuery<WebsiteStatus>,
    searching: bool,
    pagination: Pagination,
    table_state: TableState,
}

impl ClientsState {
    pub fn new(clients: Vec<Client>, page_size: usize) -> Self {
        let mut state = Self {
            clients,
            query: ListQuery::default(),
            searching: false,
            pagination: Pagination::new(page_size),
            table_state: TableState::default(),
        };
        state.reset_selection();
        state
    }

    pub fn filtered(&self) -> Vec<&Client> {
        self.query.apply(&self.clients)
    }

    /// Matching clients on the current page
    pub fn visible(&self) -> Vec<&Client> {
        self.pagination.page(&self.filtered()).to_vec()
    }

    fn reset_selection(&mut self) {
        let selected = if self.visible().is_empty() { None } else { Some(0) };
        self.table_state.select(selected);
    }

    // Search text or filter changed, so the result set did too
    fn requery(&mut self) {
        self.pagination.reset();
        self.reset_selection();
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn next_page(&mut self) {
        let before = self.pagination.current();
        self.pagination.next(self.filtered().len());
        if self.pagination.current() != before {
            self.reset_selection();
        }
    }

    pub fn previous_page(&mut self) {
        let before = self.pagination.current();
        self.pagination.previous();
        if self.pagination.current() != before {
            self.reset_selection();
        }
    }

    pub fn cycle_status_filter(&mut self) {
        self.query.status = self.query.status.cycle(WebsiteStatus::ALL);
        tracing::debug!(filter = %self.query.status.label(), "client status filter changed");
        self.requery();
    }

    pub fn edit_search(&mut self, key: KeyCode) {
        if edit_text(&mut self.query.search, key) {
            self.requery();
        }
    }

    pub fn selected_client(&self) -> Option<&Client> {
        let visible = self.visible();
        self.table_state
            .selected()
            .and_then(|i| visible.get(i).copied())
    }

    pub fn selected_client_id(&self) -> Option<String> {
        self.selected_client().map(|c| c.id.clone())
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn query(&self) -> &ListQuery<WebsiteStatus> {
        &self.query
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

pub enum ClientAction {
    SelectClient(String), // Contains client id
}

pub fn render_clients<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &mut ClientsState) {
    // Create the layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(area);

    render_search_bar(
        frame,
        chunks[0],
        &state.query().search,
        state.is_searching(),
        "Search",
        &state.query().status.label(),
    );

    // Define the header cells
    let header_cells = [
        "Business Name",
        "Contact Person",
        "Type",
        "Phone",
        "Email",
        "City",
        "Status",
        "Actions",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Gray)));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let visible = state.visible();
    let rows: Vec<Row> = visible
        .iter()
        .map(|client| {
            let status = client.website_status;
            Row::new(vec![
                Cell::from(client.business_name.clone()).style(Style::default().fg(ACCENT)),
                Cell::from(client.contact_person.clone()),
                Cell::from(client.business_type.label()),
                Cell::from(client.phone.clone()),
                Cell::from(client.email.clone()),
                Cell::from(client.city.clone()),
                Cell::from(Spans::from(badge(status.label(), website_status_color(status)))),
                Cell::from("Edit | Delete"),
            ])
        })
        .collect();

    let table = Table::new(rows)
        .header(header)
        .block(Block::default().title("All Clients").borders(Borders::ALL))
        .highlight_style(highlight_style())
        .widths(&[
            Constraint::Percentage(18),
            Constraint::Percentage(13),
            Constraint::Percentage(9),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
            Constraint::Percentage(10),
            Constraint::Percentage(10),
            Constraint::Percentage(10),
        ]);

    frame.render_stateful_widget(table, chunks[1], &mut state.table_state);

    let total = state.filtered().len();
    render_pagination(frame, chunks[2], state.pagination(), total);

    let help_text = if state.searching {
        "Type to search | <Enter>/<Esc> Done"
    } else if state.selected_client().is_some() {
        "</> Search | <F> Filter | <Left>/<Right> Page | <Enter> View Client | <Q> Quit"
    } else {
        "</> Search | <F> Filter | <Left>/<Right> Page | <Q> Quit"
    };
    render_help_bar(frame, chunks[3], help_text);
}

/// "Showing data 1 to 8 of 8 entries" plus the page buttons
pub fn render_pagination<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    pagination: &Pagination,
    total: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(30)].as_ref())
        .split(area);

    let summary = Paragraph::new(pagination.summary(total)).style(Style::default().fg(Color::Gray));
    frame.render_widget(summary, chunks[0]);

    let arrow = |enabled: bool, text: &'static str| {
        let style = if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(text, style)
    };

    let mut spans = vec![arrow(pagination.has_previous(), "< ")];
    for button in pagination.buttons(total) {
        match button {
            PageButton::Page(n) if n == pagination.current() => {
                spans.push(Span::styled(format!(" {} ", n), highlight_style()));
            }
            PageButton::Page(n) => spans.push(Span::raw(format!(" {} ", n))),
            PageButton::Ellipsis => spans.push(Span::raw(" ... ")),
        }
    }
    spans.push(arrow(pagination.has_next(total), " >"));

    frame.render_widget(Paragraph::new(Spans::from(spans)), chunks[1]);
}

pub fn handle_key(state: &mut ClientsState, key: KeyEvent) -> Option<ClientAction> {
    if state.searching {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => state.searching = false,
            code => state.edit_search(code),
        }
        return None;
    }

    match key.code {
        KeyCode::Char('/') => {
            state.searching = true;
        }
        KeyCode::Char('f') => {
            state.cycle_status_filter();
        }
        KeyCode::Down => {
            state.next();
        }
        KeyCode::Up => {
            state.previous();
        }
        KeyCode::Right => {
            state.next_page();
        }
        KeyCode::Left => {
            state.previous_page();
        }
        KeyCode::Enter => {
            if let Some(id) = state.selected_client_id() {
                return Some(ClientAction::SelectClient(id));
            }
        }
        _ => {}
    }
    None
}
