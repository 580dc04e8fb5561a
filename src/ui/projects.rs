use crossterm::event::{KeyCode, KeyEvent};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::format::display_date;
use crate::listing::{ListQuery, Pagination};
use crate::models::{Project, ProjectStatus, Stat};
use crate::ui::clients::render_pagination;
use crate::ui::components::{
    badge::{badge, project_status_color, project_type_color},
    columns, progress_gauge,
    search_input::{edit_text, render_search_bar},
    stat_card::render_stat_cards,
    ACCENT, MUTED,
};
use crate::ui::render_help_bar;

const CARD_COLUMNS: usize = 2;
const CARD_HEIGHT: u16 = 7;

// Represents the state of the project board
pub struct ProjectsState {
    projects: Vec<Project>,
    stats: Vec<Stat>,
    query: ListQuery<ProjectStatus>,
    searching: bool,
    pagination: Pagination,
    selected: Option<usize>,
}

impl ProjectsState {
    pub fn new(projects: Vec<Project>, stats: Vec<Stat>, page_size: usize) -> Self {
        let mut state = Self {
            projects,
            stats,
            query: ListQuery::default(),
            searching: false,
            pagination: Pagination::new(page_size),
            selected: None,
        };
        state.reset_selection();
        state
    }

    pub fn filtered(&self) -> Vec<&Project> {
        self.query.apply(&self.projects)
    }

    pub fn visible(&self) -> Vec<&Project> {
        self.pagination.page(&self.filtered()).to_vec()
    }

    fn reset_selection(&mut self) {
        self.selected = if self.visible().is_empty() { None } else { Some(0) };
    }

    fn requery(&mut self) {
        self.pagination.reset();
        self.reset_selection();
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    pub fn previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + len - 1) % len));
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
        self.query.status = self.query.status.cycle(ProjectStatus::ALL);
        tracing::debug!(filter = %self.query.status.label(), "project status filter changed");
        self.requery();
    }

    pub fn edit_search(&mut self, key: KeyCode) {
        if edit_text(&mut self.query.search, key) {
            self.requery();
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let visible = self.visible();
        self.selected.and_then(|i| visible.get(i).copied())
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn query(&self) -> &ListQuery<ProjectStatus> {
        &self.query
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

pub fn render_projects<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &mut ProjectsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(CARD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(area);

    render_stat_cards(frame, chunks[0], &state.stats);
    render_search_bar(
        frame,
        chunks[1],
        &state.query().search,
        state.is_searching(),
        "Search projects",
        &state.query().status.label(),
    );

    let visible = state.visible();
    let selected_id = state.selected_project().map(|p| p.id.as_str());
    let row_count = visible.len().div_ceil(CARD_COLUMNS);
    let mut constraints = vec![Constraint::Length(CARD_HEIGHT); row_count];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[2]);

    for (i, project) in visible.iter().enumerate() {
        let cells = columns(rows[i / CARD_COLUMNS], CARD_COLUMNS);
        let selected = selected_id == Some(project.id.as_str());
        render_project_card(frame, cells[i % CARD_COLUMNS], project, selected);
    }

    render_pagination(frame, chunks[3], state.pagination(), state.filtered().len());

    let help_text = if state.is_searching() {
        "Type to search | <Enter>/<Esc> Done"
    } else {
        "</> Search | <F> Filter | <Up>/<Down> Select | <Left>/<Right> Page | <Q> Quit"
    };
    render_help_bar(frame, chunks[4], help_text);
}

fn render_project_card<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    project: &Project,
    selected: bool,
) {
    let border_style = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(project.client_name.clone())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(inner);

    let heading = Paragraph::new(Spans::from(vec![
        Span::styled(
            project.project_type.label(),
            Style::default().fg(project_type_color(project.project_type)),
        ),
        Span::raw("  "),
        badge(project.status.label(), project_status_color(project.status)),
    ]));
    frame.render_widget(heading, rows[0]);
    frame.render_widget(progress_gauge(project.progress), rows[1]);

    let dates = Paragraph::new(Spans::from(vec![
        Span::styled("Start ", Style::default().fg(MUTED)),
        Span::raw(display_date(&project.start_date)),
        Span::styled("  Deadline ", Style::default().fg(MUTED)),
        Span::raw(display_date(&project.deadline)),
    ]));
    frame.render_widget(dates, rows[2]);

    let budget = Paragraph::new(Spans::from(vec![
        Span::styled("Budget ", Style::default().fg(MUTED)),
        Span::styled(
            project.budget.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(budget, rows[3]);
}

pub fn handle_key(state: &mut ProjectsState, key: KeyEvent) {
    if state.searching {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => state.searching = false,
            code => state.edit_search(code),
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => state.searching = true,
        KeyCode::Char('f') => state.cycle_status_filter(),
        KeyCode::Down => state.next(),
        KeyCode::Up => state.previous(),
        KeyCode::Right => state.next_page(),
        KeyCode::Left => state.previous_page(),
        _ => {}
    }
}
