use crossterm::event::{KeyCode, KeyEvent};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::format::{derive_website_url, display_date, hex_color, parse_currency, whole_currency};
use crate::models::{BrandGuidelines, Client, ClientProject, ProjectStatus, Stat};
use crate::ui::components::{
    badge::{badge, project_status_color, project_type_color, website_status_color},
    card, progress_gauge,
    stat_card::render_stat_cards,
    MUTED,
};
use crate::ui::render_help_bar;

const DEFAULT_ADDRESS: &str = "123 Main Street";
const DEFAULT_JOIN_DATE: &str = "November 2025";
const DEFAULT_TOTAL_PAID: &str = "$8,945";

// Rows per project card in the projects column
const PROJECT_CARD_HEIGHT: u16 = 5;

/// Sum of the project budgets; unreadable amounts are logged and skipped
fn total_budget(projects: &[ClientProject]) -> u64 {
    projects
        .iter()
        .filter_map(|p| match parse_currency(&p.budget) {
            Ok(amount) => Some(amount),
            Err(err) => {
                tracing::warn!(project_id = %p.id, error = %err, "skipping project budget");
                None
            }
        })
        .sum()
}

/// Rows `lines` take up once wrapped to `width` columns
fn wrapped_height(lines: &[Spans], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub struct ClientDetailState {
    client: Client,
    projects: Vec<ClientProject>,
    website_url: String,
    scroll: u16,
    // Furthest the profile can scroll, known after the first draw
    max_scroll: u16,
    status_message: Option<String>,
}

impl ClientDetailState {
    pub fn new(client: Client, projects: Vec<ClientProject>) -> Self {
        let website_url = client
            .website_url
            .clone()
            .unwrap_or_else(|| derive_website_url(&client.business_name));

        Self {
            client,
            projects,
            website_url,
            scroll: 0,
            max_scroll: 0,
            status_message: None,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Address to show, or "Coming soon" while the site is not live
    pub fn website_display(&self) -> &str {
        if self.client.is_live() {
            &self.website_url
        } else {
            "Coming soon"
        }
    }

    pub fn stats(&self) -> Vec<Stat> {
        let active = self
            .projects
            .iter()
            .filter(|p| p.status != ProjectStatus::Live)
            .count();

        vec![
            Stat::new("Total Projects", self.projects.len().to_string(), None),
            Stat::new("Active Projects", active.to_string(), None),
            Stat::new("Monthly Fee", self.client.monthly_fee.clone(), None),
            Stat::new(
                "Total Paid",
                self.client
                    .total_paid
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TOTAL_PAID.to_string()),
                None,
            ),
        ]
    }

    /// Total Budget, Completed and In Progress across the client's projects
    pub fn project_summary(&self) -> Vec<Stat> {
        let completed = self
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Live)
            .count();

        vec![
            Stat::new("Total Budget", whole_currency(total_budget(&self.projects)), None),
            Stat::new("Completed", completed.to_string(), None),
            Stat::new(
                "In Progress",
                (self.projects.len() - completed).to_string(),
                None,
            ),
        ]
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

pub enum ClientDetailAction {
    Back,
    OpenWebsite(String), // Contains the URL
}

pub fn render_client_detail<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    state: &mut ClientDetailState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Min(8),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(area);

    render_summary(frame, chunks[0], state);
    render_stat_cards(frame, chunks[1], &state.stats());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(chunks[2]);

    render_details(frame, body[0], state);
    render_projects(frame, body[1], &state.projects, &state.project_summary());

    let help_text = match state.status_message() {
        Some(message) => message.to_string(),
        None if state.client.is_live() => {
            "<Esc> Back to Clients | <O> View Website | <Up>/<Down> Scroll".to_string()
        }
        None => "<Esc> Back to Clients | <Up>/<Down> Scroll".to_string(),
    };
    render_help_bar(frame, chunks[3], &help_text);
}

fn render_summary<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &ClientDetailState) {
    let client = &state.client;

    let mut badges = vec![
        badge(
            client.website_status.label(),
            website_status_color(client.website_status),
        ),
        Span::raw(" "),
        badge(client.business_type.label(), Color::Gray),
    ];
    if let Some(industry) = &client.industry {
        badges.push(Span::raw(" "));
        badges.push(Span::styled(industry.clone(), Style::default().fg(MUTED)));
    }

    let mut lines = vec![Spans::from(badges)];
    if let Some(description) = &client.business_description {
        lines.push(Spans::from(description.clone()));
    }

    let summary = Paragraph::new(lines)
        .block(card(&client.business_name))
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, area);
}

fn label_line(label: &str, value: &str) -> Spans<'static> {
    Spans::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(MUTED)),
        Span::raw(value.to_string()),
    ])
}

fn section(title: &str) -> Spans<'static> {
    Spans::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn swatch(name: &str, hex: &Option<String>) -> Option<Spans<'static>> {
    let hex = hex.as_ref()?;
    let style = match hex_color(hex) {
        Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
        None => Style::default(),
    };
    Some(Spans::from(vec![
        Span::styled("████ ", style),
        Span::styled(format!("{:<10}", name), Style::default().fg(MUTED)),
        Span::raw(hex.clone()),
    ]))
}

fn brand_lines(brand: &BrandGuidelines) -> Vec<Spans<'static>> {
    let mut lines = vec![Spans::from(""), section("Brand Guidelines")];

    if let Some(tone) = &brand.tone_of_voice {
        lines.push(label_line("Tone of Voice", ""));
        lines.push(Spans::from(tone.clone()));
    }
    if let Some(colors) = &brand.colors {
        lines.push(label_line("Colors", ""));
        lines.extend(
            [
                ("Primary", &colors.primary),
                ("Secondary", &colors.secondary),
                ("Accent", &colors.accent),
            ]
            .into_iter()
            .filter_map(|(name, hex)| swatch(name, hex)),
        );
    }
    if let Some(fonts) = &brand.fonts {
        if let Some(heading) = &fonts.heading {
            lines.push(label_line("Heading Font", heading));
        }
        if let Some(body) = &fonts.body {
            lines.push(label_line("Body Font", body));
        }
    }
    lines
}

fn render_details<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &mut ClientDetailState) {
    let client = &state.client;

    let mut lines = vec![
        section("Business Details"),
        label_line("Phone", &client.phone),
        label_line("Email", &client.email),
        label_line(
            "Location",
            client.address.as_deref().unwrap_or(DEFAULT_ADDRESS),
        ),
        label_line("", &client.city),
        label_line(
            "Client Since",
            client.join_date.as_deref().unwrap_or(DEFAULT_JOIN_DATE),
        ),
        label_line("Website URL", state.website_display()),
        Spans::from(""),
        section("Contact Person"),
        label_line(&client.contact_person, "Owner"),
    ];

    if let Some(brand) = &client.brand_guidelines {
        lines.extend(brand_lines(brand));
    }

    if let Some(notes) = &client.notes {
        lines.push(Spans::from(""));
        lines.push(section("Notes"));
        lines.push(Spans::from(notes.clone()));
    }

    let block = card("Profile");
    let inner = block.inner(area);
    state.max_scroll = wrapped_height(&lines, inner.width).saturating_sub(inner.height);
    state.scroll = state.scroll.min(state.max_scroll);

    let details = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((state.scroll, 0));
    frame.render_widget(details, area);
}

fn render_projects<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    projects: &[ClientProject],
    summary: &[Stat],
) {
    let outer = card("Projects");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)].as_ref())
        .split(inner);
    render_stat_cards(frame, sections[1], summary);

    let mut constraints = vec![Constraint::Length(PROJECT_CARD_HEIGHT); projects.len()];
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(sections[0]);

    for (project, slot) in projects.iter().zip(slots) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(slot);

        let dates = match &project.completed_date {
            Some(done) => format!(
                "{} - {}",
                display_date(&project.start_date),
                display_date(done)
            ),
            None => format!("Started {}", display_date(&project.start_date)),
        };

        let title = Paragraph::new(Spans::from(vec![
            Span::styled(
                project.project_type.label(),
                Style::default()
                    .fg(project_type_color(project.project_type))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            badge(project.status.label(), project_status_color(project.status)),
            Span::raw(format!("  {}", project.budget)),
        ]));
        frame.render_widget(title, rows[0]);
        frame.render_widget(Paragraph::new(project.description.clone()), rows[1]);
        frame.render_widget(progress_gauge(project.progress), rows[2]);
        frame.render_widget(
            Paragraph::new(dates).style(Style::default().fg(MUTED)),
            rows[3],
        );
    }
}

pub fn handle_key(state: &mut ClientDetailState, key: KeyEvent) -> Option<ClientDetailAction> {
    // A message lasts until the next key press
    state.status_message = None;

    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            return Some(ClientDetailAction::Back);
        }
        KeyCode::Char('o') => {
            if state.client.is_live() {
                return Some(ClientDetailAction::OpenWebsite(state.website_url.clone()));
            }
            state.set_status_message("Website is not live yet");
        }
        KeyCode::Down => state.scroll_down(),
        KeyCode::Up => state.scroll_up(),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleData;
    use crate::ui::test_support::{buffer_text, terminal};
    use crossterm::event::KeyModifiers;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn detail(id: &str) -> ClientDetailState {
        let data = SampleData::load();
        ClientDetailState::new(
            data.client_profile(id).unwrap(),
            data.client_projects(id).unwrap(),
        )
    }

    #[test]
    fn live_client_shows_stored_url() {
        let state = detail("1");
        assert_eq!(state.website_display(), "https://www.mikesplumbing.com");
    }

    #[test]
    fn live_client_without_url_gets_derived_one() {
        let state = detail("5");
        assert_eq!(state.website_display(), "https://www.brightlightelectrical.com");
    }

    #[test]
    fn site_in_progress_is_coming_soon() {
        let state = detail("2");
        assert_eq!(state.website_display(), "Coming soon");
    }

    #[test]
    fn stats_use_defaults_when_missing() {
        let values: Vec<String> = detail("6").stats().into_iter().map(|s| s.value).collect();
        assert_eq!(values, ["2", "1", "$179", "$8,945"]);

        let values: Vec<String> = detail("3").stats().into_iter().map(|s| s.value).collect();
        assert_eq!(values[3], "$4,120");
    }

    #[test]
    fn open_only_for_live_sites() {
        let mut live = detail("3");
        match handle_key(&mut live, make_key(KeyCode::Char('o'))) {
            Some(ClientDetailAction::OpenWebsite(url)) => {
                assert_eq!(url, "https://www.coolairhvac.com")
            }
            _ => panic!("expected open action"),
        }

        let mut building = detail("2");
        assert!(handle_key(&mut building, make_key(KeyCode::Char('o'))).is_none());
        assert_eq!(building.status_message(), Some("Website is not live yet"));
    }

    #[test]
    fn status_message_clears_on_next_key() {
        let mut state = detail("2");
        handle_key(&mut state, make_key(KeyCode::Char('o')));
        assert!(state.status_message().is_some());

        handle_key(&mut state, make_key(KeyCode::Down));
        assert_eq!(state.status_message(), None);
    }

    #[test]
    fn project_summary_totals_budgets() {
        let values: Vec<String> = detail("1")
            .project_summary()
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, ["$3,300", "1", "1"]);
    }

    #[test]
    fn unreadable_budget_is_left_out_of_total() {
        let data = SampleData::load();
        let mut projects = data.client_projects("1").unwrap();
        projects[1].budget = "TBD".to_string();
        let state = ClientDetailState::new(data.client_profile("1").unwrap(), projects);

        assert_eq!(state.project_summary()[0].value, "$2,500");
    }

    #[test]
    fn scroll_stops_at_end_of_profile() {
        let mut state = detail("1");
        let mut terminal = terminal(140, 30);
        terminal
            .draw(|f| render_client_detail(f, f.size(), &mut state))
            .unwrap();
        assert!(state.max_scroll > 0);

        for _ in 0..200 {
            handle_key(&mut state, make_key(KeyCode::Down));
        }
        assert_eq!(state.scroll, state.max_scroll);

        handle_key(&mut state, make_key(KeyCode::Up));
        assert_eq!(state.scroll, state.max_scroll - 1);
    }

    #[test]
    fn short_profile_does_not_scroll() {
        let mut state = detail("6");
        let mut terminal = terminal(140, 60);
        terminal
            .draw(|f| render_client_detail(f, f.size(), &mut state))
            .unwrap();

        handle_key(&mut state, make_key(KeyCode::Down));
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn escape_goes_back() {
        let mut state = detail("1");
        assert!(matches!(
            handle_key(&mut state, make_key(KeyCode::Esc)),
            Some(ClientDetailAction::Back)
        ));
    }

    #[test]
    fn renders_selected_client_fields() {
        let mut state = detail("2");
        let mut terminal = terminal(140, 48);
        terminal
            .draw(|f| render_client_detail(f, f.size(), &mut state))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Elite Electric Co."));
        assert!(text.contains("sarah@eliteelectric.com"));
        assert!(text.contains("456 Oak Avenue"));
        assert!(text.contains("Coming soon"));
        assert!(text.contains("Roboto Bold"));
        assert!(text.contains("#eab308"));
        assert!(text.contains("Total Budget"));
        assert!(text.contains("$3,300"));
    }
}
