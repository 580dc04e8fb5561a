mod browser;
mod config;
mod data;
mod error;
mod format;
mod listing;
mod logging;
mod models;
mod ui;

use std::io;
use anyhow::Result;
use crossterm::{
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
};
use tracing::{info, warn};
use tui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::data::SampleData;
use crate::ui::{
    Tab, app_layout, render_header,
    sidebar::render_sidebar,
    dashboard::render_dashboard,
    clients::{ClientsState, ClientAction, render_clients, handle_key as handle_clients_key},
    client_detail::{ClientDetailState, ClientDetailAction, render_client_detail, handle_key as handle_client_detail_key},
    projects::{ProjectsState, render_projects, handle_key as handle_projects_key},
    revenue::render_revenue,
};

// Represents the current screen in the app
#[derive(Debug, Clone, PartialEq)]
enum AppScreen {
    Dashboard,
    Clients,
    ClientDetail(String), // Contains client id
    Projects,
    Revenue,
}

impl AppScreen {
    fn for_tab(tab: Tab) -> Self {
        match tab {
            Tab::Dashboard => AppScreen::Dashboard,
            Tab::Clients => AppScreen::Clients,
            Tab::Projects => AppScreen::Projects,
            Tab::Revenue => AppScreen::Revenue,
        }
    }
}

// Main application state
struct AppState {
    data: SampleData,
    tab: Tab,
    screen: AppScreen,
    clients_state: ClientsState,
    client_detail_state: Option<ClientDetailState>,
    projects_state: ProjectsState,
}

impl AppState {
    fn new(data: SampleData, config: &Config) -> Self {
        let clients_state = ClientsState::new(data.clients().to_vec(), config.page_size);
        let projects_state = ProjectsState::new(
            data.projects().to_vec(),
            data.project_stats(),
            config.page_size,
        );

        Self {
            data,
            tab: config.start_tab,
            screen: AppScreen::for_tab(config.start_tab),
            clients_state,
            client_detail_state: None,
            projects_state,
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab && !matches!(self.screen, AppScreen::ClientDetail(_)) {
            return;
        }
        info!(from = self.tab.label(), to = tab.label(), "switching tab");

        // Leaving through the sidebar always drops the open client
        self.client_detail_state = None;
        self.tab = tab;
        self.screen = AppScreen::for_tab(tab);
    }

    fn title(&self) -> &str {
        match &self.screen {
            AppScreen::ClientDetail(id) => self
                .client_detail_state
                .as_ref()
                .map_or(id.as_str(), |s| s.client().business_name.as_str()),
            _ => self.tab.label(),
        }
    }

    /// Whether keystrokes are going into a search box
    fn is_capturing_text(&self) -> bool {
        match self.screen {
            AppScreen::Clients => self.clients_state.is_searching(),
            AppScreen::Projects => self.projects_state.is_searching(),
            _ => false,
        }
    }

    fn open_client(&mut self, client_id: &str) -> Result<()> {
        let client = self.data.client_profile(client_id)?;
        let projects = self.data.client_projects(client_id)?;
        info!(client_id, name = %client.business_name, "opening client");

        self.client_detail_state = Some(ClientDetailState::new(client, projects));
        self.screen = AppScreen::ClientDetail(client_id.to_string());
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::init()?;
    logging::init(&config)?;
    info!(page_size = config.page_size, start_tab = config.start_tab.label(), "starting agency dashboard");

    let data = SampleData::load();

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app_state = AppState::new(data, &config);

    // Run the main app loop
    let result = run_app(&mut terminal, &mut app_state).await;

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // The terminal is back to normal, so the error can reach the shell
    finish(result)
}

/// Log how the loop ended and pass its result on as the exit status
fn finish(result: Result<()>) -> Result<()> {
    match &result {
        Ok(()) => info!("agency dashboard stopped"),
        Err(err) => tracing::error!(error = %err, "dashboard exited with error"),
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    loop {
        draw(terminal, app_state)?;

        let Some(key) = read_key()? else {
            continue;
        };

        if apply_key(app_state, key)? {
            break;
        }
    }

    Ok(())
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    terminal.draw(|f| {
        let layout = app_layout(f.size());
        render_sidebar(f, layout.sidebar, app_state.tab);
        render_header(f, layout.header, app_state.title());

        match app_state.screen {
            AppScreen::Dashboard => render_dashboard(f, layout.content, &app_state.data),
            AppScreen::Clients => render_clients(f, layout.content, &mut app_state.clients_state),
            AppScreen::ClientDetail(_) => {
                if let Some(state) = &mut app_state.client_detail_state {
                    render_client_detail(f, layout.content, state);
                }
            }
            AppScreen::Projects => render_projects(f, layout.content, &mut app_state.projects_state),
            AppScreen::Revenue => render_revenue(f, layout.content, &app_state.data),
        }
    })?;

    Ok(())
}

// Blocks until the next key press; other events just trigger a redraw
fn read_key() -> Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Route one key press; returns true when the app should quit
fn apply_key(app_state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    if !app_state.is_capturing_text() {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Tab => {
                app_state.switch_tab(app_state.tab.next());
                return Ok(false);
            }
            KeyCode::BackTab => {
                app_state.switch_tab(app_state.tab.previous());
                return Ok(false);
            }
            KeyCode::Char(c) => {
                if let Some(tab) = Tab::from_shortcut(c) {
                    app_state.switch_tab(tab);
                    return Ok(false);
                }
            }
            _ => {}
        }
    }

    match app_state.screen {
        AppScreen::Clients => {
            if let Some(ClientAction::SelectClient(client_id)) =
                handle_clients_key(&mut app_state.clients_state, key)
            {
                app_state.open_client(&client_id)?;
            }
        }
        AppScreen::ClientDetail(_) => {
            if let Some(state) = &mut app_state.client_detail_state {
                match handle_client_detail_key(state, key) {
                    Some(ClientDetailAction::Back) => {
                        // The list keeps its search, filter and page
                        app_state.client_detail_state = None;
                        app_state.screen = AppScreen::Clients;
                    }
                    Some(ClientDetailAction::OpenWebsite(url)) => {
                        info!(%url, "opening client website");
                        match browser::open(&url) {
                            Ok(()) => state.set_status_message(format!("Opened {}", url)),
                            Err(err) => {
                                warn!(%url, error = %err, "could not open website");
                                state.set_status_message(format!("Could not open {}", url));
                            }
                        }
                    }
                    None => {}
                }
            }
        }
        AppScreen::Projects => handle_projects_key(&mut app_state.projects_state, key),
        AppScreen::Dashboard | AppScreen::Revenue => {}
    }

    Ok(false)
}
