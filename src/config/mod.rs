use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use serde::Deserialize;

use crate::error::DashboardError;
use crate::listing::DEFAULT_PAGE_SIZE;
use crate::ui::Tab;

/// Command line overrides for the environment configuration
#[derive(Debug, Default, Parser)]
#[command(name = "agency-dashboard", about = "Browse clients, projects and revenue")]
pub struct Cli {
    /// Tab to open on start
    #[arg(long, value_enum)]
    pub tab: Option<Tab>,

    /// Rows per page in the client and project lists
    #[arg(long)]
    pub page_size: Option<usize>,

    /// File that receives the log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Configuration for the application
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub start_tab: Tab,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("agency-dashboard.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from `DASHBOARD_*` environment variables
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::prefixed("DASHBOARD_").from_env::<Config>()?;

        Ok(config)
    }

    /// Layer command line flags over the loaded values
    pub fn apply_cli(mut self, cli: Cli) -> Self {
        if let Some(tab) = cli.tab {
            self.start_tab = tab;
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = page_size;
        }
        if let Some(log_file) = cli.log_file {
            self.log_file = log_file;
        }
        self
    }

    pub fn validate(self) -> Result<Self, DashboardError> {
        if self.page_size == 0 {
            return Err(DashboardError::InvalidPageSize(self.page_size));
        }
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            start_tab: Tab::default(),
        }
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    let cli = Cli::parse();

    let config = Config::load()?.apply_cli(cli).validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config: Config = envy::from_iter(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 8);
    }

    #[test]
    fn environment_values_are_read() {
        let config: Config = envy::from_iter(vars(&[
            ("PAGE_SIZE", "5"),
            ("LOG_LEVEL", "debug"),
            ("START_TAB", "revenue"),
        ]))
        .unwrap();

        assert_eq!(config.page_size, 5);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.start_tab, Tab::Revenue);
    }

    #[test]
    fn cli_flags_override_environment() {
        let cli = Cli::parse_from(["agency-dashboard", "--tab", "projects", "--page-size", "3"]);
        let config = Config::default().apply_cli(cli);

        assert_eq!(config.start_tab, Tab::Projects);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.log_file, PathBuf::from("agency-dashboard.log"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = Config {
            page_size: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(DashboardError::InvalidPageSize(0)));
    }
}
