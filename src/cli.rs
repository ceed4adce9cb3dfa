//! Command-line surface: global flags, subcommands and their dispatch.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::app::settings::{self, load_settings_from, Settings};
use crate::catalog::{self, Catalog};
use crate::errors::AppError;
use crate::logging;
use crate::runner::{self, headless};
use crate::ui::ThemeName;

#[derive(Debug, Parser)]
#[command(
    name = "northwindDemo",
    version,
    about = "Run the Northwind EF Core demo endpoints from a terminal"
)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "NORTHWIND_API_URL", global = true)]
    pub base_url: Option<String>,

    /// Settings file to use instead of the one in the user config dir
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    pub theme: Option<ThemeName>,

    /// Page to open the UI on (route path or sidebar label)
    #[arg(long, value_name = "PAGE")]
    pub page: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the demo pages
    Pages,
    /// List the demos of one page
    Demos { page: String },
    /// Run demos without the UI and print their results
    Run {
        page: String,
        /// Demo names; all demos of the page when omitted
        demos: Vec<String>,
        /// Print raw responses as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Settings file location: `--config`, else the user config dir.
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| settings::settings_path().ok())
    }

    /// File settings with command-line overrides applied.
    pub fn settings(&self) -> Result<Settings, AppError> {
        let mut s = match self.settings_path() {
            Some(p) => load_settings_from(&p)?,
            None => Settings::default(),
        };
        if let Some(url) = &self.base_url {
            s.base_url = url.clone();
        }
        if let Some(theme) = self.theme {
            s.theme = theme;
        }
        Ok(s)
    }
}

fn find_page(page: &str) -> Result<&'static Catalog, AppError> {
    catalog::lookup(page).ok_or_else(|| AppError::UnknownPage(page.to_string()))
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = cli.settings()?;

    let Some(command) = &cli.command else {
        return run_tui(&cli, settings).await;
    };

    logging::init_stderr(&settings.log_level)?;
    let mut out = std::io::stdout().lock();
    match command {
        Command::Pages => headless::print_pages(&mut out)?,
        Command::Demos { page } => headless::print_demos(&mut out, find_page(page)?)?,
        Command::Run { page, demos, json } => {
            let catalog = find_page(page)?;
            let selected = headless::select_demos(catalog, demos)?;
            let api = ApiClient::new(&settings.base_url).map_err(AppError::Client)?;
            let results = headless::run_demos(&api, &selected).await;
            let failures = headless::write_report(&mut out, &results, *json)?;
            out.flush()?;
            if failures > 0 {
                warn!(failures, total = results.len(), "some demos failed");
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_tui(cli: &Cli, settings: Settings) -> anyhow::Result<ExitCode> {
    let log_dir = settings::user_cache_dir().unwrap_or_else(std::env::temp_dir);
    let _guard = logging::init_file(&settings.log_level, &log_dir)?;
    if let Err(e) = settings::ensure_dirs_exist() {
        warn!(error = %e, "could not create config dirs");
    }

    // An unknown --page still opens the UI, on an empty content pane.
    let route = match cli.page.as_deref() {
        Some(p) => catalog::lookup(p)
            .map(|c| c.path().to_string())
            .unwrap_or_else(|| p.to_string()),
        None => "/".to_string(),
    };

    let api = ApiClient::new(&settings.base_url).map_err(AppError::Client)?;
    info!(base_url = %api.base_url(), "starting UI");
    runner::run_app(settings, Arc::new(api), &route, cli.settings_path())
        .await
        .context("terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}
