use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::sync::Arc;
use std::{io, time::Duration};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod app;
mod config;
mod error;
mod events;
mod files;
mod helpers;
mod models;
mod permissions;
mod state;
mod ui;

use api::PanelClient;
use app::App;
use config::ConfigManager;

#[derive(Parser, Debug)]
#[command(name = "pfm")]
#[command(about = "Browse a game server's files from the terminal")]
#[command(version)]
struct Cli {
    /// Server identifier (defaults to `default_server` from the config)
    #[arg(long, short)]
    server: Option<String>,

    /// Directory to open, e.g. /plugins
    #[arg(long, short, default_value = "/")]
    path: String,

    /// Path to config file
    #[arg(long, env = "PFM_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "debug", env = "PFM_LOG_LEVEL")]
    log_level: String,
}

fn init_logging(config_manager: &ConfigManager, level: &str) -> Result<()> {
    let log_dir = config_manager.log_dir();
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir).context("Failed to create log directory")?;
    }

    let log_file = log_dir.join(format!("pfm_{}.log", Local::now().format("%Y%m%d_%H%M%S")));
    let file = File::create(&log_file).context("Failed to create log file")?;

    fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("pfm={}", level).parse()?),
        )
        .with_ansi(false)
        .with_writer(file)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_manager = match &cli.config {
        Some(path) => ConfigManager::from_path(path),
        None => ConfigManager::new()?,
    };
    init_logging(&config_manager, &cli.log_level)?;

    let app_config = config_manager.load_config()?;
    app_config.validate().with_context(|| {
        format!(
            "Invalid config at {}",
            config_manager.config_path().display()
        )
    })?;

    let server_id = cli
        .server
        .or_else(|| app_config.default_server.clone())
        .context("No server given: pass --server or set default_server in the config")?;

    let client = PanelClient::new(&app_config)?;
    info!("Resolving server {}", server_id);
    let (server, permissions) = client
        .get_server(&server_id)
        .await
        .map_err(|e| anyhow::anyhow!(error::to_human_message(&e)))
        .with_context(|| format!("Failed to load server {}", server_id))?;

    let app = App::new(server, permissions, Arc::new(client), &cli.path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui::draw::<B>(f, &mut app))?;

        // Yield so retrieval tasks make progress between frames
        tokio::task::yield_now().await;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            debug!("Quit requested");
            return Ok(());
        }
    }
}
