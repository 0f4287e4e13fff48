//! wedplan - wedding RSVP site and planner dashboard
//!
//! CLI entry point. With no subcommand the TUI opens; `wp rsvps` prints
//! the guest responses without entering the terminal UI.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use slotstore::SlotStore;
use wedplan::assistant::Assistant;
use wedplan::cli::{Cli, Command, OutputFormat};
use wedplan::config::Config;
use wedplan::domain::Attendance;
use wedplan::store::PlannerStore;
use wedplan::tui;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wedplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    // Logs go to a file: stdout belongs to the TUI
    let log_file = fs::File::create(log_dir.join("wedplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let data_dir = config.storage.resolve(cli.data_dir.as_ref());
    debug!(?data_dir, "main: resolved data directory");

    // Dispatch command
    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Rsvps { format }) => {
            debug!(?format, "main: matched Rsvps command");
            cmd_rsvps(&data_dir, format)
        }
        None => {
            debug!("main: no command specified, launching TUI");
            cmd_tui(&config, &data_dir).await
        }
    }
}

/// Launch the TUI over the persisted store
async fn cmd_tui(config: &Config, data_dir: &PathBuf) -> Result<()> {
    debug!("cmd_tui: called");
    let slots = SlotStore::open(data_dir).context("Failed to open data directory")?;
    let store = PlannerStore::open(slots);

    // Missing API key is not fatal: the assistant degrades to fallbacks
    let assistant = Assistant::from_config(&config.llm);
    if !assistant.is_live() {
        info!("cmd_tui: no generation client, AI tools will return fallbacks");
    }

    tui::run(store, assistant, config.access.password.clone()).await
}

/// Print the guest responses without opening the TUI
fn cmd_rsvps(data_dir: &PathBuf, format: OutputFormat) -> Result<()> {
    debug!(?format, "cmd_rsvps: called");
    let slots = SlotStore::open(data_dir).context("Failed to open data directory")?;
    let store = PlannerStore::open(slots);

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "summary": store.rsvp_summary(),
                "responses": store.rsvps(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Table => {
            let rsvps = store.rsvps();
            if rsvps.is_empty() {
                println!("No responses yet.");
                return Ok(());
            }

            println!(
                "{:<24} {:<28} {:<10} {:>6}  {}",
                "NAME".bold(),
                "EMAIL".bold(),
                "ATTENDING".bold(),
                "GUESTS".bold(),
                "NOTES".bold()
            );
            for rsvp in rsvps {
                let attending = match rsvp.attending {
                    Attendance::Yes => "yes".green(),
                    Attendance::No => "no".red(),
                    Attendance::Maybe => "maybe".yellow(),
                };
                let mut notes = Vec::new();
                if let Some(ref dietary) = rsvp.dietary_restrictions {
                    notes.push(format!("diet: {}", dietary));
                }
                if let Some(ref song) = rsvp.song_request {
                    notes.push(format!("song: {}", song));
                }
                let guests = rsvp
                    .confirmed_party_size()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<24} {:<28} {:<10} {:>6}  {}",
                    rsvp.name,
                    rsvp.email,
                    attending,
                    guests,
                    notes.join(", ")
                );
            }

            let summary = store.rsvp_summary();
            println!();
            println!(
                "{} responses: {} attending, {} declined, {} maybe. {} confirmed guests.",
                summary.responses,
                summary.accepted.to_string().green(),
                summary.declined.to_string().red(),
                summary.maybe.to_string().yellow(),
                summary.confirmed_guests.to_string().bold()
            );
        }
    }

    Ok(())
}
