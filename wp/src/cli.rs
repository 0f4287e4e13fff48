//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// wedplan - wedding site and planner dashboard
#[derive(Parser)]
#[command(
    name = "wp",
    about = "Wedding RSVP site and planner dashboard in your terminal",
    version,
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Data directory holding the persisted records
    #[arg(short, long, global = true, help = "Data directory (overrides config)")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute (none: open the TUI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the guest responses without opening the TUI
    Rsvps {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format for the rsvps command
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: table or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["wp"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_rsvps() {
        let cli = Cli::parse_from(["wp", "rsvps"]);
        assert!(matches!(
            cli.command,
            Some(Command::Rsvps {
                format: OutputFormat::Table
            })
        ));
    }

    #[test]
    fn test_cli_parse_rsvps_json() {
        let cli = Cli::parse_from(["wp", "rsvps", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Some(Command::Rsvps {
                format: OutputFormat::Json
            })
        ));
    }

    #[test]
    fn test_cli_with_config_and_data_dir() {
        let cli = Cli::parse_from(["wp", "-c", "/path/to/wedplan.yml", "-d", "/tmp/wp", "rsvps"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/wedplan.yml")));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/wp")));
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table)));
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
