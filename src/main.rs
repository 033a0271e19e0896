mod commands;
mod render;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use events_core::agenda::Presentation;
use events_core::config::EventsConfig;
use events_core::mirror::GitMirror;
use events_core::window::TimeWindow;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bristol-events")]
#[command(about = "Show upcoming community events from a local copy of the events repository")]
struct Cli {
    /// One line per event instead of grouping by day
    #[arg(long, global = true)]
    flat: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show events for the rest of today
    Today,
    /// Fetch the latest events and exit
    Update,
}

fn main() -> Result<()> {
    // Logs go to stderr so event listings on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = EventsConfig::load()?;
    let mirror = GitMirror::from_config(&config)?;

    let presentation = if cli.flat {
        Presentation::Flat
    } else {
        Presentation::Grouped
    };

    let now = Local::now();

    match cli.command {
        None => {
            let window = TimeWindow::next_days(now, config.days);
            commands::list::run(&mirror, window, presentation)
        }
        Some(Commands::Today) => {
            commands::list::run(&mirror, TimeWindow::rest_of_day(now), presentation)
        }
        Some(Commands::Update) => commands::update::run(&mirror),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_lists_grouped_week() {
        let cli = Cli::try_parse_from(["bristol-events"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.flat);
    }

    #[test]
    fn test_today_accepts_flat() {
        let cli = Cli::try_parse_from(["bristol-events", "today", "--flat"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Today)));
        assert!(cli.flat);
    }

    #[test]
    fn test_update_subcommand() {
        let cli = Cli::try_parse_from(["bristol-events", "update"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Update)));
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = match Cli::try_parse_from(["bristol-events", "tomorrow"]) {
            Ok(_) => panic!("unknown subcommand should be rejected"),
            Err(err) => err,
        };
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }
}
