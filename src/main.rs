//! Roster - Entry Point

use clap::Parser;
use roster::model::AppError;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;

/// Roster - browse, search and prune a list of user records in the terminal
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "TUI for browsing, searching, editing and deleting user records")]
pub struct Args {
    /// URL or path of a JSON array of records (defaults to the configured source)
    pub source: Option<String>,

    /// Records per page (must be positive)
    #[arg(short, long)]
    pub page_size: Option<NonZeroUsize>,

    /// Start with a search term applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = roster::config::load_config_with_precedence(args.config.clone())?;
        let merged = roster::config::merge_config(config_file);
        let with_env = roster::config::apply_env_overrides(merged)?;
        roster::config::apply_cli_overrides(
            with_env,
            args.source.clone(),
            args.page_size.map(Into::into),
        )
    };

    roster::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let record_source = roster::source::detect_record_source(&config.source);

    let cli_args = roster::view::CliArgs {
        page_size: config.page_size,
        request_timeout: config.request_timeout,
        search: args.search,
        no_color: args.no_color,
    };

    roster::view::run_with_source(record_source, cli_args)?;

    Ok(())
}
