//! PrettyLog - Entry Point

use clap::Parser;
use prettylog::model::{AppError, LogCategory, LogLevel, StatementAssembler};
use std::path::PathBuf;
use tracing::info;

/// PrettyLog - print one designed log statement to the configured destinations
#[derive(Parser, Debug)]
#[command(name = "prettylog")]
#[command(version)]
#[command(about = "Emoji-prefixed log statements with per-destination filtering")]
pub struct Args {
    /// Public message fragments, joined in order
    pub messages: Vec<String>,

    /// Sensitive message fragment (repeatable), only shown where allowed
    #[arg(short = 'S', long = "sensitive")]
    pub sensitive: Vec<String>,

    /// Level of the statement
    #[arg(short, long, default_value = "info", value_parser = parse_level)]
    pub level: LogLevel,

    /// Category shown next to the statement (empty for uncategorized)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Separator between fragments
    #[arg(long)]
    pub separator: Option<String>,

    /// Only print statements from this level up
    #[arg(long, value_parser = parse_level)]
    pub min_level: Option<LogLevel>,

    /// Also send the statement to the backend destination
    #[arg(long)]
    pub backend: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_level(raw: &str) -> Result<LogLevel, String> {
    raw.parse().map_err(|e: prettylog::model::ParseLevelError| e.to_string())
}

/// Map a category name to a predefined category, or a custom one.
fn parse_category(raw: &str) -> LogCategory {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => LogCategory::Uncategorized,
        "app state" | "app-state" | "appstate" => LogCategory::AppState,
        "debug" => LogCategory::Debug,
        "general" => LogCategory::General,
        "manager" => LogCategory::Manager,
        "service" => LogCategory::Service,
        "storage" => LogCategory::Storage,
        "user" | "user action" | "user-action" => LogCategory::User,
        "view" => LogCategory::View,
        _ => LogCategory::custom(raw.trim()),
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = prettylog::config::load_config_with_precedence(args.config.clone())?;
        let merged = prettylog::config::merge_config(config_file)?;
        let with_env = prettylog::config::apply_env_overrides(merged)?;
        let backend_override = if args.backend { Some(true) } else { None };

        prettylog::config::apply_cli_overrides(
            with_env,
            args.separator.clone(),
            args.min_level.clone(),
            backend_override,
        )
    };

    prettylog::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let statement = StatementAssembler::new(
        args.messages.iter().map(Some),
        args.sensitive.iter().map(Some),
        &config.separator,
    );
    let category = parse_category(&args.category);

    let logger = config.build_logger();
    let summary = logger.log(&args.level, statement, &category);

    info!(?summary, "Statement dispatched");

    Ok(())
}
