//! Hidayah CLI
//!
//! Main entry point for the hidayah command-line tool: retrieval-augmented
//! question answering over the Quran and Hadith corpora.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, IndexCommand, InfoCommand};
use hidayah_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Hidayah - Quran & Hadith question answering with verifiable citations
#[derive(Parser, Debug)]
#[command(name = "hidayah")]
#[command(about = "Quran & Hadith question answering with verifiable citations", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: hidayah.yaml)
    #[arg(short, long, global = true, env = "HIDAYAH_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Generator provider (ollama, gemini)
    #[arg(short, long, global = true, env = "HIDAYAH_PROVIDER")]
    provider: Option<String>,

    /// Generator model identifier
    #[arg(short, long, global = true, env = "HIDAYAH_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer one question with citations
    Ask(AskCommand),

    /// Interactive question-answering loop
    Chat(ChatCommand),

    /// Build a corpus index from a chunks file
    Index(IndexCommand),

    /// Show corpus statistics
    Info(InfoCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let config = config.with_overrides(
        cli.provider,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Hidayah CLI starting");
    tracing::debug!("Generator: {} ({})", config.generator.provider, config.generator.model);
    tracing::debug!("Embedder: {} ({})", config.embedding.provider, config.embedding.model);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Index(_) => "index",
        Commands::Info(_) => "info",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
        Commands::Index(cmd) => cmd.execute(&config).await,
        Commands::Info(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
