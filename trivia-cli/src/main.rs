//! trivia CLI - run and maintain the trivia question API
//!
//! Subcommands:
//! - `serve`: run the HTTP API (Postgres or in-memory store)
//! - `migrate`: create the trivia tables
//! - `seed`: create the tables and insert the default categories
//! - `config`: show the config file path and effective config

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trivia_server::TriviaConfig;

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia question API server",
    long_about = "Serve a trivia question bank over HTTP: categories, paginated questions, \
                  substring search, and quizzes that never repeat a question."
)]
struct Cli {
    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long, global = true, env = "TRIVIA_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the trivia tables if they are missing
    Migrate(commands::db::DbArgs),
    /// Create the tables and insert the default categories
    Seed(commands::db::DbArgs),
    /// Inspect configuration (path, show)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; DATABASE_URL may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let config_path = cli.config.as_deref();
    let config = TriviaConfig::load(config_path).context("Failed to load config")?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, &config).await?,
        Commands::Seed(args) => commands::run_seed(args, &config).await?,
        Commands::Config(args) => config::run_config(args, config_path, &config)?,
    }

    Ok(())
}
