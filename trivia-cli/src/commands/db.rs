//! Schema and seed commands

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool_with_options, migrations, CategoryRepo};
use trivia_server::models::default_categories;
use trivia_server::TriviaConfig;

/// Arguments shared by the database commands
#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Flag/env value first, then the config file.
pub fn resolve_database_url(arg: Option<String>, config: &TriviaConfig) -> Result<String> {
    arg.or_else(|| config.database.url.clone()).context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or [database] url in the config file",
    )
}

/// Create the trivia tables
pub async fn run_migrate(args: DbArgs, config: &TriviaConfig) -> Result<()> {
    let url = resolve_database_url(args.database_url, config)?;
    let pool = create_pool_with_options(&url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool).await.context("Migrations failed")?;
    Ok(())
}

/// Create the tables and insert the default categories
pub async fn run_seed(args: DbArgs, config: &TriviaConfig) -> Result<()> {
    let url = resolve_database_url(args.database_url, config)?;
    let pool = create_pool_with_options(&url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool).await.context("Migrations failed")?;
    let inserted = CategoryRepo::new(&pool)
        .seed(&default_categories())
        .await
        .context("Failed to seed categories")?;

    tracing::info!(inserted, "Seeded default categories");
    Ok(())
}
