//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool_with_options, migrations};
use trivia_server::models::default_categories;
use trivia_server::{run_server, MemoryStore, PgStore, TriviaConfig, TriviaService, TriviaStore};

use super::db::resolve_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: config file, then 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Restrict CORS to localhost origins
    #[arg(long)]
    pub cors_localhost: bool,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Serve from an in-memory store seeded with the default categories
    /// (ignores any database URL)
    #[arg(long)]
    pub in_memory: bool,

    /// Skip creating missing tables on startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Questions per page, 1 to 100 (overrides config file)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: TriviaConfig) -> Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if args.cors_localhost {
        config.server.cors_permissive = false;
    }
    if let Some(per_page) = args.per_page {
        config.api.questions_per_page = per_page;
    }

    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::info!("Using in-memory store");
        Arc::new(MemoryStore::with_categories(default_categories()))
    } else {
        let url = resolve_database_url(args.database_url, &config)?;
        let pool = create_pool_with_options(&url, config.database.max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool).await.context("Migrations failed")?;
        }

        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", config.server.bind_addr);

    let service = TriviaService::new(store, config.api.clone());

    // Blocks until shutdown
    run_server(service, config.server)
        .await
        .context("Server error")?;

    Ok(())
}
