//! Fleet API server binary.
//!
//! Serves the REST API over PostgreSQL, or over a process-local store when
//! started with `--in-memory`.

use std::sync::Arc;

use clap::Parser;
use fleet_api::config::ApiConfig;
use fleet_core::store::{FleetStore, MemoryStore, PgStore};
use sqlx::postgres::PgPoolOptions;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "fleet_api_server", about = "Fleet API server")]
struct Args {
    /// Address to listen on. Overrides `BIND_ADDR`.
    #[arg(long)]
    bind_addr: Option<String>,

    /// PostgreSQL connection URL. Overrides `DATABASE_URL`.
    #[arg(long)]
    database_url: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Keep records in process memory instead of PostgreSQL. Data is lost on
    /// exit; the default administrator is seeded on start.
    #[arg(long, env = "FLEET_IN_MEMORY", default_value_t = false)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,fleet_api=debug,fleet_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    let config = resolve_config(ApiConfig::from_env(), &args);
    let store = open_store(&args, &config).await?;
    info!(page_bounds = ?config.page_bounds, "configuration loaded");

    let state = fleet_api::AppState::new(store, config.clone());
    let app = fleet_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for shutdown signal: {e}");
            }
            info!("shutdown requested");
            shutdown.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}

/// Applies command-line overrides on top of the environment configuration.
fn resolve_config(mut config: ApiConfig, args: &Args) -> ApiConfig {
    if let Some(addr) = &args.bind_addr {
        config.bind_addr = addr.clone();
    }
    if let Some(url) = &args.database_url {
        config.pg_connection_url = url.clone();
    }
    config
}

/// Connects the configured store, running migrations for PostgreSQL.
async fn open_store(
    args: &Args,
    config: &ApiConfig,
) -> Result<Arc<dyn FleetStore>, Box<dyn std::error::Error>> {
    if args.in_memory {
        warn!("using in-memory store; records are not persisted");
        return Ok(Arc::new(MemoryStore::seeded()));
    }

    info!(
        max_connections = args.max_connections,
        "connecting to PostgreSQL"
    );
    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.pg_connection_url)
        .await?;

    info!("running database migrations");
    fleet_core::migrate::migrate(&pool).await?;

    Ok(Arc::new(PgStore::new(pool)))
}
