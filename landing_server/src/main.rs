//! Landing page content server.
//!
//! Run from repo root: `cargo run -p landing-server`
//! `LANDING_STORE=memory` serves from an in-process store without PostgreSQL.

use landing_cms::{app, ensure_database_exists, ensure_tables, AppState, Config, ContentStore, MemoryStore, PgStore, StoreBackend};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("landing_cms=info,landing_server=info")),
        )
        .init();

    let config = Config::from_env()?;
    let store: Arc<dyn ContentStore> = match config.store {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_tables(&pool).await?;
            Arc::new(PgStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; content is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let router = app(AppState::new(store), config.body_limit_bytes);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
