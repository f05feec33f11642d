//! Service entry point: wires configuration, database, and the HTTP server.

use dotenvy::dotenv;
use std::env;
use tourbook::{api, config, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Connect to the database and ensure the schema exists
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 4. Seed initial trips from config.toml (no-op once trips exist)
    config::trips::seed_initial_trips(&db)
        .await
        .inspect_err(|e| error!("Failed to seed initial trips: {e}"))?;

    // 5. Serve the API
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Listening for requests");

    axum::serve(listener, api::app(db)).await?;

    Ok(())
}
