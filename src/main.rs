//! Bootstrap binary for the hotel back-office core.
//!
//! Initializes logging, loads the environment, prepares the database schema,
//! and seeds the room inventory from config.toml when one is present. The
//! presentation layer is an external collaborator and connects to the same
//! database on its own.

use dotenvy::dotenv;
use hoteldesk::{config, errors::Result};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Connect and prepare the schema
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| warn!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;
    info!("Database schema ready.");

    // 4. Seed the room inventory when a config.toml is present
    if Path::new("config.toml").exists() {
        let room_config = config::rooms::load_default_config()?;
        let inserted = config::rooms::seed_rooms(&db, &room_config).await?;
        info!("Room inventory seeded ({inserted} new rooms).");
    } else {
        info!("No config.toml found; skipping room inventory seeding.");
    }

    Ok(())
}
