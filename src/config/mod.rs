/// Database configuration and connection management
pub mod database;

/// Room inventory seeding from config.toml
pub mod rooms;
