//! Room inventory configuration loading from config.toml
//!
//! This module provides functionality to load the initial room inventory from
//! a TOML configuration file. The rooms defined in config.toml are used to
//! seed the database on first run or when rooms are missing; seeding is
//! idempotent, keyed by room number.

use crate::errors::{Error, Result};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of room configurations to seed
    pub rooms: Vec<RoomConfig>,
}

/// Configuration for a single room
#[derive(Debug, Deserialize, Clone)]
pub struct RoomConfig {
    /// Room number/label (e.g., "101")
    pub number: String,
    /// Nightly room charge
    pub price_per_night: f64,
}

/// Loads room configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads room configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Seeds the room inventory from configuration.
///
/// Any configured room whose number is not yet in the database is created
/// (available, clean, no maintenance); existing rooms are left untouched, so
/// re-running the bootstrap never duplicates or resets inventory. Returns the
/// number of rooms inserted.
///
/// # Errors
/// Returns an error if a lookup or insert fails, or a configured price is
/// invalid.
pub async fn seed_rooms(db: &DatabaseConnection, config: &Config) -> Result<usize> {
    let mut inserted = 0;
    for room in &config.rooms {
        if crate::core::room::get_room_by_number(db, &room.number)
            .await?
            .is_none()
        {
            crate::core::room::create_room(db, room.number.clone(), room.price_per_night).await?;
            info!(number = %room.number, "Seeded room from config");
            inserted += 1;
        }
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    fn sample_config() -> Config {
        toml::from_str(
            r#"
            [[rooms]]
            number = "101"
            price_per_night = 120.0

            [[rooms]]
            number = "102"
            price_per_night = 150.0
        "#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_room_config() {
        let config = sample_config();
        assert_eq!(config.rooms.len(), 2);
        assert_eq!(config.rooms[0].number, "101");
        assert_eq!(config.rooms[0].price_per_night, 120.0);
        assert_eq!(config.rooms[1].number, "102");
    }

    #[tokio::test]
    async fn test_seed_rooms_idempotent() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        let config = sample_config();

        assert_eq!(seed_rooms(&db, &config).await?, 2);

        // Second run inserts nothing and resets nothing
        crate::core::room::book_room(
            &db,
            crate::core::room::get_room_by_number(&db, "101")
                .await?
                .unwrap()
                .id,
        )
        .await?;
        assert_eq!(seed_rooms(&db, &config).await?, 0);

        let rooms = crate::core::room::list_rooms(&db).await?;
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].status, crate::core::room::STATUS_OCCUPIED);

        Ok(())
    }
}
