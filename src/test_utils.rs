//! Shared test utilities for the hotel back office.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{booking, client, ledger, room, staff},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test room with a default nightly price of 120.0.
pub async fn create_test_room(
    db: &DatabaseConnection,
    number: &str,
) -> Result<entities::room::Model> {
    room::create_room(db, number.to_string(), 120.0).await
}

/// Creates a test client with only a name set.
pub async fn create_test_client(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::client::Model> {
    client::create_client(db, name.to_string(), None, None).await
}

/// Creates a test staff member with the "reception" role.
pub async fn create_test_staff(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::staff::Model> {
    staff::create_staff(db, name.to_string(), "reception".to_string()).await
}

/// Creates a test transaction on the hotel register with no due date and the
/// full amount already paid when the type is `"payment"`.
///
/// # Defaults
/// * `paid_amount`: `amount` for `"payment"`, `0.0` otherwise
/// * `register_type`: `"hotel"`
/// * `description`: `"Test transaction"`
/// * no client/staff references
pub async fn create_test_transaction(
    db: &DatabaseConnection,
    amount: f64,
    transaction_type: &str,
) -> Result<entities::transaction::Model> {
    let paid_amount = if transaction_type == "payment" {
        amount
    } else {
        0.0
    };

    ledger::create_transaction(
        db,
        amount,
        transaction_type.to_string(),
        paid_amount,
        None,
        "hotel".to_string(),
        "Test transaction".to_string(),
        None,
        None,
    )
    .await
}

/// Creates a test transaction with custom amounts, register, and client.
pub async fn create_custom_transaction(
    db: &DatabaseConnection,
    amount: f64,
    transaction_type: &str,
    paid_amount: f64,
    register_type: &str,
    client_id: Option<i64>,
) -> Result<entities::transaction::Model> {
    ledger::create_transaction(
        db,
        amount,
        transaction_type.to_string(),
        paid_amount,
        None,
        register_type.to_string(),
        "Test transaction".to_string(),
        client_id,
        None,
    )
    .await
}

/// Creates a two-night test booking with no extras.
pub async fn create_test_booking(
    db: &DatabaseConnection,
    room_id: i64,
) -> Result<entities::booking::Model> {
    let check_in = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
    let check_out = NaiveDate::from_ymd_opt(2025, 9, 3).expect("valid date");

    let (created, _extras) = booking::create_booking(
        db,
        room_id,
        "Test Guest".to_string(),
        None,
        check_in,
        check_out,
        240.0,
        &[],
    )
    .await?;
    Ok(created)
}

/// Sets up a complete test environment with a room.
/// Returns (db, room) for common test scenarios.
pub async fn setup_with_room() -> Result<(DatabaseConnection, entities::room::Model)> {
    let db = setup_test_db().await?;
    let room = create_test_room(&db, "101").await?;
    Ok((db, room))
}
