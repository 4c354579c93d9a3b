//! Unified error types and result handling for the back-office core.
//!
//! All business-logic functions return the crate-wide [`Result`] alias. Validation
//! failures and illegal room transitions get dedicated variants so callers can
//! render an actionable message; storage failures propagate opaquely via the
//! `DbErr` conversion.

use thiserror::Error;

/// Crate-wide error type covering validation, lookup, and storage failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failure
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A monetary amount was negative or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: f64,
    },

    /// Input failed a business-rule check before reaching storage
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the violated rule
        message: String,
    },

    /// A booking was attempted against a room that is occupied, under
    /// maintenance, or awaiting cleaning. Distinct from a generic failure so
    /// the caller can tell the user exactly why the room was refused.
    #[error("Room {room_id} is not bookable: {reason}")]
    RoomNotBookable {
        /// ID of the room that refused the booking
        room_id: i64,
        /// Which guard blocked the transition
        reason: String,
    },

    /// Room lookup by primary key found nothing
    #[error("Room not found: {id}")]
    RoomNotFound {
        /// The missing room ID
        id: i64,
    },

    /// Transaction lookup by primary key found nothing
    #[error("Transaction not found: {id}")]
    TransactionNotFound {
        /// The missing transaction ID
        id: i64,
    },

    /// Booking lookup by primary key found nothing
    #[error("Booking not found: {id}")]
    BookingNotFound {
        /// The missing booking ID
        id: i64,
    },

    /// Client lookup by primary key found nothing
    #[error("Client not found: {id}")]
    ClientNotFound {
        /// The missing client ID
        id: i64,
    },

    /// Staff lookup by primary key found nothing
    #[error("Staff member not found: {id}")]
    StaffNotFound {
        /// The missing staff ID
        id: i64,
    },

    /// Storage-layer failure, propagated without retry
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (config files, environment)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
