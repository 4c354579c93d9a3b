//! Core business logic - framework-agnostic financial and occupancy rules.
//!
//! Everything here takes plain data in and returns plain data (or a
//! [`crate::errors::Error`]) out; navigation, notifications, and rendering
//! live entirely outside this layer.

/// Booking lifecycle and the extras-copy protocol
pub mod booking;
/// Client directory operations
pub mod client;
/// Extras pricing calculator (pure)
pub mod extras;
/// Invoice projection over the ledger (read-only)
pub mod invoice;
/// Ledger status engine and transaction records
pub mod ledger;
/// Room occupancy state machine
pub mod room;
/// Staff directory operations
pub mod staff;
