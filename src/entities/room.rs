//! Room entity - Physical room inventory with occupancy and housekeeping flags.
//!
//! `status` is the single authoritative occupancy flag (`"available"` or
//! `"occupied"`); `maintenance_status` and `cleaning_status` are independent
//! housekeeping booleans layered on top. The booking guard in
//! [`crate::core::room`] requires all three to be clear.
//!
//! Bookings reference rooms through a soft `room_id` column; room deletion is
//! deliberately unguarded, so no foreign key may block it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    /// Unique identifier for the room
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Room number/label (e.g., "101", "PH-2"), unique across the inventory
    #[sea_orm(unique)]
    pub number: String,
    /// Occupancy status: `"available"` or `"occupied"`
    pub status: String,
    /// Whether the room is under maintenance (independent of occupancy)
    pub maintenance_status: bool,
    /// Whether the room still needs cleaning (independent of occupancy)
    pub cleaning_status: bool,
    /// Nightly room charge
    pub price_per_night: f64,
}

/// No enforced relationships; bookings reference rooms softly
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
