//! Booking entity - A guest's stay in a room over a date range.
//!
//! `amount` is the room charge only; priced add-ons live in the owned
//! `booking_extras` rows, copied from the caller's selection at creation time.
//! `room_id` and `client_id` are soft references: room deletion is unguarded
//! and client deletion never touches bookings, so neither carries a foreign
//! key. The extras, by contrast, are exclusively owned and related properly.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Booking database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    /// Unique identifier for the booking
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Soft reference to the room this booking occupies
    pub room_id: i64,
    /// Name of the guest staying in the room
    pub guest_name: String,
    /// Soft reference to a client record
    pub client_id: Option<i64>,
    /// First night of the stay
    pub check_in: Date,
    /// Departure date; strictly after `check_in`
    pub check_out: Date,
    /// Room charge for the stay (extras priced separately)
    pub amount: f64,
    /// Lifecycle status: `"confirmed"`, `"canceled"`, or `"completed"`
    pub status: String,
    /// When the booking was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Booking and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One booking exclusively owns its priced extras
    #[sea_orm(has_many = "super::booking_extra::Entity")]
    Extras,
}

impl Related<super::booking_extra::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extras.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
