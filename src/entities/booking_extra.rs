//! Booking extra entity - A priced, quantity-bearing add-on owned by a booking.
//!
//! Rows are snapshots: they are copied from the caller's selection when the
//! booking is created, so later catalog price changes never retroactively
//! reprice a confirmed booking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Booking extra database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_extras")]
pub struct Model {
    /// Unique identifier for the extra row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Booking that owns this extra
    pub booking_id: i64,
    /// Display name of the add-on (e.g., "Breakfast", "Late checkout")
    pub name: String,
    /// Unit price at the time the booking was created, non-negative
    pub price: f64,
    /// Number of units; zero-quantity rows are inert and excluded from totals
    pub quantity: i32,
    /// Position within the booking's extras list, preserving selection order
    pub position: i32,
}

/// Defines relationships between BookingExtra and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each extra belongs to exactly one booking
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
