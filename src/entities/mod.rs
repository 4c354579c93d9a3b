//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod booking;
pub mod booking_extra;
pub mod client;
pub mod room;
pub mod staff;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use booking::{Column as BookingColumn, Entity as Booking, Model as BookingModel};
pub use booking_extra::{
    Column as BookingExtraColumn, Entity as BookingExtra, Model as BookingExtraModel,
};
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use room::{Column as RoomColumn, Entity as Room, Model as RoomModel};
pub use staff::{Column as StaffColumn, Entity as Staff, Model as StaffModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
