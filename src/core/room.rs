//! Room occupancy state machine - Guarded transitions over room state.
//!
//! A room's state is `status` (`"available"`/`"occupied"`) crossed with two
//! independent housekeeping booleans. The booking guard lives in exactly one
//! place, [`is_bookable`]; every transition goes through this module rather
//! than scattering the check across call sites. Housekeeping toggles are
//! unconditional and never touch occupancy.

use crate::{
    entities::{Room, room},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Occupancy status of a room with no current guest
pub const STATUS_AVAILABLE: &str = "available";
/// Occupancy status of a room with a current guest
pub const STATUS_OCCUPIED: &str = "occupied";

/// The single booking guard: available, not under maintenance, and clean.
#[must_use]
pub fn is_bookable(room: &room::Model) -> bool {
    room.status == STATUS_AVAILABLE && !room.maintenance_status && !room.cleaning_status
}

/// Names the first guard that blocks a booking, for the rejection message.
fn blocking_reason(room: &room::Model) -> &'static str {
    if room.status != STATUS_AVAILABLE {
        "currently occupied"
    } else if room.maintenance_status {
        "under maintenance"
    } else {
        "awaiting cleaning"
    }
}

/// Creates a new room, starting available, clean, and not under maintenance.
///
/// # Errors
/// Returns an error if:
/// - The room number is empty or whitespace-only
/// - The nightly price is negative or not finite
/// - The database insert fails (including a duplicate room number)
pub async fn create_room(
    db: &DatabaseConnection,
    number: String,
    price_per_night: f64,
) -> Result<room::Model> {
    if number.trim().is_empty() {
        return Err(Error::Validation {
            message: "Room number cannot be empty".to_string(),
        });
    }

    if !price_per_night.is_finite() || price_per_night < 0.0 {
        return Err(Error::InvalidAmount {
            amount: price_per_night,
        });
    }

    let model = room::ActiveModel {
        number: Set(number.trim().to_string()),
        status: Set(STATUS_AVAILABLE.to_string()),
        maintenance_status: Set(false),
        cleaning_status: Set(false),
        price_per_night: Set(price_per_night),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves a specific room by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_room_by_id(db: &DatabaseConnection, room_id: i64) -> Result<Option<room::Model>> {
    Room::find_by_id(room_id).one(db).await.map_err(Into::into)
}

/// Finds a room by its number/label.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_room_by_number(
    db: &DatabaseConnection,
    number: &str,
) -> Result<Option<room::Model>> {
    Room::find()
        .filter(room::Column::Number.eq(number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists the whole room inventory, ordered by room number.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_rooms(db: &DatabaseConnection) -> Result<Vec<room::Model>> {
    Room::find()
        .order_by_asc(room::Column::Number)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Transitions a room to occupied, if and only if the booking guard passes.
///
/// Rejected with [`Error::RoomNotBookable`] naming the blocking flag when the
/// room is occupied, under maintenance, or awaiting cleaning; the stored state
/// is left untouched on rejection. Housekeeping flags are not altered on
/// success.
///
/// # Errors
/// Returns an error if the room does not exist, the guard rejects the
/// transition, or the database update fails.
pub async fn book_room(db: &DatabaseConnection, room_id: i64) -> Result<room::Model> {
    let room = Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or(Error::RoomNotFound { id: room_id })?;

    if !is_bookable(&room) {
        return Err(Error::RoomNotBookable {
            room_id,
            reason: blocking_reason(&room).to_string(),
        });
    }

    let mut active: room::ActiveModel = room.into();
    active.status = Set(STATUS_OCCUPIED.to_string());
    active.update(db).await.map_err(Into::into)
}

/// Ends the current occupancy, leaving housekeeping flags untouched.
///
/// Maintenance and cleaning are independent concerns; checking a guest out of
/// a room that still needs cleaning leaves `cleaning_status` set. Calling this
/// on a room that is already available is a no-op returning the unchanged row,
/// keeping the operation idempotent.
///
/// # Errors
/// Returns an error if the room does not exist or the database update fails.
pub async fn make_available(db: &DatabaseConnection, room_id: i64) -> Result<room::Model> {
    let room = Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or(Error::RoomNotFound { id: room_id })?;

    if room.status != STATUS_OCCUPIED {
        return Ok(room);
    }

    let mut active: room::ActiveModel = room.into();
    active.status = Set(STATUS_AVAILABLE.to_string());
    active.update(db).await.map_err(Into::into)
}

/// Sets the maintenance flag unconditionally. Occupancy is never altered.
///
/// # Errors
/// Returns an error if the room does not exist or the database update fails.
pub async fn set_maintenance(
    db: &DatabaseConnection,
    room_id: i64,
    flag: bool,
) -> Result<room::Model> {
    let room = Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or(Error::RoomNotFound { id: room_id })?;

    let mut active: room::ActiveModel = room.into();
    active.maintenance_status = Set(flag);
    active.update(db).await.map_err(Into::into)
}

/// Sets the cleaning flag unconditionally. Occupancy is never altered.
///
/// # Errors
/// Returns an error if the room does not exist or the database update fails.
pub async fn set_cleaning(
    db: &DatabaseConnection,
    room_id: i64,
    flag: bool,
) -> Result<room::Model> {
    let room = Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or(Error::RoomNotFound { id: room_id })?;

    let mut active: room::ActiveModel = room.into();
    active.cleaning_status = Set(flag);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a room from any state, including while occupied.
///
/// There is deliberately no occupancy guard here: the observed system allows
/// deleting a room that still has an active stay, and that behavior is
/// preserved rather than guessed at.
///
/// # Errors
/// Returns an error if the room does not exist or the delete fails.
pub async fn delete_room(db: &DatabaseConnection, room_id: i64) -> Result<()> {
    let room = Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or(Error::RoomNotFound { id: room_id })?;

    room.delete(db).await?;
    Ok(())
}
