//! Booking business logic - Stays, their lifecycle, and their priced extras.
//!
//! Creating a stay is a deliberately non-atomic three-step protocol driven by
//! the caller:
//!
//! 1. [`create_booking`] — insert the booking and copy its extras (this pair
//!    IS atomic, because the booking exclusively owns its extras rows),
//! 2. [`crate::core::room::book_room`] — transition the room to occupied,
//! 3. [`crate::core::ledger::create_transaction`] — record the charge.
//!
//! The storage collaborator offers no transaction spanning all three, so a
//! failure between steps can leave an occupied room with no ledger entry.
//! That gap is documented and reconciled operationally, not papered over with
//! a fake transaction here.

use crate::{
    core::extras::ExtraSelection,
    entities::{Booking, booking, booking_extra},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// A booking that currently holds its room
pub const STATUS_CONFIRMED: &str = "confirmed";
/// A booking that was called off before or during the stay
pub const STATUS_CANCELED: &str = "canceled";
/// A booking whose stay has ended
pub const STATUS_COMPLETED: &str = "completed";

/// Creates a booking and copies the selected extras into rows it owns.
///
/// The extras are snapshotted: later edits to whatever catalog the selection
/// came from never reprice this booking. Zero-quantity selections are copied
/// too (they are inert in totals but preserved for display symmetry with the
/// caller's selection), and selection order is kept via the `position` column.
/// The room itself is not touched here; see the module docs for the protocol.
///
/// # Errors
/// Returns an error if:
/// - The guest name is empty or whitespace-only
/// - `check_out` is not strictly after `check_in`
/// - The room amount or any extra price is negative or not finite, or any
///   extra quantity is negative
/// - The referenced room does not exist
/// - The database transaction fails
#[allow(clippy::too_many_arguments)]
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i64,
    guest_name: String,
    client_id: Option<i64>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    amount: f64,
    extras: &[ExtraSelection],
) -> Result<(booking::Model, Vec<booking_extra::Model>)> {
    if guest_name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Guest name cannot be empty".to_string(),
        });
    }

    if check_out <= check_in {
        return Err(Error::Validation {
            message: format!("check-out {check_out} must be after check-in {check_in}"),
        });
    }

    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    for extra in extras {
        if !extra.price.is_finite() || extra.price < 0.0 {
            return Err(Error::InvalidAmount {
                amount: extra.price,
            });
        }
        if extra.quantity < 0 {
            return Err(Error::Validation {
                message: format!(
                    "extra {:?} has negative quantity {}",
                    extra.name, extra.quantity
                ),
            });
        }
    }

    crate::core::room::get_room_by_id(db, room_id)
        .await?
        .ok_or(Error::RoomNotFound { id: room_id })?;

    // The booking and its extras snapshot land together or not at all.
    let txn = db.begin().await?;

    let created = booking::ActiveModel {
        room_id: Set(room_id),
        guest_name: Set(guest_name.trim().to_string()),
        client_id: Set(client_id),
        check_in: Set(check_in),
        check_out: Set(check_out),
        amount: Set(amount),
        status: Set(STATUS_CONFIRMED.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut copied = Vec::with_capacity(extras.len());
    for (position, extra) in extras.iter().enumerate() {
        let row = booking_extra::ActiveModel {
            booking_id: Set(created.id),
            name: Set(extra.name.clone()),
            price: Set(extra.price),
            quantity: Set(extra.quantity),
            position: Set(i32::try_from(position).unwrap_or(i32::MAX)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        copied.push(row);
    }

    txn.commit().await?;

    Ok((created, copied))
}

/// Retrieves a booking with its extras, ordered by selection position.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn get_booking_by_id(
    db: &DatabaseConnection,
    booking_id: i64,
) -> Result<Option<(booking::Model, Vec<booking_extra::Model>)>> {
    let Some(found) = Booking::find_by_id(booking_id).one(db).await? else {
        return Ok(None);
    };

    let extras = found
        .find_related(crate::entities::BookingExtra)
        .order_by_asc(booking_extra::Column::Position)
        .all(db)
        .await?;

    Ok(Some((found, extras)))
}

/// Lists all bookings for a room, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_bookings_for_room(
    db: &DatabaseConnection,
    room_id: i64,
) -> Result<Vec<booking::Model>> {
    Booking::find()
        .filter(booking::Column::RoomId.eq(room_id))
        .order_by_desc(booking::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Marks a booking canceled. Status only; freeing the room is the caller's
/// separate [`crate::core::room::make_available`] call.
///
/// # Errors
/// Returns an error if the booking does not exist or the update fails.
pub async fn cancel_booking(db: &DatabaseConnection, booking_id: i64) -> Result<booking::Model> {
    set_status(db, booking_id, STATUS_CANCELED).await
}

/// Marks a booking completed. Status only; freeing the room is the caller's
/// separate [`crate::core::room::make_available`] call.
///
/// # Errors
/// Returns an error if the booking does not exist or the update fails.
pub async fn complete_booking(db: &DatabaseConnection, booking_id: i64) -> Result<booking::Model> {
    set_status(db, booking_id, STATUS_COMPLETED).await
}

async fn set_status(
    db: &DatabaseConnection,
    booking_id: i64,
    status: &str,
) -> Result<booking::Model> {
    let found = Booking::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or(Error::BookingNotFound { id: booking_id })?;

    let mut active: booking::ActiveModel = found.into();
    active.status = Set(status.to_string());
    active.update(db).await.map_err(Into::into)
}

/// Deletes a booking along with the extras rows it owns.
///
/// # Errors
/// Returns an error if the booking does not exist or the delete fails.
pub async fn delete_booking(db: &DatabaseConnection, booking_id: i64) -> Result<()> {
    let found = Booking::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or(Error::BookingNotFound { id: booking_id })?;

    let txn = db.begin().await?;
    crate::entities::BookingExtra::delete_many()
        .filter(booking_extra::Column::BookingId.eq(booking_id))
        .exec(&txn)
        .await?;
    found.delete(&txn).await?;
    txn.commit().await?;

    Ok(())
}
