//! Extras pricing calculator - Monetary totals over booking add-ons.
//!
//! Pure functions with no IO. The math is shared between caller-side
//! selections (not yet persisted) and stored `booking_extras` rows through the
//! [`Priced`] trait, so there is exactly one definition of "what a set of
//! extras costs". Zero-quantity entries are inert: excluded from selection and
//! contributing nothing to totals.

use crate::entities::booking_extra;
use serde::{Deserialize, Serialize};

/// Anything carrying a unit price and a quantity.
pub trait Priced {
    /// Unit price, non-negative
    fn price(&self) -> f64;
    /// Number of units; zero means the entry is inert
    fn quantity(&self) -> i32;
}

impl Priced for booking_extra::Model {
    fn price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }
}

/// A caller-side extra selection, before it is copied into a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraSelection {
    /// Display name of the add-on
    pub name: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Number of units, non-negative
    pub quantity: i32,
}

impl Priced for ExtraSelection {
    fn price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }
}

/// Keeps only the extras with a positive quantity, preserving order.
pub fn selected_extras<E: Priced>(extras: &[E]) -> Vec<&E> {
    extras.iter().filter(|e| e.quantity() > 0).collect()
}

/// Sums `price * quantity` over the selected subset.
///
/// Always a concrete number: `0.0` for an empty or all-zero-quantity input, so
/// callers can do arithmetic on the result unconditionally. Order-independent
/// and monotonically non-decreasing in any quantity.
pub fn extras_total<E: Priced>(extras: &[E]) -> f64 {
    selected_extras(extras)
        .iter()
        .map(|e| e.price() * f64::from(e.quantity()))
        .sum()
}

/// Total charge for a booking: room amount plus its extras.
pub fn booking_total<E: Priced>(room_amount: f64, extras: &[E]) -> f64 {
    room_amount + extras_total(extras)
}
