//! Ledger business logic - Transaction records and the invoice status engine.
//!
//! This module owns the financial rules of the back office: how a transaction's
//! `(type, paid_amount, amount)` triple maps to exactly one invoice status, how
//! the outstanding balance is computed, and how transactions are created,
//! updated, and listed per revenue register. The derivations are pure and total
//! over their input domain (clamping rather than throwing on out-of-range
//! numbers); all validation happens at the create/update entry points before
//! anything reaches storage.

use crate::{
    entities::{Transaction, transaction},
    errors::{Error, Result},
};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};

/// The four payment-state tags a transaction can be created with.
///
/// Stored rows keep the tag as text, so historical rows may carry values
/// outside this enum; [`derive_status`] handles those through its fallback
/// branch instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Fully settled at creation
    Payment,
    /// Money returned to the client
    Refund,
    /// Nothing collected yet
    Pending,
    /// Partially collected
    Partial,
}

impl TransactionType {
    /// Returns the stored text form of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Refund => "refund",
            Self::Pending => "pending",
            Self::Partial => "partial",
        }
    }

    /// Parses a stored tag, returning `None` for unknown/legacy values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "payment" => Some(Self::Payment),
            "refund" => Some(Self::Refund),
            "pending" => Some(Self::Pending),
            "partial" => Some(Self::Partial),
            _ => None,
        }
    }
}

/// The four revenue registers partitioning the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterType {
    /// Room revenue
    Hotel,
    /// Restaurant revenue
    Restaurant,
    /// Poker room revenue
    Poker,
    /// Rooftop bar revenue
    Rooftop,
}

impl RegisterType {
    /// Returns the stored text form of the register.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Restaurant => "restaurant",
            Self::Poker => "poker",
            Self::Rooftop => "rooftop",
        }
    }

    /// Parses a stored register name, returning `None` for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hotel" => Some(Self::Hotel),
            "restaurant" => Some(Self::Restaurant),
            "poker" => Some(Self::Poker),
            "rooftop" => Some(Self::Rooftop),
            _ => None,
        }
    }
}

/// User-facing invoice status, derived from a transaction and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Fully settled
    Paid,
    /// Awaiting payment, due date not yet passed (or absent)
    Pending,
    /// Awaiting payment past its due date
    Overdue,
    /// Refunded/voided
    Cancelled,
    /// Partially settled
    PartiallyPaid,
}

impl InvoiceStatus {
    /// Returns the display form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
            Self::PartiallyPaid => "partially_paid",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a transaction's payment fields to exactly one invoice status.
///
/// `payment` is paid, `refund` is cancelled, `partial` is partially paid, and
/// `pending` is overdue once its due date lies strictly in the past relative
/// to `today` (a pending row with no due date is never overdue). Any other
/// stored tag falls through to classification by payment progress, so rows
/// that predate the four-way tag still render instead of erroring.
#[must_use]
pub fn derive_status(
    transaction_type: &str,
    paid_amount: f64,
    amount: f64,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> InvoiceStatus {
    match TransactionType::parse(transaction_type) {
        Some(TransactionType::Payment) => InvoiceStatus::Paid,
        Some(TransactionType::Refund) => InvoiceStatus::Cancelled,
        Some(TransactionType::Partial) => InvoiceStatus::PartiallyPaid,
        Some(TransactionType::Pending) => match due_date {
            Some(due) if due < today => InvoiceStatus::Overdue,
            _ => InvoiceStatus::Pending,
        },
        // Legacy rows: classify by payment progress.
        None => {
            if paid_amount > 0.0 && paid_amount < amount {
                InvoiceStatus::PartiallyPaid
            } else {
                InvoiceStatus::Pending
            }
        }
    }
}

/// Computes the outstanding balance, clamped at zero.
///
/// Never negative, even when a corrupt row overstates `paid_amount`; the
/// engine clamps rather than failing so read paths stay total.
#[must_use]
pub fn compute_remaining(amount: f64, paid_amount: f64) -> f64 {
    (amount - paid_amount).max(0.0)
}

/// Formats the human-readable invoice identifier for a listed transaction.
///
/// The ordinal is the 1-based position within the *currently queried* result
/// set, not a global sequence, so the same transaction can format differently
/// across differently filtered views. That positional scheme is preserved
/// deliberately; renumbering is out of scope until the intended scheme is
/// confirmed.
#[must_use]
pub fn derive_invoice_number(issued_at: DateTime<Utc>, ordinal: usize) -> String {
    format!("INV-{}-{:04}", issued_at.year(), ordinal)
}

/// Checks that a monetary input is finite and non-negative.
fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Validates the amount pair and the due-date rule for a transaction type.
///
/// A due date may only accompany `pending` or `partial` transactions; supplying
/// one for a settled type is rejected rather than silently dropped.
fn validate_transaction_fields(
    transaction_type: TransactionType,
    amount: f64,
    paid_amount: f64,
    due_date: Option<NaiveDate>,
) -> Result<()> {
    validate_amount(amount)?;
    validate_amount(paid_amount)?;

    if paid_amount > amount {
        return Err(Error::Validation {
            message: format!("paid amount {paid_amount} exceeds total amount {amount}"),
        });
    }

    if due_date.is_some()
        && matches!(
            transaction_type,
            TransactionType::Payment | TransactionType::Refund
        )
    {
        return Err(Error::Validation {
            message: format!(
                "due date only applies to pending or partial transactions, not {}",
                transaction_type.as_str()
            ),
        });
    }

    Ok(())
}

/// Creates a new ledger transaction after validating every business rule.
///
/// The persisted `remaining_amount` is always `compute_remaining(amount,
/// paid_amount)`; callers never supply it. The register is fixed for the
/// lifetime of the row.
///
/// # Errors
/// Returns an error if:
/// - `amount` or `paid_amount` is negative or not finite
/// - `paid_amount` exceeds `amount`
/// - `transaction_type` or `register_type` is not a known tag
/// - a due date is supplied for a `payment` or `refund` transaction
/// - the database insert operation fails
#[allow(clippy::too_many_arguments)]
pub async fn create_transaction(
    db: &DatabaseConnection,
    amount: f64,
    transaction_type: String,
    paid_amount: f64,
    due_date: Option<NaiveDate>,
    register_type: String,
    description: String,
    client_id: Option<i64>,
    staff_id: Option<i64>,
) -> Result<transaction::Model> {
    let parsed_type =
        TransactionType::parse(&transaction_type).ok_or_else(|| Error::Validation {
            message: format!("unknown transaction type: {transaction_type}"),
        })?;

    RegisterType::parse(&register_type).ok_or_else(|| Error::Validation {
        message: format!("unknown register type: {register_type}"),
    })?;

    validate_transaction_fields(parsed_type, amount, paid_amount, due_date)?;

    let now = Utc::now();
    let model = transaction::ActiveModel {
        amount: Set(amount),
        transaction_type: Set(transaction_type),
        paid_amount: Set(paid_amount),
        remaining_amount: Set(compute_remaining(amount, paid_amount)),
        due_date: Set(due_date),
        register_type: Set(register_type),
        description: Set(description),
        timestamp: Set(now),
        client_id: Set(client_id),
        staff_id: Set(staff_id),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Partial-field update for an existing transaction.
///
/// Only supplied fields change; `None` leaves a field untouched. The
/// double-`Option` fields distinguish "leave as is" (`None`) from "set to
/// null" (`Some(None)`). There is deliberately no way to change
/// `register_type` — a transaction never moves between revenue streams.
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    /// New total amount
    pub amount: Option<f64>,
    /// New payment-state tag
    pub transaction_type: Option<String>,
    /// New collected amount
    pub paid_amount: Option<f64>,
    /// New due date, or `Some(None)` to clear it
    pub due_date: Option<Option<NaiveDate>>,
    /// New description
    pub description: Option<String>,
    /// New client reference, or `Some(None)` to detach
    pub client_id: Option<Option<i64>>,
    /// New staff reference, or `Some(None)` to detach
    pub staff_id: Option<Option<i64>>,
}

/// Applies a partial update to a transaction, re-validating the merged record.
///
/// The merged `(type, amount, paid_amount, due_date)` combination must satisfy
/// the same rules as creation, and `remaining_amount` is recomputed from the
/// merged amounts. When the type moves to `payment` or `refund` and the caller
/// did not address the due date explicitly, any stored due date is cleared to
/// keep the "due date only while owed" invariant; an explicitly supplied due
/// date alongside a settled type is still rejected.
///
/// # Errors
/// Returns an error if the transaction does not exist, the merged fields fail
/// validation, or the database update fails.
pub async fn update_transaction(
    db: &DatabaseConnection,
    transaction_id: i64,
    changes: TransactionUpdate,
) -> Result<transaction::Model> {
    let existing = Transaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    let amount = changes.amount.unwrap_or(existing.amount);
    let paid_amount = changes.paid_amount.unwrap_or(existing.paid_amount);
    let type_text = changes
        .transaction_type
        .clone()
        .unwrap_or_else(|| existing.transaction_type.clone());
    let parsed_type = TransactionType::parse(&type_text).ok_or_else(|| Error::Validation {
        message: format!("unknown transaction type: {type_text}"),
    })?;

    let due_explicit = changes.due_date.is_some();
    let mut due_date = changes.due_date.unwrap_or(existing.due_date);
    let settled = matches!(
        parsed_type,
        TransactionType::Payment | TransactionType::Refund
    );
    if settled && !due_explicit {
        // The row is fully settled now; a leftover due date would violate
        // the invariant that only owed transactions carry one.
        due_date = None;
    }

    validate_transaction_fields(parsed_type, amount, paid_amount, due_date)?;

    let mut active: transaction::ActiveModel = existing.into();
    if changes.amount.is_some() {
        active.amount = Set(amount);
    }
    if changes.paid_amount.is_some() {
        active.paid_amount = Set(paid_amount);
    }
    if changes.transaction_type.is_some() {
        active.transaction_type = Set(type_text);
    }
    active.due_date = Set(due_date);
    active.remaining_amount = Set(compute_remaining(amount, paid_amount));
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(client_id) = changes.client_id {
        active.client_id = Set(client_id);
    }
    if let Some(staff_id) = changes.staff_id {
        active.staff_id = Set(staff_id);
    }

    active.update(db).await.map_err(Into::into)
}

/// Retrieves a specific transaction by its unique ID.
///
/// Returns `None` when the transaction does not exist, allowing callers to
/// handle missing records gracefully.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<transaction::Model>> {
    Transaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists transactions, newest first, optionally filtered by register and/or
/// client.
///
/// This is the query surface the invoice projection reads from; the positional
/// invoice ordinal is a row's index within exactly this ordering.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_transactions(
    db: &DatabaseConnection,
    register_type: Option<&str>,
    client_id: Option<i64>,
) -> Result<Vec<transaction::Model>> {
    let mut query = Transaction::find();
    if let Some(register) = register_type {
        query = query.filter(transaction::Column::RegisterType.eq(register));
    }
    if let Some(client) = client_id {
        query = query.filter(transaction::Column::ClientId.eq(client));
    }
    query
        .order_by_desc(transaction::Column::Timestamp)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a transaction by ID.
///
/// # Errors
/// Returns an error if the transaction does not exist or the delete fails.
pub async fn delete_transaction(db: &DatabaseConnection, transaction_id: i64) -> Result<()> {
    let existing = Transaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    existing.delete(db).await?;
    Ok(())
}
