//! Transaction entity - The ledger's unit of record.
//!
//! Each transaction carries a total `amount`, the authoritative payment-state
//! tag `transaction_type` (`"payment"`, `"refund"`, `"pending"`, `"partial"`),
//! the collected `paid_amount`, the persisted `remaining_amount`, an optional
//! `due_date` (pending/partial only), and the `register_type` revenue stream
//! it belongs to. Both tag columns persist as text so legacy rows that predate
//! the current enums keep loading.
//!
//! `client_id` and `staff_id` are soft references without foreign keys:
//! deleting the referenced entity must never delete or block this row, so the
//! read path resolves names best-effort instead.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Total monetary value, non-negative
    pub amount: f64,
    /// Payment-state tag: `"payment"`, `"refund"`, `"pending"`, or `"partial"`
    pub transaction_type: String,
    /// Amount already collected; `0 <= paid_amount <= amount`
    pub paid_amount: f64,
    /// Amount still owed; equals `amount - paid_amount` whenever persisted
    pub remaining_amount: f64,
    /// Payment deadline; present only for pending/partial transactions
    pub due_date: Option<Date>,
    /// Revenue stream: `"hotel"`, `"restaurant"`, `"poker"`, or `"rooftop"`.
    /// Never changes after creation.
    pub register_type: String,
    /// Human-readable description of the transaction
    pub description: String,
    /// When the transaction was created
    pub timestamp: DateTimeUtc,
    /// Soft reference to the client this transaction belongs to; may dangle
    /// after the client is deleted
    pub client_id: Option<i64>,
    /// Soft reference to the staff member who recorded it; may dangle after
    /// the staff member is deleted
    pub staff_id: Option<i64>,
}

/// No enforced relationships; client/staff references are resolved manually
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
