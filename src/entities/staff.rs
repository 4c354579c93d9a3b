//! Staff entity - Employees who can be referenced by ledger transactions.
//!
//! Transactions point here through a soft `staff_id` column; deleting a staff
//! member leaves the ledger untouched.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    /// Unique identifier for the staff member
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Staff member display name
    pub name: String,
    /// Job role (e.g., "reception", "housekeeping", "dealer")
    pub role: String,
}

/// No enforced relationships; references to staff are soft
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
