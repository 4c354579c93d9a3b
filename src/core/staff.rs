//! Staff business logic - Employee directory operations.
//!
//! As with clients, deleting a staff member never cascades into the ledger.

use crate::{
    entities::{Staff, staff},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new staff record, performing input validation.
///
/// # Errors
/// Returns an error if the name is empty/whitespace-only or the insert fails.
pub async fn create_staff(
    db: &DatabaseConnection,
    name: String,
    role: String,
) -> Result<staff::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Staff name cannot be empty".to_string(),
        });
    }

    let model = staff::ActiveModel {
        name: Set(name.trim().to_string()),
        role: Set(role),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves a specific staff member by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_staff_by_id(
    db: &DatabaseConnection,
    staff_id: i64,
) -> Result<Option<staff::Model>> {
    Staff::find_by_id(staff_id).one(db).await.map_err(Into::into)
}

/// Lists all staff members, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_staff(db: &DatabaseConnection) -> Result<Vec<staff::Model>> {
    Staff::find()
        .order_by_asc(staff::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Updates a staff member's role.
///
/// # Errors
/// Returns an error if the staff member does not exist or the update fails.
pub async fn update_staff_role(
    db: &DatabaseConnection,
    staff_id: i64,
    role: String,
) -> Result<staff::Model> {
    let found = Staff::find_by_id(staff_id)
        .one(db)
        .await?
        .ok_or(Error::StaffNotFound { id: staff_id })?;

    let mut active: staff::ActiveModel = found.into();
    active.role = Set(role);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a staff record. Transactions referencing it are left alone.
///
/// # Errors
/// Returns an error if the staff member does not exist or the delete fails.
pub async fn delete_staff(db: &DatabaseConnection, staff_id: i64) -> Result<()> {
    let found = Staff::find_by_id(staff_id)
        .one(db)
        .await?
        .ok_or(Error::StaffNotFound { id: staff_id })?;

    found.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_staff_crud_round_trip() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_staff(&db, "Marco".to_string(), "reception".to_string()).await?;
        assert_eq!(created.role, "reception");

        let updated = update_staff_role(&db, created.id, "night manager".to_string()).await?;
        assert_eq!(updated.role, "night manager");

        delete_staff(&db, created.id).await?;
        assert!(get_staff_by_id(&db, created.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_staff_deletion_keeps_transactions() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_staff(&db, "Dealer Dana").await?;
        let tx = crate::core::ledger::create_transaction(
            &db,
            500.0,
            "payment".to_string(),
            500.0,
            None,
            "poker".to_string(),
            "Table buy-in".to_string(),
            None,
            Some(member.id),
        )
        .await?;

        delete_staff(&db, member.id).await?;

        let stored = crate::core::ledger::get_transaction_by_id(&db, tx.id)
            .await?
            .unwrap();
        assert_eq!(stored.staff_id, Some(member.id));

        Ok(())
    }
}
