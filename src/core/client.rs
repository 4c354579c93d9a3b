//! Client business logic - Guest/customer directory operations.
//!
//! Deleting a client never cascades into the ledger: transactions keep their
//! (now dangling) reference and the invoice read path shows an absent name.

use crate::{
    entities::{Client, client},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new client record, performing input validation.
///
/// # Errors
/// Returns an error if the name is empty/whitespace-only or the insert fails.
pub async fn create_client(
    db: &DatabaseConnection,
    name: String,
    email: Option<String>,
    phone: Option<String>,
) -> Result<client::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Client name cannot be empty".to_string(),
        });
    }

    let model = client::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email),
        phone: Set(phone),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves a specific client by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Option<client::Model>> {
    Client::find_by_id(client_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists all clients, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .order_by_asc(client::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Updates a client's contact fields; only supplied fields change.
///
/// # Errors
/// Returns an error if the client does not exist, the new name is empty, or
/// the update fails.
pub async fn update_client(
    db: &DatabaseConnection,
    client_id: i64,
    name: Option<String>,
    email: Option<Option<String>>,
    phone: Option<Option<String>>,
) -> Result<client::Model> {
    let found = Client::find_by_id(client_id)
        .one(db)
        .await?
        .ok_or(Error::ClientNotFound { id: client_id })?;

    if let Some(ref new_name) = name {
        if new_name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Client name cannot be empty".to_string(),
            });
        }
    }

    let mut active: client::ActiveModel = found.into();
    if let Some(new_name) = name {
        active.name = Set(new_name.trim().to_string());
    }
    if let Some(new_email) = email {
        active.email = Set(new_email);
    }
    if let Some(new_phone) = phone {
        active.phone = Set(new_phone);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deletes a client record. Transactions referencing it are left alone.
///
/// # Errors
/// Returns an error if the client does not exist or the delete fails.
pub async fn delete_client(db: &DatabaseConnection, client_id: i64) -> Result<()> {
    let found = Client::find_by_id(client_id)
        .one(db)
        .await?
        .ok_or(Error::ClientNotFound { id: client_id })?;

    found.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_client_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_client(&db, "   ".to_string(), None, None).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_client_crud_round_trip() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_client(
            &db,
            "  Ada Lovelace ".to_string(),
            Some("ada@example.com".to_string()),
            None,
        )
        .await?;
        assert_eq!(created.name, "Ada Lovelace");

        let updated = update_client(
            &db,
            created.id,
            None,
            Some(None),
            Some(Some("+1 555 0100".to_string())),
        )
        .await?;
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.email, None);
        assert_eq!(updated.phone, Some("+1 555 0100".to_string()));

        delete_client(&db, created.id).await?;
        assert!(get_client_by_id(&db, created.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_list_clients_ordered() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_client(&db, "Charlie").await?;
        create_test_client(&db, "Alice").await?;
        create_test_client(&db, "Bob").await?;

        let clients = list_clients(&db).await?;
        let names: Vec<&str> = clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

        Ok(())
    }
}
