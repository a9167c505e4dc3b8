//! Key-value store adapter.
//!
//! A direct pass-through to the `kv_entries` table: every call reads or writes
//! immediately, values are JSON-encoded, and writes overwrite. There is no
//! buffering and no atomicity across keys.

use crate::{
    entities::{KvEntry, kv_entry},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*, sea_query::OnConflict};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

/// Returns the raw JSON stored under `key`, if any.
#[instrument(skip(db))]
pub async fn get_raw(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let entry = KvEntry::find_by_id(key.to_owned()).one(db).await?;
    Ok(entry.map(|entry| entry.value))
}

/// Reads and decodes the value stored under `key`.
///
/// # Errors
/// Returns `Error::Serialization` if the stored JSON does not decode as `T`.
pub async fn get<T: DeserializeOwned>(db: &DatabaseConnection, key: &str) -> Result<Option<T>> {
    let Some(raw) = get_raw(db, key).await? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Encodes `value` and stores it under `key`, replacing any previous value.
#[instrument(skip(db, value))]
pub async fn set<T: Serialize + ?Sized>(
    db: &DatabaseConnection,
    key: &str,
    value: &T,
) -> Result<()> {
    let encoded = serde_json::to_string(value)?;
    debug!("Writing {} bytes under '{}'", encoded.len(), key);

    let entry = kv_entry::ActiveModel {
        key: Set(key.to_owned()),
        value: Set(encoded),
        updated_at: Set(Utc::now()),
    };

    KvEntry::insert(entry)
        .on_conflict(
            OnConflict::column(kv_entry::Column::Key)
                .update_columns([kv_entry::Column::Value, kv_entry::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

/// Removes the value under `key`. Returns whether a value was present.
#[instrument(skip(db))]
pub async fn remove(db: &DatabaseConnection, key: &str) -> Result<bool> {
    let result = KvEntry::delete_by_id(key.to_owned()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Whether any value is stored under `key`.
pub async fn contains(db: &DatabaseConnection, key: &str) -> Result<bool> {
    Ok(get_raw(db, key).await?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::setup_test_db;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        pinned: bool,
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() -> Result<()> {
        let db = setup_test_db().await?;
        let value: Option<Note> = get(&db, "missing").await?;
        assert!(value.is_none());
        assert!(!contains(&db, "missing").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_then_get() -> Result<()> {
        let db = setup_test_db().await?;
        let note = Note {
            title: "hello".to_string(),
            pinned: true,
        };
        set(&db, "note", &note).await?;

        let stored: Option<Note> = get(&db, "note").await?;
        assert_eq!(stored, Some(note));
        assert_eq!(
            get_raw(&db, "note").await?.as_deref(),
            Some(r#"{"title":"hello","pinned":true}"#)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_set_overwrites() -> Result<()> {
        let db = setup_test_db().await?;
        set(&db, "counter", &1).await?;
        set(&db, "counter", &2).await?;
        assert_eq!(get::<i32>(&db, "counter").await?, Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn test_remove() -> Result<()> {
        let db = setup_test_db().await?;
        set(&db, "temp", "value").await?;
        assert!(remove(&db, "temp").await?);
        assert!(!contains(&db, "temp").await?);
        // Removing again reports nothing was there
        assert!(!remove(&db, "temp").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_undecodable_value_is_serialization_error() -> Result<()> {
        let db = setup_test_db().await?;
        set(&db, "note", "just a string").await?;
        let result = get::<Note>(&db, "note").await;
        assert!(matches!(result, Err(Error::Serialization(_))));
        Ok(())
    }
}
