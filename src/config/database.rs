//! Database configuration module for the portal store.
//!
//! Handles the `SQLite` connection and creation of the key-value table. The
//! table is generated from the entity definition with
//! `Schema::create_table_from_entity`, so the schema always matches the
//! Rust model without hand-written SQL.

use crate::entities::KvEntry;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/yan_portal.sqlite?mode=rwc";

/// Gets the database URL from `DATABASE_URL` or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Connects to the database named by `DATABASE_URL` (or the default file).
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to {}", database_url);
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the key-value table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut kv_table = schema.create_table_from_entity(KvEntry);
    kv_table.if_not_exists();

    db.execute(builder.build(&kv_table)).await?;
    info!("Key-value table ensured.");
    Ok(())
}
