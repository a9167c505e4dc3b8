//! Key-value entry entity - one persisted value per string key.
//!
//! Every collection the portal keeps lives in a single row as a JSON document,
//! mirroring how a browser's local storage holds it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key-value database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kv_entries")]
pub struct Model {
    /// Store key (e.g. `"yan_applications"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// JSON-encoded value
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When the value was last written
    pub updated_at: DateTimeUtc,
}

/// `KvEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
