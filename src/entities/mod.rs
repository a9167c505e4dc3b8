//! Entity module - `SeaORM` entity definitions for the database.
//! The portal needs a single key-value table; collections are stored as
//! JSON documents inside it.

pub mod kv_entry;

pub use kv_entry::{Column as KvEntryColumn, Entity as KvEntry, Model as KvEntryModel};
