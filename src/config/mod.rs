/// Database connection and schema management
pub mod database;

/// Seed data (default records, member directory, credential table) from TOML
pub mod seed;
