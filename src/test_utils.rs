//! Shared test utilities for the portal crate.
//!
//! Helpers for setting up an in-memory store and building records with
//! sensible defaults.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use crate::{
    config::seed::{SeedData, bundled_seed},
    core::session::StaticCredentials,
    errors::Result,
    models::{ApplicationForm, Event, Opportunity, Resource},
    portal::Portal,
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with the key-value table.
/// This is the standard setup for all store-backed tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A portal over a fresh in-memory store and the bundled seed data.
pub async fn setup_test_portal() -> Result<Portal> {
    let db = setup_test_db().await?;
    Ok(Portal::new(db, test_seed()))
}

/// The bundled seed data. Panics if it fails to parse.
pub fn test_seed() -> SeedData {
    bundled_seed().expect("bundled seed data should parse")
}

pub fn test_credentials() -> StaticCredentials {
    StaticCredentials::new(test_seed().users)
}

pub fn sample_opportunities() -> Vec<Opportunity> {
    test_seed().opportunities
}

pub fn sample_events() -> Vec<Event> {
    test_seed().events
}

pub fn sample_resources() -> Vec<Resource> {
    test_seed().resources
}

/// An application form with the given identity fields and filler elsewhere.
///
/// # Defaults
/// * `focus_areas`: `["Education", "Health"]`
/// * `org_type`: `"NGO"`
pub fn application_form(full_name: &str, email: &str, org_name: &str) -> ApplicationForm {
    ApplicationForm {
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: "+250 788 000 000".to_string(),
        dob: "2000-05-04".to_string(),
        gender: "female".to_string(),
        org_name: org_name.to_string(),
        role: "Coordinator".to_string(),
        org_type: "NGO".to_string(),
        focus_areas: vec!["Education".to_string(), "Health".to_string()],
        motivation: "Grow our reach".to_string(),
        impact: "Reached 300 students".to_string(),
        contribution: "Training sessions".to_string(),
    }
}
