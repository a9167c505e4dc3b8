//! Seed data loading.
//!
//! The portal ships a bundled dataset compiled in from `data/defaults.toml`:
//! default opportunities, events and resources (written to the store the first
//! time each collection is read), the member directory, and the credential
//! table. Setting `YAN_SEED_FILE` replaces the bundled dataset with a file of
//! the same shape.

use crate::errors::{Error, Result};
use crate::models::{Event, Member, Opportunity, Resource, User};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

const BUNDLED_SEED: &str = include_str!("../../data/defaults.toml");

/// Environment variable naming an override seed file.
pub const SEED_FILE_VAR: &str = "YAN_SEED_FILE";

/// Everything the portal is seeded with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Credential table, one entry per role
    #[serde(default)]
    pub users: Vec<User>,
    /// Default opportunities
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    /// Default events
    #[serde(default)]
    pub events: Vec<Event>,
    /// Default resources
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Member directory
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Parses seed data from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML is invalid or a record is malformed.
pub fn parse_seed(contents: &str) -> Result<SeedData> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })
}

/// The dataset compiled into the crate.
pub fn bundled_seed() -> Result<SeedData> {
    parse_seed(BUNDLED_SEED)
}

/// Loads seed data from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or parsed.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path_ref = path.as_ref();
    debug!("Loading seed data from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    parse_seed(&contents)
}

/// Loads the file named by `YAN_SEED_FILE`, or the bundled dataset if unset.
pub fn load_seed_from_env() -> Result<SeedData> {
    match std::env::var(SEED_FILE_VAR) {
        Ok(path) => {
            info!("Using seed data from {}", path);
            load_seed(path)
        }
        Err(_) => bundled_seed(),
    }
}
