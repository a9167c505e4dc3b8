//! Unified error type for the portal core.

use crate::models::Role;
use thiserror::Error;

/// Everything that can go wrong in the portal core.
#[derive(Debug, Error)]
pub enum Error {
    /// Seed data or other configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The backing store could not be read or written.
    #[error("Storage unavailable: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Stored value could not be encoded or decoded: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Login mismatch. Wrong role, username and password are deliberately
    /// indistinguishable.
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("Unknown role: {role}")]
    UnknownRole { role: String },

    #[error("Unknown application status: {status}")]
    UnknownStatus { status: String },

    #[error("You need to sign in first")]
    Unauthenticated,

    #[error("This action requires the {required} role")]
    Forbidden { required: Role },

    /// The page exists, but not for this role
    #[error("This page is not available to {role} accounts")]
    PageUnavailable { role: Role },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// A required form field was blank
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
