//! Users, roles and the persisted session record.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Portal role. Each role has exactly one entry in the credential table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Reviews applications and sees the metrics dashboard
    Admin,
    /// Approved network member
    Member,
    /// Someone who has applied (or is about to) for membership
    Applicant,
}

/// Page a freshly signed-in user is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Role-specific dashboard
    Dashboard,
    /// Applications page (review list for admins, own status for applicants)
    Applications,
}

impl Role {
    /// Every role, in credential-table order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Member, Self::Applicant];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Applicant => "applicant",
        }
    }

    /// Where this role lands after a successful login.
    #[must_use]
    pub const fn landing(self) -> Landing {
        match self {
            Self::Admin | Self::Member => Landing::Dashboard,
            Self::Applicant => Landing::Applications,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownRole { role: s.to_owned() })
    }
}

/// Entry of the credential table. Passwords are compared in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name
    pub username: String,
    /// Plaintext password
    pub password: String,
    /// Role this entry authenticates
    pub role: Role,
    /// Display name
    pub name: String,
}

/// The signed-in identity, persisted under `yan_current_user`.
///
/// Client-asserted: nothing validates it after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Login name
    pub username: String,
    /// Authenticated role
    pub role: Role,
    /// Display name
    pub name: String,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role,
            name: user.name.clone(),
        }
    }
}
