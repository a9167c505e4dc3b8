//! Session and identity store.
//!
//! Login resolves a claimed role, username and password through a
//! [`CredentialVerifier`] and persists the resulting [`Session`] under
//! `yan_current_user`. The session is client-asserted: it never expires and
//! nothing re-validates it.

use crate::{
    core::store,
    errors::{Error, Result},
    models::{Role, Session, User},
};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};

/// Store key of the signed-in session.
pub const SESSION_KEY: &str = "yan_current_user";

/// Checks login credentials. Swap the implementation to change how users
/// authenticate without touching callers.
pub trait CredentialVerifier {
    /// Returns the matching user if `username` and `password` belong to the
    /// account registered for `role`.
    fn verify(&self, username: &str, password: &str, role: Role) -> Option<User>;
}

/// Credential table with one account per role, compared in plaintext.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: Vec<User>,
}

impl StaticCredentials {
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str, role: Role) -> Option<User> {
        // Only the first account registered for the role is considered
        let user = self.users.iter().find(|user| user.role == role)?;
        (user.username == username && user.password == password).then(|| user.clone())
    }
}

/// Authenticates and persists the session.
///
/// # Errors
/// Returns `Error::InvalidCredentials` for an unknown claimed role, a wrong
/// username or a wrong password alike.
#[instrument(skip(db, verifier, password))]
pub async fn login<V: CredentialVerifier + ?Sized>(
    db: &DatabaseConnection,
    verifier: &V,
    username: &str,
    password: &str,
    claimed_role: &str,
) -> Result<Session> {
    let Ok(role) = claimed_role.parse::<Role>() else {
        warn!("Login attempt with unknown role");
        return Err(Error::InvalidCredentials);
    };

    let Some(user) = verifier.verify(username, password, role) else {
        warn!("Login rejected for '{}' as {}", username, role);
        return Err(Error::InvalidCredentials);
    };

    let session = Session::from(&user);
    store::set(db, SESSION_KEY, &session).await?;
    info!("'{}' signed in as {}", session.username, session.role);
    Ok(session)
}

/// The signed-in session, if any.
pub async fn current_session(db: &DatabaseConnection) -> Result<Option<Session>> {
    store::get(db, SESSION_KEY).await
}

/// Whether someone is signed in.
pub async fn is_authenticated(db: &DatabaseConnection) -> Result<bool> {
    Ok(current_session(db).await?.is_some())
}

/// Clears the persisted session.
#[instrument(skip(db))]
pub async fn logout(db: &DatabaseConnection) -> Result<()> {
    if store::remove(db, SESSION_KEY).await? {
        info!("Signed out");
    }
    Ok(())
}

/// The signed-in session.
///
/// # Errors
/// Returns `Error::Unauthenticated` when nobody is signed in.
pub async fn require_session(db: &DatabaseConnection) -> Result<Session> {
    current_session(db).await?.ok_or(Error::Unauthenticated)
}

/// Checks that `session` holds `role`.
///
/// # Errors
/// Returns `Error::Forbidden` for any other role.
pub fn require_role(session: &Session, role: Role) -> Result<()> {
    if session.role == role {
        Ok(())
    } else {
        Err(Error::Forbidden { required: role })
    }
}
