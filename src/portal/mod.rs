//! Portal layer - the surface the rendering side talks to.
//!
//! [`Portal`] owns the database connection, the seed data and the credential
//! verifier, hands out repositories for each collection, and implements the
//! role-gated views and actions built on top of them.

/// Role-gated dashboard and applications views, admin review
pub mod dashboard;
/// Opportunity, event, resource and directory actions
pub mod engagement;

pub use dashboard::{AdminOverview, ApplicationsView, Dashboard};
pub use engagement::MemberDirectory;

use crate::{
    config::seed::SeedData,
    core::{
        notice::Notice,
        repository::Repository,
        session::{self, CredentialVerifier, StaticCredentials},
    },
    errors::Result,
    models::{Application, ApplicationForm, Event, Member, Opportunity, Resource, Session},
};
use sea_orm::DatabaseConnection;
use tracing::info;

/// Notice shown after an application is submitted.
pub const SUBMITTED_MESSAGE: &str =
    "Application submitted successfully! We will review it and get back to you soon.";

/// Number of records in each collection after [`Portal::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCounts {
    pub applications: usize,
    pub opportunities: usize,
    pub events: usize,
    pub resources: usize,
}

/// Shared portal context.
pub struct Portal {
    database: DatabaseConnection,
    seed: SeedData,
    credentials: Box<dyn CredentialVerifier + Send + Sync>,
}

impl Portal {
    /// Creates a portal that authenticates against the seed's credential table.
    #[must_use]
    pub fn new(database: DatabaseConnection, seed: SeedData) -> Self {
        let credentials = StaticCredentials::new(seed.users.clone());
        Self {
            database,
            seed,
            credentials: Box::new(credentials),
        }
    }

    /// Replaces the credential verifier.
    #[must_use]
    pub fn with_verifier<V>(mut self, verifier: V) -> Self
    where
        V: CredentialVerifier + Send + Sync + 'static,
    {
        self.credentials = Box::new(verifier);
        self
    }

    #[must_use]
    pub const fn database(&self) -> &DatabaseConnection {
        &self.database
    }

    /// Applications start out empty.
    #[must_use]
    pub fn applications(&self) -> Repository<'_, Application> {
        Repository::new(&self.database, Vec::new())
    }

    #[must_use]
    pub fn opportunities(&self) -> Repository<'_, Opportunity> {
        Repository::new(&self.database, self.seed.opportunities.clone())
    }

    #[must_use]
    pub fn events(&self) -> Repository<'_, Event> {
        Repository::new(&self.database, self.seed.events.clone())
    }

    #[must_use]
    pub fn resources(&self) -> Repository<'_, Resource> {
        Repository::new(&self.database, self.seed.resources.clone())
    }

    /// The static member directory.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.seed.members
    }

    /// Seeds every collection whose key is absent and reports the sizes.
    pub async fn initialize(&self) -> Result<CollectionCounts> {
        let counts = CollectionCounts {
            applications: self.applications().list().await?.len(),
            opportunities: self.opportunities().list().await?.len(),
            events: self.events().list().await?.len(),
            resources: self.resources().list().await?.len(),
        };
        info!(
            "Collections ready: {} applications, {} opportunities, {} events, {} resources",
            counts.applications, counts.opportunities, counts.events, counts.resources
        );
        Ok(counts)
    }

    /// Signs in with a claimed role. See [`session::login`].
    pub async fn login(&self, username: &str, password: &str, role: &str) -> Result<Session> {
        session::login(
            &self.database,
            &*self.credentials,
            username,
            password,
            role,
        )
        .await
    }

    pub async fn logout(&self) -> Result<()> {
        session::logout(&self.database).await
    }

    pub async fn current_session(&self) -> Result<Option<Session>> {
        session::current_session(&self.database).await
    }

    /// Stores a new application (status `pending`).
    pub async fn submit_application(
        &self,
        form: ApplicationForm,
    ) -> Result<(Application, Notice)> {
        let application = self.applications().create(form).await?;
        Ok((application, Notice::success(SUBMITTED_MESSAGE)))
    }
}
