//! Entity repositories - list/create/update over the key-value store.
//!
//! Each entity kind keeps its whole collection as one JSON array under its own
//! store key. Reads go straight to the store; every mutation rewrites the full
//! array, so concurrent writers race and the last write wins.
//!
//! Collections are seeded once: when the key is absent the repository's
//! default records are written and returned. A key that is present is never
//! re-seeded or repaired, even if it holds an empty array.

use crate::{
    core::{
        filter::{self, Searchable},
        id::generate_id,
        store,
    },
    errors::{Error, Result},
    models::{Application, ApplicationStatus},
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument, warn};

/// A record kind persisted as one collection in the store.
pub trait Collection: Serialize + DeserializeOwned + Clone {
    /// Store key holding the serialized collection
    const STORE_KEY: &'static str;
    /// Kind name used in logs and `NotFound` errors
    const KIND: &'static str;

    /// Identifier, unique within the collection.
    fn id(&self) -> &str;
}

/// A record kind that callers can create from user-supplied fields.
pub trait Creatable: Collection {
    /// User-supplied fields; everything except generated values.
    type Draft;

    /// Checks that required fields are present. Contents are not validated.
    fn validate(_draft: &Self::Draft) -> Result<()> {
        Ok(())
    }

    /// Builds the record from its draft plus the generated id and timestamp.
    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;
}

/// Repository for one entity kind.
pub struct Repository<'a, T> {
    db: &'a DatabaseConnection,
    defaults: Vec<T>,
}

impl<'a, T: Collection> Repository<'a, T> {
    /// Creates a repository that seeds `defaults` on first use.
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection, defaults: Vec<T>) -> Self {
        Self { db, defaults }
    }

    /// Returns the stored collection, seeding the defaults if the key is absent.
    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn list(&self) -> Result<Vec<T>> {
        if let Some(items) = store::get::<Vec<T>>(self.db, T::STORE_KEY).await? {
            debug!("Loaded {} {} records", items.len(), T::KIND);
            return Ok(items);
        }

        info!(
            "No stored {} collection under '{}'; seeding {} default records",
            T::KIND,
            T::STORE_KEY,
            self.defaults.len()
        );
        self.persist(&self.defaults).await?;
        Ok(self.defaults.clone())
    }

    /// Finds a record by id.
    pub async fn find(&self, id: &str) -> Result<Option<T>> {
        let items = self.list().await?;
        Ok(items.into_iter().find(|item| item.id() == id))
    }

    /// Fetches a record by id.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no record has this id.
    pub async fn get(&self, id: &str) -> Result<T> {
        self.find(id).await?.ok_or_else(|| Error::NotFound {
            kind: T::KIND,
            id: id.to_owned(),
        })
    }

    async fn persist(&self, items: &[T]) -> Result<()> {
        store::set(self.db, T::STORE_KEY, items).await
    }
}

impl<T: Collection + Searchable> Repository<'_, T> {
    /// Lists the collection narrowed by the search/filter engine.
    pub async fn search(&self, query: &str, category: Option<&str>) -> Result<Vec<T>> {
        let items = self.list().await?;
        Ok(filter::search(&items, query, category)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl<T: Creatable> Repository<'_, T> {
    /// Validates `draft`, assigns an id and creation time, appends the record
    /// and persists the whole collection.
    #[instrument(skip(self, draft), fields(kind = T::KIND))]
    pub async fn create(&self, draft: T::Draft) -> Result<T> {
        T::validate(&draft)?;

        let created_at = Utc::now();
        let record = T::from_draft(generate_id(), created_at, draft);

        let mut items = self.list().await?;
        items.push(record.clone());
        self.persist(&items).await?;

        info!("Created {} '{}'", T::KIND, record.id());
        Ok(record)
    }
}

impl Repository<'_, Application> {
    /// Sets the status of the application with `id`.
    ///
    /// Any status may replace any other. An unknown id is not an error: the
    /// stored collection is left untouched and `false` is returned.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: &str, status: ApplicationStatus) -> Result<bool> {
        let mut items = self.list().await?;
        let Some(application) = items.iter_mut().find(|app| app.id == id) else {
            warn!("No application '{}' to update; ignoring", id);
            return Ok(false);
        };

        let previous = application.status;
        application.status = status;
        self.persist(&items).await?;

        info!("Application '{}' status {} -> {}", id, previous, status);
        Ok(true)
    }

    /// Counts applications currently in `status`.
    pub async fn count_by_status(&self, status: ApplicationStatus) -> Result<usize> {
        let items = self.list().await?;
        Ok(items.iter().filter(|app| app.status == status).count())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::id::is_generated_id;
    use crate::models::{ApplicationForm, Resource, ResourceDraft};
    use crate::test_utils::{application_form, sample_resources, setup_test_db};

    #[tokio::test]
    async fn test_list_seeds_defaults_once() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = sample_resources();
        let repo = Repository::new(&db, defaults.clone());

        assert!(!store::contains(&db, Resource::STORE_KEY).await?);
        assert_eq!(repo.list().await?, defaults);
        assert!(store::contains(&db, Resource::STORE_KEY).await?);
        assert_eq!(repo.list().await?, defaults);
        Ok(())
    }

    #[tokio::test]
    async fn test_present_key_is_never_reseeded() -> Result<()> {
        let db = setup_test_db().await?;
        store::set(&db, Resource::STORE_KEY, &Vec::<Resource>::new()).await?;

        let repo = Repository::new(&db, sample_resources());
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_cleared_store_reseeds() -> Result<()> {
        let db = setup_test_db().await?;
        let repo = Repository::new(&db, sample_resources());
        repo.create(ResourceDraft {
            title: "Budget Template".to_string(),
            category: "Templates".to_string(),
            format: "XLSX".to_string(),
            size: "120 KB".to_string(),
            description: "Monthly budget sheet".to_string(),
        })
        .await?;
        assert_eq!(repo.list().await?.len(), 3);

        store::remove(&db, Resource::STORE_KEY).await?;
        assert_eq!(repo.list().await?, sample_resources());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_application_appends_pending_record() -> Result<()> {
        let db = setup_test_db().await?;
        let repo: Repository<'_, Application> = Repository::new(&db, Vec::new());

        let form = application_form("Jane Doe", "jane@x.org", "Tech Academy Rwanda");
        let created = repo.create(form.clone()).await?;

        let stored = repo.list().await?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], created);
        assert_eq!(stored[0].form, form);
        assert_eq!(stored[0].status, ApplicationStatus::Pending);
        assert!(is_generated_id(&stored[0].id));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_requires_name_and_email() -> Result<()> {
        let db = setup_test_db().await?;
        let repo: Repository<'_, Application> = Repository::new(&db, Vec::new());

        let result = repo
            .create(ApplicationForm {
                email: "jane@x.org".to_string(),
                ..ApplicationForm::default()
            })
            .await;
        assert!(matches!(result, Err(Error::MissingField { field: "fullName" })));

        let result = repo
            .create(ApplicationForm {
                full_name: "Jane Doe".to_string(),
                email: "  ".to_string(),
                ..ApplicationForm::default()
            })
            .await;
        assert!(matches!(result, Err(Error::MissingField { field: "email" })));

        // Failed creates never touch the store
        assert!(!store::contains(&db, Application::STORE_KEY).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_changes_only_target() -> Result<()> {
        let db = setup_test_db().await?;
        let repo: Repository<'_, Application> = Repository::new(&db, Vec::new());
        let first = repo
            .create(application_form("Jane Doe", "jane@x.org", "Tech Academy Rwanda"))
            .await?;
        let second = repo
            .create(application_form("John Roe", "john@y.org", "Youth Fund"))
            .await?;

        let updated = repo
            .update_status(&first.id, ApplicationStatus::Approved)
            .await?;
        assert!(updated);

        let stored = repo.list().await?;
        assert_eq!(stored[0].status, ApplicationStatus::Approved);
        assert_eq!(stored[0].form, first.form);
        assert_eq!(stored[1], second);

        // No transition guard: any status can follow any other
        let updated = repo
            .update_status(&first.id, ApplicationStatus::Pending)
            .await?;
        assert!(updated);
        assert_eq!(repo.get(&first.id).await?.status, ApplicationStatus::Pending);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_leaves_bytes_unchanged() -> Result<()> {
        let db = setup_test_db().await?;
        let repo: Repository<'_, Application> = Repository::new(&db, Vec::new());
        repo.create(application_form("Jane Doe", "jane@x.org", "Tech Academy Rwanda"))
            .await?;

        let before = store::get_raw(&db, Application::STORE_KEY).await?;
        assert!(
            !repo
                .update_status("id_0_missing00", ApplicationStatus::Rejected)
                .await?
        );
        let after = store::get_raw(&db, Application::STORE_KEY).await?;
        assert_eq!(before, after);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let repo = Repository::new(&db, sample_resources());
        let result = repo.get("404").await;
        assert!(matches!(
            result,
            Err(Error::NotFound { kind: "Resource", ref id }) if id == "404"
        ));
        assert!(repo.find("1").await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_search_filters_applications() -> Result<()> {
        let db = setup_test_db().await?;
        let repo: Repository<'_, Application> = Repository::new(&db, Vec::new());
        repo.create(application_form("Jane Doe", "jane@x.org", "Tech Academy Rwanda"))
            .await?;
        repo.create(application_form("John Roe", "john@y.org", "Youth Fund"))
            .await?;

        let found = repo.search("tech", None).await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].form.org_name, "Tech Academy Rwanda");

        let pending = repo.search("", Some("pending")).await?;
        assert_eq!(pending.len(), 2);
        assert!(repo.search("", Some("approved")).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_count_by_status() -> Result<()> {
        let db = setup_test_db().await?;
        let repo: Repository<'_, Application> = Repository::new(&db, Vec::new());
        let app = repo
            .create(application_form("Jane Doe", "jane@x.org", "Tech Academy Rwanda"))
            .await?;
        repo.create(application_form("John Roe", "john@y.org", "Youth Fund"))
            .await?;
        repo.update_status(&app.id, ApplicationStatus::Approved)
            .await?;

        assert_eq!(repo.count_by_status(ApplicationStatus::Pending).await?, 1);
        assert_eq!(repo.count_by_status(ApplicationStatus::Approved).await?, 1);
        assert_eq!(repo.count_by_status(ApplicationStatus::Rejected).await?, 0);
        Ok(())
    }
}
