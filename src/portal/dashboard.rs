//! Role-gated views over the applications collection.

use super::Portal;
use crate::{
    core::{filter, notice::Notice, session},
    errors::{Error, Result},
    models::{Application, ApplicationStatus, Role},
};
use tracing::{debug, instrument};

/// How many applications the admin dashboard previews.
pub const RECENT_APPLICATIONS: usize = 5;

/// Metrics on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOverview {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    /// The first [`RECENT_APPLICATIONS`] applications in stored order
    pub recent: Vec<Application>,
}

/// What the dashboard shows for the signed-in role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dashboard {
    Admin {
        name: String,
        overview: AdminOverview,
    },
    Member {
        name: String,
    },
}

/// What the applications page shows for the signed-in role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationsView {
    /// Admin review table, already narrowed by the search/filter inputs
    Review(Vec<Application>),
    /// The applicant's own application, if they have submitted one
    Own(Option<Application>),
}

/// Address an applicant account's own application is matched by.
#[must_use]
pub fn applicant_email(username: &str) -> String {
    format!("{username}@example.com")
}

impl Portal {
    /// Dashboard for the signed-in admin or member.
    ///
    /// # Errors
    /// `Error::Unauthenticated` when nobody is signed in;
    /// `Error::PageUnavailable` for applicants, whose home is the applications
    /// page.
    pub async fn dashboard(&self) -> Result<Dashboard> {
        let current = session::require_session(self.database()).await?;
        match current.role {
            Role::Admin => Ok(Dashboard::Admin {
                name: current.name,
                overview: self.admin_overview().await?,
            }),
            Role::Member => Ok(Dashboard::Member { name: current.name }),
            Role::Applicant => Err(Error::PageUnavailable { role: current.role }),
        }
    }

    /// Application totals and the recent-applications preview.
    pub async fn admin_overview(&self) -> Result<AdminOverview> {
        let repo = self.applications();
        let applications = repo.list().await?;

        Ok(AdminOverview {
            total: applications.len(),
            pending: repo.count_by_status(ApplicationStatus::Pending).await?,
            approved: repo.count_by_status(ApplicationStatus::Approved).await?,
            recent: applications
                .iter()
                .take(RECENT_APPLICATIONS)
                .cloned()
                .collect(),
        })
    }

    /// Applications page for the signed-in user.
    ///
    /// Admins get the collection narrowed by `query` and `status`; applicants
    /// get their own application. Members have no applications page.
    ///
    /// An applicant whose email matches no application sees none; there is
    /// deliberately no fallback to somebody else's record.
    #[instrument(skip(self))]
    pub async fn applications_view(
        &self,
        query: &str,
        status: Option<&str>,
    ) -> Result<ApplicationsView> {
        let current = session::require_session(self.database()).await?;
        let applications = self.applications().list().await?;

        match current.role {
            Role::Admin => {
                let matches = filter::search(&applications, query, status);
                debug!("{} of {} applications match", matches.len(), applications.len());
                Ok(ApplicationsView::Review(matches.into_iter().cloned().collect()))
            }
            Role::Applicant => {
                let email = applicant_email(&current.username);
                let own = applications.into_iter().find(|app| app.form.email == email);
                Ok(ApplicationsView::Own(own))
            }
            Role::Member => Err(Error::PageUnavailable { role: current.role }),
        }
    }

    /// Admin action: set an application's status.
    ///
    /// Returns `None` when no application has `id`.
    ///
    /// # Errors
    /// `Error::Forbidden` unless an admin is signed in.
    pub async fn review_application(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Option<Notice>> {
        let current = session::require_session(self.database()).await?;
        session::require_role(&current, Role::Admin)?;

        let updated = self.applications().update_status(id, status).await?;
        Ok(updated.then(|| Notice::success(format!("Application {status} successfully!"))))
    }
}
