//! Membership applications.
//!
//! Applicants submit an [`ApplicationForm`]; the stored [`Application`] adds a
//! generated id, the submission time and a review status that starts as
//! `pending`. Admins may move an application to any status at any time.

use crate::{
    core::{
        filter::{SearchFields, Searchable},
        repository::{Collection, Creatable},
    },
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt, str::FromStr};

/// Review status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    /// Submitted, not yet looked at
    #[default]
    Pending,
    /// An admin is reviewing it
    UnderReview,
    /// Accepted into the network
    Approved,
    /// Declined
    Rejected,
}

impl ApplicationStatus {
    /// Every status, in review-flow order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::UnderReview,
        Self::Approved,
        Self::Rejected,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under-review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus {
                status: s.to_owned(),
            })
    }
}

/// Fields an applicant fills in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Date of birth as entered
    pub dob: String,
    pub gender: String,
    pub org_name: String,
    /// Applicant's role within their organisation
    pub role: String,
    pub org_type: String,
    /// Selected focus areas, in the order they were ticked
    pub focus_areas: Vec<String>,
    pub motivation: String,
    pub impact: String,
    pub contribution: String,
}

/// A submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Generated id (`id_<millis>_<suffix>`)
    pub id: String,
    /// What the applicant submitted
    #[serde(flatten)]
    pub form: ApplicationForm,
    /// Review status
    pub status: ApplicationStatus,
    /// Submission time
    pub submitted_date: DateTime<Utc>,
}

impl Collection for Application {
    const STORE_KEY: &'static str = "yan_applications";
    const KIND: &'static str = "Application";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Application {
    type Draft = ApplicationForm;

    fn validate(form: &ApplicationForm) -> Result<()> {
        if form.full_name.trim().is_empty() {
            return Err(Error::MissingField { field: "fullName" });
        }
        if form.email.trim().is_empty() {
            return Err(Error::MissingField { field: "email" });
        }
        Ok(())
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, form: ApplicationForm) -> Self {
        Self {
            id,
            form,
            status: ApplicationStatus::Pending,
            submitted_date: created_at,
        }
    }
}

fn full_name(app: &Application) -> Cow<'_, str> {
    Cow::Borrowed(&app.form.full_name)
}

fn org_name(app: &Application) -> Cow<'_, str> {
    Cow::Borrowed(&app.form.org_name)
}

fn email(app: &Application) -> Cow<'_, str> {
    Cow::Borrowed(&app.form.email)
}

fn status(app: &Application) -> Cow<'_, str> {
    Cow::Borrowed(app.status.as_str())
}

impl Searchable for Application {
    fn search_fields() -> SearchFields<Self> {
        SearchFields::new(vec![full_name, org_name, email], status)
    }
}
