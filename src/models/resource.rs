//! Downloadable resources.

use crate::{
    core::{
        filter::{SearchFields, Searchable},
        repository::{Collection, Creatable},
    },
    errors::{Error, Result},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    /// Free-form grouping such as `Documentation` or `Tools`
    pub category: String,
    /// File format label (`PDF`, `DOCX`, ...)
    #[serde(rename = "type")]
    pub format: String,
    /// Human-readable size (`2.5 MB`)
    pub size: String,
    pub description: String,
    pub upload_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    pub title: String,
    pub category: String,
    pub format: String,
    pub size: String,
    pub description: String,
}

impl Collection for Resource {
    const STORE_KEY: &'static str = "yan_resources";
    const KIND: &'static str = "Resource";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Resource {
    type Draft = ResourceDraft;

    fn validate(draft: &ResourceDraft) -> Result<()> {
        if draft.title.trim().is_empty() {
            return Err(Error::MissingField { field: "title" });
        }
        Ok(())
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: ResourceDraft) -> Self {
        Self {
            id,
            title: draft.title,
            category: draft.category,
            format: draft.format,
            size: draft.size,
            description: draft.description,
            upload_date: created_at.date_naive(),
        }
    }
}

fn title(resource: &Resource) -> Cow<'_, str> {
    Cow::Borrowed(&resource.title)
}

fn description(resource: &Resource) -> Cow<'_, str> {
    Cow::Borrowed(&resource.description)
}

fn category(resource: &Resource) -> Cow<'_, str> {
    Cow::Borrowed(&resource.category)
}

impl Searchable for Resource {
    fn search_fields() -> SearchFields<Self> {
        SearchFields::new(vec![title, description], category)
    }
}
