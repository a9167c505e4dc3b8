//! Member organisations listed in the directory.
//!
//! The directory is static seed data; members are never persisted or edited.

use crate::core::filter::{SearchFields, Searchable};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Focus areas in display order
    pub focus: Vec<String>,
    pub description: String,
    /// Path of the member's profile page
    pub profile: String,
}

fn name(member: &Member) -> Cow<'_, str> {
    Cow::Borrowed(&member.name)
}

fn description(member: &Member) -> Cow<'_, str> {
    Cow::Borrowed(&member.description)
}

fn focus(member: &Member) -> Cow<'_, str> {
    Cow::Owned(member.focus.join(" "))
}

fn country(member: &Member) -> Cow<'_, str> {
    Cow::Borrowed(member.country.as_deref().unwrap_or_default())
}

impl Searchable for Member {
    fn search_fields() -> SearchFields<Self> {
        SearchFields::new(vec![name, description, focus], country)
    }
}
