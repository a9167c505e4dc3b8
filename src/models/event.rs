//! Network events.

use crate::{
    core::{
        filter::{SearchFields, Searchable},
        repository::{Collection, Creatable},
    },
    errors::{Error, Result},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Networking,
    Training,
    Workshop,
}

impl EventType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Networking => "networking",
            Self::Training => "training",
            Self::Workshop => "workshop",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Local start time, `HH:MM`
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    pub kind: EventType,
}

impl Collection for Event {
    const STORE_KEY: &'static str = "yan_events";
    const KIND: &'static str = "Event";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Event {
    type Draft = EventDraft;

    fn validate(draft: &EventDraft) -> Result<()> {
        if draft.title.trim().is_empty() {
            return Err(Error::MissingField { field: "title" });
        }
        Ok(())
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            description: draft.description,
            kind: draft.kind,
            created_at: Some(created_at),
        }
    }
}

fn title(event: &Event) -> Cow<'_, str> {
    Cow::Borrowed(&event.title)
}

fn description(event: &Event) -> Cow<'_, str> {
    Cow::Borrowed(&event.description)
}

fn location(event: &Event) -> Cow<'_, str> {
    Cow::Borrowed(&event.location)
}

fn kind(event: &Event) -> Cow<'_, str> {
    Cow::Borrowed(event.kind.as_str())
}

impl Searchable for Event {
    fn search_fields() -> SearchFields<Self> {
        SearchFields::new(vec![title, description, location], kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::search;
    use crate::test_utils::sample_events;

    #[test]
    fn test_search_includes_location() {
        let events = sample_events();
        let found = search(&events, "zoom", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Proposal Writing Workshop");
    }

    #[test]
    fn test_filter_by_type_and_query() {
        let events = sample_events();
        assert_eq!(search(&events, "", Some("networking")).len(), 1);
        assert!(search(&events, "kigali", Some("training")).is_empty());
        assert!(search(&events, "", Some("workshop")).is_empty());
    }
}
