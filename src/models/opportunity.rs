//! Funding, training and partnership opportunities.

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

/// What an opportunity offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityType {
    Funding,
    Training,
    Partnership,
}

impl OpportunityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Funding => "funding",
            Self::Training => "training",
            Self::Partnership => "partnership",
        }
    }
}

impl fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opportunity posted to the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub description: String,
    pub deadline: NaiveDate,
    /// Organisation offering the opportunity
    pub organization: String,
    pub details: String,
    /// Set when posted through the portal; bundled records have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields an admin supplies when posting an opportunity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityDraft {
    pub title: String,
    pub kind: OpportunityType,
    pub description: String,
    pub deadline: NaiveDate,
    pub organization: String,
    pub details: String,
}

impl Collection for Opportunity {
    const STORE_KEY: &'static str = "yan_opportunities";
    const KIND: &'static str = "Opportunity";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Opportunity {
    type Draft = OpportunityDraft;

    fn validate(draft: &OpportunityDraft) -> Result<()> {
        if draft.title.trim().is_empty() {
            return Err(Error::MissingField { field: "title" });
        }
        Ok(())
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: OpportunityDraft) -> Self {
        Self {
            id,
            title: draft.title,
            kind: draft.kind,
            description: draft.description,
            deadline: draft.deadline,
            organization: draft.organization,
            details: draft.details,
            created_at: Some(created_at),
        }
    }
}

fn title(opportunity: &Opportunity) -> Cow<'_, str> {
    Cow::Borrowed(&opportunity.title)
}

fn description(opportunity: &Opportunity) -> Cow<'_, str> {
    Cow::Borrowed(&opportunity.description)
}

fn organization(opportunity: &Opportunity) -> Cow<'_, str> {
    Cow::Borrowed(&opportunity.organization)
}

fn kind(opportunity: &Opportunity) -> Cow<'_, str> {
    Cow::Borrowed(opportunity.kind.as_str())
}

impl Searchable for Opportunity {
    fn search_fields() -> SearchFields<Self> {
        SearchFields::new(vec![title, description, organization], kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::search;
    use crate::test_utils::sample_opportunities;

    #[test]
    fn test_search_includes_organization() {
        let opportunities = sample_opportunities();
        let found = search(&opportunities, "tech academy", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Digital Skills Bootcamp");
    }

    #[test]
    fn test_filter_by_type() {
        let opportunities = sample_opportunities();
        let funding = search(&opportunities, "", Some("funding"));
        assert_eq!(funding.len(), 1);
        assert_eq!(funding[0].kind, OpportunityType::Funding);
        assert!(search(&opportunities, "", Some("partnership")).is_empty());
    }

    #[test]
    fn test_bundled_records_omit_created_at() {
        let opportunities = sample_opportunities();
        let json = serde_json::to_value(&opportunities[0]).unwrap_or_default();
        assert_eq!(json["type"], "funding");
        assert_eq!(json["deadline"], "2026-03-15");
        assert!(json.get("createdAt").is_none());
    }
}
