//! Actions on opportunities, events and resources, plus the member directory.
//!
//! None of the actions change stored state; they confirm the record exists and
//! produce the notice to show. An unknown id yields no notice.

use super::Portal;
use crate::{
    core::{members, notice::Notice},
    errors::Result,
    models::Member,
};

/// Directory listing after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDirectory<'a> {
    pub members: Vec<&'a Member>,
    /// "Showing X of Y members"
    pub note: String,
}

impl Portal {
    pub async fn apply_to_opportunity(&self, id: &str) -> Result<Option<Notice>> {
        let opportunity = self.opportunities().find(id).await?;
        Ok(opportunity.map(|opportunity| {
            Notice::success(format!("Application submitted for: {}", opportunity.title))
        }))
    }

    pub async fn register_for_event(&self, id: &str) -> Result<Option<Notice>> {
        let event = self.events().find(id).await?;
        Ok(event.map(|event| Notice::success(format!("Registered for: {}", event.title))))
    }

    pub async fn download_resource(&self, id: &str) -> Result<Option<Notice>> {
        let resource = self.resources().find(id).await?;
        Ok(resource.map(|resource| {
            Notice::success(format!("Download started for: {}", resource.title))
        }))
    }

    /// Searches the member directory.
    #[must_use]
    pub fn member_directory(&self, query: &str) -> MemberDirectory<'_> {
        let all = self.members();
        let found = members::search_members(all, query);
        let note = members::count_note(found.len(), all.len());
        MemberDirectory {
            members: found,
            note,
        }
    }
}
