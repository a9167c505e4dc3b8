//! Domain records persisted by the portal.
//!
//! Every record serializes with camelCase field names so the stored JSON keeps
//! the shape the portal has always written.

/// Membership applications and their review status
pub mod application;
/// Network events
pub mod event;
/// Member organisations shown in the directory
pub mod member;
/// Funding, training and partnership opportunities
pub mod opportunity;
/// Downloadable resources
pub mod resource;
/// Users, roles and sessions
pub mod user;

pub use application::{Application, ApplicationForm, ApplicationStatus};
pub use event::{Event, EventDraft, EventType};
pub use member::Member;
pub use opportunity::{Opportunity, OpportunityDraft, OpportunityType};
pub use resource::{Resource, ResourceDraft};
pub use user::{Landing, Role, Session, User};
