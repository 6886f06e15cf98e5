//! Meeting domain types.
//!
//! The entity itself, the draft shape used to create one, and the pure list
//! filter shared by the CLI and the REST API.

pub mod filter;
pub mod model;

pub use filter::MeetingFilter;
pub use model::{Meeting, MeetingDraft, MeetingId};
