//! Domain error taxonomy.

use thiserror::Error;

use crate::meeting::MeetingId;

/// Errors the scheduler can signal to callers.
///
/// The first three are validation failures for incoming drafts; `NotFound`
/// is the explicit answer to deleting or fetching an id that is not in the
/// store (a silent no-op would hide caller bugs).
#[derive(Debug, Error, PartialEq)]
pub enum SchedulerError {
    #[error("meeting title must not be empty")]
    EmptyTitle,
    #[error("a meeting needs at least one participant")]
    NoParticipants,
    #[error("unknown room: {room}")]
    UnknownRoom { room: String },
    #[error("no meeting with id {id}")]
    NotFound { id: MeetingId },
}

impl SchedulerError {
    /// True for errors caused by a malformed draft rather than a missing id.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(SchedulerError::EmptyTitle.is_validation());
        assert!(SchedulerError::NoParticipants.is_validation());
        assert!(SchedulerError::UnknownRoom {
            room: "Wario".to_string()
        }
        .is_validation());
        assert!(!SchedulerError::NotFound {
            id: MeetingId::generate()
        }
        .is_validation());
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = SchedulerError::UnknownRoom {
            room: "Wario".to_string(),
        };
        assert!(err.to_string().contains("Wario"));
    }
}
