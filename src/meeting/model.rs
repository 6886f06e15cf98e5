//! Meeting entity and draft types.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SchedulerError;

/// Unique identifier assigned to a meeting when it enters the repository.
///
/// Two meetings with identical fields are still distinct entries; deletion
/// always goes through the id, never through whole-value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(Uuid);

impl MeetingId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MeetingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A scheduled meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    /// Local wall-clock start time. The scheduler is timezone-naive.
    pub date_time: NaiveDateTime,
    /// Room name, drawn from the known room set.
    pub location: String,
    pub subject: String,
    /// Participant emails, in invitation order. Never empty.
    pub participants: Vec<String>,
}

impl Meeting {
    /// Natural ordering: start time ascending. Ties keep whatever order the
    /// caller's list already has.
    pub fn cmp_by_start(&self, other: &Meeting) -> Ordering {
        self.date_time.cmp(&other.date_time)
    }
}

/// Input shape for a meeting that has not been admitted to the repository yet.
///
/// The repository validates a draft and assigns the id; see
/// [`crate::repository::MeetingRepository::add`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingDraft {
    pub title: String,
    pub date_time: NaiveDateTime,
    pub location: String,
    pub subject: String,
    pub participants: Vec<String>,
}

impl MeetingDraft {
    /// Check the invariants the UI of a scheduler would normally enforce:
    /// non-empty title, at least one participant, a room from the known set.
    pub fn validate(&self, rooms: &[String]) -> Result<(), SchedulerError> {
        if self.title.trim().is_empty() {
            return Err(SchedulerError::EmptyTitle);
        }
        if self.participants.is_empty() {
            return Err(SchedulerError::NoParticipants);
        }
        if !rooms.iter().any(|room| room == &self.location) {
            return Err(SchedulerError::UnknownRoom {
                room: self.location.clone(),
            });
        }
        Ok(())
    }

    pub fn into_meeting(self, id: MeetingId) -> Meeting {
        Meeting {
            id,
            title: self.title,
            date_time: self.date_time,
            location: self.location,
            subject: self.subject,
            participants: self.participants,
        }
    }
}
