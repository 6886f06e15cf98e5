//! Pure list filtering by calendar day and room.
//!
//! A [`MeetingFilter`] is applied to whatever list the caller hands it, never
//! to the repository's live state. It is used by both the CLI and the REST
//! API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::meeting::Meeting;

/// Criteria for narrowing a meeting list.
///
/// An absent criterion matches everything, so the default filter is the
/// identity. The date criterion compares calendar days only; time-of-day
/// never matters.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MeetingFilter {
    /// Keep meetings on this calendar day.
    pub date: Option<NaiveDate>,
    /// Keep meetings in this room (exact name match).
    pub room: Option<String>,
}

impl MeetingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_day(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn in_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Returns true if at least one criterion is set.
    pub fn has_criteria(&self) -> bool {
        self.date.is_some() || self.room.is_some()
    }

    pub fn matches(&self, meeting: &Meeting) -> bool {
        let on_day = self
            .date
            .map_or(true, |day| meeting.date_time.date() == day);
        let in_room = self
            .room
            .as_deref()
            .map_or(true, |room| meeting.location == room);
        on_day && in_room
    }

    /// Ordered subsequence of `meetings` that pass both criteria. Input order
    /// is preserved; no re-sort happens.
    pub fn apply(&self, meetings: &[Meeting]) -> Vec<Meeting> {
        meetings
            .iter()
            .filter(|meeting| self.matches(meeting))
            .cloned()
            .collect()
    }
}
