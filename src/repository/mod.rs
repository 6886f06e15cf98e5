//! Authoritative in-memory meeting store.
//!
//! The repository is the only mutator of meeting state for the process
//! lifetime. Reads go through immutable snapshots published on
//! `tokio::sync::watch` channels, so observers always see a consistent list
//! and never a mutation in progress. The watch sender's internal lock
//! serializes add/delete, which keeps the single-writer ordering guarantee
//! without any extra locking here.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::datasource::SampleApi;
use crate::error::SchedulerError;
use crate::meeting::{Meeting, MeetingDraft, MeetingFilter, MeetingId};

/// Immutable snapshot of the ordered meeting list.
pub type MeetingSnapshot = Arc<[Meeting]>;
/// Immutable snapshot of the known room names.
pub type RoomSnapshot = Arc<[String]>;

/// In-memory source of truth for meetings and rooms.
pub struct MeetingRepository {
    meetings: watch::Sender<MeetingSnapshot>,
    rooms: watch::Sender<RoomSnapshot>,
}

impl MeetingRepository {
    /// Build a repository seeded with the data source's sample meetings and
    /// room list. Both are loaded once and published immediately.
    pub fn new(api: &SampleApi) -> Self {
        let meetings: Vec<Meeting> = api
            .meetings()
            .into_iter()
            .map(|draft| draft.into_meeting(MeetingId::generate()))
            .collect();

        info!("Loaded {} sample meetings", meetings.len());
        Self::from_parts(meetings, api.rooms())
    }

    /// Build a repository with the given rooms and no meetings.
    pub fn with_rooms(rooms: Vec<String>) -> Self {
        Self::from_parts(Vec::new(), rooms)
    }

    fn from_parts(meetings: Vec<Meeting>, rooms: Vec<String>) -> Self {
        let (meetings_tx, _) = watch::channel(MeetingSnapshot::from(meetings));
        let (rooms_tx, _) = watch::channel(RoomSnapshot::from(rooms));
        Self {
            meetings: meetings_tx,
            rooms: rooms_tx,
        }
    }

    /// Validate a draft, assign it an id and append it to the end of the
    /// list. Publishes the new snapshot to all observers. Field-identical
    /// duplicates are allowed; their ids still differ.
    pub fn add(&self, draft: MeetingDraft) -> Result<Meeting, SchedulerError> {
        draft.validate(&self.room_names())?;

        let meeting = draft.into_meeting(MeetingId::generate());
        self.meetings.send_modify(|current| {
            let mut next = current.to_vec();
            next.push(meeting.clone());
            *current = next.into();
        });

        debug!("Meeting '{}' added in {}", meeting.title, meeting.location);
        Ok(meeting)
    }

    /// Remove the meeting with the given id and publish the new snapshot.
    /// Returns the removed meeting, or `NotFound` without notifying any
    /// observer when the id is absent.
    pub fn delete(&self, id: MeetingId) -> Result<Meeting, SchedulerError> {
        let mut removed = None;
        self.meetings.send_if_modified(|current| {
            let Some(index) = current.iter().position(|m| m.id == id) else {
                return false;
            };
            let mut next = current.to_vec();
            removed = Some(next.remove(index));
            *current = next.into();
            true
        });

        match removed {
            Some(meeting) => {
                debug!("Meeting '{}' deleted", meeting.title);
                Ok(meeting)
            }
            None => Err(SchedulerError::NotFound { id }),
        }
    }

    /// Look up a single meeting by id in the current snapshot.
    pub fn get(&self, id: MeetingId) -> Option<Meeting> {
        self.meetings.borrow().iter().find(|m| m.id == id).cloned()
    }

    /// Subscribe to meeting list changes. The receiver starts at the current
    /// snapshot and sees every published state in order.
    pub fn meetings(&self) -> watch::Receiver<MeetingSnapshot> {
        self.meetings.subscribe()
    }

    /// Current meeting list snapshot.
    pub fn snapshot(&self) -> MeetingSnapshot {
        self.meetings.borrow().clone()
    }

    /// Subscribe to the room list. Published once at construction.
    pub fn rooms(&self) -> watch::Receiver<RoomSnapshot> {
        self.rooms.subscribe()
    }

    /// Current room names.
    pub fn room_names(&self) -> RoomSnapshot {
        self.rooms.borrow().clone()
    }

    /// Apply a filter to the current snapshot.
    pub fn filtered(&self, filter: &MeetingFilter) -> Vec<Meeting> {
        filter.apply(&self.snapshot())
    }
}
