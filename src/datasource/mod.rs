//! Bootstrap data provider.
//!
//! Stands in for a real backend: a fixed room list and a handful of sample
//! meetings used to seed the repository. Every accessor returns a fresh copy,
//! so callers can mutate what they get without affecting later calls. This
//! collaborator never errors.

use chrono::{NaiveDate, NaiveDateTime};

use crate::meeting::MeetingDraft;

/// In-memory stand-in for a meetings backend.
#[derive(Debug, Default)]
pub struct SampleApi;

impl SampleApi {
    /// The five known meeting rooms.
    pub fn rooms(&self) -> Vec<String> {
        ["Peach", "Mario", "Luigi", "Toad", "Daisy"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Five sample meetings spanning three rooms over a few days in
    /// February 2024, with overlapping participants.
    pub fn meetings(&self) -> Vec<MeetingDraft> {
        vec![
            sample(
                "Réunion A",
                at(20, 10, 0),
                "Peach",
                "Présentation du projet",
                &["theo.johnson@example.com", "may.smith@example.com"],
            ),
            sample(
                "Réunion B",
                at(22, 13, 50),
                "Mario",
                "Planification des tâches",
                &["theo.johnson@example.com", "jack.smith@example.com"],
            ),
            sample(
                "Réunion C",
                at(22, 15, 0),
                "Luigi",
                "Brainstorming",
                &[
                    "theo.johnson@example.com",
                    "may.smith@example.com",
                    "jack.smith@example.com",
                ],
            ),
            sample(
                "Réunion D",
                at(23, 10, 0),
                "Mario",
                "Revue",
                &["theo.johnson@example.com", "jack.smith@example.com"],
            ),
            sample(
                "Réunion E",
                at(23, 11, 30),
                "Luigi",
                "Revue",
                &[
                    "theo.johnson@example.com",
                    "may.smith@example.com",
                    "jack.smith@example.com",
                ],
            ),
        ]
    }
}

fn sample(
    title: &str,
    date_time: NaiveDateTime,
    location: &str,
    subject: &str,
    participants: &[&str],
) -> MeetingDraft {
    MeetingDraft {
        title: title.to_string(),
        date_time,
        location: location.to_string(),
        subject: subject.to_string(),
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("sample dates are valid")
}
