//! End-to-end scheduling scenarios against the seeded repository.

use chrono::NaiveDate;
use huddle::datasource::SampleApi;
use huddle::error::SchedulerError;
use huddle::meeting::{MeetingDraft, MeetingFilter, MeetingId};
use huddle::repository::MeetingRepository;

fn seeded() -> MeetingRepository {
    MeetingRepository::new(&SampleApi::default())
}

fn draft_in(room: &str) -> MeetingDraft {
    MeetingDraft {
        title: "Point projet".to_string(),
        date_time: NaiveDate::from_ymd_opt(2024, 2, 26)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap(),
        location: room.to_string(),
        subject: "Suivi".to_string(),
        participants: vec![
            "theo.johnson@example.com".to_string(),
            "may.smith@example.com".to_string(),
        ],
    }
}

#[test]
fn seeded_day_filter_returns_reunion_b_then_c() {
    let repo = seeded();
    let filter = MeetingFilter::new().on_day(NaiveDate::from_ymd_opt(2024, 2, 22).unwrap());

    let titles: Vec<String> = repo
        .filtered(&filter)
        .into_iter()
        .map(|m| m.title)
        .collect();

    assert_eq!(titles, vec!["Réunion B", "Réunion C"]);
}

#[test]
fn seeded_room_filter_returns_both_mario_meetings() {
    let repo = seeded();
    let filter = MeetingFilter::new().in_room("Mario");

    let meetings = repo.filtered(&filter);
    assert_eq!(meetings.len(), 2);
    assert!(meetings.iter().all(|m| m.location == "Mario"));
}

#[test]
fn day_filter_ignores_time_of_day() {
    let repo = seeded();
    // Réunion A starts at 10:00 on the 20th; a filter built from a
    // late-evening selection on the same day must still match it.
    let selected = NaiveDate::from_ymd_opt(2024, 2, 20)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap();
    let filter = MeetingFilter::new().on_day(selected.date());

    let meetings = repo.filtered(&filter);
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].title, "Réunion A");
}

#[test]
fn add_then_unfiltered_list_includes_the_addition() {
    let repo = seeded();
    let added = repo.add(draft_in("Toad")).unwrap();

    let all = repo.filtered(&MeetingFilter::new());
    assert_eq!(all.len(), 6);
    assert!(all.iter().any(|m| m.id == added.id));
    // Appended at the end, no implicit re-sort.
    assert_eq!(all.last().unwrap().id, added.id);
}

#[test]
fn schedule_then_cancel_round_trip() {
    let repo = seeded();
    let mut observer = repo.meetings();

    let added = repo.add(draft_in("Daisy")).unwrap();
    assert!(observer.has_changed().unwrap());
    assert_eq!(observer.borrow_and_update().len(), 6);

    let cancelled = repo.delete(added.id).unwrap();
    assert_eq!(cancelled.id, added.id);
    assert!(observer.has_changed().unwrap());
    assert_eq!(observer.borrow_and_update().len(), 5);
}

#[test]
fn cancelling_twice_reports_not_found_the_second_time() {
    let repo = seeded();
    let added = repo.add(draft_in("Peach")).unwrap();

    repo.delete(added.id).unwrap();
    let err = repo.delete(added.id).unwrap_err();

    assert_eq!(err, SchedulerError::NotFound { id: added.id });
    assert_eq!(repo.snapshot().len(), 5);
}

#[test]
fn cancelling_an_unknown_id_leaves_observers_quiet() {
    let repo = seeded();
    let mut observer = repo.meetings();

    assert!(repo.delete(MeetingId::generate()).is_err());
    assert!(!observer.has_changed().unwrap());
}

#[test]
fn validation_failures_never_touch_the_list() {
    let repo = seeded();
    let mut observer = repo.meetings();

    let mut no_title = draft_in("Peach");
    no_title.title = String::new();
    assert_eq!(repo.add(no_title).unwrap_err(), SchedulerError::EmptyTitle);

    let mut nobody = draft_in("Peach");
    nobody.participants.clear();
    assert_eq!(repo.add(nobody).unwrap_err(), SchedulerError::NoParticipants);

    assert!(repo.add(draft_in("Wario")).is_err());

    assert_eq!(repo.snapshot().len(), 5);
    assert!(!observer.has_changed().unwrap());
}

#[test]
fn filters_compose_over_a_grown_list() {
    let repo = seeded();
    repo.add(draft_in("Mario")).unwrap();

    let on_mario = repo.filtered(&MeetingFilter::new().in_room("Mario"));
    assert_eq!(on_mario.len(), 3);

    let on_mario_feb_26 = repo.filtered(
        &MeetingFilter::new()
            .in_room("Mario")
            .on_day(NaiveDate::from_ymd_opt(2024, 2, 26).unwrap()),
    );
    assert_eq!(on_mario_feb_26.len(), 1);
    assert_eq!(on_mario_feb_26[0].title, "Point projet");
}

#[tokio::test]
async fn late_subscriber_starts_from_current_snapshot() {
    let repo = seeded();
    repo.add(draft_in("Luigi")).unwrap();

    let mut observer = repo.meetings();
    assert_eq!(observer.borrow_and_update().len(), 6);
    assert!(!observer.has_changed().unwrap());

    repo.add(draft_in("Toad")).unwrap();
    observer.changed().await.unwrap();
    assert_eq!(observer.borrow_and_update().len(), 7);
}
