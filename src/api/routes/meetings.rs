//! Meeting API endpoints.
//!
//! Provides HTTP endpoints for:
//! - Listing meetings, optionally filtered by day and room (GET /meetings)
//! - Scheduling a meeting (POST /meetings)
//! - Getting a specific meeting (GET /meetings/:id)
//! - Cancelling a meeting (DELETE /meetings/:id)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::ApiState;
use crate::meeting::{Meeting, MeetingDraft, MeetingFilter, MeetingId};

/// Query parameters for the list endpoint.
#[derive(Debug, Default, serde::Deserialize)]
pub struct MeetingListQuery {
    /// Only meetings on this calendar day (YYYY-MM-DD).
    pub date: Option<NaiveDate>,
    /// Only meetings in this room.
    pub room: Option<String>,
}

impl MeetingListQuery {
    fn into_filter(self) -> MeetingFilter {
        MeetingFilter {
            date: self.date,
            room: self.room,
        }
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/meetings", get(list_meetings).post(create_meeting))
        .route("/meetings/:id", get(get_meeting).delete(delete_meeting))
        .with_state(state)
}

async fn list_meetings(
    Query(query): Query<MeetingListQuery>,
    State(state): State<ApiState>,
) -> Json<Value> {
    let filter = query.into_filter();
    let meetings = state.repository.filtered(&filter);

    Json(json!({
        "count": meetings.len(),
        "meetings": meetings,
    }))
}

async fn create_meeting(
    State(state): State<ApiState>,
    Json(draft): Json<MeetingDraft>,
) -> ApiResult<(StatusCode, Json<Meeting>)> {
    let meeting = state.repository.add(draft)?;

    info!(
        "Meeting '{}' scheduled in {} at {}",
        meeting.title, meeting.location, meeting.date_time
    );
    Ok((StatusCode::CREATED, Json(meeting)))
}

async fn get_meeting(
    Path(id): Path<MeetingId>,
    State(state): State<ApiState>,
) -> ApiResult<Json<Meeting>> {
    state
        .repository
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no meeting with id {id}")))
}

async fn delete_meeting(
    Path(id): Path<MeetingId>,
    State(state): State<ApiState>,
) -> ApiResult<Json<Value>> {
    let meeting = state.repository.delete(id)?;

    info!("Meeting '{}' cancelled", meeting.title);
    Ok(Json(json!({
        "deleted": true,
        "meeting": meeting,
    })))
}
