//! Room list endpoint (GET /rooms).
//!
//! The room set is fixed at startup; there is no room CRUD.

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::api::ApiState;

pub fn router(state: ApiState) -> Router {
    Router::new().route("/rooms", get(list_rooms)).with_state(state)
}

async fn list_rooms(State(state): State<ApiState>) -> Json<Value> {
    let rooms = state.repository.room_names();

    Json(json!({
        "count": rooms.len(),
        "rooms": rooms.to_vec(),
    }))
}
