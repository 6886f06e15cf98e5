//! REST API server for the scheduler.
//!
//! Provides HTTP endpoints for:
//! - Listing and filtering meetings
//! - Scheduling and cancelling meetings
//! - Listing the known rooms

pub mod error;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tracing::info;

use crate::config::Config;
use crate::repository::MeetingRepository;

/// Shared state handed to every route.
#[derive(Clone)]
pub struct ApiState {
    pub repository: Arc<MeetingRepository>,
}

pub struct ApiServer {
    host: String,
    port: u16,
    state: ApiState,
}

impl ApiServer {
    pub fn new(repository: Arc<MeetingRepository>, config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            state: ApiState { repository },
        }
    }

    pub async fn start(self) -> Result<()> {
        let app = Router::new()
            // Root and version endpoints
            .route("/", get(status))
            .route("/version", get(version))
            // Scheduler routes
            .merge(routes::meetings::router(self.state.clone()))
            .merge(routes::rooms::router(self.state))
            .layer(ServiceBuilder::new());

        let listener =
            tokio::net::TcpListener::bind(&format!("{}:{}", self.host, self.port)).await?;

        info!("API server listening on http://{}:{}", self.host, self.port);
        info!("Endpoints:");
        info!("  GET    /              - Service info");
        info!("  GET    /version       - Version info");
        info!("  GET    /meetings      - List meetings (?date=YYYY-MM-DD&room=NAME)");
        info!("  POST   /meetings      - Schedule a meeting");
        info!("  GET    /meetings/:id  - Get a single meeting");
        info!("  DELETE /meetings/:id  - Cancel a meeting");
        info!("  GET    /rooms         - List known rooms");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": "huddle",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "huddle"
    }))
}
