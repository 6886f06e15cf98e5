use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::api::ApiServer;
use crate::config::Config;
use crate::datasource::SampleApi;
use crate::repository::MeetingRepository;

pub async fn run_service() -> Result<()> {
    info!("Starting huddle service");

    let config = Config::load()?;

    let api = SampleApi::default();
    let repository = if config.seed.sample_meetings {
        Arc::new(MeetingRepository::new(&api))
    } else {
        Arc::new(MeetingRepository::with_rooms(api.rooms()))
    };

    info!(
        "Repository ready: {} meetings, {} rooms",
        repository.snapshot().len(),
        repository.room_names().len()
    );
    info!(
        "Try: curl http://{}:{}/meetings?room=Mario",
        config.server.host, config.server.port
    );

    ApiServer::new(repository, &config).start().await
}
