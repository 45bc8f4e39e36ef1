use anyhow::Result;
use clap::Parser;
use mayfly_gateway::app::App;
use mayfly_gateway::config::Config;
use mayfly_gateway::state::AppState;
use mayfly_generator::RandomGenerator;
use mayfly_shortener::{LinkStore, Reaper, StoreSettings};
use mayfly_storage::InMemoryBackend;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let settings = StoreSettings::builder()
        .max_retries(config.max_retries)
        .build();
    let store = Arc::new(LinkStore::new(
        InMemoryBackend::new(),
        RandomGenerator::new(),
        settings,
    ));

    if config.reap_interval_secs > 0 {
        let interval = Duration::from_secs(config.reap_interval_secs);
        Reaper::new(store.backend(), interval).spawn();
        info!(interval_secs = config.reap_interval_secs, "reaper started");
    }

    let state = AppState::new(store, config.base_url.clone());
    let app = App::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, app).await?;

    Ok(())
}
