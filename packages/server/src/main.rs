use std::sync::Arc;

use anyhow::Context;
use common::MemoryStore;
use tracing::{Level, info};

use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;

    let level: Level = config
        .log
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.log.level))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let store = MemoryStore::new();
    if config.content.seed_sample_content {
        server::seed::seed_sample_content(&store).context("Failed to seed sample content")?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        store: Arc::new(store),
        config,
    };
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
