use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use todo_api::config::Config;
use todo_api::db::mongo::MongoStore;
use todo_api::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    // The listener is only bound once the store is reachable; a failed
    // connect is fatal.
    let store = MongoStore::connect(&config.mongodb_uri, &config.mongodb_db)
        .await
        .context("failed to connect to MongoDB")?;
    tracing::info!(db = %config.mongodb_db, "connected to MongoDB");

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server starting");

    let app = router::app(Arc::new(store));
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
