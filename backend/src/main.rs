use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kinash_backend::config::{ServerConfig, DEFAULT_LOG_FILTER};
use kinash_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    info!("Configuration: {:?}", config);

    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config)?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Listening on http://{}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
