//! Server entry point.

use prodcat_axum::{ServerConfig, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    start_server(config).await
}
