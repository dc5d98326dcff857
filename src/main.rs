//! Product API - HTTP REST server for an in-memory product catalog
//!
//! This binary serves the product catalog over HTTP with API key
//! authentication and request logging.

use product_api::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up .env overrides before reading configuration
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    product_api::start_server(config).await?;

    Ok(())
}
