//! # Tutoring Backend Service
//!
//! Thin entry point that delegates to the library for server setup.

use backend::server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig {
        bind_address: std::env::var("PYTHAGORE_BIND")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string()),
        ..Default::default()
    };

    start_server(config).await
}
