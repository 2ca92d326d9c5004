#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::app().expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "base11 listening");
    axum::serve(listener, app).await.expect("server failed");
}
