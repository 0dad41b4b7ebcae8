//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `users::UsersError`.

mod config;

use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{MemoryUserRepository, UserRepository, users_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,users=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (server_config, users_config) = config::from_env()?;

    // The store is created once here, seeded, and shared with every request.
    let store = Arc::new(MemoryUserRepository::seeded());

    tracing::info!(
        users = store.count().await,
        max_body_bytes = users_config.max_body_bytes,
        "User store initialized"
    );

    // Build router
    let app = users_router(store, &users_config).layer(TraceLayer::new_for_http());

    // Start server
    let addr = server_config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
