use std::net::SocketAddr;
use std::sync::Arc;

use skylane_api::{app, state::AppState, token::TokenAuthenticator};
use skylane_store::{Config, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skylane_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Skylane API on port {}", config.server.port);

    let store = Arc::new(MemoryStore::new());
    let tokens = TokenAuthenticator::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_seconds,
    );

    let app = app(AppState::new(store, tokens));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
