//! Friend Map Engine - Main entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use friendmap_engine::{api, infrastructure::config::EngineConfig, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so `cargo run -p friendmap-engine` works from anywhere.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "friendmap_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Friend Map Engine");

    // Missing credentials or a bad store URL stop the process here.
    let config = EngineConfig::from_env()?;

    let app = Arc::new(App::from_backend(&config.store)?);

    let router = api::http::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(app);

    let addr = config.server.addr;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
