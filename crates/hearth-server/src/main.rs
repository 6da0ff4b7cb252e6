mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use hearth_api::{AppState, AppStateInner, routes};
use hearth_llm::{GenerationService, OpenAiClient, OpenAiConfig};
use hearth_store::MemStore;
use hearth_store::sessions::{SessionStore, run_session_sweeper};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; generation endpoints will fail per-request");
    }

    // Provider + generation façade
    let provider = OpenAiClient::new(OpenAiConfig {
        api_key: config.openai_api_key.clone(),
        base_url: config.openai_base_url.clone(),
        model: config.openai_model.clone(),
        timeout: config.provider_timeout,
    })?;
    let generation = GenerationService::new(Arc::new(provider));

    // Shared state, constructed here and injected — no globals
    let store = MemStore::with_demo_listings();
    let sessions = Arc::new(SessionStore::new(chrono::Duration::hours(
        config.session_ttl_hours,
    )));
    let state: AppState = Arc::new(AppStateInner {
        store,
        sessions: sessions.clone(),
        generation,
    });

    // Background session sweep
    tokio::spawn(run_session_sweeper(sessions, config.session_sweep_secs));

    let app = routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Hearth server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
