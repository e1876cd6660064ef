use slide_explainer::{build_router, config::AppConfig, gemini::GeminiClient, routes::AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;
    if config.gemini.is_demo() {
        tracing::warn!("GEMINI_API_KEY not set, running in demo mode");
    } else {
        tracing::info!("Using API key: {}...", key_prefix(&config.gemini.api_key));
    }

    let state = AppState {
        backend: Arc::new(GeminiClient::new(config.gemini.clone())?),
    };
    let app = build_router(state, &config.allowed_origins);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}

fn key_prefix(api_key: &str) -> String {
    api_key.chars().take(6).collect()
}
