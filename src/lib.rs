pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod routes;
pub mod slides;
pub mod subject;

use axum::{Router, http::HeaderValue, routing::{get, post}};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::routes::{generate, health, refine_prompt, text_to_speech, AppState};

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: AppState, origins: &[String]) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/refine-prompt", post(refine_prompt))
        .route("/tts", post(text_to_speech))
        .route("/health", get(health))
        .layer(cors_layer(origins))
        .with_state(state)
}
