use axum::{Json, extract::{State, rejection::JsonRejection}};
use std::sync::Arc;

use crate::{
    error::AppError,
    gemini::GenerativeBackend,
    models::{GenerateRequest, GenerateResponse, HealthResponse, RefinePromptRequest, RefinePromptResponse, TtsRequest},
    pipeline::generate_explanation,
    subject::StyleTemplate,
};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn GenerativeBackend>,
}

pub async fn generate(State(state): State<AppState>, Json(body): Json<GenerateRequest>) -> Json<GenerateResponse> {
    tracing::info!("🎯 Generate request (artStyle={:?}, explanationStyle={:?})", body.art_style, body.explanation_style);
    Json(generate_explanation(state.backend.as_ref(), &body).await)
}

/// Returns the style template generation would use, without calling the backend.
/// Unlike `generate`, a bad payload here is a hard error.
pub async fn refine_prompt(payload: Result<Json<RefinePromptRequest>, JsonRejection>) -> Result<Json<RefinePromptResponse>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let template = StyleTemplate::for_subject(&body.subject);
    tracing::info!("Refined prompt for subject '{}' as {:?}", body.subject, template.category);
    Ok(Json(RefinePromptResponse { refined_prompt: template.render() }))
}

pub async fn text_to_speech(Json(body): Json<TtsRequest>) -> Result<Json<()>, AppError> {
    tracing::debug!("TTS requested for {} chars", body.text.len());
    Err(AppError::NotImplemented("TTS not implemented yet".into()))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        message: "Visual AI Explainer API is running".into(),
    })
}
