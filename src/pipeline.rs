//! Request-to-slides pipeline: classify, compose, call the backend once, parse, assemble.
//!
//! `generate_explanation` is the failure boundary. Whatever goes wrong after the
//! request is accepted comes back as `success: false` with no slides.

use thiserror::Error;
use tracing::{error, info};

use crate::{
    gemini::{GeminiError, GenerationOutput, GenerativeBackend},
    models::{GenerateRequest, GenerateResponse, Slide},
    parser::parse_slide_blocks,
    prompt::ComposedPrompt,
    slides::assemble_slides,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("prompt must not be empty")]
    EmptyTask,
    #[error(transparent)]
    Backend(#[from] GeminiError),
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

pub async fn generate_explanation(backend: &dyn GenerativeBackend, request: &GenerateRequest) -> GenerateResponse {
    match run(backend, request).await {
        Ok((slides, prompt)) => {
            info!("✅ Generated {} slides", slides.len());
            GenerateResponse::succeeded(slides, prompt.into_string())
        }
        Err(e) => {
            error!("❌ Generation failed: {}", e);
            GenerateResponse::failed(e.to_string())
        }
    }
}

async fn run(backend: &dyn GenerativeBackend, request: &GenerateRequest) -> Result<(Vec<Slide>, ComposedPrompt), PipelineError> {
    let task = request.prompt.trim();
    if task.is_empty() {
        return Err(PipelineError::EmptyTask);
    }

    let prompt = ComposedPrompt::for_task(task);
    info!("🚀 Generating {:?} explanation for: {}", prompt.category, task);

    let parts = backend.generate_mixed(prompt.as_str()).await?;
    let output = GenerationOutput::demultiplex(parts)?;
    info!("📥 {} chars of text, {} images", output.text.len(), output.images.len());

    let blocks = parse_slide_blocks(&output.text);
    let slides = assemble_slides(blocks, &output.images)?;
    Ok((slides, prompt))
}
