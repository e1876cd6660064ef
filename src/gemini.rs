use async_trait::async_trait;
use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, error, info, warn, Level};

use crate::config::GeminiConfig;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")] Http(String),
    #[error("Gemini API returned {status}: {body}")] Api { status: u16, body: String },
    #[error("Failed to decode response: {0}")] Decode(String),
    #[error("Response contained no candidate content")] EmptyResponse,
    #[error("Generation stopped without content (finishReason={0})")] Blocked(String),
    #[error("Image error: {0}")] Image(#[from] image::ImageError),
}

/// One content part of the backend reply, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPart {
    Text(String),
    Image { mime_type: String, data: Vec<u8> },
}

/// Text/image backend seam. One call per request, no retries.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Sends `prompt` asking for both text and image modalities and returns
    /// the first candidate's parts in order.
    async fn generate_mixed(&self, prompt: &str) -> Result<Vec<RawPart>, GeminiError>;
}

/// Backend output split into the concatenated text and ordered decoded images.
#[derive(Debug, Default)]
pub struct GenerationOutput {
    pub text: String,
    pub images: Vec<DynamicImage>,
}

impl GenerationOutput {
    pub fn demultiplex(parts: Vec<RawPart>) -> Result<Self, GeminiError> {
        let mut out = Self::default();
        for part in parts {
            match part {
                RawPart::Text(text) => out.text.push_str(&text),
                RawPart::Image { mime_type, data } => {
                    debug!("Decoding {} image ({} bytes)", mime_type, data.len());
                    out.images.push(image::load_from_memory(&data)?);
                }
            }
        }
        Ok(out)
    }
}

// Helper function to truncate base64 data in JSON for cleaner logging
fn truncate_base64_in_json(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if key == "data" {
                    if let serde_json::Value::String(s) = val {
                        if s.len() > 100 && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=') {
                            *val = serde_json::Value::String(format!("{}...[truncated {} chars]", &s[..50], s.len() - 50));
                        }
                    }
                } else {
                    truncate_base64_in_json(val);
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for val in arr.iter_mut() {
                truncate_base64_in_json(val);
            }
        }
        _ => {}
    }
}

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| GeminiError::Http(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn perform_api_call(&self, prompt: &str) -> Result<Vec<RawPart>, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );

        info!("🔗 Making request to: {}", url.replace(&self.config.api_key, "***"));

        let request_body = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "candidateCount": 1
            }
        });

        let response = self.client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ API Error response: {}", body);
            return Err(GeminiError::Api { status: status.as_u16(), body });
        }

        let response_text = response.text().await
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        if tracing::enabled!(Level::DEBUG) {
            if let Ok(mut json_value) = serde_json::from_str::<serde_json::Value>(&response_text) {
                truncate_base64_in_json(&mut json_value);
                debug!("📥 Raw Gemini API response: {}", json_value);
            }
        }

        let parsed: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| GeminiError::Decode(e.to_string()))?;
        first_candidate_parts(parsed)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate_mixed(&self, prompt: &str) -> Result<Vec<RawPart>, GeminiError> {
        if self.config.is_demo() {
            info!("Using demo mode - returning canned slides");
            return demo_parts(prompt);
        }
        info!("Generating slides with Gemini API...");
        let parts = self.perform_api_call(prompt).await?;
        let images = parts.iter().filter(|p| matches!(p, RawPart::Image { .. })).count();
        info!("✅ Received {} parts ({} images)", parts.len(), images);
        Ok(parts)
    }
}

/// Offline stand-in used when no API key is configured.
fn demo_parts(prompt: &str) -> Result<Vec<RawPart>, GeminiError> {
    let colors: [[u8; 3]; 5] = [
        [0x3B, 0x82, 0xF6],
        [0xEF, 0x44, 0x44],
        [0x10, 0xB9, 0x81],
        [0xF5, 0x9E, 0x0B],
        [0x8B, 0x5C, 0xF6],
    ];
    let task = prompt
        .lines()
        .next()
        .and_then(|l| l.strip_prefix("Task: "))
        .unwrap_or("your task");

    let mut parts = vec![RawPart::Text(format!("Here is a plan for: {task}\n\n"))];
    for (i, color) in colors.iter().enumerate() {
        parts.push(RawPart::Text(format!(
            "Slide {}: Demo Step {}\nThis is placeholder commentary for step {}.\n\n",
            i + 1, i + 1, i + 1
        )));
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb(*color)));
        let mut data = Vec::new();
        img.write_to(&mut Cursor::new(&mut data), ImageFormat::Png)?;
        parts.push(RawPart::Image { mime_type: "image/png".into(), data });
    }
    Ok(parts)
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default, rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content { #[serde(default)] parts: Option<Vec<Part>> }

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Part {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData
    },
    Text { text: String },
    Other(serde_json::Value)
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
}

fn first_candidate_parts(resp: GeminiResponse) -> Result<Vec<RawPart>, GeminiError> {
    let candidate = resp.candidates.into_iter().next().ok_or(GeminiError::EmptyResponse)?;
    // Safety and recitation stops come back as content without parts.
    let Some(content_parts) = candidate.content.and_then(|c| c.parts) else {
        return Err(match candidate.finish_reason {
            Some(reason) => GeminiError::Blocked(reason),
            None => GeminiError::EmptyResponse,
        });
    };

    let mut parts = Vec::with_capacity(content_parts.len());
    for part in content_parts {
        match part {
            Part::Text { text } => parts.push(RawPart::Text(text)),
            Part::Inline { inline_data } => {
                info!("🎯 Found image data with mime type: {}", inline_data.mime_type);
                let data = base64::engine::general_purpose::STANDARD
                    .decode(inline_data.data.as_bytes())
                    .map_err(|e| GeminiError::Decode(format!("inline data: {e}")))?;
                parts.push(RawPart::Image { mime_type: inline_data.mime_type, data });
            }
            Part::Other(value) => warn!("Skipping unrecognised content part: {}", value),
        }
    }
    Ok(parts)
}
