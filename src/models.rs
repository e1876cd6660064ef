use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub art_style: Option<String>, // accepted, not yet used for template selection
    #[serde(default)]
    pub explanation_style: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Reserved for narration text; always empty for now.
    pub commentary: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub slides: Vec<Slide>,
    pub refined_prompt: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn succeeded(slides: Vec<Slide>, refined_prompt: String) -> Self {
        Self { slides, refined_prompt, success: true, error: None }
    }

    /// Failure never carries slides or a prompt.
    pub fn failed(error: impl Into<String>) -> Self {
        Self { slides: Vec::new(), refined_prompt: String::new(), success: false, error: Some(error.into()) }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RefinePromptRequest {
    pub original_prompt: String,
    pub subject: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RefinePromptResponse {
    pub refined_prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TtsRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
