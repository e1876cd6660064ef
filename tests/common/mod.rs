#![allow(dead_code)]

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use slide_explainer::gemini::{GeminiError, GenerativeBackend, RawPart};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// Mock backend returning a fixed reply and recording every prompt it saw.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    pub parts: Vec<RawPart>,
    pub error: Option<String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn with_parts(parts: Vec<RawPart>) -> Self {
        Self { parts, ..Self::default() }
    }

    pub fn with_error(error: impl Into<String>) -> Self {
        Self { error: Some(error.into()), ..Self::default() }
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    async fn generate_mixed(&self, prompt: &str) -> Result<Vec<RawPart>, GeminiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.error {
            Some(e) => Err(GeminiError::Http(e.clone())),
            None => Ok(self.parts.clone()),
        }
    }
}

pub fn png_bytes(shade: u8) -> Vec<u8> {
    let mut data = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([shade, 0, 0])))
        .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
        .unwrap();
    data
}

pub fn text(s: &str) -> RawPart {
    RawPart::Text(s.to_string())
}

pub fn png(shade: u8) -> RawPart {
    RawPart::Image { mime_type: "image/png".into(), data: png_bytes(shade) }
}

/// Five `Slide n: Step n` blocks, each followed by one image.
pub fn five_slide_reply() -> Vec<RawPart> {
    let mut parts = vec![text("Meet the Method!\n\n")];
    for n in 1..=5u8 {
        parts.push(text(&format!("Slide {n}: Step {n}\nDo thing number {n}.\n\n")));
        parts.push(png(n * 40));
    }
    parts
}
