use base64::Engine;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use uuid::Uuid;

use crate::{models::Slide, parser::SlideBlock};

/// Re-encodes an image as PNG wrapped in a `data:` URI.
pub fn encode_data_uri(image: &DynamicImage) -> Result<String, image::ImageError> {
    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
    Ok(format!("data:image/png;base64,{encoded}"))
}

/// Pairs blocks with images by index. Missing images leave `image_url` empty;
/// surplus images are dropped.
pub fn assemble_slides(blocks: Vec<SlideBlock>, images: &[DynamicImage]) -> Result<Vec<Slide>, image::ImageError> {
    if images.len() != blocks.len() {
        tracing::warn!("{} slides but {} images, pairing by position", blocks.len(), images.len());
    }
    blocks
        .into_iter()
        .enumerate()
        .map(|(i, block)| -> Result<Slide, image::ImageError> {
            let image_url = images.get(i).map(encode_data_uri).transpose()?;
            Ok(Slide {
                id: Uuid::new_v4().to_string(),
                title: block.title,
                content: block.body,
                image_url,
                commentary: String::new(),
            })
        })
        .collect()
}
