//! Demo image loading
//!
//! Decodes the configured bitmap, or draws the built-in avatar when no image
//! is configured or the configured one cannot be read.

use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};

/// Decoded RGBA pixels of the demo image
#[derive(Clone)]
pub struct AvatarImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for AvatarImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AvatarImage({}x{})", self.width, self.height)
    }
}

impl From<RgbaImage> for AvatarImage {
    fn from(image: RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        }
    }
}

/// Decode an image file and crop it to a `size` x `size` square
pub fn load_from_path(path: &Path, size: u32) -> Result<AvatarImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;

    Ok(image
        .resize_to_fill(size, size, FilterType::Triangle)
        .to_rgba8()
        .into())
}

/// Built-in avatar: a shaded disc on a transparent background
pub fn generate_default(size: u32) -> AvatarImage {
    let center = size as f32 / 2.0;
    let radius = center - 1.0;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > radius {
            return Rgba([0, 0, 0, 0]);
        }

        // Diagonal gradient, pink to blue
        let t = ((x + y) as f32 / (2 * size) as f32).clamp(0.0, 1.0);
        let r = (255.0 * (1.0 - t) + 30.0 * t) as u8;
        let g = (20.0 * (1.0 - t) + 144.0 * t) as u8;
        let b = (147.0 * (1.0 - t) + 255.0 * t) as u8;

        // Soft rim
        let alpha = ((radius - distance).min(1.0) * 255.0) as u8;
        Rgba([r, g, b, alpha])
    })
    .into()
}

/// Load the configured image, falling back to the built-in avatar
pub async fn load(image_path: Option<String>, size: u32) -> AvatarImage {
    let Some(path) = image_path else {
        return generate_default(size);
    };

    let result = tokio::task::spawn_blocking(move || load_from_path(Path::new(&path), size))
        .await
        .context("Image decoding task panicked")
        .and_then(|result| result);

    match result {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("Using built-in avatar: {:#}", e);
            generate_default(size)
        }
    }
}
