/// Display-size preview generation for catalog images
/// Decodes the file and shrinks it so the longest side fits the window
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::PreviewError;

/// Decoded RGBA pixels ready to hand to the UI
#[derive(Debug, Clone)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load an image for display
///
/// # Arguments
/// * `path` - Path to the image file
/// * `max_side` - Longest allowed side in pixels; smaller images are left as-is
pub async fn load_preview(path: PathBuf, max_side: u32) -> Result<Preview, PreviewError> {
    // Spawn blocking because decoding is CPU-intensive
    task::spawn_blocking(move || load_preview_blocking(&path, max_side))
        .await
        .map_err(|e| PreviewError::Task(e.to_string()))?
}

/// Blocking implementation of preview loading
fn load_preview_blocking(path: &Path, max_side: u32) -> Result<Preview, PreviewError> {
    if !path.exists() {
        return Err(PreviewError::NotFound(path.to_path_buf()));
    }

    let mut img = image::open(path)?;

    // Only ever shrink; resize() keeps the aspect ratio
    if img.width() > max_side || img.height() > max_side {
        img = img.resize(max_side, max_side, FilterType::Lanczos3);
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Preview {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
