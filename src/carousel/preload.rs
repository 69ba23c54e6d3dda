// SPDX-License-Identifier: MPL-2.0
//! Eager loading of slide background images.
//!
//! Every image is read and decoded in the background as soon as the page
//! boots. Loads complete in any order. A failed load is logged and otherwise
//! ignored: the slide keeps its placeholder background.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use iced::Task;
use image_rs::GenericImageView;
use std::path::PathBuf;

/// A decoded slide background ready for rendering.
#[derive(Debug, Clone)]
pub struct SlideImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Result of one background load, tagged with its slide index.
#[derive(Debug, Clone)]
pub struct PreloadedSlide {
    pub index: usize,
    pub image: SlideImage,
}

/// Decodes an encoded image (PNG, JPEG, WebP) into an RGBA handle.
pub fn decode_slide_image(bytes: &[u8]) -> Result<SlideImage> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }
    let pixels = img.to_rgba8().into_vec();

    Ok(SlideImage {
        handle: Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}

/// Reads and decodes one slide image.
pub async fn load_slide_image(path: PathBuf) -> Result<SlideImage> {
    let bytes = tokio::fs::read(&path).await?;
    decode_slide_image(&bytes)
}

async fn preload_one(index: usize, path: PathBuf) -> Option<PreloadedSlide> {
    match load_slide_image(path.clone()).await {
        Ok(image) => {
            log::debug!(
                "preloaded hero slide {index} ({}x{}) from {}",
                image.width,
                image.height,
                path.display()
            );
            Some(PreloadedSlide { index, image })
        }
        Err(err) => {
            log::debug!("hero slide {index} preload failed for {}: {err}", path.display());
            None
        }
    }
}

/// Starts loading every source at once.
///
/// `on_loaded` receives `None` for failed loads; callers usually drop those.
pub fn preload_all<M>(
    sources: &[PathBuf],
    on_loaded: impl Fn(Option<PreloadedSlide>) -> M + Clone + Send + 'static,
) -> Task<M>
where
    M: Send + 'static,
{
    Task::batch(sources.iter().cloned().enumerate().map(|(index, path)| {
        Task::perform(preload_one(index, path), on_loaded.clone())
    }))
}
