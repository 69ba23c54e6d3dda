// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel::preload::PreloadedSlide;
use crate::ui::hero;
use crate::ui::navbar;
use crate::ui::testimonials;
use iced::widget::scrollable::Viewport;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Hero(hero::Message),
    Testimonials(testimonials::Message),
    Navbar(navbar::Message),
    /// The page scrollable moved.
    PageScrolled(Viewport),
    /// A slide image finished loading (`None` when it failed).
    SlidePreloaded(Option<PreloadedSlide>),
    /// Native keyboard, touch, mouse and window events.
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
    },
    Tick(Instant), // Periodic tick for carousel deadlines and animations
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Slide images overriding the configured list.
    pub images: Vec<PathBuf>,
}
