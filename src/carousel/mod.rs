// SPDX-License-Identifier: MPL-2.0
//! Hero carousel: a full-height slideshow that crossfades between slides.
//!
//! The [`SlideshowController`] owns the index, the transition phase and the
//! auto-advance deadline. It drives any [`SlideView`], so the same logic runs
//! against the iced scene in [`crate::ui::hero`] and against recording
//! doubles in tests.
//!
//! - [`input`] - Maps raw pointer, key, touch, hover and focus input to commands
//! - [`preload`] - Background loading of slide images
//! - [`timing`] - Fade, cycle and reveal durations

mod controller;
pub mod input;
pub mod preload;
mod state;
pub mod timing;
mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{Navigation, SlideshowController};
pub use input::{Command, Input, InputOutcome, Key, SwipeDirection, SwipeTracker};
pub use state::{CarouselState, Phase};
pub use timing::CarouselTiming;
pub use view::{EffectPhase, SlideView};
