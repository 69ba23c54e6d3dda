// SPDX-License-Identifier: MPL-2.0
//! Carousel domain types.

mod newtypes;

pub use newtypes::{CycleDuration, FadeDuration, RevealDelay, SwipeThreshold, TestimonialInterval};
