// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Hero**: Crossfade timing, content reveal delay and swipe threshold
//! - **Testimonials**: Auto-advance interval of the testimonial carousel
//! - **Navigation**: Sticky navigation and mobile menu breakpoints

// ==========================================================================
// Hero Carousel Defaults
// ==========================================================================

/// Duration of the crossfade between two hero slides (in milliseconds).
pub const DEFAULT_FADE_DURATION_MS: u64 = 800;

/// Minimum crossfade duration.
pub const MIN_FADE_DURATION_MS: u64 = 100;

/// Maximum crossfade duration.
pub const MAX_FADE_DURATION_MS: u64 = 5_000;

/// Full cycle of one slide, fade included (in milliseconds).
pub const DEFAULT_CYCLE_DURATION_MS: u64 = 4_000;

/// Minimum time a slide stays fully visible on top of the fade.
pub const MIN_VISIBLE_DURATION_MS: u64 = 500;

/// Maximum cycle duration.
pub const MAX_CYCLE_DURATION_MS: u64 = 60_000;

/// Delay between the start of a crossfade and the reveal of the slide's
/// heading and buttons (in milliseconds).
pub const DEFAULT_CONTENT_REVEAL_DELAY_MS: u64 = 100;

/// Minimum horizontal travel for a touch gesture to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

/// Slide images shipped with the landing page.
pub const DEFAULT_HERO_IMAGES: [&str; 3] = ["Pictures/B1.png", "Pictures/B2.png", "Pictures/B3.png"];

// ==========================================================================
// Testimonial Defaults
// ==========================================================================

/// Interval between two automatic testimonial changes (in milliseconds).
pub const DEFAULT_TESTIMONIAL_INTERVAL_MS: u64 = 5_000;

/// Minimum testimonial interval.
pub const MIN_TESTIMONIAL_INTERVAL_MS: u64 = 1_000;

/// Maximum testimonial interval.
pub const MAX_TESTIMONIAL_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Scroll offset past which the navigation bar is pinned to the top.
pub const DEFAULT_STICKY_THRESHOLD: f32 = 100.0;

/// Vertical offset of the navigation bar while it floats over the hero.
pub const FLOATING_NAV_TOP: f32 = 40.0;

/// Viewport width at or below which the page uses the mobile menu.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 767.0;

const _: () = {
    assert!(MIN_FADE_DURATION_MS <= DEFAULT_FADE_DURATION_MS);
    assert!(DEFAULT_FADE_DURATION_MS <= MAX_FADE_DURATION_MS);
    assert!(DEFAULT_CYCLE_DURATION_MS >= DEFAULT_FADE_DURATION_MS + MIN_VISIBLE_DURATION_MS);
    assert!(DEFAULT_CONTENT_REVEAL_DELAY_MS < DEFAULT_FADE_DURATION_MS);
    assert!(MIN_TESTIMONIAL_INTERVAL_MS <= DEFAULT_TESTIMONIAL_INTERVAL_MS);
};
