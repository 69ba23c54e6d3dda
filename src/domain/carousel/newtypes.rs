// SPDX-License-Identifier: MPL-2.0
//! Carousel timing newtypes.
//!
//! These wrappers keep user-provided timing values inside ranges where the
//! crossfade protocol stays well-formed (the reveal happens inside the fade,
//! the slide stays visible for a while before the next fade).

use crate::config::{
    DEFAULT_CONTENT_REVEAL_DELAY_MS, DEFAULT_CYCLE_DURATION_MS, DEFAULT_FADE_DURATION_MS,
    DEFAULT_SWIPE_THRESHOLD, DEFAULT_TESTIMONIAL_INTERVAL_MS, MAX_CYCLE_DURATION_MS,
    MAX_FADE_DURATION_MS, MAX_SWIPE_THRESHOLD, MAX_TESTIMONIAL_INTERVAL_MS, MIN_FADE_DURATION_MS,
    MIN_SWIPE_THRESHOLD, MIN_TESTIMONIAL_INTERVAL_MS, MIN_VISIBLE_DURATION_MS,
};
use std::time::Duration;

// =============================================================================
// FadeDuration
// =============================================================================

/// Crossfade duration in milliseconds, clamped to 100–5000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a new fade duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_FADE_DURATION_MS, MAX_FADE_DURATION_MS))
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the fade as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(DEFAULT_FADE_DURATION_MS)
    }
}

// =============================================================================
// CycleDuration
// =============================================================================

/// Full slide cycle (fade included) in milliseconds.
///
/// Always at least [`MIN_VISIBLE_DURATION_MS`] longer than the fade it is
/// paired with, so the derived dwell time is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDuration(u64);

impl CycleDuration {
    /// Creates a cycle duration for the given fade, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64, fade: FadeDuration) -> Self {
        let min = fade.millis() + MIN_VISIBLE_DURATION_MS;
        Self(millis.clamp(min, MAX_CYCLE_DURATION_MS.max(min)))
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the cycle as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for CycleDuration {
    fn default() -> Self {
        Self(DEFAULT_CYCLE_DURATION_MS)
    }
}

// =============================================================================
// RevealDelay
// =============================================================================

/// Delay before the incoming slide's heading and buttons fade in.
///
/// Clamped strictly below the fade duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDelay(u64);

impl RevealDelay {
    /// Creates a reveal delay that lands inside the given fade.
    #[must_use]
    pub fn new(millis: u64, fade: FadeDuration) -> Self {
        Self(millis.min(fade.millis().saturating_sub(1)))
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RevealDelay {
    fn default() -> Self {
        Self(DEFAULT_CONTENT_REVEAL_DELAY_MS)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel of a touch gesture, clamped to 10–400 units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new swipe threshold, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    /// Returns the raw threshold.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

// =============================================================================
// TestimonialInterval
// =============================================================================

/// Interval of the testimonial carousel, clamped to 1–60 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialInterval(u64);

impl TestimonialInterval {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TESTIMONIAL_INTERVAL_MS, MAX_TESTIMONIAL_INTERVAL_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TestimonialInterval {
    fn default() -> Self {
        Self(DEFAULT_TESTIMONIAL_INTERVAL_MS)
    }
}
