// SPDX-License-Identifier: MPL-2.0
//! Timing parameters of the hero carousel.

use crate::config::HeroConfig;
use crate::domain::carousel::{CycleDuration, FadeDuration, RevealDelay, SwipeThreshold};
use std::time::Duration;

/// Fixed timing constants a controller is built with.
///
/// `visible_duration()` is the dwell time a slide stays fully visible
/// before the next auto-advance fires (`cycle - fade`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselTiming {
    pub fade: FadeDuration,
    pub cycle: CycleDuration,
    pub reveal_delay: RevealDelay,
    pub swipe_threshold: SwipeThreshold,
}

impl CarouselTiming {
    /// Builds timing from the `[hero]` config section, clamping every value.
    #[must_use]
    pub fn from_config(config: &HeroConfig) -> Self {
        let defaults = Self::default();
        let fade = config
            .fade_duration_ms
            .map_or(defaults.fade, FadeDuration::new);
        let cycle = CycleDuration::new(
            config
                .cycle_duration_ms
                .unwrap_or(defaults.cycle.millis()),
            fade,
        );
        let reveal_delay = RevealDelay::new(
            config
                .content_reveal_delay_ms
                .unwrap_or(defaults.reveal_delay.millis()),
            fade,
        );
        let swipe_threshold = config
            .swipe_threshold
            .map_or(defaults.swipe_threshold, SwipeThreshold::new);

        Self {
            fade,
            cycle,
            reveal_delay,
            swipe_threshold,
        }
    }

    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        self.fade.as_duration()
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay.as_duration()
    }

    #[must_use]
    pub fn visible_duration(&self) -> Duration {
        self.cycle.as_duration().saturating_sub(self.fade.as_duration())
    }
}
