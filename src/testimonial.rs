// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel.
//!
//! A much simpler sibling of the hero carousel: one testimonial is shown at a
//! time, indices wrap in both directions and an interval advances it while
//! the pointer is outside. There is no crossfade and no accessibility sync.

use crate::domain::carousel::TestimonialInterval;
use std::time::Instant;

/// Index, interval and hover state of the testimonial strip.
#[derive(Debug, Clone)]
pub struct TestimonialCarousel {
    current: usize,
    total: usize,
    interval: TestimonialInterval,
    next_at: Option<Instant>,
}

impl TestimonialCarousel {
    /// Creates a carousel over `total` testimonials. Zero is allowed and turns
    /// every operation into a no-op.
    #[must_use]
    pub fn new(total: usize, interval: TestimonialInterval) -> Self {
        Self {
            current: 0,
            total,
            interval,
            next_at: None,
        }
    }

    /// Shows the first testimonial and starts the interval.
    pub fn start(&mut self, now: Instant) {
        self.show(0);
        self.restart_interval(now);
    }

    /// Shows the testimonial at `index`, wrapping past either end.
    ///
    /// Anything at or past the end goes back to the first testimonial and any
    /// negative index goes to the last one.
    pub fn show(&mut self, index: isize) {
        if self.total == 0 {
            return;
        }
        self.current = match usize::try_from(index) {
            Ok(index) if index < self.total => index,
            Ok(_) => 0,
            Err(_) => self.total - 1,
        };
    }

    pub fn next(&mut self) {
        self.show(self.offset(1));
    }

    pub fn previous(&mut self) {
        self.show(self.offset(-1));
    }

    /// Advances when the interval has elapsed and re-arms it.
    ///
    /// Returns `true` when the shown testimonial changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_at {
            Some(at) if at <= now && self.total > 0 => {
                let before = self.current;
                self.next();
                self.next_at = Some(now + self.interval.as_duration());
                before != self.current
            }
            _ => false,
        }
    }

    /// Pointer entered the strip: the interval stops.
    pub fn pointer_entered(&mut self) {
        self.next_at = None;
    }

    /// Pointer left the strip: the interval restarts from `now`.
    pub fn pointer_left(&mut self, now: Instant) {
        self.restart_interval(now);
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.total > 0 && index == self.current
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_at
    }

    fn restart_interval(&mut self, now: Instant) {
        if self.total == 0 {
            return;
        }
        self.next_at = Some(now + self.interval.as_duration());
    }

    fn offset(&self, delta: isize) -> isize {
        isize::try_from(self.current).unwrap_or(isize::MAX) + delta
    }
}
