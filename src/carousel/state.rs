// SPDX-License-Identifier: MPL-2.0
//! Carousel state and transition phases.
//!
//! The state only tracks indices and deadlines. All visual work happens in
//! the controller, which is the only writer.

use std::time::Instant;

/// Where the carousel is in the crossfade protocol.
///
/// Every non-`Idle` phase counts as "transitioning": slide-change requests are
/// rejected until the phase returns to `Idle` at `settle_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Backgrounds crossfading, incoming content still hidden.
    Crossfading {
        from: usize,
        to: usize,
        reveal_at: Instant,
        settle_at: Instant,
    },
    /// Incoming content visible, waiting for the fade to finish.
    ContentRevealed {
        from: usize,
        to: usize,
        settle_at: Instant,
    },
}

impl Phase {
    /// The deadline this phase is waiting for, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match *self {
            Phase::Idle => None,
            Phase::Crossfading { reveal_at, .. } => Some(reveal_at),
            Phase::ContentRevealed { settle_at, .. } => Some(settle_at),
        }
    }
}

/// Mutable state of one carousel.
#[derive(Debug, Clone)]
pub struct CarouselState {
    current: usize,
    slide_count: usize,
    phase: Phase,
    auto_advance_at: Option<Instant>,
}

impl CarouselState {
    /// Creates the state for `slide_count` slides, starting at slide 0.
    ///
    /// `slide_count` must be non-zero; the controller checks it.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        debug_assert!(slide_count > 0);
        Self {
            current: 0,
            slide_count,
            phase: Phase::Idle,
            auto_advance_at: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.slide_count
    }

    /// Index after the current one, wrapping to the first slide.
    #[must_use]
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.slide_count
    }

    /// Index before the current one, wrapping to the last slide.
    #[must_use]
    pub fn previous_index(&self) -> usize {
        (self.current + self.slide_count - 1) % self.slide_count
    }

    /// Commits the new index and enters the crossfade phase.
    pub(crate) fn begin_transition(&mut self, to: usize, reveal_at: Instant, settle_at: Instant) {
        let from = self.current;
        self.current = to;
        self.phase = Phase::Crossfading {
            from,
            to,
            reveal_at,
            settle_at,
        };
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    #[must_use]
    pub fn auto_advance_at(&self) -> Option<Instant> {
        self.auto_advance_at
    }

    /// Schedules the auto-advance unless one is already pending.
    ///
    /// Returns `true` when a new deadline was set.
    pub(crate) fn schedule_auto_advance(&mut self, at: Instant) -> bool {
        if self.auto_advance_at.is_some() {
            return false;
        }
        self.auto_advance_at = Some(at);
        true
    }

    /// Drops the pending auto-advance. Returns `true` if one was pending.
    pub(crate) fn cancel_auto_advance(&mut self) -> bool {
        self.auto_advance_at.take().is_some()
    }

    /// Consumes the auto-advance deadline if it has passed.
    pub(crate) fn take_due_auto_advance(&mut self, now: Instant) -> bool {
        match self.auto_advance_at {
            Some(at) if at <= now => {
                self.auto_advance_at = None;
                true
            }
            _ => false,
        }
    }
}
