// SPDX-License-Identifier: MPL-2.0
//! Hero slideshow controller.
//!
//! The controller presents exactly one slide at a time and crossfades between
//! slides. Every input source (auto-advance, prev/next controls, dots,
//! keyboard, swipe, hover and focus) funnels into [`SlideshowController::go_to_slide`]
//! or into the pause/resume pair.
//!
//! # Timers
//!
//! The controller never sleeps or spawns. It records deadlines (content
//! reveal, fade completion, auto-advance) and the host calls
//! [`SlideshowController::tick`] with the current time; due deadlines fire in
//! protocol order. [`SlideshowController::next_deadline`] tells the host how
//! soon it needs to tick again.
//!
//! # Transition protocol
//!
//! 1. Commit the new index and enter the crossfade phase.
//! 2. Sync accessibility state (hidden flags, dots, live region).
//! 3. Cancel the pending auto-advance.
//! 4. Prepare the incoming slide and start the crossfade.
//! 5. After the reveal delay, show the incoming heading and buttons.
//! 6. After the fade, retire the outgoing slide, return to idle and
//!    schedule the next auto-advance if none is pending.

use super::input::{self, Command, Input, InputOutcome, SwipeTracker};
use super::state::{CarouselState, Phase};
use super::timing::CarouselTiming;
use super::view::{EffectPhase, SlideView};
use crate::error::{Error, Result};
use std::time::Instant;

/// Outcome of a slide-change request.
///
/// Rejections are not errors: a malformed or badly timed input is simply
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// A transition to the requested slide started.
    Started,
    /// Rejected: a transition is still running.
    Busy,
    /// Rejected: the index does not name a slide.
    OutOfRange,
    /// Ignored: the requested slide is already shown.
    AlreadyCurrent,
}

impl Navigation {
    #[must_use]
    pub fn is_started(self) -> bool {
        self == Navigation::Started
    }
}

/// State machine driving a crossfading hero carousel over a [`SlideView`].
#[derive(Debug)]
pub struct SlideshowController<V> {
    view: V,
    state: CarouselState,
    timing: CarouselTiming,
    swipe: SwipeTracker,
}

impl<V: SlideView> SlideshowController<V> {
    /// Creates a controller over `view`.
    ///
    /// Fails with [`Error::EmptyCarousel`] when the view has no slides.
    pub fn new(view: V, timing: CarouselTiming) -> Result<Self> {
        let slide_count = view.slide_count();
        if slide_count == 0 {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self {
            view,
            state: CarouselState::new(slide_count),
            timing,
            swipe: SwipeTracker::new(timing.swipe_threshold),
        })
    }

    /// Puts the carousel in its initial state and starts auto-advancing.
    ///
    /// Slide 0 is forced active without a fade, every other slide is taken
    /// out of layout. Calling it again restarts from slide 0.
    pub fn start(&mut self, now: Instant) {
        let count = self.state.slide_count();
        self.state = CarouselState::new(count);

        self.apply_accessibility(None, 0);

        for index in 1..count {
            self.view.reset_slide(index);
            self.view.set_content_visible(index, false);
            self.view.set_slide_hidden(index, true);
        }
        self.view.set_displayed(0, true);
        self.view.set_opacity(0, 1.0);
        self.view.set_content_visible(0, true);
        self.view.set_leaving(0, false);
        self.view.set_active(0, true);
        self.view.flush_layout();

        self.view.set_container_focusable();
        self.state
            .schedule_auto_advance(now + self.timing.visible_duration());
        log::debug!("hero carousel started with {count} slides");
    }

    /// Requests a transition to `target`.
    ///
    /// Ignored while a transition runs, when `target` is out of range, and
    /// when `target` is already the current slide.
    pub fn go_to_slide(&mut self, target: usize, now: Instant) -> Navigation {
        if self.state.is_transitioning() {
            log::trace!("hero slide {target} rejected: transition in progress");
            return Navigation::Busy;
        }
        if !self.state.contains(target) {
            log::trace!("hero slide {target} rejected: out of range");
            return Navigation::OutOfRange;
        }
        let previous = self.state.current();
        if target == previous {
            return Navigation::AlreadyCurrent;
        }

        self.state.begin_transition(
            target,
            now + self.timing.reveal_delay(),
            now + self.timing.fade_duration(),
        );
        self.apply_accessibility(Some(previous), target);
        self.state.cancel_auto_advance();
        self.apply_transition_effects(Some(previous), target, EffectPhase::Start);

        log::debug!("hero slide {previous} -> {target}");
        Navigation::Started
    }

    pub fn advance_next(&mut self, now: Instant) -> Navigation {
        let target = self.state.next_index();
        self.go_to_slide(target, now)
    }

    pub fn advance_previous(&mut self, now: Instant) -> Navigation {
        let target = self.state.previous_index();
        self.go_to_slide(target, now)
    }

    /// Cancels the pending auto-advance, if any.
    pub fn pause_auto_advance(&mut self) {
        if self.state.cancel_auto_advance() {
            log::trace!("hero auto-advance paused");
        }
    }

    /// Schedules an auto-advance one dwell time from `now`, unless one is
    /// already pending.
    pub fn resume_auto_advance(&mut self, now: Instant) {
        if self
            .state
            .schedule_auto_advance(now + self.timing.visible_duration())
        {
            log::trace!("hero auto-advance resumed");
        }
    }

    /// Fires every deadline that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Phase::Crossfading {
            from,
            to,
            reveal_at,
            settle_at,
        } = self.state.phase()
        {
            if reveal_at <= now {
                self.apply_transition_effects(Some(from), to, EffectPhase::ContentReveal);
                self.state
                    .set_phase(Phase::ContentRevealed { from, to, settle_at });
            }
        }

        if let Phase::ContentRevealed {
            from,
            to,
            settle_at,
        } = self.state.phase()
        {
            if settle_at <= now {
                self.apply_transition_effects(Some(from), to, EffectPhase::Complete);
                self.state.set_phase(Phase::Idle);
                self.state
                    .schedule_auto_advance(now + self.timing.visible_duration());
            }
        }

        if self.state.take_due_auto_advance(now) {
            // A running transition absorbs this; its completion reschedules.
            let _ = self.advance_next(now);
        }
    }

    /// Earliest pending deadline, if the controller is waiting on one.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.state.phase().deadline(), self.state.auto_advance_at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Applies the viewport height to every slide.
    pub fn resize(&mut self, height: f32) {
        for index in 0..self.state.slide_count() {
            self.view.set_slide_height(index, height);
        }
    }

    /// Translates a raw input and runs the matching operation.
    pub fn handle_input(&mut self, input: Input, now: Instant) -> InputOutcome {
        let outcome = input::translate(input, &mut self.swipe, self.state.slide_count());
        match outcome.command {
            Some(Command::Next) => {
                self.advance_next(now);
            }
            Some(Command::Previous) => {
                self.advance_previous(now);
            }
            Some(Command::GoTo(index)) => {
                self.go_to_slide(index, now);
            }
            Some(Command::Pause) => self.pause_auto_advance(),
            Some(Command::Resume) => self.resume_auto_advance(now),
            Some(Command::Resize(height)) => self.resize(height),
            None => {}
        }
        outcome
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.state.current()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.state.slide_count()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn has_pending_auto_advance(&self) -> bool {
        self.state.auto_advance_at().is_some()
    }

    #[must_use]
    pub fn timing(&self) -> &CarouselTiming {
        &self.timing
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access for view-only updates (image handles, theming).
    /// Carousel flags must only be changed by the controller.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Hidden flags, dots and live region for a move from `previous` to `next`.
    fn apply_accessibility(&mut self, previous: Option<usize>, next: usize) {
        if let Some(previous) = previous {
            self.view.set_slide_hidden(previous, true);
        }
        self.view.set_slide_hidden(next, false);

        let total = self.state.slide_count();
        for index in 0..total {
            let selected = index == next;
            self.view.set_indicator(index, selected, selected);
        }
        self.view.announce(next + 1, total);
    }

    /// All visual side effects of one protocol phase.
    fn apply_transition_effects(&mut self, previous: Option<usize>, next: usize, phase: EffectPhase) {
        let outgoing = previous.filter(|&index| index != next);
        match phase {
            EffectPhase::Start => {
                self.view.reset_slide(next);
                self.view.set_displayed(next, true);
                self.view.set_opacity(next, 0.0);
                self.view.set_content_visible(next, false);
                self.view.flush_layout();

                self.view.set_active(next, true);
                if let Some(outgoing) = outgoing {
                    self.view.set_leaving(outgoing, true);
                }
                self.view.set_opacity(next, 1.0);
            }
            EffectPhase::ContentReveal => {
                self.view.set_content_visible(next, true);
            }
            EffectPhase::Complete => {
                if let Some(outgoing) = outgoing {
                    self.view.set_active(outgoing, false);
                    self.view.set_leaving(outgoing, false);
                    self.view.set_displayed(outgoing, false);
                    self.view.set_opacity(outgoing, 0.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::{Call, RecordingView};
    use crate::domain::carousel::{CycleDuration, FadeDuration};
    use std::time::Duration;

    const FADE: Duration = Duration::from_millis(800);
    const REVEAL: Duration = Duration::from_millis(100);
    const VISIBLE: Duration = Duration::from_millis(3_200);

    fn started(count: usize) -> (SlideshowController<RecordingView>, Instant) {
        let mut controller =
            SlideshowController::new(RecordingView::new(count), CarouselTiming::default())
                .expect("non-empty view");
        let t0 = Instant::now();
        controller.start(t0);
        controller.view_mut().clear_calls();
        (controller, t0)
    }

    #[test]
    fn empty_view_is_rejected() {
        let result = SlideshowController::new(RecordingView::new(0), CarouselTiming::default());
        assert!(matches!(result, Err(Error::EmptyCarousel)));
    }

    #[test]
    fn start_forces_first_slide_active() {
        let mut controller =
            SlideshowController::new(RecordingView::new(3), CarouselTiming::default())
                .expect("non-empty view");
        let t0 = Instant::now();
        controller.start(t0);

        let view = controller.view();
        assert_eq!(view.active_slides(), vec![0]);
        assert_eq!(view.displayed_slides(), vec![0]);
        assert_eq!(view.selected_indicators(), vec![0]);
        assert!(view.slides[0].content_visible);
        assert!(!view.slides[0].hidden);
        assert!(view.slides[1].hidden && view.slides[2].hidden);
        assert!(view.slides[0].focusable);
        assert!(!view.slides[1].focusable);
        assert!(view.calls.contains(&Call::Announce(1, 3)));
        assert!(view.calls.contains(&Call::ContainerFocusable));
        assert_eq!(controller.next_deadline(), Some(t0 + VISIBLE));
    }

    #[test]
    fn go_to_slide_commits_index_before_fade_completes() {
        let (mut controller, t0) = started(3);

        assert_eq!(controller.go_to_slide(2, t0), Navigation::Started);

        assert_eq!(controller.current_slide(), 2);
        assert!(controller.is_transitioning());
        assert_eq!(controller.view().active_slides(), vec![0, 2]);
        assert!(controller.view().slides[0].leaving);
        assert!(controller.view().slides[0].hidden);
        assert!(!controller.view().slides[2].hidden);
    }

    #[test]
    fn transition_settles_on_exactly_one_active_slide() {
        let (mut controller, t0) = started(3);
        controller.go_to_slide(1, t0);

        controller.tick(t0 + FADE);

        assert!(!controller.is_transitioning());
        assert_eq!(controller.view().active_slides(), vec![1]);
        assert_eq!(controller.view().displayed_slides(), vec![1]);
        assert!(!controller.view().slides[0].leaving);
        assert_eq!(controller.view().slides[0].opacity, 0.0);
    }

    #[test]
    fn incoming_slide_starts_transparent_before_layout_flush() {
        let (mut controller, t0) = started(2);
        controller.go_to_slide(1, t0);

        let calls = &controller.view().calls;
        let transparent = calls
            .iter()
            .position(|c| *c == Call::Opacity(1, 0.0))
            .expect("incoming slide made transparent");
        let flush = calls
            .iter()
            .position(|c| *c == Call::FlushLayout)
            .expect("layout flushed");
        let opaque = calls
            .iter()
            .position(|c| *c == Call::Opacity(1, 1.0))
            .expect("incoming slide made opaque");
        assert!(transparent < flush && flush < opaque);
    }

    #[test]
    fn incoming_slide_is_reset_before_it_fades_in() {
        let (mut controller, t0) = started(3);
        controller.view_mut().set_leaving(2, true);
        controller.view_mut().set_opacity(2, 0.6);
        controller.view_mut().clear_calls();

        controller.go_to_slide(2, t0);

        let view = controller.view();
        assert!(!view.slides[2].leaving);
        assert_eq!(view.slides[2].opacity, 1.0);
        let reset = view
            .calls
            .iter()
            .position(|c| *c == Call::Leaving(2, false))
            .expect("incoming slide reset");
        let displayed = view
            .calls
            .iter()
            .position(|c| *c == Call::Displayed(2, true))
            .expect("incoming slide displayed");
        assert!(reset < displayed);
    }

    #[test]
    fn content_is_revealed_after_delay() {
        let (mut controller, t0) = started(2);
        controller.go_to_slide(1, t0);
        assert!(!controller.view().slides[1].content_visible);

        controller.tick(t0 + REVEAL - Duration::from_millis(1));
        assert!(!controller.view().slides[1].content_visible);

        controller.tick(t0 + REVEAL);
        assert!(controller.view().slides[1].content_visible);
        assert!(matches!(controller.phase(), Phase::ContentRevealed { .. }));
    }

    #[test]
    fn out_of_range_requests_change_nothing() {
        let (mut controller, t0) = started(3);

        for target in [3, 4, usize::MAX] {
            assert_eq!(controller.go_to_slide(target, t0), Navigation::OutOfRange);
        }

        assert_eq!(controller.current_slide(), 0);
        assert!(controller.view().calls.is_empty());
        assert!(controller.has_pending_auto_advance());
    }

    #[test]
    fn requesting_current_slide_fires_no_accessibility_update() {
        let (mut controller, t0) = started(3);

        assert_eq!(controller.go_to_slide(0, t0), Navigation::AlreadyCurrent);

        assert_eq!(controller.view().accessibility_calls(), 0);
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn requests_are_rejected_until_fade_completes() {
        let (mut controller, t0) = started(4);
        controller.go_to_slide(1, t0);

        assert_eq!(controller.go_to_slide(2, t0 + REVEAL), Navigation::Busy);
        assert_eq!(controller.advance_next(t0 + REVEAL), Navigation::Busy);
        assert_eq!(controller.advance_previous(t0 + REVEAL), Navigation::Busy);
        assert_eq!(controller.current_slide(), 1);

        controller.tick(t0 + FADE);
        assert_eq!(controller.go_to_slide(2, t0 + FADE), Navigation::Started);
    }

    #[test]
    fn advance_next_cycles_back_to_start() {
        let (mut controller, t0) = started(4);
        let mut now = t0;
        for _ in 0..4 {
            assert!(controller.advance_next(now).is_started());
            now += FADE;
            controller.tick(now);
        }
        assert_eq!(controller.current_slide(), 0);
    }

    #[test]
    fn advance_previous_cycles_back_to_start() {
        let (mut controller, t0) = started(4);
        let mut now = t0;
        let mut visited = Vec::new();
        for _ in 0..4 {
            controller.advance_previous(now);
            visited.push(controller.current_slide());
            now += FADE;
            controller.tick(now);
        }
        assert_eq!(visited, vec![3, 2, 1, 0]);
    }

    #[test]
    fn exactly_one_indicator_selected_throughout() {
        let (mut controller, t0) = started(3);
        let mut now = t0;
        for target in [2, 1, 0, 2] {
            controller.go_to_slide(target, now);
            assert_eq!(controller.view().selected_indicators(), vec![target]);
            now += REVEAL;
            controller.tick(now);
            assert_eq!(controller.view().selected_indicators(), vec![target]);
            now += FADE;
            controller.tick(now);
            assert_eq!(
                controller.view().selected_indicators(),
                vec![controller.current_slide()]
            );
        }
    }

    #[test]
    fn pause_then_resume_leaves_one_pending_timer() {
        let (mut controller, t0) = started(3);
        let later = t0 + Duration::from_millis(500);

        controller.pause_auto_advance();
        assert!(!controller.has_pending_auto_advance());
        controller.pause_auto_advance();

        controller.resume_auto_advance(later);
        controller.resume_auto_advance(later + Duration::from_millis(10));

        assert!(controller.has_pending_auto_advance());
        assert_eq!(controller.next_deadline(), Some(later + VISIBLE));
    }

    #[test]
    fn transition_cancels_pending_auto_advance() {
        let (mut controller, t0) = started(3);
        assert!(controller.has_pending_auto_advance());

        controller.go_to_slide(1, t0);

        assert!(!controller.has_pending_auto_advance());
        controller.tick(t0 + FADE);
        assert!(controller.has_pending_auto_advance());
        assert_eq!(controller.next_deadline(), Some(t0 + FADE + VISIBLE));
    }

    #[test]
    fn completion_keeps_an_already_pending_timer() {
        let (mut controller, t0) = started(3);
        controller.go_to_slide(1, t0);
        // Pointer leaves mid-fade
        controller.resume_auto_advance(t0 + REVEAL);

        controller.tick(t0 + FADE);

        assert_eq!(controller.next_deadline(), Some(t0 + REVEAL + VISIBLE));
    }

    #[test]
    fn auto_advance_during_transition_is_absorbed() {
        let fade = FadeDuration::new(2_000);
        let timing = CarouselTiming {
            fade,
            cycle: CycleDuration::new(2_500, fade),
            ..CarouselTiming::default()
        };
        let mut controller =
            SlideshowController::new(RecordingView::new(3), timing).expect("non-empty view");
        let t0 = Instant::now();
        controller.start(t0);

        controller.go_to_slide(1, t0);
        // Pointer leaves mid-fade, the short dwell lands before the fade ends
        controller.resume_auto_advance(t0 + REVEAL);
        controller.tick(t0 + Duration::from_millis(600));

        assert_eq!(controller.current_slide(), 1);
        assert!(controller.is_transitioning());
        assert!(!controller.has_pending_auto_advance());

        let settle = t0 + Duration::from_millis(2_000);
        controller.tick(settle);
        assert_eq!(
            controller.next_deadline(),
            Some(settle + Duration::from_millis(500))
        );
    }

    #[test]
    fn auto_advance_walks_through_slides_and_wraps() {
        let (mut controller, t0) = started(3);

        let first_fire = t0 + VISIBLE;
        controller.tick(first_fire);
        assert_eq!(controller.current_slide(), 1);
        controller.tick(first_fire + FADE);

        let second_fire = first_fire + FADE + VISIBLE;
        controller.tick(second_fire);
        controller.tick(second_fire + FADE);
        assert_eq!(controller.current_slide(), 2);
        assert_eq!(controller.view().active_slides(), vec![2]);

        let third_fire = second_fire + FADE + VISIBLE;
        controller.tick(third_fire);
        controller.tick(third_fire + FADE);
        assert_eq!(controller.current_slide(), 0);
        assert_eq!(controller.view().active_slides(), vec![0]);
    }

    #[test]
    fn single_tick_past_everything_settles_without_skipping_slides() {
        let (mut controller, t0) = started(3);
        controller.go_to_slide(1, t0);

        controller.tick(t0 + Duration::from_secs(60));

        assert_eq!(controller.current_slide(), 1);
        assert!(!controller.is_transitioning());
        assert!(controller.view().slides[1].content_visible);
    }

    #[test]
    fn swipe_and_keys_route_through_navigation() {
        let (mut controller, t0) = started(3);

        controller.handle_input(Input::TouchStart { x: 300.0 }, t0);
        controller.handle_input(Input::TouchEnd { x: 240.0 }, t0);
        assert_eq!(controller.current_slide(), 1);

        let now = t0 + FADE;
        controller.tick(now);
        controller.handle_input(Input::TouchStart { x: 300.0 }, now);
        controller.handle_input(Input::TouchEnd { x: 330.0 }, now);
        assert_eq!(controller.current_slide(), 1);

        let outcome = controller.handle_input(Input::Key(input::Key::End), now);
        assert!(outcome.prevent_default);
        assert_eq!(controller.current_slide(), 2);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let (mut controller, t0) = started(3);

        controller.handle_input(Input::PointerEntered, t0);
        assert!(!controller.has_pending_auto_advance());
        controller.tick(t0 + VISIBLE);
        assert_eq!(controller.current_slide(), 0);

        controller.handle_input(Input::PointerLeft, t0 + VISIBLE);
        assert_eq!(controller.next_deadline(), Some(t0 + VISIBLE + VISIBLE));
    }

    #[test]
    fn resize_applies_height_to_every_slide() {
        let (mut controller, t0) = started(3);

        controller.handle_input(Input::Resized { height: 720.0 }, t0);

        assert!(controller
            .view()
            .slides
            .iter()
            .all(|slide| slide.height == Some(720.0)));
        assert_eq!(controller.current_slide(), 0);
    }

    #[test]
    fn single_slide_carousel_never_transitions() {
        let (mut controller, t0) = started(1);
        assert_eq!(controller.advance_next(t0), Navigation::AlreadyCurrent);
        assert_eq!(controller.advance_previous(t0), Navigation::AlreadyCurrent);
        controller.tick(t0 + VISIBLE);
        assert!(!controller.is_transitioning());
        assert_eq!(controller.view().active_slides(), vec![0]);
    }
}
