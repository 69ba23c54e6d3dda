// SPDX-License-Identifier: MPL-2.0
//! The surface a [`SlideshowController`](super::SlideshowController) draws on.
//!
//! A view owns one visual node per slide and one indicator per slide, all
//! addressed by ordinal position. The controller never reads styles back; it
//! only pushes the mutations listed here, which keeps it testable against a
//! recording double.

/// Visual and accessibility mutations the carousel needs from its host.
pub trait SlideView {
    /// Number of slides. Must stay constant for the lifetime of the view.
    fn slide_count(&self) -> usize;

    /// Whether the slide takes part in layout at all.
    fn set_displayed(&mut self, index: usize, displayed: bool);

    /// Slide background opacity; a change starts the crossfade animation.
    fn set_opacity(&mut self, index: usize, opacity: f32);

    /// Visibility of the slide's heading and action buttons.
    fn set_content_visible(&mut self, index: usize, visible: bool);

    fn set_active(&mut self, index: usize, active: bool);

    /// Marks the outgoing slide while it keeps rendering during fade-out.
    fn set_leaving(&mut self, index: usize, leaving: bool);

    /// Hides (or exposes) the slide and its content region from assistive tech.
    fn set_slide_hidden(&mut self, index: usize, hidden: bool);

    /// Selected flag and tab reachability of an indicator dot.
    fn set_indicator(&mut self, index: usize, selected: bool, focusable: bool);

    fn set_slide_height(&mut self, index: usize, height: f32);

    /// Commits pending style changes so the next opacity change animates
    /// from them instead of being coalesced.
    fn flush_layout(&mut self) {}

    /// Updates the live region, when the view has one.
    fn announce(&mut self, _position: usize, _total: usize) {}

    /// Makes the carousel container reachable with the keyboard.
    fn set_container_focusable(&mut self) {}

    /// Returns a slide to its initial style state.
    fn reset_slide(&mut self, index: usize) {
        self.set_active(index, false);
        self.set_leaving(index, false);
        self.set_opacity(index, 0.0);
        self.set_displayed(index, false);
    }
}

/// Steps of the crossfade protocol that produce visual effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    /// Incoming slide prepared and fading in, outgoing slide leaving.
    Start,
    /// Incoming slide's heading and buttons appear.
    ContentReveal,
    /// Outgoing slide removed from layout.
    Complete,
}
