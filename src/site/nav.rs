// SPDX-License-Identifier: MPL-2.0
//! Navigation bar behaviour.
//!
//! The bar floats over the hero until the page scrolls past a threshold, then
//! pins itself to the top with a dark background. On narrow windows its links
//! collapse into a toggled menu. Links jump to page sections with a short
//! eased scroll.

use crate::config::FLOATING_NAV_TOP;
use std::time::{Duration, Instant};

/// Height of the "about" section below the hero.
pub const ABOUT_SECTION_HEIGHT: f32 = 480.0;

/// Height of the testimonial section.
pub const TESTIMONIALS_SECTION_HEIGHT: f32 = 360.0;

/// Height of the contact footer.
pub const CONTACT_SECTION_HEIGHT: f32 = 280.0;

/// Duration of an anchor scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

// =============================================================================
// Sticky placement
// =============================================================================

/// Where the navigation bar sits for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPlacement {
    /// Over the hero, transparent, offset from the top.
    #[default]
    Floating,
    /// Fixed to the top with a dark translucent background and a shadow.
    Pinned,
}

impl NavPlacement {
    /// Pinned only once the offset is strictly past `threshold`.
    #[must_use]
    pub fn for_scroll(offset: f32, threshold: f32) -> Self {
        if offset > threshold {
            NavPlacement::Pinned
        } else {
            NavPlacement::Floating
        }
    }

    /// Distance between the top of the window and the bar.
    #[must_use]
    pub fn top(self) -> f32 {
        match self {
            NavPlacement::Floating => FLOATING_NAV_TOP,
            NavPlacement::Pinned => 0.0,
        }
    }

    /// Alpha of the black bar background.
    #[must_use]
    pub fn background_alpha(self) -> f32 {
        match self {
            NavPlacement::Floating => 0.0,
            NavPlacement::Pinned => 0.9,
        }
    }

    #[must_use]
    pub fn has_shadow(self) -> bool {
        self == NavPlacement::Pinned
    }
}

// =============================================================================
// Mobile menu
// =============================================================================

/// Open state shared by the collapsed link list and its toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// A link was activated. On windows no wider than `breakpoint` the menu
    /// closes; wider windows keep it as is.
    pub fn link_activated(&mut self, viewport_width: f32, breakpoint: f32) {
        if viewport_width <= breakpoint {
            self.close();
        }
    }
}

/// Whether the window is narrow enough for the collapsed menu.
#[must_use]
pub fn is_compact(viewport_width: f32, breakpoint: f32) -> bool {
    viewport_width <= breakpoint
}

// =============================================================================
// Anchors
// =============================================================================

/// In-page link targets, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Testimonials,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Testimonials,
        Anchor::Contact,
    ];

    /// Resolves an `#fragment` link.
    #[must_use]
    pub fn from_fragment(href: &str) -> Option<Self> {
        match href.strip_prefix('#')? {
            "home" => Some(Anchor::Home),
            "about" => Some(Anchor::About),
            "testimonials" => Some(Anchor::Testimonials),
            "contact" => Some(Anchor::Contact),
            _ => None,
        }
    }

    #[must_use]
    pub fn fragment(self) -> &'static str {
        match self {
            Anchor::Home => "#home",
            Anchor::About => "#about",
            Anchor::Testimonials => "#testimonials",
            Anchor::Contact => "#contact",
        }
    }

    /// Fluent key of the link label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Anchor::Home => "nav-home",
            Anchor::About => "nav-about",
            Anchor::Testimonials => "nav-testimonials",
            Anchor::Contact => "nav-contact",
        }
    }
}

/// Vertical layout of the page for a given window height.
///
/// The hero always fills the window; the other sections have fixed heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub viewport_height: f32,
}

impl PageLayout {
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height: viewport_height.max(0.0),
        }
    }

    /// Absolute offset of the top of `anchor`'s section.
    #[must_use]
    pub fn offset_of(&self, anchor: Anchor) -> f32 {
        match anchor {
            Anchor::Home => 0.0,
            Anchor::About => self.viewport_height,
            Anchor::Testimonials => self.viewport_height + ABOUT_SECTION_HEIGHT,
            Anchor::Contact => {
                self.viewport_height + ABOUT_SECTION_HEIGHT + TESTIMONIALS_SECTION_HEIGHT
            }
        }
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.viewport_height
            + ABOUT_SECTION_HEIGHT
            + TESTIMONIALS_SECTION_HEIGHT
            + CONTACT_SECTION_HEIGHT
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    /// Converts an absolute offset into the 0..=1 fraction scrollables use.
    #[must_use]
    pub fn relative(&self, offset: f32) -> f32 {
        let max = self.max_scroll();
        if max <= 0.0 {
            0.0
        } else {
            (offset / max).clamp(0.0, 1.0)
        }
    }
}

// =============================================================================
// Smooth scrolling
// =============================================================================

/// An eased scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: SMOOTH_SCROLL_DURATION,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`, eased in and out.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        let eased = if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
        };
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}
