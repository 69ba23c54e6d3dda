// SPDX-License-Identifier: MPL-2.0
//! Page-level state: window size, scroll position, navigation bar and
//! anchor scrolling.

use crate::config::{Config, DEFAULT_MOBILE_BREAKPOINT, DEFAULT_STICKY_THRESHOLD};
use crate::site::{nav, Anchor, MobileMenu, NavPlacement, PageLayout, SmoothScroll};
use iced::Size;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PageState {
    pub window_size: Size,
    pub scroll_offset: f32,
    pub menu: MobileMenu,
    pub placement: NavPlacement,
    pub sticky_threshold: f32,
    pub mobile_breakpoint: f32,
    smooth_scroll: Option<SmoothScroll>,
}

impl PageState {
    pub fn new(window_size: Size, config: &Config) -> Self {
        Self {
            window_size,
            scroll_offset: 0.0,
            menu: MobileMenu::default(),
            placement: NavPlacement::Floating,
            sticky_threshold: config
                .navigation
                .sticky_threshold
                .unwrap_or(DEFAULT_STICKY_THRESHOLD),
            mobile_breakpoint: config
                .navigation
                .mobile_breakpoint
                .unwrap_or(DEFAULT_MOBILE_BREAKPOINT),
            smooth_scroll: None,
        }
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        PageLayout::new(self.window_size.height)
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        nav::is_compact(self.window_size.width, self.mobile_breakpoint)
    }

    /// Records the scroll offset reported by the page scrollable.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
        self.placement = NavPlacement::for_scroll(offset, self.sticky_threshold);
    }

    /// Starts an eased scroll to `anchor` from the current offset.
    pub fn scroll_to(&mut self, anchor: Anchor, now: Instant) {
        let layout = self.layout();
        let target = layout.offset_of(anchor).min(layout.max_scroll());
        self.smooth_scroll = Some(SmoothScroll::new(self.scroll_offset, target, now));
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.smooth_scroll.is_some()
    }

    /// Relative offset the page should snap to at `now`, if an anchor
    /// scroll is running. The scroll ends once it reaches its target.
    pub fn advance_scroll(&mut self, now: Instant) -> Option<f32> {
        let scroll = self.smooth_scroll?;
        let offset = scroll.offset_at(now);
        if scroll.is_finished(now) {
            self.smooth_scroll = None;
        }
        Some(self.layout().relative(offset))
    }

    /// Whether the window point lies over the hero, which always starts at
    /// the top of the page and is one window tall.
    #[must_use]
    pub fn is_over_hero(&self, y: f32) -> bool {
        y >= 0.0 && y + self.scroll_offset < self.window_size.height
    }
}
