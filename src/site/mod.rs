// SPDX-License-Identifier: MPL-2.0
//! Page-level behaviour around the carousels.
//!
//! - [`nav`] - Sticky navigation bar, mobile menu and in-page anchor scrolling

pub mod nav;

pub use nav::{Anchor, MobileMenu, NavPlacement, PageLayout, SmoothScroll};
