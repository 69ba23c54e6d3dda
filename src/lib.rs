// SPDX-License-Identifier: MPL-2.0
//! `hero_carousel` is a landing page built with the Iced GUI framework.
//!
//! Its centerpiece is a full-height hero slideshow that crossfades between
//! slides, reveals each slide's heading after a short delay and keeps
//! indicator dots and a slide counter in sync for keyboard users. Around it
//! sit a sticky navigation bar with a collapsible menu, a testimonial
//! carousel and anchor scrolling between sections.

#![doc(html_root_url = "https://docs.rs/hero_carousel/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod site;
pub mod testimonial;
pub mod ui;
