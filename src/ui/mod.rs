// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`hero`] - Crossfading hero slideshow and its renderable scene
//! - [`testimonials`] - Testimonial strip
//! - [`sections`] - Static about and contact sections
//! - [`navbar`] - Navigation bar with collapsible mobile menu
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod hero;
pub mod navbar;
pub mod sections;
pub mod styles;
pub mod testimonials;
