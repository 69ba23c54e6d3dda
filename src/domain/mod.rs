// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no toolkit dependencies.
//!
//! # Modules
//!
//! - [`carousel`]: Timing value objects ([`FadeDuration`](carousel::FadeDuration),
//!   [`CycleDuration`](carousel::CycleDuration), [`RevealDelay`](carousel::RevealDelay),
//!   [`SwipeThreshold`](carousel::SwipeThreshold),
//!   [`TestimonialInterval`](carousel::TestimonialInterval))

pub mod carousel;
