// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::site::NavPlacement;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Flat section surface.
pub fn section(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(if color == palette::GRAY_900 {
            palette::WHITE
        } else {
            palette::GRAY_900
        }),
        ..Default::default()
    }
}

/// Placeholder background of a slide without a decoded image, faded with
/// the slide.
pub fn slide_fallback(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..color })),
        ..Default::default()
    }
}

/// Darkening layer under the hero heading.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::HERO_SCRIM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Outline drawn around the hero while it has keyboard focus.
pub fn focus_ring(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: if focused {
            Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_MD,
                radius: radius::NONE.into(),
            }
        } else {
            Border::default()
        },
        ..Default::default()
    }
}

/// Navigation bar background for its current placement.
pub fn nav_bar(placement: NavPlacement) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: placement.background_alpha(),
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        shadow: if placement.has_shadow() {
            shadow::NAV
        } else {
            shadow::NONE
        },
        ..Default::default()
    }
}

/// Drop-down panel of the collapsed navigation menu.
pub fn menu_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
