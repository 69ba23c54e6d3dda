// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style::default(),
    }
}

/// Secondary call to action: white outline over the slide image.
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            color: WHITE,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for overlay buttons (previous/next arrows).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Round indicator dot. The selected dot is filled; a keyboard-focused dot
/// gets a brand-colored ring.
pub fn indicator(
    selected: bool,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = if selected {
            WHITE
        } else {
            let alpha = match status {
                button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
                _ => opacity::OVERLAY_MEDIUM,
            };
            Color { a: alpha, ..WHITE }
        };
        let ring = if focused {
            Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            }
        } else {
            Border {
                color: WHITE,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            }
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: WHITE,
            border: ring,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Flat text link used in the navigation bar.
pub fn nav_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ => WHITE,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Menu toggle, highlighted while the menu is open.
pub fn menu_toggle(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let highlighted = open || matches!(status, button::Status::Hovered);
        button::Style {
            background: highlighted.then_some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            })),
            text_color: WHITE,
            border: Border {
                color: WHITE,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Light;
        let style_fn = overlay(WHITE, 0.2, 0.5);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn selected_indicator_is_filled_white() {
        let theme = Theme::Light;
        let style = indicator(true, false)(&theme, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(WHITE)));

        let unselected = indicator(false, false)(&theme, button::Status::Active);
        assert_ne!(unselected.background, style.background);
    }

    #[test]
    fn focused_indicator_has_ring() {
        let theme = Theme::Light;
        let style = indicator(false, true)(&theme, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }
}
