// SPDX-License-Identifier: MPL-2.0
//! Static page sections between and after the carousels.

use crate::i18n::fluent::I18n;
use crate::site::nav::{ABOUT_SECTION_HEIGHT, CONTACT_SECTION_HEIGHT};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, alignment::Vertical, Color, Element, Length};

fn section<'a, M: 'a>(
    i18n: &I18n,
    title_key: &str,
    body_key: &str,
    height: f32,
    background: Color,
) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::TEXT_BLOCK_WIDTH)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr(body_key)).size(typography::BODY_LG));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::section(background))
        .into()
}

pub fn about<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    section(
        i18n,
        "about-title",
        "about-body",
        ABOUT_SECTION_HEIGHT,
        palette::WHITE,
    )
}

pub fn contact<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    section(
        i18n,
        "contact-title",
        "contact-body",
        CONTACT_SECTION_HEIGHT,
        palette::GRAY_900,
    )
}
