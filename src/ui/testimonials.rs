// SPDX-License-Identifier: MPL-2.0
//! Testimonial section.

use crate::i18n::fluent::I18n;
use crate::site::nav::TESTIMONIALS_SECTION_HEIGHT;
use crate::testimonial::TestimonialCarousel;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Number of testimonials shipped in the translations.
pub const TESTIMONIAL_COUNT: usize = 3;

/// Messages emitted by the testimonial section.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    PointerEntered,
    PointerLeft,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a TestimonialCarousel,
}

/// Applies a message to the carousel.
pub fn update(message: Message, carousel: &mut TestimonialCarousel, now: std::time::Instant) {
    match message {
        Message::Previous => carousel.previous(),
        Message::Next => carousel.next(),
        Message::PointerEntered => carousel.pointer_entered(),
        Message::PointerLeft => carousel.pointer_left(now),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("testimonials-title")).size(typography::TITLE_LG);

    let slide: Element<'a, Message> = if ctx.carousel.total() == 0 {
        Column::new().into()
    } else {
        let number = ctx.carousel.current() + 1;
        Column::new()
            .spacing(spacing::SM)
            .max_width(sizing::TEXT_BLOCK_WIDTH)
            .align_x(Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr(&format!("testimonial-{number}-quote")))
                    .size(typography::BODY_LG),
            )
            .push(
                Text::new(ctx.i18n.tr(&format!("testimonial-{number}-author")))
                    .size(typography::CAPTION),
            )
            .into()
    };

    let arrow = |glyph: &'static str, message: Message| {
        button(Text::new(glyph).size(typography::TITLE_MD))
            .padding(spacing::XS)
            .style(styles::button_overlay(palette::WHITE, 0.5, 0.7))
            .on_press(message)
    };

    let strip = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(arrow("‹", Message::Previous))
        .push(Container::new(slide).width(Length::Fill).align_x(Horizontal::Center))
        .push(arrow("›", Message::Next));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(mouse_area(strip).on_enter(Message::PointerEntered).on_exit(Message::PointerLeft));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(TESTIMONIALS_SECTION_HEIGHT))
        .padding(spacing::XXL)
        .align_y(Vertical::Center)
        .style(styles::container::section(palette::GRAY_100))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::carousel::TestimonialInterval;
    use std::time::Instant;

    #[test]
    fn testimonials_view_renders() {
        let i18n = I18n::default();
        let carousel = TestimonialCarousel::new(TESTIMONIAL_COUNT, TestimonialInterval::default());
        let _element = view(ViewContext {
            i18n: &i18n,
            carousel: &carousel,
        });
    }

    #[test]
    fn every_testimonial_is_translated() {
        let i18n = I18n::default();
        for number in 1..=TESTIMONIAL_COUNT {
            assert!(!i18n.tr(&format!("testimonial-{number}-quote")).starts_with("MISSING"));
        }
    }

    #[test]
    fn hover_messages_toggle_interval() {
        let now = Instant::now();
        let mut carousel = TestimonialCarousel::new(3, TestimonialInterval::default());
        carousel.start(now);

        update(Message::PointerEntered, &mut carousel, now);
        assert!(carousel.next_deadline().is_none());
        update(Message::PointerLeft, &mut carousel, now);
        assert!(carousel.next_deadline().is_some());
    }
}
