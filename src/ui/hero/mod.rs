// SPDX-License-Identifier: MPL-2.0
//! Hero section: full-height crossfading slides with arrows, dots and a
//! slide counter.
//!
//! Rendering only. The slide flags come from [`HeroScene`], which the
//! carousel controller drives; this module turns them into widgets and
//! reports user intent back as [`Message`]s.

mod scene;

pub use scene::{HeroScene, SlideVisual};

use crate::i18n::fluent::I18n;
use crate::site::Anchor;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, tooltip, Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Number of distinct heading/text pairs in the translations. Extra slides
/// reuse them in order.
const SLIDE_COPY_COUNT: usize = 3;

/// Where keyboard focus sits inside the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroFocus {
    #[default]
    None,
    Container,
    Indicator(usize),
}

impl HeroFocus {
    #[must_use]
    pub fn is_inside(self) -> bool {
        self != HeroFocus::None
    }
}

/// Messages emitted by the hero view.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Indicator(usize),
    PointerEntered,
    PointerLeft,
    /// Click anywhere in the hero, giving it keyboard focus.
    Pressed,
    CallToAction(Anchor),
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scene: &'a HeroScene,
    pub focus: HeroFocus,
}

/// Render the hero section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scene = ctx.scene;
    let height = hero_height(scene);

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fixed(height));

    for index in scene.layers() {
        stack = stack.push(slide_layer(scene, index, height));
    }

    if let Some(index) = scene.content_slide() {
        stack = stack.push(slide_content(ctx.i18n, index));
    }

    stack = stack.push(arrows(ctx.i18n));
    stack = stack.push(footer(&ctx));

    let focused = ctx.focus == HeroFocus::Container && scene.container_focusable();
    let framed = Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(styles::container::focus_ring(focused));

    mouse_area(framed)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft)
        .on_press(Message::Pressed)
        .into()
}

/// Height of the hero, taken from the first slide once a resize was applied.
#[must_use]
pub fn hero_height(scene: &HeroScene) -> f32 {
    scene
        .slide(0)
        .and_then(|slide| slide.height)
        .unwrap_or(sizing::DEFAULT_HERO_HEIGHT)
}

/// Text of the live region for the current slide.
#[must_use]
pub fn live_region_text(i18n: &I18n, scene: &HeroScene) -> Option<String> {
    scene.live_region().map(|(current, total)| {
        i18n.tr_with_args(
            "hero-live-region",
            &[("current", &current.to_string()), ("total", &total.to_string())],
        )
    })
}

fn copy_key(index: usize, part: &str) -> String {
    format!("hero-slide-{}-{part}", index % SLIDE_COPY_COUNT + 1)
}

fn slide_layer<'a>(scene: &'a HeroScene, index: usize, hero_height: f32) -> Element<'a, Message> {
    let alpha = scene.rendered_opacity(index);
    let height = scene
        .slide(index)
        .and_then(|slide| slide.height)
        .unwrap_or(hero_height);

    match scene.slide(index).and_then(|slide| slide.image.clone()) {
        Some(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        None => {
            let color = palette::HERO_FALLBACK[index % palette::HERO_FALLBACK.len()];
            Container::new(Column::new())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .style(styles::container::slide_fallback(color, alpha))
                .into()
        }
    }
}

fn slide_content<'a>(i18n: &I18n, index: usize) -> Element<'a, Message> {
    let title = Text::new(i18n.tr(&copy_key(index, "title"))).size(typography::DISPLAY);
    let text = Text::new(i18n.tr(&copy_key(index, "text"))).size(typography::BODY_LG);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(i18n.tr("hero-cta-primary")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::CallToAction(Anchor::Contact)),
        )
        .push(
            button(Text::new(i18n.tr("hero-cta-secondary")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline)
                .on_press(Message::CallToAction(Anchor::About)),
        );

    let block = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::TEXT_BLOCK_WIDTH)
        .align_x(Horizontal::Center)
        .push(title)
        .push(text)
        .push(actions);

    Container::new(Container::new(block).padding(spacing::XL).style(styles::container::scrim))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn arrows<'a>(i18n: &I18n) -> Element<'a, Message> {
    let arrow = |glyph: &'static str, label: String, message: Message| {
        let control = button(Text::new(glyph).size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button_overlay(palette::WHITE, 0.2, 0.5))
            .on_press(message);
        tooltip(
            control,
            Container::new(Text::new(label).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(styles::overlay::indicator(radius::SM)),
            tooltip::Position::Bottom,
        )
    };

    let previous = arrow("◀", i18n.tr("hero-previous"), Message::Previous);
    let next = arrow("▶", i18n.tr("hero-next"), Message::Next);

    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(Container::new(previous).width(Length::Fill).align_x(Horizontal::Left))
        .push(Container::new(next).width(Length::Fill).align_x(Horizontal::Right))
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scene = ctx.scene;

    let dots = (0..scene.len()).fold(Row::new().spacing(spacing::SM), |row, index| {
        let selected = scene
            .slide(index)
            .is_some_and(|slide| slide.indicator_selected);
        let focused = ctx.focus == HeroFocus::Indicator(index)
            && scene.focusable_indicator() == Some(index);
        row.push(
            button(Text::new(""))
                .width(Length::Fixed(sizing::INDICATOR_DOT))
                .height(Length::Fixed(sizing::INDICATOR_DOT))
                .padding(0)
                .style(styles::button::indicator(selected, focused))
                .on_press(Message::Indicator(index)),
        )
    });

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(dots);

    if let Some(text) = live_region_text(ctx.i18n, scene) {
        content = content.push(
            Container::new(Text::new(text).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(radius::SM)),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}
