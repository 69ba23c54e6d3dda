// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one vertical scrollable (hero, about, testimonials, contact)
//! with the navigation bar stacked on top of it.

use super::page::PageState;
use super::Message;
use crate::carousel::SlideshowController;
use crate::i18n::fluent::I18n;
use crate::testimonial::TestimonialCarousel;
use crate::ui::design_tokens::palette;
use crate::ui::hero::{self, HeroFocus, HeroScene, ViewContext as HeroViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections;
use crate::ui::styles;
use crate::ui::testimonials::{self, ViewContext as TestimonialsViewContext};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length, Padding};

/// Widget id of the page scrollable, targeted by anchor scrolling.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hero: Option<&'a SlideshowController<HeroScene>>,
    pub hero_focus: HeroFocus,
    pub testimonials: &'a TestimonialCarousel,
    pub page: &'a PageState,
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .push(view_hero(&ctx))
        .push(sections::about(ctx.i18n))
        .push(
            testimonials::view(TestimonialsViewContext {
                i18n: ctx.i18n,
                carousel: ctx.testimonials,
            })
            .map(Message::Testimonials),
        )
        .push(sections::contact(ctx.i18n));

    let page = Scrollable::new(content)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::default()))
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport));

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        placement: ctx.page.placement,
        menu: ctx.page.menu,
        compact: ctx.page.is_compact(),
    })
    .map(Message::Navbar);

    let navbar_layer = Container::new(navbar_view)
        .width(Length::Fill)
        .padding(Padding::default().top(ctx.page.placement.top()));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(navbar_layer)
        .into()
}

fn view_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.hero {
        Some(hero) => hero::view(HeroViewContext {
            i18n: ctx.i18n,
            scene: hero.view(),
            focus: ctx.hero_focus,
        })
        .map(Message::Hero),
        // Without slides the hero keeps its place as a plain dark band
        None => Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fixed(ctx.page.window_size.height))
            .style(styles::container::section(palette::GRAY_900))
            .into(),
    }
}
