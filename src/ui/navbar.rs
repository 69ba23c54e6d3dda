// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! The bar shows the brand and one link per page section. On narrow windows
//! the links collapse behind a menu toggle; its open state lives in
//! [`MobileMenu`].

use crate::i18n::fluent::I18n;
use crate::site::{Anchor, MobileMenu, NavPlacement};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub placement: NavPlacement,
    pub menu: MobileMenu,
    /// Whether the window is at or below the mobile breakpoint.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LinkPressed(Anchor),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ScrollTo(Anchor),
}

/// Process a navbar message and return the corresponding event.
pub fn update(
    message: Message,
    menu: &mut MobileMenu,
    viewport_width: f32,
    mobile_breakpoint: f32,
) -> Event {
    match message {
        Message::ToggleMenu => {
            menu.toggle();
            Event::None
        }
        Message::LinkPressed(anchor) => {
            menu.link_activated(viewport_width, mobile_breakpoint);
            Event::ScrollTo(anchor)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu.is_open() {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::nav_bar(ctx.placement))
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand")).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::LG])
        .height(Length::Fixed(sizing::NAV_HEIGHT))
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill));

    if ctx.compact {
        row = row.push(
            button(Text::new(ctx.i18n.tr("nav-menu-toggle")))
                .on_press(Message::ToggleMenu)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::menu_toggle(ctx.menu.is_open())),
        );
    } else {
        for anchor in Anchor::ALL {
            row = row.push(build_link(ctx.i18n, anchor));
        }
    }

    row.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = Anchor::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, anchor| {
            column.push(build_link(ctx.i18n, anchor))
        });

    Container::new(links)
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Right)
        .style(styles::container::menu_panel)
        .into()
}

fn build_link<'a>(i18n: &I18n, anchor: Anchor) -> Element<'a, Message> {
    button(Text::new(i18n.tr(anchor.label_key())).size(typography::BODY))
        .on_press(Message::LinkPressed(anchor))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            placement: NavPlacement::Floating,
            menu: MobileMenu::default(),
            compact: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let mut menu = MobileMenu::default();
        menu.toggle();
        let ctx = ViewContext {
            i18n: &i18n,
            placement: NavPlacement::Pinned,
            menu,
            compact: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu = MobileMenu::default();
        let event = update(Message::ToggleMenu, &mut menu, 500.0, 767.0);
        assert!(menu.is_open());
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu, 500.0, 767.0);
        assert!(!menu.is_open());
        assert_eq!(event, Event::None);
    }

    #[test]
    fn link_scrolls_and_closes_menu_on_narrow_window() {
        let mut menu = MobileMenu::default();
        menu.toggle();

        let event = update(Message::LinkPressed(Anchor::About), &mut menu, 500.0, 767.0);

        assert!(!menu.is_open());
        assert_eq!(event, Event::ScrollTo(Anchor::About));
    }

    #[test]
    fn link_keeps_menu_on_wide_window() {
        let mut menu = MobileMenu::default();
        menu.toggle();

        let event = update(Message::LinkPressed(Anchor::Contact), &mut menu, 1024.0, 767.0);

        assert!(menu.is_open());
        assert_eq!(event, Event::ScrollTo(Anchor::Contact));
    }
}
