// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler receives an [`UpdateContext`] borrowing the pieces of state
//! it may touch, plus the instant the message is processed at. Carousel
//! operations always see the scene clock advanced to that instant first.

use super::page::PageState;
use super::view::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::carousel::preload::PreloadedSlide;
use crate::carousel::{Input, InputOutcome, Key, SlideshowController};
use crate::site::Anchor;
use crate::testimonial::TestimonialCarousel;
use crate::ui::hero::{self, HeroFocus, HeroScene};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::testimonials;
use iced::keyboard::{self, key::Named};
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{mouse, touch, window, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub hero: &'a mut Option<SlideshowController<HeroScene>>,
    pub hero_focus: &'a mut HeroFocus,
    pub testimonials: &'a mut TestimonialCarousel,
    pub page: &'a mut PageState,
    pub now: Instant,
}

/// Feeds one input to the hero carousel, if there is one.
fn hero_input(ctx: &mut UpdateContext<'_>, input: Input) -> InputOutcome {
    let Some(hero) = ctx.hero.as_mut() else {
        return InputOutcome::default();
    };
    hero.view_mut().set_clock(ctx.now);
    hero.handle_input(input, ctx.now)
}

/// Moves keyboard focus, notifying the carousel when focus enters or leaves
/// the hero.
pub fn set_hero_focus(ctx: &mut UpdateContext<'_>, focus: HeroFocus) {
    let was_inside = ctx.hero_focus.is_inside();
    *ctx.hero_focus = focus;

    match (was_inside, focus.is_inside()) {
        (false, true) => {
            hero_input(ctx, Input::FocusGained);
        }
        (true, false) => {
            hero_input(ctx, Input::FocusLost);
        }
        _ => {}
    }
}

/// Handles messages from the hero view.
pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match message {
        hero::Message::Previous => {
            hero_input(ctx, Input::PreviousPressed);
        }
        hero::Message::Next => {
            hero_input(ctx, Input::NextPressed);
        }
        hero::Message::Indicator(index) => {
            hero_input(ctx, Input::IndicatorPressed(index));
        }
        hero::Message::PointerEntered => {
            hero_input(ctx, Input::PointerEntered);
        }
        hero::Message::PointerLeft => {
            hero_input(ctx, Input::PointerLeft);
        }
        hero::Message::Pressed => {
            if !ctx.hero_focus.is_inside() {
                set_hero_focus(ctx, HeroFocus::Container);
            }
        }
        hero::Message::CallToAction(anchor) => return scroll_to_anchor(ctx, anchor),
    }
    Task::none()
}

/// Handles messages from the testimonial strip.
pub fn handle_testimonials_message(
    ctx: &mut UpdateContext<'_>,
    message: testimonials::Message,
) -> Task<Message> {
    testimonials::update(message, ctx.testimonials, ctx.now);
    Task::none()
}

/// Handles messages from the navigation bar.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    let event = navbar::update(
        message,
        &mut ctx.page.menu,
        ctx.page.window_size.width,
        ctx.page.mobile_breakpoint,
    );

    match event {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(anchor) => scroll_to_anchor(ctx, anchor),
    }
}

/// Starts an eased scroll to `anchor`. The scroll itself is driven by ticks.
pub fn scroll_to_anchor(ctx: &mut UpdateContext<'_>, anchor: Anchor) -> Task<Message> {
    log::debug!("scrolling to {}", anchor.fragment());
    ctx.page.scroll_to(anchor, ctx.now);
    Task::none()
}

/// Records the page scroll offset reported by the scrollable.
pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, viewport: Viewport) -> Task<Message> {
    ctx.page.set_scroll_offset(viewport.absolute_offset().y);
    Task::none()
}

/// Installs a freshly loaded slide background.
pub fn handle_slide_preloaded(
    ctx: &mut UpdateContext<'_>,
    loaded: Option<PreloadedSlide>,
) -> Task<Message> {
    if let (Some(hero), Some(loaded)) = (ctx.hero.as_mut(), loaded) {
        hero.view_mut().set_image(loaded.index, loaded.image.handle);
    }
    Task::none()
}

/// Advances every time-driven piece of state to `ctx.now`.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(hero) = ctx.hero.as_mut() {
        hero.view_mut().set_clock(ctx.now);
        hero.tick(ctx.now);
    }

    ctx.testimonials.tick(ctx.now);

    match ctx.page.advance_scroll(ctx.now) {
        Some(y) => operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y }),
        None => Task::none(),
    }
}

/// Handles native events forwarded by the event subscription.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    _window: window::Id,
    event: iced::Event,
) -> Task<Message> {
    match event {
        iced::Event::Window(window::Event::Resized(size)) => {
            ctx.page.window_size = size;
            hero_input(
                ctx,
                Input::Resized {
                    height: size.height,
                },
            );
        }
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            handle_key_pressed(ctx, &key, modifiers);
        }
        iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            if ctx.page.is_over_hero(position.y) {
                hero_input(ctx, Input::TouchStart { x: position.x });
            }
        }
        iced::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            hero_input(ctx, Input::TouchEnd { x: position.x });
        }
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            // Clicks inside the hero are captured by its mouse area
            set_hero_focus(ctx, HeroFocus::None);
        }
        _ => {}
    }
    Task::none()
}

fn handle_key_pressed(
    ctx: &mut UpdateContext<'_>,
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
) {
    match key {
        keyboard::Key::Named(Named::Tab) => {
            let next = next_focus(ctx, modifiers.shift());
            set_hero_focus(ctx, next);
        }
        keyboard::Key::Named(Named::Escape) => {
            ctx.page.menu.close();
            set_hero_focus(ctx, HeroFocus::None);
        }
        _ => {
            let key = carousel_key(key);
            let input = match *ctx.hero_focus {
                HeroFocus::None => return,
                HeroFocus::Container => Input::Key(key),
                HeroFocus::Indicator(index) => match key {
                    Key::Enter | Key::Space => Input::IndicatorKey { index, key },
                    // Arrow keys bubble up to the carousel container
                    _ => Input::Key(key),
                },
            };
            let outcome = hero_input(ctx, input);
            if outcome.prevent_default {
                log::trace!("hero consumed {key:?}");
            }
        }
    }
}

/// Focus target after a Tab (or Shift+Tab) press.
///
/// The focus order is the hero container, then its single focusable
/// indicator, then out of the hero.
fn next_focus(ctx: &UpdateContext<'_>, backwards: bool) -> HeroFocus {
    let Some(hero) = ctx.hero.as_ref() else {
        return HeroFocus::None;
    };
    let scene = hero.view();
    let mut stops = vec![HeroFocus::None];
    if scene.container_focusable() {
        stops.push(HeroFocus::Container);
    }
    if let Some(index) = scene.focusable_indicator() {
        stops.push(HeroFocus::Indicator(index));
    }

    let position = stops
        .iter()
        .position(|focus| *focus == *ctx.hero_focus)
        .unwrap_or(0);
    let len = stops.len();
    let next = if backwards {
        (position + len - 1) % len
    } else {
        (position + 1) % len
    };
    stops[next]
}

/// Maps an iced key onto the keys the carousel understands.
pub fn carousel_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::Home) => Key::Home,
        keyboard::Key::Named(Named::End) => Key::End,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Space) => Key::Space,
        keyboard::Key::Character(c) if c.as_str() == " " => Key::Space,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselTiming;
    use crate::config::Config;
    use crate::domain::carousel::TestimonialInterval;
    use iced::Size;

    struct Harness {
        hero: Option<SlideshowController<HeroScene>>,
        hero_focus: HeroFocus,
        testimonials: TestimonialCarousel,
        page: PageState,
    }

    impl Harness {
        fn new(now: Instant) -> Self {
            let timing = CarouselTiming::default();
            let scene = HeroScene::new(3, timing.fade_duration(), now);
            let mut hero = SlideshowController::new(scene, timing).expect("three slides");
            hero.start(now);
            Self {
                hero: Some(hero),
                hero_focus: HeroFocus::None,
                testimonials: TestimonialCarousel::new(3, TestimonialInterval::default()),
                page: PageState::new(Size::new(1_024.0, 700.0), &Config::default()),
            }
        }

        fn ctx(&mut self, now: Instant) -> UpdateContext<'_> {
            UpdateContext {
                hero: &mut self.hero,
                hero_focus: &mut self.hero_focus,
                testimonials: &mut self.testimonials,
                page: &mut self.page,
                now,
            }
        }

        fn hero(&self) -> &SlideshowController<HeroScene> {
            self.hero.as_ref().expect("hero present")
        }
    }

    fn key_event(key: keyboard::Key, modifiers: keyboard::Modifiers) -> iced::Event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key.clone(),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn named_keys_map_to_carousel_keys() {
        assert_eq!(carousel_key(&keyboard::Key::Named(Named::ArrowLeft)), Key::ArrowLeft);
        assert_eq!(carousel_key(&keyboard::Key::Named(Named::End)), Key::End);
        assert_eq!(carousel_key(&keyboard::Key::Named(Named::Space)), Key::Space);
        assert_eq!(carousel_key(&keyboard::Key::Character(" ".into())), Key::Space);
        assert_eq!(carousel_key(&keyboard::Key::Character("a".into())), Key::Other);
    }

    #[test]
    fn next_button_starts_transition() {
        let now = Instant::now();
        let mut harness = Harness::new(now);
        let _ = handle_hero_message(&mut harness.ctx(now), hero::Message::Next);

        assert_eq!(harness.hero().current_slide(), 1);
        assert!(harness.hero().is_transitioning());
    }

    #[test]
    fn arrow_keys_ignored_without_focus() {
        let now = Instant::now();
        let mut harness = Harness::new(now);
        let event = key_event(
            keyboard::Key::Named(Named::ArrowRight),
            keyboard::Modifiers::default(),
        );
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), event);

        assert_eq!(harness.hero().current_slide(), 0);
    }

    #[test]
    fn click_focuses_hero_and_pauses_auto_advance() {
        let now = Instant::now();
        let mut harness = Harness::new(now);
        let _ = handle_hero_message(&mut harness.ctx(now), hero::Message::Pressed);

        assert_eq!(harness.hero_focus, HeroFocus::Container);
        assert!(!harness.hero().has_pending_auto_advance());

        let event = key_event(
            keyboard::Key::Named(Named::End),
            keyboard::Modifiers::default(),
        );
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), event);
        assert_eq!(harness.hero().current_slide(), 2);
    }

    #[test]
    fn escape_releases_focus_and_resumes() {
        let now = Instant::now();
        let mut harness = Harness::new(now);
        set_hero_focus(&mut harness.ctx(now), HeroFocus::Container);
        assert!(!harness.hero().has_pending_auto_advance());

        let event = key_event(
            keyboard::Key::Named(Named::Escape),
            keyboard::Modifiers::default(),
        );
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), event);

        assert_eq!(harness.hero_focus, HeroFocus::None);
        assert!(harness.hero().has_pending_auto_advance());
    }

    #[test]
    fn tab_walks_container_then_indicator_then_out() {
        let now = Instant::now();
        let mut harness = Harness::new(now);
        let tab = || key_event(keyboard::Key::Named(Named::Tab), keyboard::Modifiers::default());

        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), tab());
        assert_eq!(harness.hero_focus, HeroFocus::Container);
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), tab());
        assert_eq!(harness.hero_focus, HeroFocus::Indicator(0));
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), tab());
        assert_eq!(harness.hero_focus, HeroFocus::None);

        let shift_tab = key_event(keyboard::Key::Named(Named::Tab), keyboard::Modifiers::SHIFT);
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), shift_tab);
        assert_eq!(harness.hero_focus, HeroFocus::Indicator(0));
    }

    #[test]
    fn tick_fires_auto_advance() {
        let now = Instant::now();
        let mut harness = Harness::new(now);
        let due = now + harness.hero().timing().visible_duration();

        let _ = handle_tick(&mut harness.ctx(due));
        assert_eq!(harness.hero().current_slide(), 1);
    }

    #[test]
    fn navbar_link_starts_anchor_scroll() {
        let now = Instant::now();
        let mut harness = Harness::new(now);
        let _ = handle_navbar_message(
            &mut harness.ctx(now),
            navbar::Message::LinkPressed(Anchor::Contact),
        );
        assert!(harness.page.is_scrolling());
    }

    #[test]
    fn touch_outside_hero_is_ignored() {
        let now = Instant::now();
        let mut harness = Harness::new(now);
        harness.page.set_scroll_offset(650.0);

        let press = iced::Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: iced::Point::new(300.0, 200.0),
        });
        let lift = iced::Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(0),
            position: iced::Point::new(100.0, 200.0),
        });
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), press);
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), lift);

        assert_eq!(harness.hero().current_slide(), 0);
    }

    #[test]
    fn swipe_over_hero_advances() {
        let now = Instant::now();
        let mut harness = Harness::new(now);

        let press = iced::Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: iced::Point::new(300.0, 200.0),
        });
        let lift = iced::Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(0),
            position: iced::Point::new(100.0, 200.0),
        });
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), press);
        let _ = handle_raw_event(&mut harness.ctx(now), window::Id::unique(), lift);

        assert_eq!(harness.hero().current_slide(), 1);
    }
}
