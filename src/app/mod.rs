// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the landing page.
//!
//! The `App` struct wires together the hero carousel, the testimonial strip,
//! the navigation bar and localization, and routes messages to the handlers
//! in [`update`].

mod message;
pub mod page;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::PAGE_SCROLLABLE_ID;

use crate::carousel::{preload, CarouselTiming, SlideshowController};
use crate::config::{self, Config};
use crate::domain::carousel::TestimonialInterval;
use crate::i18n::fluent::I18n;
use crate::testimonial::TestimonialCarousel;
use crate::ui::hero::{HeroFocus, HeroScene};
use crate::ui::testimonials::TESTIMONIAL_COUNT;
use iced::{window, Element, Subscription, Task, Theme};
use page::PageState;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// `None` when no slide images are configured.
    hero: Option<SlideshowController<HeroScene>>,
    hero_focus: HeroFocus,
    testimonials: TestimonialCarousel,
    page: PageState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("hero_slide", &self.hero.as_ref().map(|h| h.current_slide()))
            .field("hero_focus", &self.hero_focus)
            .field("testimonial", &self.testimonials.current())
            .field("scroll_offset", &self.page.scroll_offset)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration from disk and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app, task) = Self::from_config(flags, &config, Instant::now());

        if let Some(key) = config_warning {
            log::warn!("{}", app.i18n.tr(&key));
        }

        (app, task)
    }

    /// Builds the initial state from an already loaded configuration and
    /// starts preloading every slide image.
    pub fn from_config(flags: Flags, config: &Config, now: Instant) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let window_size = window_settings().size;

        let sources: Vec<PathBuf> = if flags.images.is_empty() {
            config.hero.images.clone()
        } else {
            flags.images
        };

        let timing = CarouselTiming::from_config(&config.hero);
        let scene = HeroScene::new(sources.len(), timing.fade_duration(), now);
        let hero = match SlideshowController::new(scene, timing) {
            Ok(mut hero) => {
                hero.start(now);
                hero.resize(window_size.height);
                Some(hero)
            }
            Err(err) => {
                log::warn!("hero carousel disabled: {err}");
                None
            }
        };

        let interval = TestimonialInterval::new(
            config
                .testimonials
                .interval_ms
                .unwrap_or(config::DEFAULT_TESTIMONIAL_INTERVAL_MS),
        );
        let mut testimonials = TestimonialCarousel::new(TESTIMONIAL_COUNT, interval);
        testimonials.start(now);

        let task = if hero.is_some() {
            preload::preload_all(&sources, Message::SlidePreloaded)
        } else {
            Task::none()
        };

        let app = App {
            i18n,
            hero,
            hero_focus: HeroFocus::None,
            testimonials,
            page: PageState::new(window_size, config),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let hero_animating = self
            .hero
            .as_ref()
            .is_some_and(|hero| hero.view().is_animating());
        let hero_waiting = self
            .hero
            .as_ref()
            .is_some_and(|hero| hero.next_deadline().is_some());

        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            hero_animating || self.page.is_scrolling(),
            hero_waiting || self.testimonials.next_deadline().is_some(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// Processes `message` as if it arrived at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            hero: &mut self.hero,
            hero_focus: &mut self.hero_focus,
            testimonials: &mut self.testimonials,
            page: &mut self.page,
            now,
        };

        match message {
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Testimonials(testimonials_message) => {
                update::handle_testimonials_message(&mut ctx, testimonials_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::PageScrolled(viewport) => update::handle_page_scrolled(&mut ctx, viewport),
            Message::SlidePreloaded(loaded) => update::handle_slide_preloaded(&mut ctx, loaded),
            Message::RawEvent { window, event } => {
                update::handle_raw_event(&mut ctx, window, event)
            }
            Message::Tick(instant) => {
                ctx.now = instant;
                update::handle_tick(&mut ctx)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            hero: self.hero.as_ref(),
            hero_focus: self.hero_focus,
            testimonials: &self.testimonials,
            page: &self.page,
        })
    }

    /// Hero carousel, if slides are configured.
    #[must_use]
    pub fn hero(&self) -> Option<&SlideshowController<HeroScene>> {
        self.hero.as_ref()
    }

    #[must_use]
    pub fn testimonials(&self) -> &TestimonialCarousel {
        &self.testimonials
    }

    #[must_use]
    pub fn page(&self) -> &PageState {
        &self.page
    }
}
