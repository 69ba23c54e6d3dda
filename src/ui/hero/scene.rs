// SPDX-License-Identifier: MPL-2.0
//! Renderable state of the hero slides.
//!
//! [`HeroScene`] is the [`SlideView`] the application hands to the carousel
//! controller. It stores every flag the controller pushes and turns opacity
//! changes into linear fades over the crossfade duration, evaluated against
//! the scene clock the application advances on each tick.

use crate::carousel::SlideView;
use iced::widget::image::Handle;
use std::time::{Duration, Instant};

/// An in-flight opacity change.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f32,
    started: Instant,
}

/// Everything the view needs to draw one slide.
#[derive(Debug, Clone, Default)]
pub struct SlideVisual {
    pub displayed: bool,
    pub active: bool,
    pub leaving: bool,
    pub content_visible: bool,
    /// Hidden from assistive technology.
    pub hidden: bool,
    pub indicator_selected: bool,
    pub indicator_focusable: bool,
    pub height: Option<f32>,
    pub image: Option<Handle>,
    opacity: f32,
    fade: Option<Fade>,
}

#[derive(Debug, Clone)]
pub struct HeroScene {
    slides: Vec<SlideVisual>,
    fade_duration: Duration,
    clock: Instant,
    live_region: Option<(usize, usize)>,
    container_focusable: bool,
}

impl HeroScene {
    #[must_use]
    pub fn new(slide_count: usize, fade_duration: Duration, now: Instant) -> Self {
        Self {
            slides: vec![SlideVisual::default(); slide_count],
            fade_duration,
            clock: now,
            live_region: None,
            container_focusable: false,
        }
    }

    /// Advances the scene clock. Fades are evaluated against it.
    pub fn set_clock(&mut self, now: Instant) {
        self.clock = now;
        let duration = self.fade_duration;
        for slide in &mut self.slides {
            if let Some(fade) = slide.fade {
                if now.saturating_duration_since(fade.started) >= duration {
                    slide.fade = None;
                }
            }
        }
    }

    #[must_use]
    pub fn clock(&self) -> Instant {
        self.clock
    }

    pub fn set_image(&mut self, index: usize, handle: Handle) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.image = Some(handle);
        }
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&SlideVisual> {
        self.slides.get(index)
    }

    /// Opacity a slide is drawn with at the scene clock.
    #[must_use]
    pub fn rendered_opacity(&self, index: usize) -> f32 {
        let Some(slide) = self.slides.get(index) else {
            return 0.0;
        };
        match slide.fade {
            Some(fade) if !self.fade_duration.is_zero() => {
                let elapsed = self.clock.saturating_duration_since(fade.started);
                let t = (elapsed.as_secs_f32() / self.fade_duration.as_secs_f32()).min(1.0);
                fade.from + (slide.opacity - fade.from) * t
            }
            _ => slide.opacity,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slides.iter().any(|slide| slide.fade.is_some())
    }

    /// Displayed slides in paint order: the leaving slide first so the
    /// incoming one fades in on top of it.
    #[must_use]
    pub fn layers(&self) -> Vec<usize> {
        let mut layers: Vec<usize> = (0..self.slides.len())
            .filter(|&i| self.slides[i].displayed)
            .collect();
        layers.sort_by_key(|&i| !self.slides[i].leaving);
        layers
    }

    /// The slide whose heading and buttons are shown, if any.
    #[must_use]
    pub fn content_slide(&self) -> Option<usize> {
        self.slides.iter().position(|slide| {
            slide.displayed && slide.active && !slide.leaving && slide.content_visible
        })
    }

    /// The only indicator reachable with the keyboard.
    #[must_use]
    pub fn focusable_indicator(&self) -> Option<usize> {
        self.slides
            .iter()
            .position(|slide| slide.indicator_focusable)
    }

    /// `(position, total)` last announced, 1-based.
    #[must_use]
    pub fn live_region(&self) -> Option<(usize, usize)> {
        self.live_region
    }

    #[must_use]
    pub fn container_focusable(&self) -> bool {
        self.container_focusable
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl SlideView for HeroScene {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_displayed(&mut self, index: usize, displayed: bool) {
        self.slides[index].displayed = displayed;
    }

    fn set_opacity(&mut self, index: usize, opacity: f32) {
        let from = self.rendered_opacity(index);
        let slide = &mut self.slides[index];
        let opacity = opacity.clamp(0.0, 1.0);
        if !slide.displayed {
            slide.opacity = opacity;
            slide.fade = None;
            return;
        }
        if (slide.opacity - opacity).abs() <= f32::EPSILON && slide.fade.is_none() {
            return;
        }
        slide.opacity = opacity;
        slide.fade = Some(Fade {
            from,
            started: self.clock,
        });
    }

    fn set_content_visible(&mut self, index: usize, visible: bool) {
        self.slides[index].content_visible = visible;
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.slides[index].active = active;
    }

    fn set_leaving(&mut self, index: usize, leaving: bool) {
        self.slides[index].leaving = leaving;
    }

    fn set_slide_hidden(&mut self, index: usize, hidden: bool) {
        self.slides[index].hidden = hidden;
    }

    fn set_indicator(&mut self, index: usize, selected: bool, focusable: bool) {
        let slide = &mut self.slides[index];
        slide.indicator_selected = selected;
        slide.indicator_focusable = focusable;
    }

    fn set_slide_height(&mut self, index: usize, height: f32) {
        self.slides[index].height = Some(height);
    }

    /// Settles every pending fade at its target so the next opacity change
    /// starts from there.
    fn flush_layout(&mut self) {
        for slide in &mut self.slides {
            slide.fade = None;
        }
    }

    fn announce(&mut self, position: usize, total: usize) {
        self.live_region = Some((position, total));
    }

    fn set_container_focusable(&mut self) {
        self.container_focusable = true;
    }

    fn reset_slide(&mut self, index: usize) {
        let slide = &mut self.slides[index];
        slide.displayed = false;
        slide.active = false;
        slide.leaving = false;
        slide.opacity = 0.0;
        slide.fade = None;
    }
}
