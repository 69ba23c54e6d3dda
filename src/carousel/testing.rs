// SPDX-License-Identifier: MPL-2.0
//! Recording view used by the carousel unit tests.

use super::view::SlideView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Call {
    Displayed(usize, bool),
    Opacity(usize, f32),
    ContentVisible(usize, bool),
    Active(usize, bool),
    Leaving(usize, bool),
    Hidden(usize, bool),
    Indicator(usize, bool, bool),
    Height(usize, f32),
    FlushLayout,
    Announce(usize, usize),
    ContainerFocusable,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SlideRecord {
    pub displayed: bool,
    pub opacity: f32,
    pub content_visible: bool,
    pub active: bool,
    pub leaving: bool,
    pub hidden: bool,
    pub selected: bool,
    pub focusable: bool,
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingView {
    pub slides: Vec<SlideRecord>,
    pub calls: Vec<Call>,
}

impl RecordingView {
    pub fn new(count: usize) -> Self {
        Self {
            slides: vec![SlideRecord::default(); count],
            calls: Vec::new(),
        }
    }

    pub fn active_slides(&self) -> Vec<usize> {
        self.indices(|slide| slide.active)
    }

    pub fn selected_indicators(&self) -> Vec<usize> {
        self.indices(|slide| slide.selected)
    }

    pub fn displayed_slides(&self) -> Vec<usize> {
        self.indices(|slide| slide.displayed)
    }

    pub fn accessibility_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    Call::Hidden(..) | Call::Indicator(..) | Call::Announce(..)
                )
            })
            .count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn indices(&self, pred: impl Fn(&SlideRecord) -> bool) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| pred(slide))
            .map(|(index, _)| index)
            .collect()
    }
}

impl SlideView for RecordingView {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_displayed(&mut self, index: usize, displayed: bool) {
        self.slides[index].displayed = displayed;
        self.calls.push(Call::Displayed(index, displayed));
    }

    fn set_opacity(&mut self, index: usize, opacity: f32) {
        self.slides[index].opacity = opacity;
        self.calls.push(Call::Opacity(index, opacity));
    }

    fn set_content_visible(&mut self, index: usize, visible: bool) {
        self.slides[index].content_visible = visible;
        self.calls.push(Call::ContentVisible(index, visible));
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.slides[index].active = active;
        self.calls.push(Call::Active(index, active));
    }

    fn set_leaving(&mut self, index: usize, leaving: bool) {
        self.slides[index].leaving = leaving;
        self.calls.push(Call::Leaving(index, leaving));
    }

    fn set_slide_hidden(&mut self, index: usize, hidden: bool) {
        self.slides[index].hidden = hidden;
        self.calls.push(Call::Hidden(index, hidden));
    }

    fn set_indicator(&mut self, index: usize, selected: bool, focusable: bool) {
        self.slides[index].selected = selected;
        self.slides[index].focusable = focusable;
        self.calls.push(Call::Indicator(index, selected, focusable));
    }

    fn set_slide_height(&mut self, index: usize, height: f32) {
        self.slides[index].height = Some(height);
        self.calls.push(Call::Height(index, height));
    }

    fn flush_layout(&mut self) {
        self.calls.push(Call::FlushLayout);
    }

    fn announce(&mut self, position: usize, total: usize) {
        self.calls.push(Call::Announce(position, total));
    }

    fn set_container_focusable(&mut self) {
        self.calls.push(Call::ContainerFocusable);
    }
}
