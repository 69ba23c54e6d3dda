// SPDX-License-Identifier: MPL-2.0
//! Input adapters.
//!
//! Every raw input the carousel listens to is translated into exactly one
//! [`Command`]. Hover and focus toggle the auto-advance; everything else
//! navigates.

use crate::domain::carousel::SwipeThreshold;

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Other,
}

/// Raw inputs delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Previous control activated.
    PreviousPressed,
    /// Next control activated.
    NextPressed,
    /// Indicator dot clicked.
    IndicatorPressed(usize),
    /// Key pressed while an indicator dot has focus.
    IndicatorKey { index: usize, key: Key },
    /// Key pressed while the carousel container has focus.
    Key(Key),
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    PointerEntered,
    PointerLeft,
    FocusGained,
    FocusLost,
    Resized { height: f32 },
}

/// The operation an input maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    Pause,
    Resume,
    Resize(f32),
}

/// Result of translating one input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputOutcome {
    pub command: Option<Command>,
    /// The host must suppress its default action for this input
    /// (page scroll on arrows/Home/End, button activation on Enter/Space).
    pub prevent_default: bool,
}

impl InputOutcome {
    fn command(command: Command) -> Self {
        Self {
            command: Some(command),
            prevent_default: false,
        }
    }

    fn consumed(command: Command) -> Self {
        Self {
            command: Some(command),
            prevent_default: true,
        }
    }
}

/// Horizontal swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide.
    Left,
    /// Finger moved right: show the previous slide.
    Right,
}

/// Tracks the start of a touch gesture until it ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    threshold: SwipeThreshold,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture and classifies it.
    ///
    /// A travel of exactly the threshold is not a swipe. An end without a
    /// recorded start is ignored.
    pub fn finish(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let threshold = self.threshold.value();
        if x < start - threshold {
            Some(SwipeDirection::Left)
        } else if x > start + threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

/// Maps an input onto a command.
///
/// `slide_count` is needed to resolve `End`; it is never zero for a
/// constructed controller.
pub fn translate(input: Input, swipe: &mut SwipeTracker, slide_count: usize) -> InputOutcome {
    match input {
        Input::PreviousPressed => InputOutcome::command(Command::Previous),
        Input::NextPressed => InputOutcome::command(Command::Next),
        Input::IndicatorPressed(index) => InputOutcome::command(Command::GoTo(index)),
        Input::IndicatorKey { index, key } => match key {
            Key::Enter | Key::Space => InputOutcome::consumed(Command::GoTo(index)),
            _ => InputOutcome::default(),
        },
        Input::Key(key) => match key {
            Key::ArrowLeft => InputOutcome::consumed(Command::Previous),
            Key::ArrowRight => InputOutcome::consumed(Command::Next),
            Key::Home => InputOutcome::consumed(Command::GoTo(0)),
            Key::End => InputOutcome::consumed(Command::GoTo(slide_count.saturating_sub(1))),
            Key::Enter | Key::Space | Key::Other => InputOutcome::default(),
        },
        Input::TouchStart { x } => {
            swipe.begin(x);
            InputOutcome::default()
        }
        Input::TouchEnd { x } => match swipe.finish(x) {
            Some(SwipeDirection::Left) => InputOutcome::command(Command::Next),
            Some(SwipeDirection::Right) => InputOutcome::command(Command::Previous),
            None => InputOutcome::default(),
        },
        Input::PointerEntered | Input::FocusGained => InputOutcome::command(Command::Pause),
        Input::PointerLeft | Input::FocusLost => InputOutcome::command(Command::Resume),
        Input::Resized { height } => InputOutcome::command(Command::Resize(height)),
    }
}
