// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are filtered down to what the page reacts to (keys, touch,
//! clicks outside widgets and window resizes) and forwarded as
//! [`Message::RawEvent`].

use super::Message;
use iced::{event, keyboard, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Tick period while something animates.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick period while only waiting on a deadline.
pub const IDLE_TICK: Duration = Duration::from_millis(100);

/// Creates the native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let forward = match &event {
            // Resizes are always relevant, whoever handled them
            event::Event::Window(window::Event::Resized(_)) => true,
            event::Event::Touch(
                touch::Event::FingerPressed { .. } | touch::Event::FingerLifted { .. },
            ) => true,
            event::Event::Keyboard(keyboard::Event::KeyPressed { .. })
            | event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                status == event::Status::Ignored
            }
            _ => false,
        };

        forward.then(|| Message::RawEvent {
            window: window_id,
            event: event.clone(),
        })
    })
}

/// Creates the periodic tick driving carousel deadlines, fades and anchor
/// scrolling.
pub fn create_tick_subscription(animating: bool, waiting: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if waiting {
        time::every(IDLE_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
