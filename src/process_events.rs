use raylib::prelude::*;

use crate::core::input::{Direction, InputEvent};

fn key_for(d: Direction) -> KeyboardKey {
    match d {
        Direction::Left => KeyboardKey::KEY_LEFT,
        Direction::Right => KeyboardKey::KEY_RIGHT,
        Direction::Up => KeyboardKey::KEY_UP,
        Direction::Down => KeyboardKey::KEY_DOWN,
    }
}

/// Arrow key presses/releases since the last frame, plus `Quit` when the window is closing.
pub fn process_events(window: &RaylibHandle) -> Vec<InputEvent> {
    let mut events = Vec::new();
    for d in Direction::ALL {
        let key = key_for(d);
        if window.is_key_pressed(key) {
            events.push(InputEvent::KeyDown(d));
        }
        if window.is_key_released(key) {
            events.push(InputEvent::KeyUp(d));
        }
    }
    if window.window_should_close() {
        events.push(InputEvent::Quit);
    }
    events
}
