use core::convert::Infallible;

use dsfolio_core::input::{ButtonId, InputProvider};
use embedded_graphics_simulator::sdl2::Keycode;
use heapless::Deque;
use log::warn;

const QUEUE_DEPTH: usize = 32;

/// Key presses queued between frames.
pub(super) struct KeyboardInput {
    queue: Deque<ButtonId, QUEUE_DEPTH>,
}

impl KeyboardInput {
    pub(super) const fn new() -> Self {
        Self {
            queue: Deque::new(),
        }
    }

    pub(super) fn press(&mut self, button: ButtonId) {
        if self.queue.push_back(button).is_err() {
            warn!("input: queue full, dropped {}", button);
        }
    }

    /// Queues presses from comma-separated button labels such as `A,D_RIGHT`.
    /// Unknown labels are logged and skipped.
    pub(super) fn queue_script(&mut self, script: &str) {
        for label in script.split(',').map(str::trim).filter(|label| !label.is_empty()) {
            match label.parse::<ButtonId>() {
                Ok(button) => self.press(button),
                Err(err) => warn!("input: {} {:?}, skipped", err, label),
            }
        }
    }
}

impl InputProvider for KeyboardInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<ButtonId>, Self::Error> {
        Ok(self.queue.pop_front())
    }
}

pub(super) fn map_keycode(keycode: Keycode) -> Option<ButtonId> {
    let button = match keycode {
        Keycode::Z | Keycode::Return => ButtonId::A,
        Keycode::X | Keycode::Backspace => ButtonId::B,
        Keycode::S => ButtonId::X,
        Keycode::A => ButtonId::Y,
        Keycode::Up => ButtonId::Up,
        Keycode::Down => ButtonId::Down,
        Keycode::Left => ButtonId::Left,
        Keycode::Right => ButtonId::Right,
        Keycode::Space => ButtonId::Start,
        Keycode::Tab => ButtonId::Select,
        _ => return None,
    };

    Some(button)
}
