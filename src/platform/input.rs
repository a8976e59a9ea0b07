//! Input polling
//!
//! macroquad exposes instantaneous state; the game wants events. Pointer
//! motion is detected by comparing against the previous frame's position.

use glam::Vec2;
use macroquad::input::{KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, mouse_position};

use crate::sim::TickInput;

const FIRE_BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Turns per-frame input state into tick commands
#[derive(Debug, Default)]
pub struct InputPoller {
    last_pointer: Option<Vec2>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge this frame's input into `input`. One-shot flags stay set until
    /// the frame loop clears them after a tick consumes them.
    pub fn poll(&mut self, input: &mut TickInput, now_ms: u64) {
        let pointer = Self::pointer();
        if let Some(moved) = self.motion(pointer) {
            input.pointer = Some(moved);
        }
        if is_key_pressed(KeyCode::Space) || FIRE_BUTTONS.into_iter().any(is_mouse_button_pressed) {
            input.fire = true;
        }
        input.now_ms = now_ms;
    }

    /// New pointer position if it differs from the last one seen.
    /// The first sample only primes the tracker.
    pub fn motion(&mut self, pointer: Vec2) -> Option<Vec2> {
        let previous = self.last_pointer.replace(pointer);
        match previous {
            Some(prev) if prev != pointer => Some(pointer),
            _ => None,
        }
    }

    /// Current pointer position in canvas coordinates
    pub fn pointer() -> Vec2 {
        let (x, y) = mouse_position();
        Vec2::new(x, y)
    }

    /// Left-button press this frame (restart button)
    pub fn clicked() -> bool {
        is_mouse_button_pressed(MouseButton::Left)
    }
}
