use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{InputEvent, Key, MouseButton, TextEvent};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys/buttons, pointer position).
/// `InputFrame` provides events and transition sets for the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,

    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,

    /// Text committed this frame.
    pub text: Vec<TextEvent>,

    /// Wheel movement in lines, summed over the frame.
    pub wheel_lines: Vec2,
    /// Wheel movement in pixels, summed over the frame.
    pub wheel_pixels: Vec2,

    /// Pointer travel since the previous frame.
    pub pointer_delta: Vec2,

    /// New surface size if the host resized this frame.
    pub surface_resized: Option<Vec2>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.text.clear();
        self.wheel_lines = Vec2::zero();
        self.wheel_pixels = Vec2::zero();
        self.pointer_delta = Vec2::zero();
        self.surface_resized = None;
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn button_pressed(&self, btn: MouseButton) -> bool {
        self.buttons_pressed.contains(&btn)
    }

    pub fn button_released(&self, btn: MouseButton) -> bool {
        self.buttons_released.contains(&btn)
    }

    /// Key presses including auto-repeat, in arrival order.
    pub fn key_presses(&self) -> impl Iterator<Item = (Key, super::Modifiers)> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::Key { key, state: super::KeyState::Pressed, modifiers, .. } => {
                Some((*key, *modifiers))
            }
            _ => None,
        })
    }
}
