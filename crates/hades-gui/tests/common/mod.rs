//! Scripted frame driver shared by the integration tests.

#![allow(dead_code)]

use hades_gui::prelude::*;
use hades_engine::input::{Key, KeyState, Modifiers, MouseButtonState, MouseWheelDelta};

pub struct Driver {
    pub gui: Gui,
    pub queue: EventQueue,
    frame: u64,
}

impl Driver {
    pub fn new() -> Self {
        Self::with_config(GuiConfig::default())
    }

    pub fn with_config(config: GuiConfig) -> Self {
        Self {
            gui: Gui::new(config, Box::new(MonospaceMetrics::default())),
            queue: EventQueue::new(),
            frame: 0,
        }
    }

    /// Runs one frame with the queued events and `declare` as the UI.
    pub fn frame<R>(&mut self, declare: impl FnOnce(&mut Gui) -> R) -> R {
        self.frame += 1;
        self.gui.new_frame(&mut self.queue, FrameTime::from_dt(1.0 / 60.0, self.frame));
        let out = declare(&mut self.gui);
        let _ = self.gui.end_frame();
        out
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.queue.push(InputEvent::pointer_moved(x, y));
        self
    }

    pub fn press(&mut self, x: f32, y: f32) -> &mut Self {
        self.queue.push(InputEvent::left_button(MouseButtonState::Pressed, x, y));
        self
    }

    pub fn release(&mut self, x: f32, y: f32) -> &mut Self {
        self.queue.push(InputEvent::left_button(MouseButtonState::Released, x, y));
        self
    }

    pub fn click(&mut self, x: f32, y: f32) -> &mut Self {
        self.press(x, y).release(x, y)
    }

    pub fn key(&mut self, key: Key) -> &mut Self {
        self.queue.push(InputEvent::key(key, KeyState::Pressed, Modifiers::NONE));
        self.queue.push(InputEvent::key(key, KeyState::Released, Modifiers::NONE));
        self
    }

    pub fn type_text(&mut self, s: &str) -> &mut Self {
        self.queue.push(InputEvent::text(s));
        self
    }

    pub fn wheel(&mut self, lines: f32) -> &mut Self {
        self.queue.push(InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: lines },
            modifiers: Modifiers::NONE,
        });
        self
    }
}
