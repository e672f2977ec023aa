use hades_engine::coords::{Rect, Viewport};

use crate::theme::Theme;

/// Construction-time settings for a [`Gui`](crate::Gui).
#[derive(Debug, Clone)]
pub struct GuiConfig {
    /// Host surface size in logical pixels.
    pub surface: Viewport,
    pub theme: Theme,
    /// Rect given to the first window created without an explicit position.
    pub default_window_rect: Rect,
    /// Horizontal gap added after each auto-placed window.
    pub cascade_step: f32,
    /// Pixels scrolled per wheel line.
    pub wheel_line_height: f32,
}

impl GuiConfig {
    pub fn new(surface: Viewport) -> Self {
        Self {
            surface,
            theme: Theme::default(),
            default_window_rect: Rect::new(50.0, 50.0, 300.0, 300.0),
            cascade_step: 40.0,
            wheel_line_height: 20.0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_default_window_rect(mut self, rect: Rect) -> Self {
        self.default_window_rect = rect;
        self
    }

    pub fn with_cascade_step(mut self, step: f32) -> Self {
        self.cascade_step = step;
        self
    }

    pub fn with_wheel_line_height(mut self, px: f32) -> Self {
        self.wheel_line_height = px;
        self
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self::new(Viewport::new(1280.0, 720.0))
    }
}
