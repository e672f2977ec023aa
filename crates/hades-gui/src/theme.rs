//! Visual constants for every widget kind.
//!
//! All sub-themes are `Copy` so widget code can take a snapshot before borrowing
//! the window it draws into.

use hades_engine::coords::Vec2;
use hades_engine::paint::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WindowTheme {
    pub header_height: f32,
    pub rounding: f32,
    pub outline_width: f32,
    /// Inset between the view rect and the first widget.
    pub padding: f32,
    /// Gap between consecutive widgets.
    pub spacing: f32,
    /// Half-width of the band around each border that starts a resize.
    pub border_grab: f32,
    /// Leg length of the triangular corner grips.
    pub corner_grip: f32,
    pub min_size: Vec2,
    pub background: Color,
    pub header: Color,
    pub header_focused: Color,
    pub outline: Color,
    pub title: Color,
}

impl Default for WindowTheme {
    fn default() -> Self {
        Self {
            header_height: 25.0,
            rounding: 6.0,
            outline_width: 1.0,
            padding: 10.0,
            spacing: 10.0,
            border_grab: 4.0,
            corner_grip: 12.0,
            min_size: Vec2::new(20.0, 20.0),
            background: Color::rgb(36, 39, 43),
            header: Color::rgb(74, 82, 90),
            header_focused: Color::rgb(92, 100, 110),
            outline: Color::rgb(92, 100, 110),
            title: Color::WHITE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonTheme {
    pub padding: f32,
    pub rounding: f32,
    /// Fixed size; `None` sizes from the label.
    pub size: Option<Vec2>,
    pub color: Color,
    pub hover_color: Color,
    pub text_color: Color,
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            padding: 10.0,
            rounding: 5.0,
            size: None,
            color: Color::rgb(0, 75, 168),
            hover_color: Color::rgb(0, 60, 168),
            text_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EditFieldTheme {
    pub size: Vec2,
    /// Left inset of the text inside the field.
    pub text_offset: f32,
    /// Gap between the field and its label.
    pub label_gap: f32,
    /// Caret height as a fraction of the field height.
    pub caret_height: f32,
    pub caret_width: f32,
    pub rounding: f32,
    /// Digits after the decimal point for float fields.
    pub float_precision: usize,
    /// Maximum characters a field accepts.
    pub max_len: usize,
    /// Seconds the caret stays visible (and then hidden).
    pub blink_period: f32,
    pub color: Color,
    pub active_color: Color,
    pub text_color: Color,
    pub caret_color: Color,
    pub selection_color: Color,
}

impl Default for EditFieldTheme {
    fn default() -> Self {
        Self {
            size: Vec2::new(180.0, 20.0),
            text_offset: 4.0,
            label_gap: 4.0,
            caret_height: 0.8,
            caret_width: 1.0,
            rounding: 4.0,
            float_precision: 2,
            max_len: 64,
            blink_period: 0.5,
            color: Color::rgb(24, 26, 29),
            active_color: Color::rgb(16, 17, 19),
            text_color: Color::WHITE,
            caret_color: Color::WHITE,
            selection_color: Color::from_straight(0.0, 0.3, 0.66, 0.6),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ListBoxTheme {
    pub size: Vec2,
    pub item_height: f32,
    /// Left inset of item text.
    pub text_offset: f32,
    pub rounding: f32,
    pub color: Color,
    pub item_hover_color: Color,
    pub popup_color: Color,
    pub text_color: Color,
}

impl Default for ListBoxTheme {
    fn default() -> Self {
        Self {
            size: Vec2::new(180.0, 20.0),
            item_height: 20.0,
            text_offset: 5.0,
            rounding: 4.0,
            color: Color::rgb(24, 26, 29),
            item_hover_color: Color::rgb(0, 75, 168),
            popup_color: Color::rgb(30, 33, 36),
            text_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TabTheme {
    pub height: f32,
    pub padding: f32,
    /// Vertical gap between the tab bar and the tab body.
    pub body_offset: f32,
    pub rounding: f32,
    pub color: Color,
    pub active_color: Color,
    pub text_color: Color,
}

impl Default for TabTheme {
    fn default() -> Self {
        Self {
            height: 22.0,
            padding: 10.0,
            body_offset: 5.0,
            rounding: 4.0,
            color: Color::rgb(50, 55, 61),
            active_color: Color::rgb(0, 75, 168),
            text_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollbarTheme {
    pub width: f32,
    pub min_thumb: f32,
    pub track_color: Color,
    pub thumb_color: Color,
    pub thumb_active_color: Color,
}

impl Default for ScrollbarTheme {
    fn default() -> Self {
        Self {
            width: 10.0,
            min_thumb: 20.0,
            track_color: Color::rgb(28, 30, 33),
            thumb_color: Color::rgb(74, 82, 90),
            thumb_active_color: Color::rgb(110, 120, 130),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadioTheme {
    pub size: f32,
    /// Gap between the circle and its label.
    pub label_gap: f32,
    pub color: Color,
    pub checked_color: Color,
    pub text_color: Color,
}

impl Default for RadioTheme {
    fn default() -> Self {
        Self {
            size: 16.0,
            label_gap: 6.0,
            color: Color::rgb(24, 26, 29),
            checked_color: Color::rgb(0, 75, 168),
            text_color: Color::WHITE,
        }
    }
}

/// Complete GUI theme.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub window: WindowTheme,
    pub button: ButtonTheme,
    pub edit_field: EditFieldTheme,
    pub list_box: ListBoxTheme,
    pub tab: TabTheme,
    pub scrollbar: ScrollbarTheme,
    pub radio: RadioTheme,
    pub text_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            window: WindowTheme::default(),
            button: ButtonTheme::default(),
            edit_field: EditFieldTheme::default(),
            list_box: ListBoxTheme::default(),
            tab: TabTheme::default(),
            scrollbar: ScrollbarTheme::default(),
            radio: RadioTheme::default(),
            text_color: Color::WHITE,
        }
    }
}
