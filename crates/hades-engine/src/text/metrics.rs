use crate::coords::Vec2;

/// Font/text metrics provider consumed by layout and caret placement.
///
/// `char_width` is the inked glyph width; `char_advance` is how far the pen moves.
/// They differ most for narrow punctuation such as `'.'`.
pub trait TextMetrics {
    /// Bounding box of a single line of text, in logical pixels.
    fn text_size(&self, text: &str) -> Vec2;

    fn char_width(&self, c: char) -> f32;

    fn char_advance(&self, c: char) -> f32;

    fn line_height(&self) -> f32;
}

/// Fixed-advance metrics.
///
/// Every character advances by the same amount; `'.'` and `','` report a narrower
/// inked width so caret stepping around punctuation is exercised deterministically.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_size(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.advance, self.line_height)
    }

    fn char_width(&self, c: char) -> f32 {
        match c {
            '.' | ',' => self.advance * 0.375,
            _ => self.advance,
        }
    }

    fn char_advance(&self, _c: char) -> f32 {
        self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
