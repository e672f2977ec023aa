use crate::coords::Vec2;

use super::TextMetrics;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font #{}", id.0);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the bounding box of a laid-out single line.
    ///
    /// Width is the pen position after the last glyph, not the bitmap's right edge,
    /// so it agrees with summed `char_advance` values.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// [`TextMetrics`] over one font of a [`FontSystem`] at a fixed pixel size.
pub struct FontMetrics {
    fonts: FontSystem,
    font: FontId,
    size: f32,
}

impl FontMetrics {
    pub fn new(fonts: FontSystem, font: FontId, size: f32) -> Self {
        Self { fonts, font, size }
    }

    /// Loads `bytes` into a fresh system and measures at `size`.
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, FontLoadError> {
        let mut fonts = FontSystem::new();
        let font = fonts.load_font(bytes)?;
        Ok(Self::new(fonts, font, size))
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl TextMetrics for FontMetrics {
    fn text_size(&self, text: &str) -> Vec2 {
        let v = self.fonts.measure_text(text, self.font, self.size);
        Vec2::new(v.x, v.y.max(self.line_height()))
    }

    fn char_width(&self, c: char) -> f32 {
        self.fonts
            .get(self.font)
            .map_or(0.0, |f| f.metrics(c, self.size).width as f32)
    }

    fn char_advance(&self, c: char) -> f32 {
        self.fonts
            .get(self.font)
            .map_or(0.0, |f| f.metrics(c, self.size).advance_width)
    }

    fn line_height(&self) -> f32 {
        self.fonts
            .get(self.font)
            .and_then(|f| f.horizontal_line_metrics(self.size))
            .map_or(self.size * 1.2, |m| m.new_line_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(&[0u8; 16]).is_err());
    }

    #[test]
    fn unknown_font_measures_to_empty_line() {
        let fonts = FontSystem::new();
        let v = fonts.measure_text("abc", FontId(3), 10.0);
        assert_eq!(v, Vec2::new(0.0, 12.0));
    }
}
