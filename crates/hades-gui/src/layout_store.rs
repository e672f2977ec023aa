//! Persisted window layout.
//!
//! A layout is the ordered list of top-level windows (back to front) with their
//! style flags and rects, stored as RON so it stays hand-editable.

use std::fs;
use std::path::Path;

use hades_engine::coords::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::window::WindowStyle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecord {
    pub name: String,
    /// [`WindowStyle`] bits.
    pub style: u32,
    /// `[x, y, width, height]`.
    pub rect: [f32; 4],
}

impl LayoutRecord {
    pub fn new(name: &str, style: WindowStyle, rect: Rect) -> Self {
        Self {
            name: name.to_owned(),
            style: style.bits(),
            rect: [rect.x(), rect.y(), rect.width(), rect.height()],
        }
    }

    /// Unknown bits are dropped.
    pub fn style(&self) -> WindowStyle {
        WindowStyle::from_bits_truncate(self.style)
    }

    pub fn rect(&self) -> Rect {
        let [x, y, w, h] = self.rect;
        Rect::new(x, y, w, h)
    }
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed layout: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize layout: {0}")]
    Serialize(#[from] ron::Error),
}

pub fn to_string(records: &[LayoutRecord]) -> Result<String, LayoutError> {
    Ok(ron::ser::to_string_pretty(records, ron::ser::PrettyConfig::default())?)
}

pub fn from_str(s: &str) -> Result<Vec<LayoutRecord>, LayoutError> {
    Ok(ron::from_str(s)?)
}

pub fn save(path: impl AsRef<Path>, records: &[LayoutRecord]) -> Result<(), LayoutError> {
    let path = path.as_ref();
    fs::write(path, to_string(records)?)?;
    log::info!("saved layout of {} windows to {}", records.len(), path.display());
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<LayoutRecord>, LayoutError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let records = from_str(&text).inspect_err(|e| log::warn!("ignoring layout {}: {e}", path.display()))?;
    log::info!("loaded layout of {} windows from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LayoutRecord> {
        vec![
            LayoutRecord::new("Scene", WindowStyle::default(), Rect::new(50.0, 50.0, 300.0, 300.0)),
            LayoutRecord::new("Inspector", WindowStyle::HEADER, Rect::new(390.0, 50.0, 220.0, 400.0)),
        ]
    }

    // ── records ───────────────────────────────────────────────────────────

    #[test]
    fn record_keeps_style_and_rect() {
        let r = LayoutRecord::new("W", WindowStyle::HEADER | WindowStyle::NO_MOVE, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r.style(), WindowStyle::HEADER | WindowStyle::NO_MOVE);
        assert_eq!(r.rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn unknown_style_bits_are_dropped() {
        let r = LayoutRecord { name: "W".into(), style: 0xffff_0000 | 1, rect: [0.0; 4] };
        assert_eq!(r.style(), WindowStyle::HEADER);
    }

    // ── ron ───────────────────────────────────────────────────────────────

    #[test]
    fn ron_text_parses_back() {
        let text = to_string(&sample()).unwrap();
        assert!(text.contains("Inspector"));
        assert_eq!(from_str(&text).unwrap(), sample());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(from_str("not a layout"), Err(LayoutError::Parse(_))));
    }

    // ── files ─────────────────────────────────────────────────────────────

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.ron");
        save(&path, &sample()).unwrap();
        assert_eq!(load(&path).unwrap(), sample());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(dir.path().join("nope.ron")), Err(LayoutError::Io(_))));
    }
}
