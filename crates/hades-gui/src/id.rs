//! Widget identity.
//!
//! A widget id is `hash(window name) + hash(kind tag) + ordinal`, where the ordinal
//! counts widgets of that kind declared so far this frame in that window. Ids are
//! stable across frames only while declaration order and count stay the same:
//! skipping a widget conditionally shifts every later same-kind ordinal in that
//! window, and persistent state (caret, active tab) follows the shifted id.

use std::fmt;

/// Stable per-frame identity of one widget or window.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GuiId(pub u32);

impl fmt::Display for GuiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// One-pass FNV-1a over the UTF-8 bytes of `s`.
pub fn hash_str(s: &str) -> u32 {
    s.bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ b as u32).wrapping_mul(FNV_PRIME))
}

/// Widget kinds that draw from a per-window ordinal counter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WidgetKind {
    Button,
    Radio,
    ListBox,
    ListItem,
    Tab,
    EditField,
    Text,
    Image,
    Child,
    Header,
    Border,
    ScrollbarX,
    ScrollbarY,
}

impl WidgetKind {
    pub const COUNT: usize = 13;

    pub fn tag(self) -> &'static str {
        match self {
            WidgetKind::Button => "button",
            WidgetKind::Radio => "radio_button",
            WidgetKind::ListBox => "list_box",
            WidgetKind::ListItem => "list_item",
            WidgetKind::Tab => "tab",
            WidgetKind::EditField => "edit_field",
            WidgetKind::Text => "text",
            WidgetKind::Image => "image",
            WidgetKind::Child => "child_window",
            WidgetKind::Header => "window_header",
            WidgetKind::Border => "window_border",
            WidgetKind::ScrollbarX => "scrollbar_x",
            WidgetKind::ScrollbarY => "scrollbar_y",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Per-window ordinal counters, one per kind.
#[derive(Debug, Clone, Default)]
pub struct IdCounters {
    counts: [u32; WidgetKind::COUNT],
}

impl IdCounters {
    pub fn reset(&mut self) {
        self.counts = [0; WidgetKind::COUNT];
    }

    /// Returns the ordinal for the next widget of `kind` and advances the counter.
    pub fn next(&mut self, kind: WidgetKind) -> u32 {
        let slot = &mut self.counts[kind.slot()];
        let n = *slot;
        *slot += 1;
        n
    }

    pub fn count(&self, kind: WidgetKind) -> u32 {
        self.counts[kind.slot()]
    }
}

/// Combines a window id, a kind and an ordinal into a widget id.
pub fn widget_id(window: GuiId, kind: WidgetKind, ordinal: u32) -> GuiId {
    GuiId(
        window
            .0
            .wrapping_add(hash_str(kind.tag()))
            .wrapping_add(ordinal),
    )
}
