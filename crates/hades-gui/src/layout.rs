//! Per-window placement cursor.
//!
//! Two modes, toggled by [`same_line`](LayoutCursor::same_line) and
//! [`next_line`](LayoutCursor::next_line):
//! - VERTICAL: the next widget goes under the current row, `spacing` apart.
//! - HORIZONTAL: the next widget goes right of the previous one on the same row.
//!
//! A mode change raises JUST_SWITCHED, which the first placement afterwards
//! consumes. Calling `same_line` while already horizontal is a no-op, so mixed
//! sequences without `next_line` keep extending the current row.

use bitflags::bitflags;
use hades_engine::coords::{Rect, Vec2};

bitflags! {
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct LayoutMode: u8 {
        const VERTICAL      = 1 << 0;
        const HORIZONTAL    = 1 << 1;
        const JUST_SWITCHED = 1 << 2;
    }
}

#[derive(Debug, Clone)]
pub struct LayoutCursor {
    origin: Vec2,
    spacing: f32,
    mode: LayoutMode,
    /// Top and height of the row the last widget belongs to.
    row_top: f32,
    row_height: f32,
    prev: Option<Rect>,
    /// Bounding box of everything placed this frame.
    content: Option<Rect>,
}

impl LayoutCursor {
    pub fn new(origin: Vec2, spacing: f32) -> Self {
        Self {
            origin,
            spacing,
            mode: LayoutMode::VERTICAL,
            row_top: origin.y,
            row_height: 0.0,
            prev: None,
            content: None,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Places the next widget on the current row.
    pub fn same_line(&mut self) {
        if !self.mode.contains(LayoutMode::HORIZONTAL) {
            self.mode = LayoutMode::HORIZONTAL | LayoutMode::JUST_SWITCHED;
        }
    }

    /// Ends the current row; the next widget starts under it.
    pub fn next_line(&mut self) {
        if !self.mode.contains(LayoutMode::VERTICAL) {
            self.mode = LayoutMode::VERTICAL | LayoutMode::JUST_SWITCHED;
        }
    }

    /// Where the next widget's top-left corner will land.
    pub fn next_position(&self) -> Vec2 {
        let Some(prev) = self.prev else {
            return self.origin;
        };
        if self.mode.contains(LayoutMode::HORIZONTAL) {
            Vec2::new(prev.right() + self.spacing, self.row_top)
        } else {
            Vec2::new(self.origin.x, self.row_top + self.row_height + self.spacing)
        }
    }

    /// Allocates a rect of `size` and advances the cursor past it.
    pub fn place(&mut self, size: Vec2) -> Rect {
        let rect = Rect::from_origin_size(self.next_position(), size);
        self.commit(rect);
        rect
    }

    /// Records an externally positioned rect as the last placement.
    pub fn commit(&mut self, rect: Rect) {
        if self.mode.contains(LayoutMode::HORIZONTAL) && self.prev.is_some() {
            self.row_height = self.row_height.max(rect.height());
        } else {
            self.row_top = rect.y();
            self.row_height = rect.height();
        }
        self.mode.remove(LayoutMode::JUST_SWITCHED);
        self.prev = Some(rect);
        self.content = Some(match self.content {
            Some(c) => c.union(rect),
            None => rect,
        });
    }

    /// Adds vertical space before the next row.
    pub fn skip(&mut self, dy: f32) {
        self.row_height += dy;
    }

    /// Remaining width from the next placement to `right`.
    pub fn available_width(&self, right: f32) -> f32 {
        (right - self.next_position().x).max(0.0)
    }

    pub fn last_rect(&self) -> Option<Rect> {
        self.prev
    }

    /// Bounding box of every placement this frame.
    pub fn content_rect(&self) -> Option<Rect> {
        self.content
    }

    /// Far corner of the placed content relative to the origin.
    pub fn content_extent(&self) -> Vec2 {
        self.content
            .map_or(Vec2::zero(), |c| (c.max() - self.origin).max(Vec2::zero()))
    }
}
