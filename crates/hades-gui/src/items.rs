//! Hot/active item tracking.
//!
//! # How it works
//!
//! 1. [`ItemTracker::begin_frame`] clears `hot`. Every widget whose rect contains
//!    the pointer this frame overwrites it, so the last declared widget wins when
//!    rects overlap inside one window.
//! 2. A mouse-down while a widget is hot makes it `active`. Active survives the
//!    pointer leaving the rect, which is what drags rely on.
//! 3. [`ItemTracker::end_frame`] clears `active` once the left button is up,
//!    no matter which widget owned it.

use crate::id::GuiId;

#[derive(Debug, Default)]
pub struct ItemTracker {
    hot: Option<GuiId>,
    active: Option<GuiId>,
    /// Set by `make_next_item_active`; consumed by the next interactive widget.
    force_next: bool,
    /// Active item as of the end of the previous frame.
    prev_active: Option<GuiId>,
}

impl ItemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hot(&self) -> Option<GuiId> {
        self.hot
    }

    #[inline]
    pub fn active(&self) -> Option<GuiId> {
        self.active
    }

    #[inline]
    pub fn is_hot(&self, id: GuiId) -> bool {
        self.hot == Some(id)
    }

    #[inline]
    pub fn is_active(&self, id: GuiId) -> bool {
        self.active == Some(id)
    }

    pub fn begin_frame(&mut self) {
        self.hot = None;
    }

    #[inline]
    pub fn set_hot(&mut self, id: GuiId) {
        self.hot = Some(id);
    }

    pub fn activate(&mut self, id: GuiId) {
        if self.active != Some(id) {
            log::trace!("active item -> {id}");
        }
        self.active = Some(id);
    }

    pub fn request_next_active(&mut self) {
        self.force_next = true;
    }

    /// Returns `true` once after [`request_next_active`](Self::request_next_active).
    pub fn take_forced(&mut self) -> bool {
        std::mem::take(&mut self.force_next)
    }

    /// True on the frame `id` became active.
    pub fn just_activated(&self, id: GuiId) -> bool {
        self.active == Some(id) && self.prev_active != Some(id)
    }

    pub fn end_frame(&mut self, left_down: bool) {
        if !left_down {
            self.active = None;
        }
        self.prev_active = self.active;
    }
}
