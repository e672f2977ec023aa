use hades_engine::coords::Rect;
use hades_engine::input::CursorShape;
use hades_engine::scene::DrawList;

use crate::window::WindowHandle;

/// One visible window's primitives for this frame.
#[derive(Debug, Copy, Clone)]
pub struct WindowLayer<'a> {
    pub handle: WindowHandle,
    pub name: &'a str,
    pub rect: Rect,
    pub draw_list: &'a DrawList,
}

/// What a frame produced, borrowed from the [`Gui`](crate::Gui) until the next
/// `new_frame`.
#[derive(Debug)]
pub struct FrameOutput<'a> {
    /// Back to front: each top-level window or popup followed by its children.
    pub layers: Vec<WindowLayer<'a>>,
    pub cursor: CursorShape,
}

impl<'a> FrameOutput<'a> {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, name: &str) -> Option<&WindowLayer<'a>> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Total number of draw items across every layer.
    pub fn item_count(&self) -> usize {
        self.layers.iter().map(|l| l.draw_list.len()).sum()
    }
}
