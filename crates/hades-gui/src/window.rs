use bitflags::bitflags;
use hades_engine::coords::{Rect, Vec2};
use hades_engine::scene::DrawList;

use crate::id::{GuiId, IdCounters};
use crate::layout::LayoutCursor;

bitflags! {
    /// Chrome and behavior switches for a window.
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct WindowStyle: u32 {
        const HEADER     = 1 << 0;
        const OUTLINES   = 1 << 1;
        const SCROLL_BAR = 1 << 2;
        const NO_RESIZE  = 1 << 3;
        const NO_MOVE    = 1 << 4;
    }
}

impl Default for WindowStyle {
    fn default() -> Self {
        WindowStyle::HEADER | WindowStyle::OUTLINES | WindowStyle::SCROLL_BAR
    }
}

/// Index into the window arena. Stable for the lifetime of a [`Gui`](crate::Gui).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WindowHandle(pub(crate) usize);

impl WindowHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WindowKind {
    TopLevel,
    /// Occupies a layout slot inside its parent.
    Child,
    /// Transient overlay (list-box dropdowns); kept above every top-level window.
    Popup,
}

/// Tab bar state for the current frame.
#[derive(Debug, Copy, Clone)]
pub(crate) struct TabBar {
    pub rect: Rect,
    pub next_x: f32,
    pub first: GuiId,
    /// The active tab was declared this frame.
    pub resolved: bool,
}

/// Values recomputed every time the window is begun.
#[derive(Debug, Clone)]
pub(crate) struct WindowFrame {
    /// Pointer events may reach widgets of this window.
    pub accepts_input: bool,
    /// Received a mouse-down this frame; raised in `end_window`.
    pub focused_now: bool,
    pub header: Option<Rect>,
    /// Visible area excluding header and scrollbars.
    pub view: Rect,
    /// `view` intersected with every ancestor's clip and the surface.
    pub clip: Rect,
    pub layout: LayoutCursor,
    pub tab_bar: Option<TabBar>,
    pub show_scroll: (bool, bool),
    pub pushed_theme: bool,
}

impl WindowFrame {
    pub fn new(origin: Vec2, spacing: f32) -> Self {
        Self {
            accepts_input: false,
            focused_now: false,
            header: None,
            view: Rect::default(),
            clip: Rect::default(),
            layout: LayoutCursor::new(origin, spacing),
            tab_bar: None,
            show_scroll: (false, false),
            pushed_theme: false,
        }
    }
}

/// Persistent per-window state. Created on first declaration; never destroyed,
/// only hidden.
#[derive(Debug)]
pub struct Window {
    pub(crate) id: GuiId,
    pub(crate) name: String,
    pub(crate) kind: WindowKind,
    pub(crate) parent: Option<WindowHandle>,
    pub(crate) children: Vec<WindowHandle>,
    pub(crate) style: WindowStyle,
    pub(crate) rect: Rect,
    /// Per-axis scroll offset in pixels.
    pub(crate) scroll: Vec2,
    /// Content extent measured at the last `end_window`.
    pub(crate) content_size: Vec2,
    /// Position in the z-order; `None` until first placed.
    pub(crate) order_index: Option<usize>,
    pub(crate) hidden: bool,
    pub(crate) seen_frame: Option<u64>,
    pub(crate) active_tab: Option<GuiId>,
    pub(crate) counters: IdCounters,
    pub(crate) frame: WindowFrame,
    pub(crate) draw_list: DrawList,
}

impl Window {
    pub(crate) fn new(id: GuiId, name: String, kind: WindowKind, style: WindowStyle, rect: Rect) -> Self {
        Self {
            id,
            name,
            kind,
            parent: None,
            children: Vec::new(),
            style,
            rect,
            scroll: Vec2::zero(),
            content_size: Vec2::zero(),
            order_index: None,
            hidden: false,
            seen_frame: None,
            active_tab: None,
            counters: IdCounters::default(),
            frame: WindowFrame::new(rect.origin, 0.0),
            draw_list: DrawList::new(),
        }
    }

    pub fn id(&self) -> GuiId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn style(&self) -> WindowStyle {
        self.style
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Visible area as of the last time the window was begun.
    pub fn view_rect(&self) -> Rect {
        self.frame.view
    }

    /// Bounding box of the children placed last frame, in screen space.
    pub fn content_rect(&self) -> Option<Rect> {
        self.frame.layout.content_rect()
    }

    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    pub fn order_index(&self) -> Option<usize> {
        self.order_index
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn parent(&self) -> Option<WindowHandle> {
        self.parent
    }

    pub fn children(&self) -> &[WindowHandle] {
        &self.children
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Declared this frame or the previous one and not hidden.
    pub(crate) fn is_live(&self, frame: u64) -> bool {
        !self.hidden && self.seen_frame.is_some_and(|f| f + 1 >= frame)
    }
}
