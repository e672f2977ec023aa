//! The GUI context object.
//!
//! Everything that a retained-state immediate-mode GUI keeps between frames lives
//! on [`Gui`]: the window arena and z-order, the hot/active tracker, the single
//! edit-field state, in-progress resizes, and one-shot overrides for the next
//! window. Widget calls are methods on it and must happen between
//! [`Gui::new_frame`] and [`Gui::end_frame`], inside a window scope.

use hades_engine::coords::{Rect, Vec2, Viewport};
use hades_engine::input::{CursorShape, EventQueue, InputFrame, InputState, MouseButton};
use hades_engine::text::TextMetrics;
use hades_engine::time::FrameTime;

use crate::config::GuiConfig;
use crate::edit::EditFieldState;
use crate::id::{widget_id, GuiId, WidgetKind};
use crate::items::ItemTracker;
use crate::layout_store::LayoutRecord;
use crate::output::{FrameOutput, WindowLayer};
use crate::registry::WindowRegistry;
use crate::resize::ResizeEdge;
use crate::theme::{ButtonTheme, Theme};
use crate::window::{Window, WindowHandle, WindowKind};

#[derive(Debug, Copy, Clone)]
pub(crate) struct ResizeDrag {
    pub window: WindowHandle,
    pub edge: ResizeEdge,
}

/// One-shot overrides consumed by the next `begin_window` / `begin_child`.
#[derive(Debug, Default)]
pub(crate) struct NextWindow {
    pub pos: Option<Vec2>,
    pub size: Option<Vec2>,
    pub theme: Option<Theme>,
}

/// Result of hit-testing one widget rect.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct Interaction {
    pub hot: bool,
    pub active: bool,
    /// Became active this frame.
    pub pressed: bool,
    /// Released while still hot after being pressed on this widget.
    pub clicked: bool,
}

pub struct Gui {
    pub(crate) config: GuiConfig,
    pub(crate) metrics: Box<dyn TextMetrics>,
    pub(crate) input: InputState,
    pub(crate) frame_input: InputFrame,
    /// Internal frame counter, strictly increasing.
    pub(crate) frame: u64,
    pub(crate) dt: f32,
    pub(crate) registry: WindowRegistry,
    pub(crate) stack: Vec<WindowHandle>,
    pub(crate) items: ItemTracker,
    pub(crate) edit: EditFieldState,
    pub(crate) resize: Option<ResizeDrag>,
    pub(crate) cursor: CursorShape,
    /// The focused top-level window. At most one.
    pub(crate) focused: Option<WindowHandle>,
    pub(crate) next: NextWindow,
    pub(crate) theme_stack: Vec<Theme>,
    pub(crate) button_themes: Vec<ButtonTheme>,
    pub(crate) last_item: Option<Rect>,
    pub(crate) open_list_box: Option<GuiId>,
    pub(crate) wheel_consumed: bool,
    pub(crate) in_frame: bool,
}

impl Gui {
    pub fn new(config: GuiConfig, metrics: Box<dyn TextMetrics>) -> Self {
        let registry = WindowRegistry::new(config.default_window_rect, config.cascade_step);
        Self {
            config,
            metrics,
            input: InputState::default(),
            frame_input: InputFrame::default(),
            frame: 0,
            dt: 0.0,
            registry,
            stack: Vec::new(),
            items: ItemTracker::new(),
            edit: EditFieldState::default(),
            resize: None,
            cursor: CursorShape::Arrow,
            focused: None,
            next: NextWindow::default(),
            theme_stack: Vec::new(),
            button_themes: Vec::new(),
            last_item: None,
            open_list_box: None,
            wheel_consumed: false,
            in_frame: false,
        }
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Drains `events` and starts a frame.
    pub fn new_frame(&mut self, events: &mut EventQueue, time: FrameTime) {
        if self.in_frame {
            self.misuse("new_frame called twice without end_frame");
            self.stack.clear();
        }

        self.frame_input.clear();
        for ev in events.drain() {
            self.input.apply_event(&mut self.frame_input, ev);
        }

        if let Some(size) = self.frame_input.surface_resized {
            self.resize_surface(Viewport::new(size.x, size.y));
        }

        self.frame += 1;
        self.dt = time.dt.max(0.0);
        self.items.begin_frame();
        self.edit.now = self.frame;
        self.cursor = CursorShape::Arrow;
        self.wheel_consumed = false;
        self.last_item = None;
        if self.left_pressed() {
            // Windows claim focus while being declared.
            self.focused = None;
        }
        self.in_frame = true;
    }

    /// Finishes the frame and returns the windows to draw, back to front.
    pub fn end_frame(&mut self) -> FrameOutput<'_> {
        if !self.in_frame {
            self.misuse("end_frame called without new_frame");
        }
        if !self.stack.is_empty() {
            self.misuse("end_frame called with windows still open");
            while let Some(h) = self.stack.pop() {
                let list = &mut self.registry.get_mut(h).draw_list;
                while list.clip_depth() > 0 {
                    list.pop_clip();
                }
            }
        }

        if self.left_pressed() {
            if let Some(owner) = self.edit.owner() {
                if !self.items.is_active(owner) {
                    if self.edit.owner_seen == self.frame {
                        self.edit.release_for_commit();
                    } else {
                        self.edit.abandon();
                    }
                }
            }
        }
        self.edit.drop_stale_pending();

        let left_down = self.left_down();
        self.items.end_frame(left_down);
        if !left_down {
            self.resize = None;
        }

        let frame = self.frame;
        let stale_popups: Vec<WindowHandle> = self
            .registry
            .iter()
            .filter(|(_, w)| w.kind == WindowKind::Popup && w.seen_frame != Some(frame))
            .map(|(h, _)| h)
            .collect();
        for h in stale_popups {
            self.registry.get_mut(h).hidden = true;
            self.registry.unorder(h);
        }

        self.in_frame = false;
        self.output()
    }

    fn output(&self) -> FrameOutput<'_> {
        let mut layers = Vec::new();
        for &h in self.registry.order() {
            self.collect_layers(h, &mut layers);
        }
        FrameOutput { layers, cursor: self.cursor }
    }

    fn collect_layers<'a>(&'a self, h: WindowHandle, out: &mut Vec<WindowLayer<'a>>) {
        let w = self.registry.get(h);
        if w.hidden || w.seen_frame != Some(self.frame) {
            return;
        }
        out.push(WindowLayer { handle: h, name: &w.name, rect: w.rect, draw_list: &w.draw_list });
        for &c in &w.children {
            self.collect_layers(c, out);
        }
    }

    fn resize_surface(&mut self, surface: Viewport) {
        log::debug!("surface resized to {}x{}", surface.width, surface.height);
        self.config.surface = surface;
        let outline = self.theme().window.outline_width;
        let handles: Vec<WindowHandle> = self.registry.order().to_vec();
        for h in handles {
            let w = self.registry.get_mut(h);
            w.rect.origin = clamp_to_surface(w.rect, surface, outline);
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn hot_item(&self) -> Option<GuiId> {
        self.items.hot()
    }

    pub fn active_item(&self) -> Option<GuiId> {
        self.items.active()
    }

    /// Name of the focused top-level window.
    pub fn focused_window(&self) -> Option<&str> {
        self.focused.map(|h| self.registry.get(h).name())
    }

    pub fn window(&self, name: &str) -> Option<&Window> {
        self.registry.find(name).map(|h| self.registry.get(h))
    }

    pub fn window_rect(&self, name: &str) -> Option<Rect> {
        self.window(name).map(Window::rect)
    }

    /// Size of the window currently being declared.
    pub fn window_size(&self) -> Vec2 {
        self.stack
            .last()
            .map_or(Vec2::zero(), |&h| self.registry.get(h).rect.size)
    }

    /// Whether the pointer is over the current window and input reaches it.
    pub fn is_window_hovered(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|&h| self.registry.get(h).frame.accepts_input)
    }

    /// Whether the pointer is over any visible window.
    pub fn mouse_over_gui(&self) -> bool {
        let Some(p) = self.input.pointer_pos else {
            return false;
        };
        self.registry
            .iter()
            .any(|(_, w)| w.kind != WindowKind::Child && w.is_live(self.frame) && w.rect.contains(p))
    }

    pub fn edit_state(&self) -> &EditFieldState {
        &self.edit
    }

    /// Rect of the last widget placed in the current frame.
    pub fn last_item_rect(&self) -> Option<Rect> {
        self.last_item
    }

    /// Pointer shape requested by the last frame.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn surface(&self) -> Viewport {
        self.config.surface
    }

    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    /// Theme in effect for the current window.
    pub fn theme(&self) -> &Theme {
        self.theme_stack.last().unwrap_or(&self.config.theme)
    }

    pub(crate) fn button_theme(&self) -> ButtonTheme {
        self.button_themes
            .last()
            .copied()
            .unwrap_or(self.theme().button)
    }

    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    // ── overrides ─────────────────────────────────────────────────────────

    /// The next interactive widget becomes active as if clicked.
    pub fn make_next_item_active(&mut self) {
        self.items.request_next_active();
    }

    pub fn set_next_window_pos(&mut self, pos: Vec2) {
        self.next.pos = Some(pos);
    }

    pub fn set_next_window_size(&mut self, size: Vec2) {
        self.next.size = Some(size);
    }

    /// Theme for the next window scope only.
    pub fn set_next_theme(&mut self, theme: Theme) {
        self.next.theme = Some(theme);
    }

    pub fn push_button_theme(&mut self, theme: ButtonTheme) {
        self.button_themes.push(theme);
    }

    pub fn pop_button_theme(&mut self) {
        if self.button_themes.pop().is_none() {
            self.misuse("pop_button_theme without push_button_theme");
        }
    }

    /// Hides a window until [`show_window`](Self::show_window).
    pub fn close_window(&mut self, name: &str) {
        if let Some(h) = self.registry.find(name) {
            log::debug!("closing window '{name}'");
            self.registry.get_mut(h).hidden = true;
            if self.focused == Some(h) {
                self.focused = None;
            }
        }
    }

    pub fn show_window(&mut self, name: &str) {
        if let Some(h) = self.registry.find(name) {
            self.registry.get_mut(h).hidden = false;
        }
    }

    // ── persisted layout ──────────────────────────────────────────────────

    /// Top-level windows in z-order as layout records.
    pub fn save_layout(&self) -> Vec<LayoutRecord> {
        self.registry
            .order()
            .iter()
            .map(|&h| self.registry.get(h))
            .filter(|w| w.kind == WindowKind::TopLevel)
            .map(|w| LayoutRecord::new(&w.name, w.style, w.rect))
            .collect()
    }

    /// Pre-seeds windows from records; the last record ends up on top.
    pub fn load_layout(&mut self, records: &[LayoutRecord]) {
        for r in records {
            let style = r.style();
            let (h, _) = self.registry.find_or_create(&r.name, style, WindowKind::TopLevel);
            let w = self.registry.get_mut(h);
            w.style = style;
            w.rect = r.rect();
            self.registry.raise(h);
        }
        log::info!("restored layout of {} windows", records.len());
    }

    // ── input helpers ─────────────────────────────────────────────────────

    pub(crate) fn pointer(&self) -> Option<Vec2> {
        self.input.pointer_pos
    }

    pub(crate) fn pointer_in(&self, rect: Rect) -> bool {
        self.input.pointer_pos.is_some_and(|p| rect.contains(p))
    }

    pub(crate) fn left_pressed(&self) -> bool {
        self.frame_input.button_pressed(MouseButton::Left)
    }

    pub(crate) fn left_released(&self) -> bool {
        self.frame_input.button_released(MouseButton::Left)
    }

    pub(crate) fn left_down(&self) -> bool {
        self.input.button_down(MouseButton::Left)
    }

    pub(crate) fn pointer_delta(&self) -> Vec2 {
        self.frame_input.pointer_delta
    }

    // ── widget plumbing ───────────────────────────────────────────────────

    pub(crate) fn misuse(&self, what: &str) {
        debug_assert!(false, "{what}");
        log::error!("{what}");
    }

    /// The window widgets are currently declared into.
    pub(crate) fn current(&self) -> Option<WindowHandle> {
        let h = self.stack.last().copied();
        if h.is_none() {
            self.misuse("widget declared outside of any window");
        }
        h
    }

    pub(crate) fn next_id(&mut self, h: WindowHandle, kind: WidgetKind) -> GuiId {
        let w = self.registry.get_mut(h);
        let n = w.counters.next(kind);
        widget_id(w.id, kind, n)
    }

    /// Lays out a widget of `size` in the current window.
    pub(crate) fn place(&mut self, h: WindowHandle, size: Vec2) -> Rect {
        let rect = self.registry.get_mut(h).frame.layout.place(size);
        self.last_item = Some(rect);
        rect
    }

    /// False when `rect` lies entirely outside the window's visible clip.
    pub(crate) fn visible(&self, h: WindowHandle, rect: Rect) -> bool {
        self.registry.get(h).frame.clip.overlaps(rect)
    }

    /// Hot/active bookkeeping for one widget.
    pub(crate) fn interact(&mut self, h: WindowHandle, id: GuiId, rect: Rect) -> Interaction {
        let frame = &self.registry.get(h).frame;
        let hot = frame.accepts_input && self.pointer_in(frame.clip) && self.pointer_in(rect);
        if hot {
            self.items.set_hot(id);
        }

        let forced = self.items.take_forced();
        let mut pressed = false;
        if forced || (hot && self.left_pressed()) {
            self.items.activate(id);
            pressed = true;
        }

        let active = self.items.is_active(id);
        Interaction {
            hot,
            active,
            pressed,
            clicked: active && hot && self.left_released() && !forced,
        }
    }

    /// Places the next widget on the current row.
    pub fn same_line(&mut self) {
        if let Some(h) = self.current() {
            self.registry.get_mut(h).frame.layout.same_line();
        }
    }

    /// Ends the current row.
    pub fn next_line(&mut self) {
        if let Some(h) = self.current() {
            self.registry.get_mut(h).frame.layout.next_line();
        }
    }
}

/// Keeps `rect` inside the surface, leaving room for the outline.
pub(crate) fn clamp_to_surface(rect: Rect, surface: Viewport, outline: f32) -> Vec2 {
    let max_x = (surface.width - rect.width() - outline).max(outline);
    let max_y = (surface.height - rect.height() - outline).max(outline);
    Vec2::new(rect.x().clamp(outline, max_x), rect.y().clamp(outline, max_y))
}
