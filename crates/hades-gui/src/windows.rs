//! Window scopes: `begin_window` / `end_window`, child windows and popups.

use hades_engine::coords::{CornerRadii, Rect, Vec2};
use hades_engine::input::CursorShape;

use crate::context::{clamp_to_surface, Gui, ResizeDrag};
use crate::id::{widget_id, WidgetKind};
use crate::painter::{left_in, Painter};
use crate::resize;
use crate::scroll;
use crate::theme::Theme;
use crate::window::{WindowFrame, WindowHandle, WindowKind, WindowStyle};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Axis {
    X,
    Y,
}

impl Gui {
    /// Opens the top-level window `name`. Returns false while it is hidden.
    ///
    /// Must be matched by [`end_window`](Self::end_window) either way.
    pub fn begin_window(&mut self, name: &str, style: WindowStyle) -> bool {
        if !self.in_frame {
            self.misuse("begin_window called outside of a frame");
        }
        let (h, _) = self
            .registry
            .find_or_create(name, style, WindowKind::TopLevel);
        self.registry.get_mut(h).style = style;
        self.begin_scope(h, None)
    }

    pub fn end_window(&mut self) {
        let Some(h) = self.stack.last().copied() else {
            self.misuse("end_window without begin_window");
            return;
        };
        if self.registry.get(h).kind != WindowKind::TopLevel {
            self.misuse("end_window closes a child window; use end_child");
        }
        self.end_scope();
    }

    /// Opens a child window occupying a `size` slot of the current window's
    /// layout. A non-positive width fills the remaining row.
    pub fn begin_child(&mut self, name: &str, size: Vec2, style: WindowStyle) -> bool {
        let Some(parent) = self.current() else {
            return false;
        };
        let full = format!("{}/{}", self.registry.get(parent).name, name);
        let (h, _) = self.registry.find_or_create(&full, style, WindowKind::Child);
        self.registry.adopt(parent, h);

        let mut size = size;
        if size.x <= 0.0 {
            let pw = &self.registry.get(parent).frame;
            let right = pw.view.right() - self.theme().window.padding;
            size.x = pw.layout.available_width(right);
        }
        // Children count toward the parent's ordinals like any other widget.
        let slot_id = self.next_id(parent, WidgetKind::Child);
        let slot = self.place(parent, size);
        log::trace!("child '{full}' placed in slot {slot_id} at {:?}", slot.origin);

        let w = self.registry.get_mut(h);
        w.style = style | WindowStyle::NO_MOVE | WindowStyle::NO_RESIZE;
        w.rect = slot;
        self.begin_scope(h, Some(parent))
    }

    pub fn end_child(&mut self) {
        let Some(h) = self.stack.last().copied() else {
            self.misuse("end_child without begin_child");
            return;
        };
        if self.registry.get(h).kind != WindowKind::Child {
            self.misuse("end_child closes a top-level window; use end_window");
        }
        let rect = self.registry.get(h).rect;
        self.end_scope();
        self.last_item = Some(rect);
    }

    /// Opens a transient overlay owned by the current window at `rect`.
    pub(crate) fn begin_popup(&mut self, name: &str, rect: Rect) -> bool {
        let owner = self.stack.last().copied();
        let style = WindowStyle::OUTLINES | WindowStyle::NO_MOVE | WindowStyle::NO_RESIZE;
        let (h, created) = self.registry.find_or_create(name, style, WindowKind::Popup);
        let w = self.registry.get_mut(h);
        w.parent = owner;
        w.hidden = false;
        w.style = style;
        w.rect = rect;
        if created {
            log::trace!("popup '{name}' created");
        }
        self.begin_scope(h, None)
    }

    pub(crate) fn end_popup(&mut self) {
        self.end_scope();
    }

    /// Hides a popup immediately.
    pub(crate) fn close_popup(&mut self, name: &str) {
        if let Some(h) = self.registry.find(name) {
            self.registry.get_mut(h).hidden = true;
            self.registry.unorder(h);
        }
    }

    // ── scope internals ───────────────────────────────────────────────────

    fn begin_scope(&mut self, h: WindowHandle, parent: Option<WindowHandle>) -> bool {
        let pushed_theme = self.apply_next_window(h);
        let theme = *self.theme();
        let frame = self.frame;

        {
            let w = self.registry.get_mut(h);
            if w.seen_frame != Some(frame) {
                w.counters.reset();
                w.draw_list.clear();
                w.frame.focused_now = false;
            }
            w.seen_frame = Some(frame);
        }
        self.stack.push(h);

        let kind = self.registry.get(h).kind;
        let hidden = self.registry.get(h).hidden;
        let root = self.registry.root_of(h);

        if !hidden && kind != WindowKind::Child {
            self.update_resize(h, &theme);
        }

        let rect = self.registry.get(h).rect;
        let accepts_input = !hidden
            && self.pointer().is_some_and(|p| match parent {
                Some(ph) => {
                    let pf = &self.registry.get(ph).frame;
                    pf.accepts_input && pf.clip.contains(p) && rect.contains(p)
                }
                None => rect.contains(p) && !self.registry.is_occluded(root, p, frame),
            });

        if accepts_input {
            self.items.set_hot(self.registry.get(h).id);
            if self.left_pressed() {
                // Clicks on a popup keep its owner focused.
                let focus = match (kind, self.registry.get(h).parent) {
                    (WindowKind::Popup, Some(owner)) => self.registry.root_of(owner),
                    _ => root,
                };
                if self.focused != Some(focus) {
                    log::debug!("focus -> '{}'", self.registry.get(focus).name);
                }
                self.focused = Some(focus);
                self.registry.get_mut(focus).frame.focused_now = true;
            }
        }

        if !hidden && kind == WindowKind::TopLevel {
            self.update_move(h, &theme, accepts_input);
        }

        let outer_clip = match parent {
            Some(ph) => self.registry.get(ph).frame.clip,
            None => self.config.surface.rect(),
        };
        let focused = self.focused == Some(root);
        let metrics = self.metrics.as_ref();

        let w = self.registry.get_mut(h);
        let focused_now = w.frame.focused_now;
        let rect = w.rect;
        let pad = theme.window.padding;

        let header = w.style.contains(WindowStyle::HEADER).then(|| {
            Rect::new(rect.x(), rect.y(), rect.width(), theme.window.header_height.min(rect.height()))
        });
        let top = header.map_or(rect.y(), Rect::bottom);
        let body = Rect::new(rect.x(), top, rect.width(), rect.bottom() - top);

        let (mut sx, mut sy) = (false, false);
        let mut view = body;
        if w.style.contains(WindowStyle::SCROLL_BAR) {
            let sb = theme.scrollbar.width;
            sy = scroll::needs_scroll(view.height(), w.content_size.y);
            if sy {
                view.size.x = (view.size.x - sb).max(0.0);
            }
            sx = scroll::needs_scroll(view.width(), w.content_size.x);
            if sx {
                view.size.y = (view.size.y - sb).max(0.0);
                if !sy && scroll::needs_scroll(view.height(), w.content_size.y) {
                    sy = true;
                    view.size.x = (view.size.x - sb).max(0.0);
                }
            }
        }
        w.scroll.x = if sx { scroll::clamp_offset(w.scroll.x, view.width(), w.content_size.x) } else { 0.0 };
        w.scroll.y = if sy { scroll::clamp_offset(w.scroll.y, view.height(), w.content_size.y) } else { 0.0 };

        let clip = if hidden {
            Rect::default()
        } else {
            view.intersect(outer_clip).unwrap_or_default()
        };
        let origin = Vec2::new(
            scroll::content_origin(view.x(), w.content_size.x, scroll::ratio(w.scroll.x, w.content_size.x)),
            scroll::content_origin(view.y(), w.content_size.y, scroll::ratio(w.scroll.y, w.content_size.y)),
        ) + Vec2::new(pad, pad);

        w.frame = WindowFrame::new(origin, theme.window.spacing);
        w.frame.accepts_input = accepts_input;
        w.frame.focused_now = focused_now;
        w.frame.header = header;
        w.frame.view = view;
        w.frame.clip = clip;
        w.frame.show_scroll = (sx, sy);
        w.frame.pushed_theme = pushed_theme;

        if hidden {
            w.draw_list.push_clip(Rect::default());
            return false;
        }

        // Chrome.
        let wt = theme.window;
        let style = w.style;
        let title = match w.name.rsplit('/').next() {
            Some(t) if !t.starts_with("##") => t.to_owned(),
            _ => String::new(),
        };
        let chrome_clip = rect.intersect(outer_clip).unwrap_or_default();
        let mut p = Painter::new(&mut w.draw_list);
        p.clipped(chrome_clip, |p| {
            match header {
                Some(hr) => {
                    let header_color = if focused { wt.header_focused } else { wt.header };
                    p.fill_rounded_rect_corners(hr, CornerRadii::top(wt.rounding), header_color, None);
                    p.fill_rounded_rect_corners(body, CornerRadii::bottom(wt.rounding), wt.background, None);
                    if !title.is_empty() {
                        let size = metrics.text_size(&title);
                        p.text(&title, metrics.line_height(), wt.title, left_in(hr, size, pad));
                    }
                }
                None => p.fill_rounded_rect(rect, wt.rounding, wt.background),
            }
            if style.contains(WindowStyle::OUTLINES) {
                p.outline(rect, wt.rounding, wt.outline_width, wt.outline);
            }
        });
        p.push_clip(clip);
        true
    }

    fn end_scope(&mut self) {
        let Some(h) = self.stack.pop() else {
            return;
        };
        let theme = *self.theme();
        let pad = theme.window.padding;
        let hidden = self.registry.get(h).hidden;

        {
            let w = self.registry.get_mut(h);
            w.draw_list.pop_clip();
        }

        if !hidden {
            let w = self.registry.get_mut(h);
            if let Some(bar) = w.frame.tab_bar {
                if !bar.resolved {
                    // The picked tab vanished; fall back to the first one next frame.
                    w.active_tab = Some(bar.first);
                }
            }
            w.content_size = w.frame.layout.content_extent() + Vec2::new(pad * 2.0, pad * 2.0);
            self.apply_wheel(h);
            let (sx, sy) = self.registry.get(h).frame.show_scroll;
            if sy {
                self.scrollbar(h, Axis::Y, &theme);
            }
            if sx {
                self.scrollbar(h, Axis::X, &theme);
            }
        }

        let w = self.registry.get(h);
        let kind = w.kind;
        let focused_now = w.frame.focused_now;
        let pushed_theme = w.frame.pushed_theme;
        if kind != WindowKind::Child {
            if focused_now {
                self.registry.raise(h);
            } else {
                self.registry.ensure_ordered(h);
            }
        }
        if pushed_theme {
            self.theme_stack.pop();
        }
    }

    /// Consumes the one-shot next-window overrides. Returns whether a theme was pushed.
    fn apply_next_window(&mut self, h: WindowHandle) -> bool {
        let w = self.registry.get_mut(h);
        if let Some(pos) = self.next.pos.take() {
            w.rect.origin = pos;
        }
        if let Some(size) = self.next.size.take() {
            w.rect.size = size;
        }
        match self.next.theme.take() {
            Some(theme) => {
                self.theme_stack.push(theme);
                true
            }
            None => false,
        }
    }

    // ── move / resize ─────────────────────────────────────────────────────

    fn update_resize(&mut self, h: WindowHandle, theme: &Theme) {
        if self.registry.get(h).style.contains(WindowStyle::NO_RESIZE) {
            return;
        }
        let min = theme.window.min_size;

        if let Some(drag) = self.resize {
            if drag.window == h && self.left_down() {
                let delta = self.pointer_delta();
                let w = self.registry.get_mut(h);
                w.rect = resize::apply(w.rect, drag.edge, delta, min);
                self.cursor = drag.edge.cursor();
            }
            return;
        }
        if self.items.active().is_some() {
            return;
        }
        let Some(p) = self.pointer() else {
            return;
        };
        let frame = self.frame;
        if self.registry.is_occluded(h, p, frame) || self.registry.overlapped_by_higher(h, frame) {
            return;
        }

        let w = self.registry.get(h);
        let Some(edge) = resize::hit_test(w.rect, p, theme.window.border_grab, theme.window.corner_grip) else {
            return;
        };
        self.cursor = edge.cursor();
        if self.left_pressed() {
            let id = widget_id(w.id, WidgetKind::Border, 0);
            log::trace!("resize '{}' from {edge:?}", w.name);
            self.resize = Some(ResizeDrag { window: h, edge });
            self.items.activate(id);
            self.focused = Some(h);
            self.registry.get_mut(h).frame.focused_now = true;
        }
    }

    fn update_move(&mut self, h: WindowHandle, theme: &Theme, accepts_input: bool) {
        let w = self.registry.get(h);
        if w.style.contains(WindowStyle::NO_MOVE) || !w.style.contains(WindowStyle::HEADER) {
            return;
        }
        let header_id = widget_id(w.id, WidgetKind::Header, 0);
        let header = Rect::new(w.rect.x(), w.rect.y(), w.rect.width(), theme.window.header_height);

        if accepts_input && self.resize.is_none() && self.pointer_in(header) {
            self.items.set_hot(header_id);
            if self.left_pressed() {
                self.items.activate(header_id);
            }
        }

        if self.items.is_active(header_id) && self.left_down() && self.resize.is_none() {
            let delta = self.pointer_delta();
            let surface = self.config.surface;
            let w = self.registry.get_mut(h);
            w.rect.origin = clamp_to_surface(w.rect.translate(delta), surface, theme.window.outline_width);
            self.cursor = CursorShape::Move;
        }
    }

    // ── scrolling ─────────────────────────────────────────────────────────

    fn apply_wheel(&mut self, h: WindowHandle) {
        if self.wheel_consumed {
            return;
        }
        let lines = self.frame_input.wheel_lines;
        let pixels = self.frame_input.wheel_pixels;
        let delta = lines * self.config.wheel_line_height + pixels;
        if delta == Vec2::zero() {
            return;
        }
        let root = self.registry.root_of(h);
        if self.focused != Some(root) {
            return;
        }
        let w = self.registry.get(h);
        if !self.pointer_in(w.frame.clip) {
            return;
        }
        let (sx, sy) = w.frame.show_scroll;
        if !sx && !sy {
            return;
        }

        let w = self.registry.get_mut(h);
        let view = w.frame.view;
        if sy {
            w.scroll.y = scroll::clamp_offset(w.scroll.y - delta.y, view.height(), w.content_size.y);
        }
        if sx {
            w.scroll.x = scroll::clamp_offset(w.scroll.x - delta.x, view.width(), w.content_size.x);
        }
        self.wheel_consumed = true;
    }

    fn scrollbar(&mut self, h: WindowHandle, axis: Axis, theme: &Theme) {
        let st = theme.scrollbar;
        let kind = match axis {
            Axis::X => WidgetKind::ScrollbarX,
            Axis::Y => WidgetKind::ScrollbarY,
        };
        let id = self.next_id(h, kind);
        let w = self.registry.get(h);
        let view = w.frame.view;
        let (view_len, content, offset) = match axis {
            Axis::X => (view.width(), w.content_size.x, w.scroll.x),
            Axis::Y => (view.height(), w.content_size.y, w.scroll.y),
        };
        let track = match axis {
            Axis::X => Rect::new(view.x(), view.bottom(), view.width(), st.width),
            Axis::Y => Rect::new(view.right(), view.y(), st.width, view.height()),
        };
        let thumb = scroll::thumb_len(view_len, content, st.min_thumb);
        let pos = scroll::thumb_pos(offset, view_len, content, thumb);
        let thumb_rect = match axis {
            Axis::X => Rect::new(track.x() + pos, track.y(), thumb, st.width),
            Axis::Y => Rect::new(track.x(), track.y() + pos, st.width, thumb),
        };

        let accepts = w.frame.accepts_input || self.pointer_in(w.rect);
        let occluded = self
            .pointer()
            .is_some_and(|p| self.registry.is_occluded(self.registry.root_of(h), p, self.frame));
        // A press already taken by a border drag or another widget is not ours.
        let free = self.resize.is_none() && self.items.active().is_none_or(|a| a == id);
        if accepts && !occluded && free && self.pointer_in(thumb_rect) {
            self.items.set_hot(id);
            if self.left_pressed() {
                self.items.activate(id);
            }
        }

        let active = self.items.is_active(id);
        if active && self.left_down() {
            let d = match axis {
                Axis::X => self.pointer_delta().x,
                Axis::Y => self.pointer_delta().y,
            };
            let new = scroll::offset_for_thumb(pos + d, view_len, content, thumb);
            let w = self.registry.get_mut(h);
            match axis {
                Axis::X => w.scroll.x = new,
                Axis::Y => w.scroll.y = new,
            }
        }

        let color = if active { st.thumb_active_color } else { st.thumb_color };
        let w = self.registry.get_mut(h);
        let mut p = Painter::on_layer(&mut w.draw_list, Painter::OVERLAY);
        p.fill_rect(track, st.track_color);
        p.fill_rounded_rect(thumb_rect, st.width * 0.5, color);
    }
}
