//! Window storage and z-order.
//!
//! Windows live in a dense arena addressed by [`WindowHandle`]. The z-order is a
//! separate permutation of handles for top-level windows and popups, back to
//! front; each window caches its position as `order_index`. Popups always sit
//! after every top-level window.

use hades_engine::coords::{Rect, Vec2};

use crate::id::{hash_str, GuiId};
use crate::window::{Window, WindowHandle, WindowKind, WindowStyle};

#[derive(Debug)]
pub struct WindowRegistry {
    windows: Vec<Window>,
    order: Vec<WindowHandle>,
    /// Rect the next auto-placed window receives.
    next_rect: Rect,
    cascade_step: f32,
}

impl WindowRegistry {
    pub fn new(default_rect: Rect, cascade_step: f32) -> Self {
        Self {
            windows: Vec::new(),
            order: Vec::new(),
            next_rect: default_rect,
            cascade_step,
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, h: WindowHandle) -> &Window {
        &self.windows[h.0]
    }

    pub fn get_mut(&mut self, h: WindowHandle) -> &mut Window {
        &mut self.windows[h.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowHandle, &Window)> {
        self.windows.iter().enumerate().map(|(i, w)| (WindowHandle(i), w))
    }

    /// Back-to-front order of top-level windows and popups.
    pub fn order(&self) -> &[WindowHandle] {
        &self.order
    }

    /// Linear lookup by name.
    pub fn find(&self, name: &str) -> Option<WindowHandle> {
        let id = GuiId(hash_str(name));
        self.windows
            .iter()
            .position(|w| w.id == id && w.name == name)
            .map(WindowHandle)
    }

    /// Resolves `name`, creating the window at the cascading default position on a miss.
    ///
    /// Returns the handle and whether the window was just created.
    pub fn find_or_create(&mut self, name: &str, style: WindowStyle, kind: WindowKind) -> (WindowHandle, bool) {
        if let Some(h) = self.find(name) {
            return (h, false);
        }

        let rect = self.next_rect;
        if kind == WindowKind::TopLevel {
            self.next_rect.origin.x += rect.width() + self.cascade_step;
        }

        let h = WindowHandle(self.windows.len());
        self.windows
            .push(Window::new(GuiId(hash_str(name)), name.to_owned(), kind, style, rect));
        log::debug!("created window '{name}' ({kind:?}) at {:?}", rect.origin);
        (h, true)
    }

    /// Appends the window to the z-order if it is not placed yet.
    pub fn ensure_ordered(&mut self, h: WindowHandle) {
        if self.windows[h.0].order_index.is_none() {
            self.order.push(h);
            self.keep_popups_on_top();
        }
    }

    /// Moves the window to the top of the z-order (below any popups).
    pub fn raise(&mut self, h: WindowHandle) {
        let Some(pos) = self.order.iter().position(|&o| o == h) else {
            self.ensure_ordered(h);
            return;
        };
        if pos + 1 == self.order.len() {
            return;
        }
        self.order.remove(pos);
        self.order.push(h);
        self.keep_popups_on_top();
        log::debug!("raised window '{}'", self.windows[h.0].name);
    }

    /// Takes the window out of the z-order; it is appended again when next ended.
    pub fn unorder(&mut self, h: WindowHandle) {
        if self.windows[h.0].order_index.take().is_some() {
            self.order.retain(|&o| o != h);
            self.renumber();
        }
    }

    fn keep_popups_on_top(&mut self) {
        let windows = &self.windows;
        // Stable: relative order inside each group is kept.
        self.order
            .sort_by_key(|h| windows[h.0].kind == WindowKind::Popup);
        self.renumber();
    }

    fn renumber(&mut self) {
        for (i, h) in self.order.iter().enumerate() {
            self.windows[h.0].order_index = Some(i);
        }
    }

    /// Walks parent links up to the top-level window (or popup).
    pub fn root_of(&self, mut h: WindowHandle) -> WindowHandle {
        while let Some(p) = self.windows[h.0].parent {
            if self.windows[h.0].kind != WindowKind::Child {
                break;
            }
            h = p;
        }
        h
    }

    fn rank(&self, h: WindowHandle) -> usize {
        // Not yet ordered means it will be appended on top at `end_window`.
        self.windows[h.0].order_index.unwrap_or(usize::MAX)
    }

    /// The live ordered window with the highest order index containing `p`.
    pub fn topmost_at(&self, p: Vec2, frame: u64) -> Option<WindowHandle> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|&h| {
                let w = &self.windows[h.0];
                w.is_live(frame) && w.rect.contains(p)
            })
    }

    /// True when a live window above `root` contains `p`.
    pub fn is_occluded(&self, root: WindowHandle, p: Vec2, frame: u64) -> bool {
        let rank = self.rank(root);
        self.order.iter().any(|&h| {
            let w = &self.windows[h.0];
            h != root && self.rank(h) > rank && w.is_live(frame) && w.rect.contains(p)
        })
    }

    /// True when a live window above `root` overlaps its rect at all.
    pub fn overlapped_by_higher(&self, root: WindowHandle, frame: u64) -> bool {
        let rank = self.rank(root);
        let rect = self.windows[root.0].rect;
        self.order.iter().any(|&h| {
            let w = &self.windows[h.0];
            h != root && self.rank(h) > rank && w.is_live(frame) && w.rect.overlaps(rect)
        })
    }

    /// Adds `child` to `parent`'s child list once.
    pub fn adopt(&mut self, parent: WindowHandle, child: WindowHandle) {
        self.windows[child.0].parent = Some(parent);
        let kids = &mut self.windows[parent.0].children;
        if !kids.contains(&child) {
            kids.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> WindowRegistry {
        WindowRegistry::new(Rect::new(50.0, 50.0, 300.0, 300.0), 40.0)
    }

    fn live(r: &mut WindowRegistry, h: WindowHandle) {
        r.get_mut(h).seen_frame = Some(1);
    }

    // ── creation ──────────────────────────────────────────────────────────

    #[test]
    fn new_windows_cascade_to_the_right() {
        let mut r = reg();
        let (a, created) = r.find_or_create("A", WindowStyle::default(), WindowKind::TopLevel);
        let (b, _) = r.find_or_create("B", WindowStyle::default(), WindowKind::TopLevel);
        assert!(created);
        assert_eq!(r.get(a).rect().origin, Vec2::new(50.0, 50.0));
        assert_eq!(r.get(b).rect().origin, Vec2::new(390.0, 50.0));
    }

    #[test]
    fn lookup_by_name_reuses_window() {
        let mut r = reg();
        let (a, _) = r.find_or_create("A", WindowStyle::default(), WindowKind::TopLevel);
        let (again, created) = r.find_or_create("A", WindowStyle::empty(), WindowKind::TopLevel);
        assert_eq!(a, again);
        assert!(!created);
        assert_eq!(r.len(), 1);
    }

    // ── z-order ───────────────────────────────────────────────────────────

    #[test]
    fn raise_moves_to_top_and_renumbers() {
        let mut r = reg();
        let hs: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|n| r.find_or_create(n, WindowStyle::default(), WindowKind::TopLevel).0)
            .collect();
        for &h in &hs {
            r.ensure_ordered(h);
        }
        r.raise(hs[0]);
        assert_eq!(r.order(), &[hs[1], hs[2], hs[0]]);
        assert_eq!(r.get(hs[0]).order_index(), Some(2));
        assert_eq!(r.get(hs[1]).order_index(), Some(0));
    }

    #[test]
    fn popups_stay_above_raised_windows() {
        let mut r = reg();
        let (a, _) = r.find_or_create("A", WindowStyle::default(), WindowKind::TopLevel);
        let (p, _) = r.find_or_create("##popup", WindowStyle::empty(), WindowKind::Popup);
        let (b, _) = r.find_or_create("B", WindowStyle::default(), WindowKind::TopLevel);
        r.ensure_ordered(a);
        r.ensure_ordered(p);
        r.ensure_ordered(b);
        r.raise(a);
        assert_eq!(r.order(), &[b, a, p]);
    }

    #[test]
    fn unordered_popup_gives_up_the_top_slot() {
        let mut r = reg();
        let (a, _) = r.find_or_create("A", WindowStyle::default(), WindowKind::TopLevel);
        let (p, _) = r.find_or_create("##popup", WindowStyle::empty(), WindowKind::Popup);
        let (b, _) = r.find_or_create("B", WindowStyle::default(), WindowKind::TopLevel);
        r.ensure_ordered(a);
        r.ensure_ordered(p);
        r.ensure_ordered(b);
        r.unorder(p);
        r.raise(a);
        assert_eq!(r.order(), &[b, a]);
        assert_eq!(r.get(a).order_index(), Some(1));
        assert_eq!(r.get(p).order_index(), None);

        r.ensure_ordered(p);
        assert_eq!(r.order(), &[b, a, p]);
    }

    // ── occlusion ─────────────────────────────────────────────────────────

    #[test]
    fn higher_window_occludes_lower_under_pointer() {
        let mut r = reg();
        let (a, _) = r.find_or_create("A", WindowStyle::default(), WindowKind::TopLevel);
        let (b, _) = r.find_or_create("B", WindowStyle::default(), WindowKind::TopLevel);
        r.get_mut(b).rect = Rect::new(100.0, 100.0, 300.0, 300.0);
        r.ensure_ordered(a);
        r.ensure_ordered(b);
        live(&mut r, a);
        live(&mut r, b);

        let p = Vec2::new(150.0, 150.0);
        assert!(r.is_occluded(a, p, 1));
        assert!(!r.is_occluded(b, p, 1));
        assert_eq!(r.topmost_at(p, 1), Some(b));
        assert!(r.overlapped_by_higher(a, 1));
        assert!(!r.overlapped_by_higher(b, 1));
    }

    #[test]
    fn stale_windows_do_not_occlude() {
        let mut r = reg();
        let (a, _) = r.find_or_create("A", WindowStyle::default(), WindowKind::TopLevel);
        let (b, _) = r.find_or_create("B", WindowStyle::default(), WindowKind::TopLevel);
        r.get_mut(b).rect = r.get(a).rect();
        r.ensure_ordered(a);
        r.ensure_ordered(b);
        live(&mut r, a);
        live(&mut r, b);
        // Frame 5: neither was declared since frame 1.
        assert!(!r.is_occluded(a, Vec2::new(60.0, 60.0), 5));
    }
}
