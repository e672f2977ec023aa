//! Text edit field state.
//!
//! One [`EditFieldState`] exists per [`Gui`](crate::Gui) and belongs to whichever
//! edit field currently owns keyboard input. The caret is a byte index into the
//! buffer, always on a char boundary: characters insert at it, and the character
//! before it is the one Backspace removes. `caret_x` is its pixel offset from the
//! text origin, stepped by glyph widths rather than re-measured, except that `'.'`
//! steps by its full advance so the caret never sits inside the digits around it.

use hades_engine::input::{InputEvent, InputFrame, Key, KeyState};
use hades_engine::text::TextMetrics;

use crate::id::GuiId;

/// Per-character validator supplied by the caller.
pub type CharValidator = fn(char) -> bool;

/// What a field edits; decides the built-in character filter and formatting.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EditKind {
    Int,
    Float { precision: usize },
    Text,
}

impl EditKind {
    fn accepts(self, text: &str, caret: usize, c: char) -> bool {
        let minus_ok = c == '-' && caret == 0 && !text.contains('-');
        match self {
            EditKind::Int => c.is_ascii_digit() || minus_ok,
            EditKind::Float { .. } => {
                c.is_ascii_digit() || minus_ok || (c == '.' && !text.contains('.'))
            }
            EditKind::Text => true,
        }
    }
}

/// Character filter applied to typed and pasted input.
#[derive(Debug, Copy, Clone)]
pub struct CharFilter {
    pub kind: EditKind,
    pub max_len: usize,
    pub validator: Option<CharValidator>,
}

/// What happened to the buffer while processing one frame of input.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EditOutcome {
    pub changed: bool,
    /// Enter was pressed.
    pub committed: bool,
    /// Escape was pressed; the buffer was dropped.
    pub cancelled: bool,
}

#[derive(Debug, Default)]
pub struct EditFieldState {
    owner: Option<GuiId>,
    text: String,
    caret: usize,
    /// Selection anchor; equal to `caret` when nothing is selected.
    anchor: usize,
    caret_x: f32,
    blink: f32,
    /// Re-apply the external value the next time the owner is declared.
    reseed: bool,
    /// Buffer of a field that lost ownership, waiting for its next declaration.
    pending: Option<(GuiId, String)>,
    pending_since: u64,
    /// Frame the owner was last declared.
    pub(crate) owner_seen: u64,
    /// Current frame, kept in sync by the context.
    pub(crate) now: u64,
}

impl EditFieldState {
    pub fn owner(&self) -> Option<GuiId> {
        self.owner
    }

    pub fn is_owner(&self, id: GuiId) -> bool {
        self.owner == Some(id)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Insertion index (byte offset).
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Index of the character before the caret, if any.
    pub fn before_caret(&self) -> Option<usize> {
        (self.caret > 0).then(|| prev_char(&self.text, self.caret))
    }

    pub fn caret_x(&self) -> f32 {
        self.caret_x
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.caret.min(self.anchor), self.caret.max(self.anchor))
    }

    pub fn has_selection(&self) -> bool {
        self.caret != self.anchor
    }

    pub(crate) fn needs_reseed(&self) -> bool {
        self.reseed
    }

    /// Binds the state to `id`, seeded from the field's external value.
    ///
    /// A previous owner's buffer is parked so that field can commit it on its
    /// next declaration.
    pub fn activate(&mut self, id: GuiId, seed: String, metrics: &dyn TextMetrics) {
        if let Some(prev) = self.owner.take() {
            if prev != id {
                self.pending = Some((prev, std::mem::take(&mut self.text)));
                self.pending_since = self.now;
            }
        }
        log::debug!("edit field {id} activated with '{seed}'");
        self.owner = Some(id);
        self.reseed(seed, metrics);
    }

    /// Replaces the buffer with a freshly formatted external value, caret at end.
    pub(crate) fn reseed(&mut self, seed: String, metrics: &dyn TextMetrics) {
        self.text = seed;
        self.caret = self.text.len();
        self.anchor = self.caret;
        self.caret_x = metrics.text_size(&self.text).x;
        self.blink = 0.0;
        self.reseed = false;
    }

    /// Releases ownership and returns the owner with its buffer.
    pub fn deactivate(&mut self) -> Option<(GuiId, String)> {
        let id = self.owner.take()?;
        self.reseed = false;
        Some((id, std::mem::take(&mut self.text)))
    }

    /// Parks the current buffer as a pending commit for its owner.
    pub(crate) fn release_for_commit(&mut self) {
        if let Some((id, text)) = self.deactivate() {
            log::debug!("edit field {id} deactivated");
            self.pending = Some((id, text));
            self.pending_since = self.now;
        }
    }

    /// Drops the buffer without committing.
    pub(crate) fn abandon(&mut self) {
        if let Some((id, _)) = self.deactivate() {
            log::debug!("edit field {id} abandoned");
        }
    }

    /// Takes a parked buffer addressed to `id`.
    pub(crate) fn take_pending(&mut self, id: GuiId) -> Option<String> {
        match &self.pending {
            Some((owner, _)) if *owner == id => self.pending.take().map(|(_, t)| t),
            _ => None,
        }
    }

    /// Forgets a parked buffer whose field was never declared again.
    pub(crate) fn drop_pending(&mut self) {
        if let Some((id, _)) = self.pending.take() {
            log::debug!("dropped uncommitted edit for {id}");
        }
    }

    /// Drops a parked buffer older than the current frame.
    pub(crate) fn drop_stale_pending(&mut self) {
        if self.pending.is_some() && self.pending_since < self.now {
            self.drop_pending();
        }
    }

    // ── blink ─────────────────────────────────────────────────────────────

    /// Advances the blink timer; returns whether the caret is drawn this frame.
    pub fn tick_blink(&mut self, dt: f32, period: f32) -> bool {
        self.blink += dt;
        if period <= 0.0 {
            return true;
        }
        (self.blink % (period * 2.0)) < period
    }

    fn reset_blink(&mut self) {
        self.blink = 0.0;
    }

    // ── caret movement ────────────────────────────────────────────────────

    pub fn move_left(&mut self, metrics: &dyn TextMetrics) {
        if self.has_selection() {
            self.collapse_to(self.selection().0, metrics);
            return;
        }
        if let Some(prev) = self.before_caret() {
            if let Some(c) = self.text[prev..].chars().next() {
                self.caret_x -= step_width(metrics, c);
            }
            self.caret = prev;
            self.anchor = prev;
        }
        self.reset_blink();
    }

    pub fn move_right(&mut self, metrics: &dyn TextMetrics) {
        if self.has_selection() {
            self.collapse_to(self.selection().1, metrics);
            return;
        }
        if let Some(c) = self.text[self.caret..].chars().next() {
            self.caret_x += step_width(metrics, c);
            self.caret += c.len_utf8();
            self.anchor = self.caret;
        }
        self.reset_blink();
    }

    pub fn home(&mut self) {
        self.caret = 0;
        self.anchor = 0;
        self.caret_x = 0.0;
        self.reset_blink();
    }

    pub fn end(&mut self, metrics: &dyn TextMetrics) {
        self.caret = self.text.len();
        self.anchor = self.caret;
        self.caret_x = metrics.text_size(&self.text).x;
        self.reset_blink();
    }

    pub fn select_all(&mut self, metrics: &dyn TextMetrics) {
        self.anchor = 0;
        self.end_keep_anchor(metrics);
    }

    fn end_keep_anchor(&mut self, metrics: &dyn TextMetrics) {
        self.caret = self.text.len();
        self.caret_x = metrics.text_size(&self.text).x;
    }

    /// Snaps the caret to the boundary nearest `offset` pixels from the text origin.
    ///
    /// Boundaries are found by accumulating `char_advance`; clicks past the last
    /// character land at the end.
    pub fn click_at(&mut self, offset: f32, metrics: &dyn TextMetrics) {
        let mut x = 0.0;
        for (i, c) in self.text.char_indices() {
            let adv = metrics.char_advance(c);
            if offset < x + adv * 0.5 {
                self.set_caret(i, x);
                return;
            }
            x += adv;
        }
        self.set_caret(self.text.len(), x);
    }

    fn set_caret(&mut self, caret: usize, x: f32) {
        self.caret = caret;
        self.anchor = caret;
        self.caret_x = x;
        self.reset_blink();
    }

    fn collapse_to(&mut self, at: usize, metrics: &dyn TextMetrics) {
        let x = metrics.text_size(&self.text[..at]).x;
        self.set_caret(at, x);
    }

    // ── editing ───────────────────────────────────────────────────────────

    /// Inserts `c` at the caret when the filter allows it.
    pub fn insert_char(&mut self, c: char, filter: &CharFilter, metrics: &dyn TextMetrics) -> bool {
        if c.is_control() {
            return false;
        }
        if let Some(v) = filter.validator {
            if !v(c) {
                return false;
            }
        }

        let had_selection = self.delete_selection(metrics);
        if self.text.chars().count() >= filter.max_len
            || !filter.kind.accepts(&self.text, self.caret, c)
        {
            return had_selection;
        }

        self.text.insert(self.caret, c);
        self.caret += c.len_utf8();
        self.anchor = self.caret;
        self.caret_x += step_width(metrics, c);
        self.reset_blink();
        true
    }

    /// Removes the character before the caret.
    pub fn backspace(&mut self, metrics: &dyn TextMetrics) -> bool {
        if self.delete_selection(metrics) {
            return true;
        }
        let Some(prev) = self.before_caret() else {
            return false;
        };
        if let Some(c) = self.text[prev..].chars().next() {
            self.caret_x -= step_width(metrics, c);
        }
        self.text.drain(prev..self.caret);
        self.caret = prev;
        self.anchor = prev;
        self.reset_blink();
        true
    }

    /// Removes the character after the caret.
    pub fn delete(&mut self, metrics: &dyn TextMetrics) -> bool {
        if self.delete_selection(metrics) {
            return true;
        }
        if self.caret >= self.text.len() {
            return false;
        }
        let next = next_char(&self.text, self.caret);
        self.text.drain(self.caret..next);
        self.reset_blink();
        true
    }

    fn delete_selection(&mut self, metrics: &dyn TextMetrics) -> bool {
        if !self.has_selection() {
            return false;
        }
        let (lo, hi) = self.selection();
        self.text.drain(lo..hi);
        self.collapse_to(lo, metrics);
        true
    }

    // ── clipboard ─────────────────────────────────────────────────────────

    fn selected_or_all(&self) -> &str {
        if self.has_selection() {
            let (lo, hi) = self.selection();
            &self.text[lo..hi]
        } else {
            &self.text
        }
    }

    pub fn copy(&self) {
        let text = self.selected_or_all().to_owned();
        match arboard::Clipboard::new() {
            Ok(mut cb) => {
                if let Err(e) = cb.set_text(text) {
                    log::warn!("clipboard write failed: {e}");
                }
            }
            Err(e) => log::warn!("clipboard unavailable: {e}"),
        }
    }

    pub fn cut(&mut self, metrics: &dyn TextMetrics) -> bool {
        self.copy();
        if !self.has_selection() {
            self.anchor = 0;
            self.end_keep_anchor(metrics);
        }
        self.delete_selection(metrics)
    }

    /// Inserts clipboard text through the character filter.
    pub fn paste(&mut self, filter: &CharFilter, metrics: &dyn TextMetrics) -> bool {
        let text = match arboard::Clipboard::new().and_then(|mut cb| cb.get_text()) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("clipboard read failed: {e}");
                return false;
            }
        };
        self.insert_str(&text, filter, metrics)
    }

    pub fn insert_str(&mut self, s: &str, filter: &CharFilter, metrics: &dyn TextMetrics) -> bool {
        let mut changed = false;
        for c in s.chars() {
            changed |= self.insert_char(c, filter, metrics);
        }
        changed
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Applies this frame's keys and text, in arrival order.
    pub fn apply_input(
        &mut self,
        input: &InputFrame,
        filter: &CharFilter,
        metrics: &dyn TextMetrics,
    ) -> EditOutcome {
        let mut out = EditOutcome::default();
        for ev in &input.events {
            match ev {
                InputEvent::Text(t) => out.changed |= self.insert_str(&t.text, filter, metrics),
                InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                    let cmd = modifiers.command();
                    match key {
                        Key::Backspace => out.changed |= self.backspace(metrics),
                        Key::Delete => out.changed |= self.delete(metrics),
                        Key::ArrowLeft => self.move_left(metrics),
                        Key::ArrowRight => self.move_right(metrics),
                        Key::Home => self.home(),
                        Key::End => self.end(metrics),
                        Key::A if cmd => self.select_all(metrics),
                        Key::C if cmd => self.copy(),
                        Key::X if cmd => out.changed |= self.cut(metrics),
                        Key::V if cmd => out.changed |= self.paste(filter, metrics),
                        Key::Enter => {
                            out.committed = true;
                            self.reseed = true;
                            // Keys after Enter belong to the reseeded buffer next frame.
                            break;
                        }
                        Key::Escape => {
                            out.cancelled = true;
                            break;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }
        out
    }
}

/// Pixel step for moving the caret over `c`.
fn step_width(metrics: &dyn TextMetrics, c: char) -> f32 {
    if c == '.' {
        metrics.char_advance(c)
    } else {
        metrics.char_width(c)
    }
}

// ── UTF-8 helpers ─────────────────────────────────────────────────────────

fn prev_char(s: &str, from: usize) -> usize {
    if from == 0 {
        return 0;
    }
    let mut i = from - 1;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char(s: &str, from: usize) -> usize {
    if from >= s.len() {
        return s.len();
    }
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Formats a float the way float fields display it.
pub fn format_f32(v: f32, precision: usize) -> String {
    format!("{v:.precision$}")
}
