use hades_engine::coords::{Rect, Vec2};

use crate::context::Gui;
use crate::edit::{format_f32, CharFilter, CharValidator, EditKind};
use crate::id::WidgetKind;
use crate::painter::{left_in, Painter};

const AXES: [&str; 3] = ["X", "Y", "Z"];

impl Gui {
    /// Integer field. Returns true on the frame a parsable value was written back.
    pub fn edit_field_i32(&mut self, label: &str, value: &mut i32) -> bool {
        let filter = self.filter(EditKind::Int, None);
        let width = self.theme().edit_field.size.x;
        let Some(text) = self.edit_field_raw(label, value.to_string(), filter, width) else {
            return false;
        };
        match text.trim().parse() {
            Ok(v) => {
                *value = v;
                true
            }
            Err(e) => {
                log::debug!("edit field '{label}': '{text}' is not an integer ({e})");
                false
            }
        }
    }

    /// Float field shown with the theme's precision.
    pub fn edit_field_f32(&mut self, label: &str, value: &mut f32) -> bool {
        let width = self.theme().edit_field.size.x;
        self.float_field(label, value, width)
    }

    pub fn edit_field_string(&mut self, label: &str, value: &mut String) -> bool {
        self.edit_field_with(label, value, None)
    }

    /// Text field whose typed and pasted characters must pass `validator`.
    pub fn edit_field_with(&mut self, label: &str, value: &mut String, validator: Option<CharValidator>) -> bool {
        let filter = self.filter(EditKind::Text, validator);
        let width = self.theme().edit_field.size.x;
        match self.edit_field_raw(label, value.clone(), filter, width) {
            Some(text) => {
                *value = text;
                true
            }
            None => false,
        }
    }

    /// Three float fields labelled X, Y and Z on one row, followed by `label`.
    pub fn edit_field_vec3(&mut self, label: &str, value: &mut [f32; 3]) -> bool {
        let et = self.theme().edit_field;
        let spacing = self.theme().window.spacing;
        let axis_w = self.metrics.text_size("X").x + et.label_gap;
        let width = ((et.size.x - 2.0 * (spacing + axis_w)) / 3.0).max(et.size.y);

        let mut changed = false;
        for (i, v) in value.iter_mut().enumerate() {
            if i > 0 {
                self.same_line();
            }
            changed |= self.float_field(AXES[i], v, width);
        }
        if !label.is_empty() {
            self.same_line();
            self.text(label);
        }
        self.next_line();
        changed
    }

    fn float_field(&mut self, label: &str, value: &mut f32, width: f32) -> bool {
        let precision = self.theme().edit_field.float_precision;
        let filter = self.filter(EditKind::Float { precision }, None);
        let Some(text) = self.edit_field_raw(label, format_f32(*value, precision), filter, width) else {
            return false;
        };
        match text.trim().parse() {
            Ok(v) => {
                *value = v;
                true
            }
            Err(e) => {
                log::debug!("edit field '{label}': '{text}' is not a number ({e})");
                false
            }
        }
    }

    fn filter(&self, kind: EditKind, validator: Option<CharValidator>) -> CharFilter {
        CharFilter { kind, max_len: self.theme().edit_field.max_len, validator }
    }

    /// Shared edit field body. `seed` is the external value formatted for
    /// display; returns the buffer on the frame it is committed.
    fn edit_field_raw(&mut self, label: &str, seed: String, filter: CharFilter, width: f32) -> Option<String> {
        let h = self.current()?;
        let et = self.theme().edit_field;
        let id = self.next_id(h, WidgetKind::EditField);

        let label_size = self.metrics.text_size(label);
        let label_w = if label.is_empty() { 0.0 } else { et.label_gap + label_size.x };
        let slot = self.place(h, Vec2::new(width + label_w, et.size.y.max(label_size.y)));
        let field = Rect::new(slot.x(), slot.y(), width, et.size.y);

        // A buffer parked when this field lost ownership commits now.
        let mut committed = self.edit.take_pending(id);
        if committed.is_some() {
            log::debug!("edit field {id} committed on deactivation");
        }

        if !self.visible(h, slot) {
            return committed;
        }

        let it = self.interact(h, id, field);
        if it.pressed {
            if !self.edit.is_owner(id) {
                self.edit.activate(id, seed.clone(), self.metrics.as_ref());
            }
            if it.hot {
                if let Some(p) = self.pointer() {
                    let offset = p.x - field.x() - et.text_offset;
                    self.edit.click_at(offset, self.metrics.as_ref());
                }
            }
        }

        let owner = self.edit.is_owner(id);
        let mut caret_visible = false;
        if owner {
            self.edit.owner_seen = self.frame;
            if self.edit.needs_reseed() {
                self.edit.reseed(seed.clone(), self.metrics.as_ref());
            }
            let out = self.edit.apply_input(&self.frame_input, &filter, self.metrics.as_ref());
            if out.cancelled {
                self.edit.abandon();
            } else {
                if out.committed {
                    log::debug!("edit field {id} committed with '{}'", self.edit.text());
                    committed = Some(self.edit.text().to_owned());
                }
                caret_visible = self.edit.tick_blink(self.dt, et.blink_period);
            }
        }

        let owner = self.edit.is_owner(id);
        let shown = if owner { self.edit.text().to_owned() } else { seed };
        let text_size = self.metrics.text_size(&shown);
        let line = self.metrics.line_height();
        let text_origin = left_in(field, text_size, et.text_offset);
        let caret_h = field.height() * et.caret_height;
        let caret = Rect::new(
            text_origin.x + self.edit.caret_x(),
            field.y() + (field.height() - caret_h) * 0.5,
            et.caret_width,
            caret_h,
        );
        let selection = (owner && self.edit.has_selection()).then(|| {
            let (a, b) = self.edit.selection();
            let x0 = self.metrics.text_size(&shown[..a]).x;
            let x1 = self.metrics.text_size(&shown[..b]).x;
            Rect::new(text_origin.x + x0, caret.y(), x1 - x0, caret_h)
        });
        let label_rect = Rect::new(field.right() + et.label_gap, slot.y(), label_size.x, slot.height());
        let color = if owner { et.active_color } else { et.color };

        let w = self.registry.get_mut(h);
        let mut p = Painter::new(&mut w.draw_list);
        p.clipped(field, |p| {
            p.fill_rounded_rect(field, et.rounding, color);
            if let Some(sel) = selection {
                p.fill_rect(sel, et.selection_color);
            }
            p.text(&shown, line, et.text_color, text_origin);
            if caret_visible {
                p.fill_rect(caret, et.caret_color);
            }
        });
        if !label.is_empty() {
            p.clipped(label_rect, |p| p.text(label, line, et.text_color, left_in(label_rect, label_size, 0.0)));
        }
        committed
    }
}
