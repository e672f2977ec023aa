use hades_engine::coords::{Rect, Vec2};

use crate::context::Gui;
use crate::id::WidgetKind;
use crate::painter::{left_in, Painter};

impl Gui {
    /// A dropdown selector over `items` with the selection in `selected`.
    ///
    /// Pressing the field toggles a popup listing every item. Clicking an item
    /// stores its index, closes the popup and returns true. A press anywhere
    /// outside the field and the popup closes it without a change.
    pub fn list_box(&mut self, label: &str, items: &[&str], selected: &mut usize) -> bool {
        let Some(h) = self.current() else {
            return false;
        };
        let lt = self.theme().list_box;
        let gap = self.theme().edit_field.label_gap;
        let id = self.next_id(h, WidgetKind::ListBox);

        let label_size = self.metrics.text_size(label);
        let label_w = if label.is_empty() { 0.0 } else { gap + label_size.x };
        let slot = self.place(h, Vec2::new(lt.size.x + label_w, lt.size.y.max(label_size.y)));
        let field = Rect::from_origin_size(slot.origin, lt.size);
        let popup_name = format!("##list_box_{id}");

        if !self.visible(h, slot) {
            if self.open_list_box == Some(id) {
                self.open_list_box = None;
                self.close_popup(&popup_name);
            }
            return false;
        }

        let it = self.interact(h, id, field);
        let mut open = self.open_list_box == Some(id);
        if it.pressed {
            open = !open;
        }

        let popup = Rect::new(field.x(), field.bottom(), field.width(), lt.item_height * items.len() as f32);
        if open && self.left_pressed() && !it.pressed && !self.pointer_in(popup) {
            open = false;
        }

        let line = self.metrics.line_height();
        let current = items.get(*selected).copied().unwrap_or_default();
        let current_size = self.metrics.text_size(current);
        let label_rect = Rect::new(field.right() + gap, slot.y(), label_size.x, slot.height());
        let field_color = if it.hot || open { lt.item_hover_color } else { lt.color };
        let w = self.registry.get_mut(h);
        Painter::new(&mut w.draw_list).clipped(slot, |p| {
            p.fill_rounded_rect(field, lt.rounding, field_color);
            p.text(current, line, lt.text_color, left_in(field, current_size, lt.text_offset));
            p.text(label, line, lt.text_color, left_in(label_rect, label_size, 0.0));
        });

        let mut changed = false;
        if open && !items.is_empty() {
            self.begin_popup(&popup_name, popup);
            if let Some(pick) = self.list_items(items, *selected) {
                if pick != *selected {
                    changed = true;
                }
                *selected = pick;
                open = false;
            }
            self.end_popup();
        }

        if open {
            self.open_list_box = Some(id);
        } else if self.open_list_box == Some(id) {
            self.open_list_box = None;
            self.close_popup(&popup_name);
        }
        changed
    }

    /// Draws the rows of the open popup; returns the clicked index.
    fn list_items(&mut self, items: &[&str], selected: usize) -> Option<usize> {
        let h = self.current()?;
        let lt = self.theme().list_box;
        let line = self.metrics.line_height();
        let view = self.registry.get(h).frame.view;
        let mut pick = None;

        for (i, item) in items.iter().enumerate() {
            let id = self.next_id(h, WidgetKind::ListItem);
            let row = Rect::new(view.x(), view.y() + lt.item_height * i as f32, view.width(), lt.item_height);
            self.registry.get_mut(h).frame.layout.commit(row);
            let it = self.interact(h, id, row);
            if it.clicked {
                pick = Some(i);
            }

            let color = if it.hot || i == selected { lt.item_hover_color } else { lt.popup_color };
            let size = self.metrics.text_size(item);
            let w = self.registry.get_mut(h);
            Painter::new(&mut w.draw_list).clipped(row, |p| {
                p.fill_rect(row, color);
                p.text(item, line, lt.text_color, left_in(row, size, lt.text_offset));
            });
        }
        pick
    }
}
