use hades_engine::coords::{Rect, Vec2};
use hades_engine::scene::Border;

use crate::context::Gui;
use crate::id::WidgetKind;
use crate::painter::{left_in, Painter};

impl Gui {
    /// A round toggle with a label. Flips `value` when clicked.
    ///
    /// Returns true when `value` changed.
    pub fn radio_button(&mut self, label: &str, value: &mut bool) -> bool {
        let Some(h) = self.current() else {
            return false;
        };
        let rt = self.theme().radio;
        let id = self.next_id(h, WidgetKind::Radio);
        let text = self.metrics.text_size(label);
        let label_w = if label.is_empty() { 0.0 } else { rt.label_gap + text.x };
        let rect = self.place(h, Vec2::new(rt.size + label_w, rt.size.max(text.y)));
        if !self.visible(h, rect) {
            return false;
        }

        let it = self.interact(h, id, rect);
        if it.clicked {
            *value = !*value;
        }

        let dot = Rect::new(rect.x(), rect.y() + (rect.height() - rt.size) * 0.5, rt.size, rt.size);
        let label_rect = Rect::new(dot.right() + rt.label_gap, rect.y(), text.x, rect.height());
        let checked = *value;
        let line = self.metrics.line_height();

        let w = self.registry.get_mut(h);
        Painter::new(&mut w.draw_list).clipped(rect, |p| {
            let r = rt.size * 0.5;
            p.fill_circle(dot.center(), r, rt.color, Some(Border::new(1.0, rt.checked_color)));
            if checked {
                p.fill_circle(dot.center(), r * 0.5, rt.checked_color, None);
            }
            p.text(label, line, rt.text_color, left_in(label_rect, text, 0.0));
        });
        it.clicked
    }
}
