use hades_engine::coords::Vec2;

use crate::context::Gui;
use crate::id::WidgetKind;
use crate::painter::{center_in, Painter};

impl Gui {
    /// A push button sized from its label and the button theme.
    ///
    /// Returns true on the frame a press that started on the button is
    /// released over it.
    pub fn button(&mut self, label: &str) -> bool {
        let Some(h) = self.current() else {
            return false;
        };
        let bt = self.button_theme();
        let id = self.next_id(h, WidgetKind::Button);
        let text = self.metrics.text_size(label);
        let size = bt
            .size
            .unwrap_or(text + Vec2::new(bt.padding * 2.0, bt.padding * 2.0));
        let rect = self.place(h, size);
        if !self.visible(h, rect) {
            return false;
        }

        let it = self.interact(h, id, rect);
        let color = if it.hot || it.active { bt.hover_color } else { bt.color };
        let line = self.metrics.line_height();

        let w = self.registry.get_mut(h);
        Painter::new(&mut w.draw_list).clipped(rect, |p| {
            p.fill_rounded_rect(rect, bt.rounding, color);
            p.text(label, line, bt.text_color, center_in(rect, text));
        });
        it.clicked
    }
}
