use crate::context::Gui;
use crate::id::WidgetKind;
use crate::painter::Painter;

impl Gui {
    /// A non-interactive label.
    pub fn text(&mut self, s: &str) {
        let Some(h) = self.current() else {
            return;
        };
        let _ = self.next_id(h, WidgetKind::Text);
        let size = self.metrics.text_size(s);
        let rect = self.place(h, size);
        if !self.visible(h, rect) {
            return;
        }
        let color = self.theme().text_color;
        let line = self.metrics.line_height();
        let w = self.registry.get_mut(h);
        Painter::new(&mut w.draw_list).clipped(rect, |p| p.text(s, line, color, rect.origin));
    }
}
