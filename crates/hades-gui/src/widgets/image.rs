use hades_engine::coords::Vec2;
use hades_engine::paint::Color;
use hades_engine::scene::shapes::TextureId;

use crate::context::Gui;
use crate::id::WidgetKind;
use crate::painter::Painter;

impl Gui {
    /// Places a textured quad of `size`. Returns true when clicked.
    pub fn image(&mut self, texture: TextureId, size: Vec2) -> bool {
        let Some(h) = self.current() else {
            return false;
        };
        let id = self.next_id(h, WidgetKind::Image);
        let rect = self.place(h, size);
        if !self.visible(h, rect) {
            return false;
        }
        let it = self.interact(h, id, rect);
        let w = self.registry.get_mut(h);
        Painter::new(&mut w.draw_list).clipped(rect, |p| p.texture(texture, rect, Color::WHITE));
        it.clicked
    }
}
