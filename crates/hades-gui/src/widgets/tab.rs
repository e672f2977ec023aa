use hades_engine::coords::{CornerRadii, Rect, Vec2};

use crate::context::Gui;
use crate::id::{GuiId, WidgetKind};
use crate::painter::{center_in, Painter};
use crate::window::{TabBar, WindowHandle};

impl Gui {
    /// One tab of the window's tab bar. Returns true while it is the active
    /// tab, in which case the caller declares its body right after.
    ///
    /// The first tab declared in a frame reserves the bar across the window and
    /// becomes active when no other tab has been picked. Pressing a tab makes
    /// it active.
    pub fn tab(&mut self, label: &str) -> bool {
        let Some(h) = self.current() else {
            return false;
        };
        let tt = self.theme().tab;
        let pad = self.theme().window.padding;
        let id = self.next_id(h, WidgetKind::Tab);

        if self.registry.get(h).frame.tab_bar.is_none() {
            self.reserve_tab_bar(h, id, tt.height, tt.body_offset, pad);
        }

        let text = self.metrics.text_size(label);
        let w = self.registry.get_mut(h);
        let Some(bar) = w.frame.tab_bar.as_mut() else {
            return false;
        };
        let rect = Rect::new(bar.next_x, bar.rect.y(), text.x + tt.padding * 2.0, tt.height);
        bar.next_x = rect.right();
        if w.active_tab.is_none() {
            w.active_tab = Some(bar.first);
        }

        let visible = self.visible(h, rect);
        let it = if visible { self.interact(h, id, rect) } else { Default::default() };
        let w = self.registry.get_mut(h);
        if it.pressed && w.active_tab != Some(id) {
            log::debug!("tab {id} selected in '{}'", w.name);
            w.active_tab = Some(id);
        }
        let active = w.active_tab == Some(id);
        if active {
            if let Some(bar) = w.frame.tab_bar.as_mut() {
                bar.resolved = true;
            }
        }

        if visible {
            let color = if active || it.hot { tt.active_color } else { tt.color };
            let line = self.metrics.line_height();
            let w = self.registry.get_mut(h);
            Painter::new(&mut w.draw_list).clipped(rect, |p| {
                p.fill_rounded_rect_corners(rect, CornerRadii::top(tt.rounding), color, None);
                p.text(label, line, tt.text_color, center_in(rect, text));
            });
        }
        active
    }

    fn reserve_tab_bar(&mut self, h: WindowHandle, first: GuiId, height: f32, body_offset: f32, pad: f32) {
        let w = self.registry.get_mut(h);
        let right = w.frame.view.right() - pad;
        let layout = &mut w.frame.layout;
        let width = layout.available_width(right);
        let rect = layout.place(Vec2::new(width, height));
        // Body starts `body_offset` below the bar instead of a full spacing.
        layout.skip(body_offset - layout.spacing());
        w.frame.tab_bar = Some(TabBar { rect, next_x: rect.x(), first, resolved: false });
        self.last_item = Some(rect);
    }
}
