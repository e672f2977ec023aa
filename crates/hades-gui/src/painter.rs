use hades_engine::coords::{CornerRadii, Rect, Vec2};
use hades_engine::paint::Color;
use hades_engine::scene::shapes::TextureId;
use hades_engine::scene::{Border, DrawList, ZIndex};

/// Thin drawing facade over one window's [`DrawList`].
///
/// Content goes on layer 0; chrome that must stay above scrolled content
/// (scrollbars) goes on [`Painter::OVERLAY`].
pub struct Painter<'a> {
    list: &'a mut DrawList,
    z: ZIndex,
}

impl<'a> Painter<'a> {
    pub const CONTENT: ZIndex = ZIndex(0);
    pub const OVERLAY: ZIndex = ZIndex(1);

    pub fn new(list: &'a mut DrawList) -> Self {
        Self { list, z: Self::CONTENT }
    }

    pub fn on_layer(list: &'a mut DrawList, z: ZIndex) -> Self {
        Self { list, z }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.list.push_solid_rect(self.z, rect, color);
    }

    /// Rounded rectangle; `radius = 0.0` for sharp corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.fill_rounded_rect_corners(rect, CornerRadii::all(radius), color, None);
    }

    pub fn fill_rounded_rect_corners(
        &mut self,
        rect: Rect,
        radii: CornerRadii,
        color: Color,
        border: Option<Border>,
    ) {
        if radii.is_zero() && border.is_none() {
            self.list.push_solid_rect(self.z, rect, color);
        } else {
            self.list.push_rounded_rect(self.z, rect, radii, color, border);
        }
    }

    pub fn outline(&mut self, rect: Rect, radius: f32, width: f32, color: Color) {
        self.list
            .push_outline(self.z, rect, CornerRadii::all(radius), Border::new(width, color));
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, border: Option<Border>) {
        self.list.push_circle(self.z, center, radius, color, border);
    }

    /// Single line of text with its top-left at `origin`.
    pub fn text(&mut self, text: &str, size: f32, color: Color, origin: Vec2) {
        if !text.is_empty() {
            self.list.push_text(self.z, text, size, color, origin);
        }
    }

    pub fn texture(&mut self, texture: TextureId, rect: Rect, tint: Color) {
        self.list.push_texture(self.z, texture, rect, tint);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Runs `f` inside a scissor scope, so push/pop always balance.
    pub fn clipped<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Painter<'_>) -> R) -> R {
        self.list.push_clip(rect);
        let out = {
            let mut inner = Painter { list: &mut *self.list, z: self.z };
            f(&mut inner)
        };
        self.list.pop_clip();
        out
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.list.pop_clip();
    }
}

/// Top-left for `size` centered inside `rect`.
pub fn center_in(rect: Rect, size: Vec2) -> Vec2 {
    rect.centered(size).origin
}

/// Top-left for text of `size` left-aligned at `inset` and vertically centered.
pub fn left_in(rect: Rect, size: Vec2, inset: f32) -> Vec2 {
    Vec2::new(rect.x() + inset, rect.y() + (rect.height() - size.y) * 0.5)
}
