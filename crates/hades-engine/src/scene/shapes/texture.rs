use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Opaque handle to an image the host uploaded to its renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Textured quad payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureCmd {
    pub texture: TextureId,
    pub rect: Rect,
    pub tint: Color,
}

impl DrawList {
    /// Records a textured quad multiplied by `tint`.
    #[inline]
    pub fn push_texture(&mut self, z: ZIndex, texture: TextureId, rect: Rect, tint: Color) {
        self.push(z, DrawCmd::Texture(TextureCmd { texture, rect, tint }));
    }
}
