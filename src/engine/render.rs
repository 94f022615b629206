// Render-side draw commands

use glam::Vec2;

use super::assets::TextureHandle;

/// Source rectangle inside a texture, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One sprite to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub texture: TextureHandle,
    pub region: TextureRegion,
    /// Centre of the sprite in world space
    pub position: Vec2,
    /// On-screen size in world units
    pub size: Vec2,
    pub flip_horizontal: bool,
}

/// Surface the host renders into
///
/// Camera offset and pixel output are the host's business; entities only
/// submit world-space draw commands.
pub trait RenderTarget {
    fn draw_sprite(&mut self, sprite: SpriteDraw);
}

/// Render target that records commands instead of drawing them
#[derive(Debug, Default)]
pub struct DrawList {
    pub sprites: Vec<SpriteDraw>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl RenderTarget for DrawList {
    fn draw_sprite(&mut self, sprite: SpriteDraw) {
        self.sprites.push(sprite);
    }
}
