/// Identifies which texture atlas a sprite belongs to.
/// Index into the AssetManifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// Blend mode for sprite rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending.
    #[default]
    Alpha,
    /// Additive blending, used for glows and sparkles.
    Additive,
}

/// Which cell of which atlas an entity draws, and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    pub atlas: AtlasId,
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Number of cells this sprite spans (1.0 = single cell, 2.0 = 2x2 block).
    pub cell_span: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    pub blend: BlendMode,
}

impl SpriteComponent {
    /// Swap the atlas cell while keeping the current alpha and blend mode.
    pub fn set_frame(&mut self, frame: &SpriteComponent) {
        self.atlas = frame.atlas;
        self.col = frame.col;
        self.row = frame.row;
        self.cell_span = frame.cell_span;
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            atlas: AtlasId(0),
            col: 0.0,
            row: 0.0,
            cell_span: 1.0,
            alpha: 1.0,
            blend: BlendMode::Alpha,
        }
    }
}
