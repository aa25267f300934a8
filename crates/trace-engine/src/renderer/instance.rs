use bytemuck::{Pod, Zeroable};

/// Per-sprite data written to SharedArrayBuffer for the TypeScript renderer.
/// 8 floats = 32 bytes stride, mirrored in `protocol.ts`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Rendered size in world units (base size × scale).
    pub scale: f32,
    pub sprite_col: f32,
    pub alpha: f32,
    /// UV cell span (1.0 = single cell).
    pub cell_span: f32,
    pub atlas_row: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Sprite instances for one frame.
pub struct RenderBuffer {
    /// Alpha-blended instances first, additive instances from `atlas_split` on.
    pub instances: Vec<RenderInstance>,
    pub atlas_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            atlas_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.atlas_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn set_atlas_split(&mut self, split: u32) {
        self.atlas_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<RenderInstance, f32>(&self.instances).as_ptr()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
