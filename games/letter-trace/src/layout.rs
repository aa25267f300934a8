//! Mapping from design units (Y up, origin at the centre of the play area)
//! to world pixels (Y down, 800×600).

use glam::Vec2;

pub const WORLD_W: f32 = 800.0;
pub const WORLD_H: f32 = 600.0;

/// World pixels per design unit.
pub const UNIT: f32 = 100.0;

pub fn to_world(p: Vec2) -> Vec2 {
    Vec2::new(WORLD_W * 0.5 + p.x * UNIT, WORLD_H * 0.5 - p.y * UNIT)
}

pub fn center() -> Vec2 {
    Vec2::new(WORLD_W * 0.5, WORLD_H * 0.5)
}
