//! Short-lived quads: dot-hit sparkles and confetti pieces.

use glam::Vec2;
use super::geometry::{push_quad, Rgba};
use super::rng::Rng;

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    /// Radians per second.
    pub spin: f32,
    pub color: Rgba,
    /// Seconds left to live.
    pub life: f32,
    pub max_life: f32,
    /// World units per second², positive is down (world is Y-down).
    pub gravity: f32,
    /// Fraction of velocity lost per second.
    pub drag: f32,
}

impl Particle {
    /// Advance one step. Returns false once the particle has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.life -= dt;
        if self.life <= 0.0 {
            return false;
        }
        self.vel.y += self.gravity * dt;
        self.vel *= (1.0 - self.drag * dt).max(0.0);
        self.pos += self.vel * dt;
        self.rotation += self.spin * dt;
        true
    }

    /// Colour with alpha faded by remaining life.
    pub fn faded_color(&self) -> Rgba {
        let fade = if self.max_life > 0.0 {
            (self.life / self.max_life).clamp(0.0, 1.0)
        } else {
            0.0
        };
        [self.color[0], self.color[1], self.color[2], self.color[3] * fade]
    }

    pub fn write_vertices(&self, out: &mut Vec<f32>) {
        push_quad(out, self.pos, self.size, self.rotation, self.faded_color());
    }
}

/// Parameters of a radial one-off burst.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstStyle {
    pub count: usize,
    /// Initial speed range in world units per second.
    pub speed: (f32, f32),
    pub size: f32,
    pub lifetime: f32,
    pub gravity: f32,
    pub drag: f32,
    pub palette: Vec<Rgba>,
}

impl BurstStyle {
    /// Small bright sparkles, used when a dot is traced.
    pub fn sparkle() -> Self {
        Self {
            count: 12,
            speed: (80.0, 220.0),
            size: 7.0,
            lifetime: 0.45,
            gravity: 0.0,
            drag: 3.0,
            palette: vec![
                [1.0, 0.95, 0.6, 1.0],
                [1.0, 0.75, 0.85, 1.0],
                [1.0, 1.0, 1.0, 1.0],
            ],
        }
    }
}

/// Particles flying outward from `center` in random directions.
pub fn burst(center: Vec2, style: &BurstStyle, rng: &mut Rng, out: &mut Vec<Particle>) {
    for _ in 0..style.count {
        let angle = rng.range(0.0, std::f32::consts::TAU);
        let speed = rng.range(style.speed.0, style.speed.1);
        let color = rng.pick(&style.palette).copied().unwrap_or([1.0; 4]);
        out.push(Particle {
            pos: center,
            vel: Vec2::from_angle(angle) * speed,
            size: Vec2::splat(style.size),
            rotation: angle,
            spin: 0.0,
            color,
            life: style.lifetime,
            max_life: style.lifetime,
            gravity: style.gravity,
            drag: style.drag,
        });
    }
}
