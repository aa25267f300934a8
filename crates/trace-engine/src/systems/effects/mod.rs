//! Visual effects: dot-hit bursts, confetti and the finger trail.
//!
//! `EffectsState` owns everything that is drawn as raw triangles rather than
//! sprites, and rebuilds the flat vertex buffer the host uploads each frame.

mod confetti;
mod geometry;
mod particle;
mod rng;
mod trail;

pub use confetti::ConfettiEmitter;
pub use geometry::{build_ribbon, lerp_rgba, push_quad, RibbonStyle, Rgba, VERTEX_FLOATS};
pub use particle::{burst, BurstStyle, Particle};
pub use rng::Rng;
pub use trail::TrailLine;

use glam::Vec2;

/// Handle to an emitter registered with `EffectsState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmitterId(pub u32);

pub struct EffectsState {
    pub particles: Vec<Particle>,
    emitters: Vec<(EmitterId, ConfettiEmitter)>,
    next_emitter: u32,
    /// The pointer trail. Drawn beneath particles.
    pub trail: TrailLine,
    pub effects_buffer: Vec<f32>,
    pub rng: Rng,
}

impl EffectsState {
    pub fn new(seed: u64) -> Self {
        Self::with_capacity(seed, 4096)
    }

    /// Pre-allocate room for `max_vertices` effect vertices.
    pub fn with_capacity(seed: u64, max_vertices: usize) -> Self {
        EffectsState {
            particles: Vec::new(),
            emitters: Vec::new(),
            next_emitter: 0,
            trail: TrailLine::default(),
            effects_buffer: Vec::with_capacity(max_vertices * VERTEX_FLOATS),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// One-off radial burst at `center`.
    pub fn spawn_burst(&mut self, center: Vec2, style: &BurstStyle) {
        burst(center, style, &mut self.rng, &mut self.particles);
    }

    pub fn add_emitter(&mut self, emitter: ConfettiEmitter) -> EmitterId {
        let id = EmitterId(self.next_emitter);
        self.next_emitter += 1;
        self.emitters.push((id, emitter));
        id
    }

    pub fn emitter(&self, id: EmitterId) -> Option<&ConfettiEmitter> {
        self.emitters.iter().find(|(eid, _)| *eid == id).map(|(_, e)| e)
    }

    pub fn emitter_mut(&mut self, id: EmitterId) -> Option<&mut ConfettiEmitter> {
        self.emitters.iter_mut().find(|(eid, _)| *eid == id).map(|(_, e)| e)
    }

    /// Advance emitters and particles by one fixed step.
    pub fn tick(&mut self, dt: f32) {
        for (_, emitter) in &mut self.emitters {
            emitter.tick(dt, &mut self.rng, &mut self.particles);
        }
        self.particles.retain_mut(|p| p.tick(dt));
    }

    /// Rebuild the triangle list, stopping before `max_vertices` would be exceeded.
    /// The trail gets what live particles leave over, but never less than half;
    /// when it does not fit, its oldest points are left out.
    pub fn rebuild_effects_buffer(&mut self, max_vertices: usize) {
        self.effects_buffer.clear();
        let max_floats = max_vertices * VERTEX_FLOATS;
        let quad_vertices = 6;

        let trail_budget = max_vertices
            .saturating_sub(self.particles.len() * quad_vertices)
            .max(max_vertices / 2);
        let drawn = self.trail.write_vertices(&mut self.effects_buffer, trail_budget);
        if drawn < self.trail.len() {
            log::debug!("trail clipped to its newest {} of {} points", drawn, self.trail.len());
        }

        let quad_floats = quad_vertices * VERTEX_FLOATS;
        for p in &self.particles {
            if self.effects_buffer.len() + quad_floats > max_floats {
                break;
            }
            p.write_vertices(&mut self.effects_buffer);
        }
    }

    /// Drop particles, emitters and the trail (scene change).
    pub fn clear(&mut self) {
        self.particles.clear();
        self.emitters.clear();
        self.trail.clear();
        self.effects_buffer.clear();
    }

    pub fn effects_vertex_count(&self) -> usize {
        self.effects_buffer.len() / VERTEX_FLOATS
    }

    pub fn effects_buffer_ptr(&self) -> *const f32 {
        self.effects_buffer.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_then_expire() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::new(50.0, 50.0), &BurstStyle::sparkle());
        assert_eq!(effects.particles.len(), BurstStyle::sparkle().count);
        for _ in 0..60 {
            effects.tick(1.0 / 60.0);
        }
        assert!(effects.particles.is_empty());
    }

    #[test]
    fn emitter_feeds_particles() {
        let mut effects = EffectsState::new(42);
        let id = effects.add_emitter(ConfettiEmitter::new((0.0, 800.0), -20.0));
        effects.tick(0.1);
        assert!(effects.particles.is_empty());

        effects.emitter_mut(id).unwrap().play();
        effects.tick(0.1);
        assert!(!effects.particles.is_empty());
    }

    #[test]
    fn buffer_contains_trail_and_particles() {
        let mut effects = EffectsState::new(42);
        effects.trail.push_point(Vec2::ZERO, 0.0);
        effects.trail.push_point(Vec2::new(30.0, 0.0), 0.0);
        effects.rebuild_effects_buffer(16384);
        let trail_only = effects.effects_vertex_count();
        assert!(trail_only > 0);

        effects.spawn_burst(Vec2::ZERO, &BurstStyle::sparkle());
        effects.rebuild_effects_buffer(16384);
        assert_eq!(effects.effects_vertex_count(), trail_only + 6 * BurstStyle::sparkle().count);
    }

    #[test]
    fn buffer_respects_capacity() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::ZERO, &BurstStyle::sparkle());
        effects.rebuild_effects_buffer(13);
        // two whole quads fit in 13 vertices
        assert_eq!(effects.effects_vertex_count(), 12);
    }

    #[test]
    fn long_trail_leaves_room_for_particles() {
        let mut effects = EffectsState::new(42);
        for i in 0..3000 {
            effects.trail.push_point(Vec2::new(i as f32 * 3.0, 0.0), 0.0);
        }
        let newest = *effects.trail.points().last().unwrap();
        assert_eq!(newest, Vec2::new(2999.0 * 3.0, 0.0));
        effects.spawn_burst(Vec2::ZERO, &BurstStyle::sparkle());
        let live = effects.particles.len();

        let caps = effects.trail.style.cap_vertices as usize * 3;

        for capacity in [16384, 2048] {
            effects.rebuild_effects_buffer(capacity);
            let count = effects.effects_vertex_count();
            assert!(count <= capacity);

            // every particle quad follows the trail at the end of the buffer
            let trail_vertices = count - 6 * live;
            assert!(trail_vertices > capacity / 4);
            let first_particle = &effects.effects_buffer[trail_vertices * VERTEX_FLOATS..];
            let corner = Vec2::new(first_particle[0], first_particle[1]);
            assert!(corner.distance(effects.particles[0].pos) < 10.0);

            // the end cap is centred on the newest point
            let end_cap = &effects.effects_buffer[(trail_vertices - caps) * VERTEX_FLOATS..];
            assert_eq!(Vec2::new(end_cap[0], end_cap[1]), newest);
        }
    }

    #[test]
    fn clear_drops_everything() {
        let mut effects = EffectsState::new(42);
        effects.add_emitter(ConfettiEmitter::new((0.0, 1.0), 0.0));
        effects.spawn_burst(Vec2::ZERO, &BurstStyle::sparkle());
        effects.trail.push_point(Vec2::ZERO, 0.0);
        effects.clear();
        assert!(effects.particles.is_empty());
        assert!(effects.trail.is_empty());
        assert!(effects.emitter(EmitterId(0)).is_none());
    }
}
