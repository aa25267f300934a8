//! Confetti shower for the end-of-letter celebration.

use glam::Vec2;
use super::geometry::Rgba;
use super::particle::Particle;
use super::rng::Rng;

/// Emits confetti from a horizontal band above the visible area.
///
/// Starts inactive. `play` activates it and emits for `duration` seconds;
/// pieces already in flight finish their fall after emission stops.
#[derive(Debug, Clone)]
pub struct ConfettiEmitter {
    /// Left and right x of the spawn band.
    pub span: (f32, f32),
    /// Y of the spawn band (negative is above the top edge).
    pub spawn_y: f32,
    /// Pieces per second.
    pub rate: f32,
    pub duration: f32,
    pub palette: Vec<Rgba>,
    active: bool,
    elapsed: f32,
    carry: f32,
}

impl ConfettiEmitter {
    pub fn new(span: (f32, f32), spawn_y: f32) -> Self {
        Self {
            span,
            spawn_y,
            rate: 140.0,
            duration: 2.5,
            palette: vec![
                [1.0, 0.45, 0.55, 1.0],
                [1.0, 0.8, 0.3, 1.0],
                [0.45, 0.85, 0.55, 1.0],
                [0.4, 0.7, 1.0, 1.0],
                [0.75, 0.55, 1.0, 1.0],
            ],
            active: false,
            elapsed: 0.0,
            carry: 0.0,
        }
    }

    /// Start (or restart) emission.
    pub fn play(&mut self) {
        self.active = true;
        self.elapsed = 0.0;
        self.carry = 0.0;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_playing(&self) -> bool {
        self.active && self.elapsed < self.duration
    }

    /// Emit this step's share of pieces.
    pub fn tick(&mut self, dt: f32, rng: &mut Rng, out: &mut Vec<Particle>) {
        if !self.is_playing() {
            return;
        }
        self.elapsed += dt;
        self.carry += self.rate * dt;
        while self.carry >= 1.0 {
            self.carry -= 1.0;
            out.push(self.piece(rng));
        }
    }

    fn piece(&self, rng: &mut Rng) -> Particle {
        let color = rng.pick(&self.palette).copied().unwrap_or([1.0; 4]);
        let life = rng.range(2.5, 4.0);
        Particle {
            pos: Vec2::new(rng.range(self.span.0, self.span.1), self.spawn_y),
            vel: Vec2::new(rng.range(-60.0, 60.0), rng.range(40.0, 160.0)),
            size: Vec2::new(rng.range(6.0, 10.0), rng.range(10.0, 16.0)),
            rotation: rng.range(0.0, std::f32::consts::TAU),
            spin: rng.range(-6.0, 6.0),
            color,
            life,
            max_life: life,
            gravity: 180.0,
            drag: 0.8,
        }
    }
}
