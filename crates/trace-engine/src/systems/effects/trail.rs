//! Line that follows the player's finger while it is down.

use glam::Vec2;
use super::geometry::{build_ribbon, ribbon_vertex_count, RibbonStyle};

/// Points kept before the oldest ones are dropped.
pub const MAX_TRAIL_POINTS: usize = 1024;

#[derive(Debug, Clone)]
pub struct TrailLine {
    points: Vec<Vec2>,
    max_points: usize,
    pub style: RibbonStyle,
}

impl TrailLine {
    pub fn new(style: RibbonStyle) -> Self {
        Self {
            points: Vec::with_capacity(256),
            max_points: MAX_TRAIL_POINTS,
            style,
        }
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points.max(2);
        self
    }

    /// Append `p` if it is the first point or farther than `min_distance`
    /// from the last one. Returns whether the point was kept. Past
    /// `max_points` the oldest points are dropped.
    pub fn push_point(&mut self, p: Vec2, min_distance: f32) -> bool {
        match self.points.last() {
            Some(last) if last.distance(p) <= min_distance => false,
            _ => {
                self.points.push(p);
                if self.points.len() > self.max_points {
                    let excess = self.points.len() - self.max_points;
                    self.points.drain(..excess);
                }
                true
            }
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Write the ribbon through the newest points whose triangles fit in
    /// `max_vertices`. Returns the number of points drawn.
    pub fn write_vertices(&self, out: &mut Vec<f32>, max_vertices: usize) -> usize {
        let mut n = self.points.len();
        while n >= 2 && ribbon_vertex_count(n, self.style.cap_vertices) > max_vertices {
            n -= 1;
        }
        if n < 2 {
            return 0;
        }
        build_ribbon(&self.points[self.points.len() - n..], &self.style, out);
        n
    }
}

impl Default for TrailLine {
    fn default() -> Self {
        Self::new(RibbonStyle {
            start_width: 20.0,
            end_width: 10.0,
            start_color: [1.0, 1.0, 1.0, 1.0],
            end_color: [1.0, 1.0, 1.0, 1.0],
            cap_vertices: 8,
        })
    }
}
