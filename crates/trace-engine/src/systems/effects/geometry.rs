//! Triangle-list builders for the effects buffer.
//! Every vertex is 6 floats: x, y, r, g, b, a.

use glam::Vec2;

pub const VERTEX_FLOATS: usize = 6;

pub type Rgba = [f32; 4];

#[inline]
pub fn lerp_rgba(a: Rgba, b: Rgba, t: f32) -> Rgba {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

#[inline]
fn push_vertex(out: &mut Vec<f32>, p: Vec2, c: Rgba) {
    out.extend_from_slice(&[p.x, p.y, c[0], c[1], c[2], c[3]]);
}

/// Rotated rectangle centred on `center`, two triangles.
pub fn push_quad(out: &mut Vec<f32>, center: Vec2, size: Vec2, rotation: f32, color: Rgba) {
    let axis_x = Vec2::from_angle(rotation) * (size.x * 0.5);
    let axis_y = axis_x.perp().normalize_or_zero() * (size.y * 0.5);
    let a = center - axis_x - axis_y;
    let b = center + axis_x - axis_y;
    let c = center + axis_x + axis_y;
    let d = center - axis_x + axis_y;
    for p in [a, b, c, a, c, d] {
        push_vertex(out, p, color);
    }
}

/// Half-disc fan around `center`, bulging towards `facing`.
fn push_round_cap(out: &mut Vec<f32>, center: Vec2, facing: Vec2, half_width: f32, color: Rgba, segments: u32) {
    let segments = segments.max(1);
    let perp = facing.perp();
    let arc = |k: u32| {
        let phi = -std::f32::consts::FRAC_PI_2 + std::f32::consts::PI * k as f32 / segments as f32;
        center + (facing * phi.cos() + perp * phi.sin()) * half_width
    };
    for k in 0..segments {
        push_vertex(out, center, color);
        push_vertex(out, arc(k), color);
        push_vertex(out, arc(k + 1), color);
    }
}

/// Visual parameters of a ribbon polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonStyle {
    /// Full width at the first point.
    pub start_width: f32,
    /// Full width at the last point.
    pub end_width: f32,
    pub start_color: Rgba,
    pub end_color: Rgba,
    /// Triangles per rounded end cap; 0 gives square ends.
    pub cap_vertices: u32,
}

/// Vertices `build_ribbon` emits for `points` points.
pub fn ribbon_vertex_count(points: usize, cap_vertices: u32) -> usize {
    if points < 2 {
        return 0;
    }
    let caps = if cap_vertices > 0 { 2 * 3 * cap_vertices as usize } else { 0 };
    6 * (points - 1) + caps
}

/// Build a polyline ribbon whose width and colour are interpolated from the
/// first to the last point. Fewer than two points produce nothing.
pub fn build_ribbon(points: &[Vec2], style: &RibbonStyle, out: &mut Vec<f32>) {
    let n = points.len();
    if n < 2 {
        return;
    }

    let along = |i: usize| i as f32 / (n - 1) as f32;
    let half_width = |i: usize| (style.start_width + (style.end_width - style.start_width) * along(i)) * 0.5;
    let color = |i: usize| lerp_rgba(style.start_color, style.end_color, along(i));
    let dir = |a: Vec2, b: Vec2| (b - a).normalize_or(Vec2::X);

    // Miter-free join: average the neighbouring segment normals.
    let normal = |i: usize| {
        let prev = if i > 0 { Some(dir(points[i - 1], points[i]).perp()) } else { None };
        let next = if i + 1 < n { Some(dir(points[i], points[i + 1]).perp()) } else { None };
        match (prev, next) {
            (Some(p), Some(q)) => (p + q).normalize_or(q),
            (Some(p), None) => p,
            (None, Some(q)) => q,
            (None, None) => Vec2::Y,
        }
    };

    for i in 0..n - 1 {
        let (n0, n1) = (normal(i), normal(i + 1));
        let (w0, w1) = (half_width(i), half_width(i + 1));
        let (c0, c1) = (color(i), color(i + 1));
        let l0 = points[i] + n0 * w0;
        let r0 = points[i] - n0 * w0;
        let l1 = points[i + 1] + n1 * w1;
        let r1 = points[i + 1] - n1 * w1;
        push_vertex(out, l0, c0);
        push_vertex(out, r0, c0);
        push_vertex(out, l1, c1);
        push_vertex(out, r0, c0);
        push_vertex(out, r1, c1);
        push_vertex(out, l1, c1);
    }

    if style.cap_vertices > 0 {
        let start_facing = -dir(points[0], points[1]);
        let end_facing = dir(points[n - 2], points[n - 1]);
        push_round_cap(out, points[0], start_facing, half_width(0), color(0), style.cap_vertices);
        push_round_cap(out, points[n - 1], end_facing, half_width(n - 1), color(n - 1), style.cap_vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

    fn style(caps: u32) -> RibbonStyle {
        RibbonStyle {
            start_width: 20.0,
            end_width: 10.0,
            start_color: WHITE,
            end_color: [1.0, 0.0, 0.0, 0.5],
            cap_vertices: caps,
        }
    }

    #[test]
    fn single_point_builds_nothing() {
        let mut out = Vec::new();
        build_ribbon(&[Vec2::ZERO], &style(8), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn vertex_count_with_and_without_caps() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0)];
        let mut out = Vec::new();
        build_ribbon(&points, &style(0), &mut out);
        assert_eq!(out.len() / VERTEX_FLOATS, 2 * 6);

        out.clear();
        build_ribbon(&points, &style(8), &mut out);
        assert_eq!(out.len() / VERTEX_FLOATS, 2 * 6 + 2 * 8 * 3);
        assert_eq!(ribbon_vertex_count(points.len(), 8), 2 * 6 + 2 * 8 * 3);
        assert_eq!(ribbon_vertex_count(points.len(), 0), 2 * 6);
        assert_eq!(ribbon_vertex_count(1, 8), 0);
    }

    #[test]
    fn width_follows_curve() {
        let points = [Vec2::ZERO, Vec2::new(100.0, 0.0)];
        let mut out = Vec::new();
        build_ribbon(&points, &style(0), &mut out);
        // first vertex: left edge of the start, half of 20 above the line
        assert!((out[1] - 10.0).abs() < 1e-4);
        // third vertex: left edge of the end, half of 10
        assert!((out[2 * VERTEX_FLOATS + 1] - 5.0).abs() < 1e-4);
        // its colour is the end colour
        assert_eq!(out[2 * VERTEX_FLOATS + 5], 0.5);
    }

    #[test]
    fn quad_is_two_triangles() {
        let mut out = Vec::new();
        push_quad(&mut out, Vec2::ZERO, Vec2::new(4.0, 2.0), 0.0, WHITE);
        assert_eq!(out.len(), 6 * VERTEX_FLOATS);
        assert_eq!((out[0], out[1]), (-2.0, -1.0));
    }
}
