//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for a thin quad covering the segment from `a` to `b`
pub fn stroke_segment(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    // Quad corners
    let v1a = a + perp;
    let v1b = a - perp;
    let v2a = b + perp;
    let v2b = b - perp;

    // Two triangles
    vec![
        Vertex::new(v1a.x, v1a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2b.x, v2b.y, color),
    ]
}

/// Generate vertices for the outline of a closed polygon
pub fn stroke_polygon(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 6);
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        vertices.extend(stroke_segment(a, b, width, color));
    }

    vertices
}

/// Generate vertices for a filled square centered on `center`
pub fn fill_square(center: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size * 0.5;

    let tl = Vec2::new(center.x - half, center.y - half);
    let tr = Vec2::new(center.x + half, center.y - half);
    let bl = Vec2::new(center.x - half, center.y + half);
    let br = Vec2::new(center.x + half, center.y + half);

    // Two triangles
    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}
