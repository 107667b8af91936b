//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::{Color, DrawCmd, DrawList};
use super::vertex::Vertex;

/// Triangle fan segments used for the bird and the finger marker
pub const CIRCLE_SEGMENTS: u32 = 32;

/// A draw list flattened to colored triangles in surface pixels
#[derive(Debug, Clone, Default)]
pub struct Tessellation {
    /// Last clear color in the list, if any
    pub clear: Option<Color>,
    pub vertices: Vec<Vertex>,
}

/// Flatten a draw list into triangles, preserving draw order
pub fn tessellate(frame: &DrawList) -> Tessellation {
    let mut out = Tessellation::default();

    for cmd in &frame.commands {
        match cmd {
            DrawCmd::Clear { color } => {
                // A clear wipes everything drawn before it
                out.vertices.clear();
                out.clear = Some(*color);
            }
            DrawCmd::Rect { pos, size, color } => {
                out.vertices.extend(rect(*pos, *size, *color));
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                out.vertices
                    .extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS));
            }
            // Text is laid out by the page overlay
            DrawCmd::Text { .. } => {}
        }
    }

    out
}

/// Generate vertices for a filled axis-aligned rectangle
///
/// Degenerate rectangles (zero or negative extent) produce nothing.
pub fn rect(pos: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }

    let min = pos;
    let max = pos + size;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::scene::compose;
    use crate::sim::GameState;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_rect_bounds() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), WHITE);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(v.position[0] == 10.0 || v.position[0] == 40.0);
            assert!(v.position[1] == 20.0 || v.position[1] == 60.0);
        }
    }

    #[test]
    fn test_empty_rect_is_skipped() {
        assert!(rect(Vec2::ZERO, Vec2::new(60.0, 0.0), WHITE).is_empty());
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 240.0);
        for v in circle(center, 20.0, WHITE, 16) {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn test_tessellate_frame() {
        let config = GameConfig::default();
        let state = GameState {
            bird_y: 240.0,
            obstacle_x: 300.0,
            gap_offset: 150.0,
            score: 0,
            is_over: false,
        };
        let frame = compose(&state, None, &config);
        let tess = tessellate(&frame);

        assert!(tess.clear.is_some());
        // Two obstacle rects and the bird; the score text adds nothing
        assert_eq!(tess.vertices.len(), 12 + CIRCLE_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_clear_discards_earlier_shapes() {
        let mut frame = DrawList::new();
        frame.fill_rect(Vec2::ZERO, Vec2::ONE, WHITE);
        frame.clear([0.0; 4]);
        assert!(tessellate(&frame).vertices.is_empty());
    }
}
