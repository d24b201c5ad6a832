//! Render surface abstraction
//!
//! The scene draws through this trait only; it never sees a concrete
//! backend. `RecordingSurface` captures the emitted display list so
//! tests can assert on exactly what would be drawn.

use glam::Vec2;

use crate::palette::Color;

/// Primitive drawing operations the animation needs from its host
pub trait RenderSurface {
    /// Current surface bounds (width, height)
    fn size(&self) -> Vec2;

    /// Repaint the whole surface. An alpha below 1.0 fades the previous
    /// frame instead of erasing it.
    fn clear(&mut self, color: Color);

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, width: f32);

    /// Rect centered at `center` with the given half extents, rotated by
    /// `rotation` radians about its center
    fn fill_rect(&mut self, center: Vec2, half_extents: Vec2, rotation: f32, color: Color);
    fn stroke_rect(&mut self, center: Vec2, half_extents: Vec2, rotation: f32, color: Color, width: f32);

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color);
    fn stroke_triangle(&mut self, points: [Vec2; 3], color: Color, width: f32);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    fn draw_polyline(&mut self, points: &[Vec2], color: Color, width: f32);

    /// Filled circle helper
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.fill_ellipse(center, Vec2::splat(radius), color);
    }

    /// Stroked circle helper
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.stroke_ellipse(center, Vec2::splat(radius), color, width);
    }
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        color: Color,
    },
    FillEllipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
        width: f32,
    },
    FillRect {
        center: Vec2,
        half_extents: Vec2,
        rotation: f32,
        color: Color,
    },
    StrokeRect {
        center: Vec2,
        half_extents: Vec2,
        rotation: f32,
        color: Color,
        width: f32,
    },
    FillTriangle {
        points: [Vec2; 3],
        color: Color,
    },
    StrokeTriangle {
        points: [Vec2; 3],
        color: Color,
        width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
    },
}

impl DrawCmd {
    /// The command's color, whatever its shape
    pub fn color(&self) -> Color {
        match self {
            DrawCmd::Clear { color }
            | DrawCmd::FillEllipse { color, .. }
            | DrawCmd::StrokeEllipse { color, .. }
            | DrawCmd::FillRect { color, .. }
            | DrawCmd::StrokeRect { color, .. }
            | DrawCmd::FillTriangle { color, .. }
            | DrawCmd::StrokeTriangle { color, .. }
            | DrawCmd::Line { color, .. }
            | DrawCmd::Polyline { color, .. } => *color,
        }
    }
}

/// Display-list surface for tests and headless runs
pub struct RecordingSurface {
    size: Vec2,
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Drop the recorded frame, keeping the surface
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCmd::Clear { color });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.commands.push(DrawCmd::FillEllipse { center, radii, color });
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCmd::StrokeEllipse { center, radii, color, width });
    }

    fn fill_rect(&mut self, center: Vec2, half_extents: Vec2, rotation: f32, color: Color) {
        self.commands.push(DrawCmd::FillRect { center, half_extents, rotation, color });
    }

    fn stroke_rect(&mut self, center: Vec2, half_extents: Vec2, rotation: f32, color: Color, width: f32) {
        self.commands.push(DrawCmd::StrokeRect { center, half_extents, rotation, color, width });
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color) {
        self.commands.push(DrawCmd::FillTriangle { points, color });
    }

    fn stroke_triangle(&mut self, points: [Vec2; 3], color: Color, width: f32) {
        self.commands.push(DrawCmd::StrokeTriangle { points, color, width });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCmd::Line { from, to, color, width });
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.commands.push(DrawCmd::Polyline {
            points: points.to_vec(),
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_order_preserved() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.clear([0.0, 0.0, 0.0, 1.0]);
        s.fill_circle(Vec2::new(10.0, 10.0), 5.0, [1.0, 0.0, 0.0, 1.0]);
        s.draw_line(Vec2::ZERO, Vec2::ONE, [0.0, 1.0, 0.0, 1.0], 1.0);
        assert_eq!(s.commands.len(), 3);
        assert!(matches!(s.commands[0], DrawCmd::Clear { .. }));
        assert!(matches!(s.commands[1], DrawCmd::FillEllipse { .. }));
        assert!(matches!(s.commands[2], DrawCmd::Line { .. }));
    }

    #[test]
    fn test_circle_helper_is_round() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.fill_circle(Vec2::ZERO, 7.0, [1.0; 4]);
        match &s.commands[0] {
            DrawCmd::FillEllipse { radii, .. } => assert_eq!(*radii, Vec2::splat(7.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_begin_frame_clears_commands() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.clear([0.0; 4]);
        s.begin_frame();
        assert!(s.commands.is_empty());
        assert_eq!(s.size(), Vec2::new(100.0, 100.0));
    }
}
