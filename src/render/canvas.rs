//! Canvas2D render surface (browser backend)
//!
//! Maps the surface primitives onto a `CanvasRenderingContext2d`. Each
//! method is a thin translation plus color formatting; the 2D context
//! already speaks the same primitives.

use glam::Vec2;
use std::f32::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::palette::Color;

use super::surface::RenderSurface;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    /// Acquire the 2d context; failure here is fatal to initialization
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
        })
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    fn css(color: Color) -> String {
        format!(
            "rgba({},{},{},{})",
            (color[0] * 255.0).round() as u8,
            (color[1] * 255.0).round() as u8,
            (color[2] * 255.0).round() as u8,
            color[3].clamp(0.0, 1.0),
        )
    }

    fn path_ellipse(&self, center: Vec2, radii: Vec2) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            0.0,
            0.0,
            TAU as f64,
        );
    }

    fn path_triangle(&self, points: [Vec2; 3]) {
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        self.ctx.line_to(points[1].x as f64, points[1].y as f64);
        self.ctx.line_to(points[2].x as f64, points[2].y as f64);
        self.ctx.close_path();
    }
}

impl RenderSurface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&Self::css(color));
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.path_ellipse(center, radii);
        self.ctx.set_fill_style_str(&Self::css(color));
        self.ctx.fill();
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, width: f32) {
        self.path_ellipse(center, radii);
        self.ctx.set_stroke_style_str(&Self::css(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, center: Vec2, half_extents: Vec2, rotation: f32, color: Color) {
        self.ctx.save();
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        let _ = self.ctx.rotate(rotation as f64);
        self.ctx.set_fill_style_str(&Self::css(color));
        self.ctx.fill_rect(
            -half_extents.x as f64,
            -half_extents.y as f64,
            (half_extents.x * 2.0) as f64,
            (half_extents.y * 2.0) as f64,
        );
        self.ctx.restore();
    }

    fn stroke_rect(&mut self, center: Vec2, half_extents: Vec2, rotation: f32, color: Color, width: f32) {
        self.ctx.save();
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        let _ = self.ctx.rotate(rotation as f64);
        self.ctx.set_stroke_style_str(&Self::css(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke_rect(
            -half_extents.x as f64,
            -half_extents.y as f64,
            (half_extents.x * 2.0) as f64,
            (half_extents.y * 2.0) as f64,
        );
        self.ctx.restore();
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color) {
        self.path_triangle(points);
        self.ctx.set_fill_style_str(&Self::css(color));
        self.ctx.fill();
    }

    fn stroke_triangle(&mut self, points: [Vec2; 3], color: Color, width: f32) {
        self.path_triangle(points);
        self.ctx.set_stroke_style_str(&Self::css(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&Self::css(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: Color, width: f32) {
        let Some(first) = points.first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_stroke_style_str(&Self::css(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
