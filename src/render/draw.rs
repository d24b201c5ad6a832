//! Layer-ordered scene draw pass
//!
//! Draws a `&Scene` onto any [`RenderSurface`]. The pass is read-only:
//! per-frame wobble comes from the frame counter and the scene's noise
//! source, never from the RNG.
//!
//! Layer order is fixed for correct visual stacking: background
//! particles and shapes, orbit guides, electrons, nucleus, cat,
//! entanglement links.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::*;
use crate::palette::{Color, lerp_color, with_alpha};
use crate::scene::entity::{BackgroundParticle, Cat, DecorativeShape, Electron, ShapeKind};
use crate::scene::{Scene, advance, entangled_pairs, link_opacity, nearest_electron};
use crate::{polar_to_cartesian, remap};

use super::surface::RenderSurface;

/// Advance the scene one frame and draw it.
///
/// The one call the host makes per display refresh.
pub fn tick(scene: &mut Scene, surface: &mut dyn RenderSurface) {
    advance(scene);
    render(scene, surface);
}

/// Draw the current scene without mutating it
pub fn render(scene: &Scene, surface: &mut dyn RenderSurface) {
    surface.clear(scene.palette.background);

    for particle in &scene.background {
        draw_background_particle(particle, &scene.palette, surface);
    }
    for shape in &scene.shapes {
        draw_shape(shape, scene.frame, &scene.palette, surface);
    }

    if scene.config.orbit_guides {
        draw_orbit_guides(scene, surface);
    }

    for electron in &scene.electrons {
        draw_electron(electron, scene.config.glow_layers, &scene.palette, surface);
    }

    draw_nucleus(scene.nucleus, &scene.palette, surface);
    draw_cat(&scene.cat, &scene.palette, surface);

    if scene.config.entanglement {
        draw_links(scene, surface);
    }
}

/// Soft dot with a low-alpha halo
fn draw_background_particle(
    particle: &BackgroundParticle,
    palette: &crate::Palette,
    surface: &mut dyn RenderSurface,
) {
    surface.fill_circle(
        particle.position,
        particle.size * 2.0,
        with_alpha(palette.particle, 0.06),
    );
    surface.fill_circle(
        particle.position,
        particle.size,
        with_alpha(palette.particle, 0.5),
    );
}

fn draw_shape(
    shape: &DecorativeShape,
    frame: u64,
    palette: &crate::Palette,
    surface: &mut dyn RenderSurface,
) {
    let color = with_alpha(palette.shape, 0.3);
    let rotation = shape.spin * frame as f32;
    match shape.kind {
        ShapeKind::Circle => {
            surface.stroke_circle(shape.position, shape.size * 0.5, color, 1.0);
        }
        ShapeKind::Square => {
            surface.stroke_rect(
                shape.position,
                Vec2::splat(shape.size * 0.5),
                rotation,
                color,
                1.0,
            );
        }
        ShapeKind::Triangle => {
            let points = std::array::from_fn(|k| {
                shape.position
                    + polar_to_cartesian(shape.size * 0.6, rotation + k as f32 * TAU / 3.0)
            });
            surface.stroke_triangle(points, color, 1.0);
        }
    }
}

/// Concentric guide rings, vertex-jittered by the noise source
fn draw_orbit_guides(scene: &Scene, surface: &mut dyn RenderSurface) {
    let color = with_alpha(scene.palette.electron, 0.08);
    let t = scene.frame as f32 * NOISE_TIME_SCALE;

    for ring in 0..scene.config.guide_rings {
        let base_radius = scene.config.orbit_radius + ring as f32 * scene.config.guide_gap;
        let mut points = Vec::new();
        let mut angle = 0.0f32;
        while angle < TAU {
            let jitter = remap(
                scene.noise.sample(angle + t, ring as f32 * 7.3),
                0.0,
                1.0,
                -GUIDE_JITTER,
                GUIDE_JITTER,
            );
            points.push(scene.nucleus + polar_to_cartesian(base_radius + jitter, angle));
            angle += GUIDE_STEP;
        }
        if let Some(&first) = points.first() {
            points.push(first);
        }
        surface.draw_polyline(&points, color, 1.0);
    }
}

/// Glow stack plus a solid core
fn draw_electron(
    electron: &Electron,
    glow_layers: u32,
    palette: &crate::Palette,
    surface: &mut dyn RenderSurface,
) {
    for i in (1..=glow_layers).rev() {
        let alpha = remap(i as f32, glow_layers as f32, 0.0, 0.2, 0.6);
        surface.fill_circle(
            electron.position,
            i as f32 * 2.5,
            with_alpha(palette.electron, alpha),
        );
    }
    surface.fill_circle(electron.position, 4.0, palette.electron);
}

fn draw_nucleus(nucleus: Vec2, palette: &crate::Palette, surface: &mut dyn RenderSurface) {
    for i in (1..=4u32).rev() {
        let alpha = remap(i as f32, 4.0, 0.0, 0.2, 0.6);
        surface.fill_circle(nucleus, i as f32 * 5.0, with_alpha(palette.nucleus, alpha));
    }
    surface.fill_circle(nucleus, 10.0, palette.nucleus);
}

/// Layered silhouette: body and head ellipses, ear triangles, pulsing
/// outline rings
fn draw_cat(cat: &Cat, palette: &crate::Palette, surface: &mut dyn RenderSurface) {
    let tint = lerp_color(palette.cat_alive, palette.cat_dead, cat.tint_factor());
    let fill = with_alpha(tint, cat.pulse_alpha());
    let s = cat.size;
    let p = cat.position;

    // Body and head
    surface.fill_ellipse(p, Vec2::new(s * 0.75, s * 0.5), fill);
    surface.fill_ellipse(p + Vec2::new(-s * 0.5, 0.0), Vec2::splat(s * 0.4), fill);

    // Ears
    surface.fill_triangle(
        [
            p + Vec2::new(-s * 0.8, -s * 0.3),
            p + Vec2::new(-s * 0.6, -s * 0.6),
            p + Vec2::new(-s * 0.4, -s * 0.3),
        ],
        fill,
    );
    surface.fill_triangle(
        [
            p + Vec2::new(-s * 0.8, s * 0.3),
            p + Vec2::new(-s * 0.6, s * 0.6),
            p + Vec2::new(-s * 0.4, s * 0.3),
        ],
        fill,
    );

    // Uncertainty rings
    let outline = with_alpha(tint, 0.2);
    for i in 0..3 {
        let wobble = 1.0 + (cat.phase_angle + i as f32).sin() * 0.2;
        let radius = s * (1.5 + i as f32 * 0.2) * wobble * 0.5;
        surface.stroke_circle(p, radius, outline, 1.0);
    }
}

fn draw_links(scene: &Scene, surface: &mut dyn RenderSurface) {
    let range = scene.config.link_range();

    for link in entangled_pairs(&scene.electrons, range) {
        let color = with_alpha(scene.palette.link, link.opacity);
        draw_quantum_line(
            scene.electrons[link.a].position,
            scene.electrons[link.b].position,
            color,
            scene.frame,
            surface,
        );
    }

    if scene.config.cat_link {
        if let Some(i) = nearest_electron(scene.cat.position, &scene.electrons) {
            let to = scene.electrons[i].position;
            let opacity = link_opacity((to - scene.cat.position).length(), range);
            if opacity > 0.0 {
                let color = with_alpha(scene.palette.link, opacity);
                draw_quantum_line(scene.cat.position, to, color, scene.frame, surface);
            }
        }
    }
}

/// Wavy connector: straight lerp with a sine offset on both axes
fn draw_quantum_line(
    from: Vec2,
    to: Vec2,
    color: Color,
    frame: u64,
    surface: &mut dyn RenderSurface,
) {
    let mut points = Vec::with_capacity(LINK_SEGMENTS + 1);
    for i in 0..=LINK_SEGMENTS {
        let t = i as f32 / LINK_SEGMENTS as f32;
        let wobble = LINK_WOBBLE * (frame as f32 * 0.05 + t * 10.0).sin();
        points.push(from.lerp(to, t) + Vec2::splat(wobble));
    }
    surface.draw_polyline(&points, color, 1.0);
}
