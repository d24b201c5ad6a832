//! Per-frame update pass
//!
//! Advances every entity exactly once and bumps the frame counter. The
//! pass is pure simulation: drawing happens afterwards in
//! `render::draw`.

use super::state::Scene;

/// Advance the scene by one frame.
///
/// Update order is fixed: background particles, decorative shapes,
/// electrons, cat. The pointer field is read once into the frame
/// context, so input arriving mid-pass takes effect next frame.
pub fn advance(scene: &mut Scene) {
    let ctx = scene.frame_context();

    for particle in &mut scene.background {
        particle.update(&ctx);
    }
    for shape in &mut scene.shapes {
        shape.update(&ctx, &mut scene.rng);
    }
    for electron in &mut scene.electrons {
        electron.update(&ctx, &scene.noise);
    }
    scene.cat.update(&ctx, &mut scene.rng);

    scene.frame += 1;
}
