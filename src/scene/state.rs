//! Scene state and entity spawning
//!
//! The `Scene` exclusively owns every entity plus the seeded RNG and
//! noise source that drive them. All randomness flows through the seed,
//! so a scene is reproducible end to end.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::entity::{BackgroundParticle, Cat, DecorativeShape, Electron, FrameContext, QuantumState, ShapeKind};
use super::noise::NoiseSource;
use crate::palette::Palette;

/// Tunables the animation variants diverged on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Number of orbiting electrons
    pub electron_count: usize,
    /// Base orbit radius
    pub orbit_radius: f32,
    /// Per-electron radius jitter around the base
    pub orbit_jitter: f32,
    /// Orbit speed range (radians per frame)
    pub orbit_speed_min: f32,
    pub orbit_speed_max: f32,
    /// Electron uncertainty amplitude range
    pub uncertainty_min: f32,
    pub uncertainty_max: f32,
    /// Concentric orbit guide rings
    pub guide_rings: u32,
    /// Radial gap between guide rings
    pub guide_gap: f32,
    /// Drifting background particles
    pub background_count: usize,
    /// Wandering decorative shapes
    pub shape_count: usize,
    /// Cat body size
    pub cat_size: f32,
    /// Entanglement range as a multiple of the base orbit radius
    pub link_range_factor: f32,
    /// Draw a link from the cat to its nearest electron
    pub cat_link: bool,
    /// Draw the orbit guide rings
    pub orbit_guides: bool,
    /// Draw entanglement links
    pub entanglement: bool,
    /// Concentric glow circles per electron
    pub glow_layers: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            electron_count: 5,
            orbit_radius: 150.0,
            orbit_jitter: 20.0,
            orbit_speed_min: 0.01,
            orbit_speed_max: 0.02,
            uncertainty_min: 5.0,
            uncertainty_max: 15.0,
            guide_rings: 3,
            guide_gap: 40.0,
            background_count: 40,
            shape_count: 12,
            cat_size: 40.0,
            link_range_factor: 1.5,
            cat_link: true,
            orbit_guides: true,
            entanglement: true,
            glow_layers: 3,
        }
    }
}

impl SceneConfig {
    /// Maximum distance at which two electrons render a link
    pub fn link_range(&self) -> f32 {
        self.link_range_factor * self.orbit_radius
    }
}

/// The whole animation state
pub struct Scene {
    pub config: SceneConfig,
    pub palette: Palette,
    /// Seed everything downstream derives from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub noise: NoiseSource,
    /// Current surface bounds (width, height)
    pub bounds: Vec2,
    /// Central anchor the electrons orbit, always the surface center
    pub nucleus: Vec2,
    /// Frames advanced since creation
    pub frame: u64,
    pub electrons: Vec<Electron>,
    pub background: Vec<BackgroundParticle>,
    pub shapes: Vec<DecorativeShape>,
    pub cat: Cat,
    /// Latest pointer position, written by the input bridge and read by
    /// the next update pass
    pub pointer: Option<Vec2>,
}

impl Scene {
    /// Create a scene with randomized entities for the given seed
    pub fn new(seed: u64, width: f32, height: f32, config: SceneConfig, palette: Palette) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let noise = NoiseSource::new(seed as u32);
        let bounds = Vec2::new(width, height);
        let nucleus = bounds * 0.5;

        let electrons = (0..config.electron_count)
            .map(|_| spawn_electron(&mut rng, nucleus, &config))
            .collect();
        let background = (0..config.background_count)
            .map(|_| spawn_background(&mut rng, bounds))
            .collect();
        let shapes = (0..config.shape_count)
            .map(|_| spawn_shape(&mut rng, bounds))
            .collect();
        let cat = Cat {
            position: nucleus,
            velocity: Vec2::ZERO,
            size: config.cat_size,
            quantum_state: QuantumState::random(&mut rng),
            phase_angle: 0.0,
        };

        Self {
            config,
            palette,
            seed,
            rng,
            noise,
            bounds,
            nucleus,
            frame: 0,
            electrons,
            background,
            shapes,
            cat,
            pointer: None,
        }
    }

    /// Handle a surface resize: the nucleus follows the new center
    pub fn resized(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.nucleus = self.bounds * 0.5;
        log::info!("surface resized to {width}x{height}");
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Snapshot of the shared frame data for this update pass
    pub(crate) fn frame_context(&self) -> FrameContext {
        FrameContext {
            frame: self.frame,
            nucleus: self.nucleus,
            pointer: self.pointer,
            bounds: self.bounds,
        }
    }
}

fn spawn_electron(rng: &mut Pcg32, nucleus: Vec2, config: &SceneConfig) -> Electron {
    let orbit_radius =
        (config.orbit_radius + rng.random_range(-config.orbit_jitter..config.orbit_jitter)).max(1.0);
    let orbit_angle = rng.random_range(0.0..TAU);
    Electron {
        // Start on the orbit so the first frames don't streak across the screen
        position: nucleus + crate::polar_to_cartesian(orbit_radius, orbit_angle),
        velocity: Vec2::ZERO,
        acceleration: Vec2::ZERO,
        orbit_angle,
        orbit_radius,
        orbit_speed: rng.random_range(config.orbit_speed_min..config.orbit_speed_max),
        uncertainty: rng.random_range(config.uncertainty_min..config.uncertainty_max),
        phase_seed: rng.random_range(0.0..TAU),
    }
}

fn spawn_background(rng: &mut Pcg32, bounds: Vec2) -> BackgroundParticle {
    let angle = rng.random_range(0.0..TAU);
    let speed = rng.random_range(0.2..0.6);
    BackgroundParticle {
        position: Vec2::new(
            rng.random_range(0.0..bounds.x),
            rng.random_range(0.0..bounds.y),
        ),
        velocity: crate::polar_to_cartesian(speed, angle),
        size: rng.random_range(1.0..3.5),
    }
}

fn spawn_shape(rng: &mut Pcg32, bounds: Vec2) -> DecorativeShape {
    DecorativeShape {
        position: Vec2::new(
            rng.random_range(0.0..bounds.x),
            rng.random_range(0.0..bounds.y),
        ),
        velocity: Vec2::ZERO,
        acceleration: Vec2::ZERO,
        size: rng.random_range(15.0..50.0),
        kind: ShapeKind::random(rng),
        spin: rng.random_range(0.002..0.02),
    }
}
