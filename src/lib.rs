//! Atom Glow - a decorative quantum-atom canvas animation
//!
//! Core modules:
//! - `scene`: Deterministic animation core (entities, noise, entanglement)
//! - `render`: `RenderSurface` abstraction, draw pass, Canvas2D backend
//! - `palette`: Color palette and interpolation
//! - `settings`: Quality presets and preferences

pub mod palette;
pub mod render;
pub mod scene;
pub mod settings;

pub use palette::Palette;
pub use scene::{Scene, SceneConfig};
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Animation constants shared by the update and render passes
pub mod consts {
    /// Steering gain pulling an electron toward its orbital target
    pub const ATTRACTION_GAIN: f32 = 0.08;
    /// Electron speed cap (units per frame)
    pub const ELECTRON_SPEED_CAP: f32 = 4.0;
    /// Pointer interaction radius for electrons
    pub const POINTER_RADIUS: f32 = 200.0;
    /// Impulse added toward a nearby pointer
    pub const POINTER_IMPULSE: f32 = 0.5;

    /// Time scale applied to the frame counter when sampling noise
    pub const NOISE_TIME_SCALE: f32 = 0.01;
    /// Offset separating the x and y noise channels
    pub const NOISE_CHANNEL_OFFSET: f32 = 100.0;

    /// Per-frame chance that a decorative shape tunnels to a new spot
    pub const SHAPE_TUNNEL_CHANCE: f32 = 0.003;
    /// Random acceleration range for decorative shapes (per axis)
    pub const SHAPE_JITTER: f32 = 0.05;
    /// Decorative shape speed cap (units per frame)
    pub const SHAPE_SPEED_CAP: f32 = 1.5;

    /// Cat phase angle advance per frame
    pub const CAT_PHASE_SPEED: f32 = 0.02;
    /// Per-frame chance the cat changes state and relocates
    pub const CAT_JUMP_CHANCE: f32 = 0.005;
    /// Magnitude of the cat's random-walk impulse
    pub const CAT_WALK_IMPULSE: f32 = 0.1;
    /// Velocity damping applied to the cat each frame
    pub const CAT_DAMPING: f32 = 0.95;
    /// Pointer interaction radius for the cat
    pub const CAT_POINTER_RADIUS: f32 = 150.0;
    /// Impulse pushing the cat away from a nearby pointer
    pub const CAT_POINTER_IMPULSE: f32 = 0.5;
    /// Per-frame chance a nearby pointer flips the cat's state
    pub const CAT_FLIP_CHANCE: f32 = 0.01;
    /// Pulsing fill alpha range for the cat
    pub const CAT_ALPHA_MIN: f32 = 0.4;
    pub const CAT_ALPHA_MAX: f32 = 0.8;

    /// Entanglement link opacity at distance zero
    pub const LINK_MAX_ALPHA: f32 = 0.4;
    /// Sine wobble amplitude of a rendered link
    pub const LINK_WOBBLE: f32 = 2.0;
    /// Segments per rendered link polyline
    pub const LINK_SEGMENTS: usize = 10;

    /// Orbit guide vertex jitter amplitude
    pub const GUIDE_JITTER: f32 = 5.0;
    /// Angular step between orbit guide vertices (radians)
    pub const GUIDE_STEP: f32 = 0.1;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Linearly remap `v` from [a, b] to [c, d]
#[inline]
pub fn remap(v: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    c + (v - a) / (b - a) * (d - c)
}
