//! Deterministic animation core
//!
//! All per-frame state and motion lives here. This module must stay pure
//! and deterministic:
//! - Seeded RNG and seeded noise only
//! - Stable update order (background, shapes, electrons, cat)
//! - No rendering or platform dependencies

pub mod entity;
pub mod links;
pub mod noise;
pub mod state;
pub mod tick;

pub use entity::{BackgroundParticle, Cat, DecorativeShape, Electron, FrameContext, QuantumState, ShapeKind};
pub use links::{Link, entangled_pairs, link_opacity, nearest_electron};
pub use noise::NoiseSource;
pub use state::{Scene, SceneConfig};
pub use tick::advance;
