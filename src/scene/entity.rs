//! Animated entities and their per-frame update contracts
//!
//! Every entity advances itself in `update`, reading shared frame data
//! from a [`FrameContext`]. Updates mutate only the entity itself; all
//! drawing happens later in the render pass.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::noise::NoiseSource;
use crate::consts::*;
use crate::{polar_to_cartesian, remap};

/// Shared per-frame data handed to every entity update
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Frame index at the start of this update pass
    pub frame: u64,
    /// Current nucleus position (surface center)
    pub nucleus: Vec2,
    /// Pointer position, if the pointer is over the surface
    pub pointer: Option<Vec2>,
    /// Surface bounds (width, height)
    pub bounds: Vec2,
}

/// An electron orbiting the nucleus with noise-driven uncertainty
#[derive(Debug, Clone)]
pub struct Electron {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Current orbital angle, wrapped to [0, 2π)
    pub orbit_angle: f32,
    /// Orbit radius, always positive
    pub orbit_radius: f32,
    /// Angle advance per frame
    pub orbit_speed: f32,
    /// Maximum noise displacement from the ideal orbit position
    pub uncertainty: f32,
    /// Per-electron noise channel, decorrelates uncertainty offsets
    pub phase_seed: f32,
}

impl Electron {
    /// Advance the orbit and steer toward the noisy orbital target.
    ///
    /// The angle advance is unconditional: noise and pointer input move
    /// the electron's position, never its orbital angle.
    pub fn update(&mut self, ctx: &FrameContext, noise: &NoiseSource) {
        self.orbit_angle = (self.orbit_angle + self.orbit_speed).rem_euclid(TAU);

        let t = ctx.frame as f32 * NOISE_TIME_SCALE;
        let ux = remap(
            noise.sample(t, self.phase_seed),
            0.0,
            1.0,
            -self.uncertainty,
            self.uncertainty,
        );
        let uy = remap(
            noise.sample(t + NOISE_CHANNEL_OFFSET, self.phase_seed),
            0.0,
            1.0,
            -self.uncertainty,
            self.uncertainty,
        );

        let target = ctx.nucleus
            + polar_to_cartesian(self.orbit_radius, self.orbit_angle)
            + Vec2::new(ux, uy);

        self.acceleration = (target - self.position) * ATTRACTION_GAIN;
        self.velocity += self.acceleration;

        if let Some(pointer) = ctx.pointer {
            let to_pointer = pointer - self.position;
            if to_pointer.length() < POINTER_RADIUS {
                self.velocity += to_pointer.normalize_or_zero() * POINTER_IMPULSE;
            }
        }

        self.velocity = self.velocity.clamp_length_max(ELECTRON_SPEED_CAP);
        self.position += self.velocity;
    }
}

/// A drifting background particle, wrapped toroidally at the edges
#[derive(Debug, Clone)]
pub struct BackgroundParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
}

impl BackgroundParticle {
    pub fn update(&mut self, ctx: &FrameContext) {
        self.position += self.velocity;
        self.position.x = self.position.x.rem_euclid(ctx.bounds.x);
        self.position.y = self.position.y.rem_euclid(ctx.bounds.y);
    }
}

/// Primitive drawn for a decorative shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
}

impl ShapeKind {
    pub fn random(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => ShapeKind::Circle,
            1 => ShapeKind::Triangle,
            _ => ShapeKind::Square,
        }
    }
}

/// A loosely wandering decorative shape that occasionally tunnels
#[derive(Debug, Clone)]
pub struct DecorativeShape {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub size: f32,
    pub kind: ShapeKind,
    /// Rotation per frame applied at render time
    pub spin: f32,
}

impl DecorativeShape {
    pub fn update(&mut self, ctx: &FrameContext, rng: &mut Pcg32) {
        self.acceleration = Vec2::new(
            rng.random_range(-SHAPE_JITTER..SHAPE_JITTER),
            rng.random_range(-SHAPE_JITTER..SHAPE_JITTER),
        );
        self.velocity = (self.velocity + self.acceleration).clamp_length_max(SHAPE_SPEED_CAP);
        self.position += self.velocity;
        self.position.x = self.position.x.rem_euclid(ctx.bounds.x);
        self.position.y = self.position.y.rem_euclid(ctx.bounds.y);

        if rng.random::<f32>() < SHAPE_TUNNEL_CHANCE {
            self.position = Vec2::new(
                rng.random_range(0.0..ctx.bounds.x),
                rng.random_range(0.0..ctx.bounds.y),
            );
        }
    }
}

/// Observed state of the cat, drives its tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantumState {
    Alive,
    Dead,
    Superposition,
}

impl QuantumState {
    pub fn random(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => QuantumState::Alive,
            1 => QuantumState::Dead,
            _ => QuantumState::Superposition,
        }
    }
}

/// The Schrödinger's cat sprite
#[derive(Debug, Clone)]
pub struct Cat {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub quantum_state: QuantumState,
    /// Monotonic phase driving the pulsing alpha and superposition tint
    pub phase_angle: f32,
}

impl Cat {
    pub fn update(&mut self, ctx: &FrameContext, rng: &mut Pcg32) {
        self.phase_angle += CAT_PHASE_SPEED;

        if rng.random::<f32>() < CAT_JUMP_CHANCE {
            self.quantum_state = QuantumState::random(rng);
            self.position = Vec2::new(
                rng.random_range(ctx.bounds.x * 0.2..ctx.bounds.x * 0.8),
                rng.random_range(ctx.bounds.y * 0.2..ctx.bounds.y * 0.8),
            );
        }

        if let Some(pointer) = ctx.pointer {
            let to_pointer = pointer - self.position;
            if to_pointer.length() < CAT_POINTER_RADIUS {
                self.velocity -= to_pointer.normalize_or_zero() * CAT_POINTER_IMPULSE;
                if rng.random::<f32>() < CAT_FLIP_CHANCE {
                    self.quantum_state = QuantumState::random(rng);
                }
            }
        }

        let walk_angle = rng.random_range(0.0..TAU);
        self.velocity += polar_to_cartesian(CAT_WALK_IMPULSE, walk_angle);
        self.velocity *= CAT_DAMPING;
        self.position += self.velocity;
        self.position = self.position.clamp(Vec2::ZERO, ctx.bounds);
    }

    /// Pulsing fill alpha derived from the phase angle
    pub fn pulse_alpha(&self) -> f32 {
        remap(self.phase_angle.sin(), -1.0, 1.0, CAT_ALPHA_MIN, CAT_ALPHA_MAX)
    }

    /// Interpolation factor between the alive and dead tints.
    ///
    /// 0 for Alive, 1 for Dead; Superposition oscillates with the phase
    /// angle, passing through 0.5 whenever sin(phase) crosses zero.
    pub fn tint_factor(&self) -> f32 {
        match self.quantum_state {
            QuantumState::Alive => 0.0,
            QuantumState::Dead => 1.0,
            QuantumState::Superposition => self.phase_angle.sin() * 0.5 + 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn ctx(bounds: Vec2, pointer: Option<Vec2>) -> FrameContext {
        FrameContext {
            frame: 0,
            nucleus: bounds * 0.5,
            pointer,
            bounds,
        }
    }

    fn test_electron() -> Electron {
        Electron {
            position: Vec2::new(400.0, 300.0),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            orbit_angle: 1.0,
            orbit_radius: 150.0,
            orbit_speed: 0.015,
            uncertainty: 10.0,
            phase_seed: 2.2,
        }
    }

    #[test]
    fn test_orbit_angle_advances_independently() {
        // The angle field ignores noise and pointer influence entirely
        let noise = NoiseSource::new(9);
        let mut e = test_electron();
        let start = e.orbit_angle;
        let speed = e.orbit_speed;
        let n = 500;

        let mut c = ctx(Vec2::new(800.0, 600.0), Some(Vec2::new(410.0, 310.0)));
        for i in 0..n {
            c.frame = i;
            e.update(&c, &noise);
        }

        let expected = (start + n as f32 * speed).rem_euclid(TAU);
        assert!(
            (e.orbit_angle - expected).abs() < 1e-3,
            "angle {} expected {}",
            e.orbit_angle,
            expected
        );
    }

    #[test]
    fn test_orbit_angle_wraps() {
        let noise = NoiseSource::new(9);
        let mut e = test_electron();
        e.orbit_angle = TAU - 0.01;
        e.orbit_speed = 0.05;
        e.update(&ctx(Vec2::new(800.0, 600.0), None), &noise);
        assert!(e.orbit_angle >= 0.0 && e.orbit_angle < TAU);
        assert!((e.orbit_angle - 0.04).abs() < 1e-4);
    }

    #[test]
    fn test_electron_speed_capped() {
        let noise = NoiseSource::new(3);
        let mut e = test_electron();
        // Start far from the target so the steering pull is large
        e.position = Vec2::new(-2000.0, -2000.0);

        let c = ctx(Vec2::new(800.0, 600.0), Some(Vec2::new(-1900.0, -1900.0)));
        for _ in 0..200 {
            e.update(&c, &noise);
            assert!(e.velocity.length() <= ELECTRON_SPEED_CAP + 1e-4);
        }
    }

    #[test]
    fn test_electron_settles_near_orbit() {
        let noise = NoiseSource::new(5);
        let mut e = test_electron();
        let c = ctx(Vec2::new(800.0, 600.0), None);
        for _ in 0..2000 {
            e.update(&c, &noise);
        }
        // Within orbit radius +/- uncertainty plus steering lag
        let dist = (e.position - c.nucleus).length();
        assert!(
            (dist - e.orbit_radius).abs() < e.uncertainty + 60.0,
            "electron drifted to distance {dist}"
        );
    }

    #[test]
    fn test_background_wrap_from_boundary() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut p = BackgroundParticle {
            position: Vec2::new(800.0, 600.0),
            velocity: Vec2::ZERO,
            size: 2.0,
        };
        p.update(&ctx(bounds, None));
        assert!(p.position.x >= 0.0 && p.position.x < bounds.x);
        assert!(p.position.y >= 0.0 && p.position.y < bounds.y);
    }

    #[test]
    fn test_background_wrap_exits_left_and_top() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut p = BackgroundParticle {
            position: Vec2::new(0.5, 0.5),
            velocity: Vec2::new(-1.0, -1.0),
            size: 2.0,
        };
        p.update(&ctx(bounds, None));
        assert!((p.position.x - 799.5).abs() < 1e-3);
        assert!((p.position.y - 599.5).abs() < 1e-3);
    }

    #[test]
    fn test_shape_tunnels_eventually() {
        let mut rng = Pcg32::seed_from_u64(11);
        // Bounds far larger than 10k frames of capped drift, so a large
        // step can only come from a tunnel, never an edge wrap
        let bounds = Vec2::new(1.0e6, 1.0e6);
        let mut s = DecorativeShape {
            position: bounds * 0.5,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size: 20.0,
            kind: ShapeKind::Square,
            spin: 0.01,
        };
        let c = ctx(bounds, None);
        let mut jumped = false;
        let mut prev = s.position;
        for _ in 0..10_000 {
            s.update(&c, &mut rng);
            // Tunneling shows up as a step far beyond the speed cap
            if (s.position - prev).length() > SHAPE_SPEED_CAP * 4.0 {
                jumped = true;
                break;
            }
            prev = s.position;
        }
        assert!(jumped, "shape never tunneled in 10k frames");
    }

    #[test]
    fn test_cat_stays_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(4);
        let bounds = Vec2::new(800.0, 600.0);
        let mut cat = Cat {
            position: Vec2::new(2.0, 2.0),
            velocity: Vec2::new(-50.0, -50.0),
            size: 40.0,
            quantum_state: QuantumState::Alive,
            phase_angle: 0.0,
        };
        let c = ctx(bounds, None);
        for _ in 0..1000 {
            cat.update(&c, &mut rng);
            assert!(cat.position.x >= 0.0 && cat.position.x <= bounds.x);
            assert!(cat.position.y >= 0.0 && cat.position.y <= bounds.y);
        }
    }

    #[test]
    fn test_cat_phase_monotonic() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut cat = Cat {
            position: Vec2::new(400.0, 300.0),
            velocity: Vec2::ZERO,
            size: 40.0,
            quantum_state: QuantumState::Dead,
            phase_angle: 0.0,
        };
        let c = ctx(Vec2::new(800.0, 600.0), None);
        let mut last = cat.phase_angle;
        for _ in 0..100 {
            cat.update(&c, &mut rng);
            assert!(cat.phase_angle > last);
            last = cat.phase_angle;
        }
    }

    #[test]
    fn test_cat_pulse_alpha_range() {
        let mut cat = Cat {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 40.0,
            quantum_state: QuantumState::Alive,
            phase_angle: 0.0,
        };
        for i in 0..628 {
            cat.phase_angle = i as f32 * 0.01;
            let a = cat.pulse_alpha();
            assert!((CAT_ALPHA_MIN..=CAT_ALPHA_MAX).contains(&a));
        }
    }

    #[test]
    fn test_tint_factor_by_state() {
        let mut cat = Cat {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 40.0,
            quantum_state: QuantumState::Alive,
            phase_angle: std::f32::consts::PI, // sin = 0
        };
        assert_eq!(cat.tint_factor(), 0.0);
        cat.quantum_state = QuantumState::Dead;
        assert_eq!(cat.tint_factor(), 1.0);
        cat.quantum_state = QuantumState::Superposition;
        assert!((cat.tint_factor() - 0.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_background_wrap_invariant(
            px in -5000.0f32..5000.0,
            py in -5000.0f32..5000.0,
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
        ) {
            let bounds = Vec2::new(800.0, 600.0);
            let mut p = BackgroundParticle {
                position: Vec2::new(px, py),
                velocity: Vec2::new(vx, vy),
                size: 1.0,
            };
            p.update(&ctx(bounds, None));
            prop_assert!(p.position.x >= 0.0 && p.position.x < bounds.x);
            prop_assert!(p.position.y >= 0.0 && p.position.y < bounds.y);
        }

        #[test]
        fn prop_electron_speed_cap_holds(
            px in -1000.0f32..1000.0,
            py in -1000.0f32..1000.0,
            ptr_x in -1000.0f32..1000.0,
            ptr_y in -1000.0f32..1000.0,
            seed in 0u32..1000,
        ) {
            let noise = NoiseSource::new(seed);
            let mut e = test_electron();
            e.position = Vec2::new(px, py);
            let c = ctx(Vec2::new(800.0, 600.0), Some(Vec2::new(ptr_x, ptr_y)));
            for _ in 0..20 {
                e.update(&c, &noise);
                prop_assert!(e.velocity.length() <= ELECTRON_SPEED_CAP + 1e-4);
            }
        }
    }
}
