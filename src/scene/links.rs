//! Entanglement link computation
//!
//! A pure read pass over the electron slice: no entity state is mutated
//! here, the render pass draws whatever this module reports.

use glam::Vec2;

use super::entity::Electron;
use crate::consts::LINK_MAX_ALPHA;

/// A link between electrons `a` and `b` with a distance-derived opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Opacity of a link at the given distance.
///
/// Linear falloff from the maximum at distance zero to exactly zero at
/// and beyond `range`.
pub fn link_opacity(distance: f32, range: f32) -> f32 {
    if range <= 0.0 || distance >= range {
        return 0.0;
    }
    LINK_MAX_ALPHA * (1.0 - distance / range)
}

/// Links for every unordered electron pair closer than `range`
pub fn entangled_pairs(electrons: &[Electron], range: f32) -> Vec<Link> {
    let mut links = Vec::new();
    for i in 0..electrons.len() {
        for j in (i + 1)..electrons.len() {
            let distance = (electrons[i].position - electrons[j].position).length();
            let opacity = link_opacity(distance, range);
            if opacity > 0.0 {
                links.push(Link { a: i, b: j, opacity });
            }
        }
    }
    links
}

/// Index of the electron nearest to `from`, if any exist
pub fn nearest_electron(from: Vec2, electrons: &[Electron]) -> Option<usize> {
    electrons
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = (a.position - from).length_squared();
            let db = (b.position - from).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn electron_at(x: f32, y: f32) -> Electron {
        Electron {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            orbit_angle: 0.0,
            orbit_radius: 150.0,
            orbit_speed: 0.01,
            uncertainty: 10.0,
            phase_seed: 0.0,
        }
    }

    #[test]
    fn test_opacity_max_at_zero_distance() {
        assert_eq!(link_opacity(0.0, 225.0), LINK_MAX_ALPHA);
    }

    #[test]
    fn test_opacity_zero_at_and_beyond_range() {
        assert_eq!(link_opacity(225.0, 225.0), 0.0);
        assert_eq!(link_opacity(300.0, 225.0), 0.0);
    }

    #[test]
    fn test_opacity_degenerate_range() {
        assert_eq!(link_opacity(0.0, 0.0), 0.0);
        assert_eq!(link_opacity(1.0, -5.0), 0.0);
    }

    #[test]
    fn test_coincident_electrons_link_at_max() {
        let electrons = vec![electron_at(100.0, 100.0), electron_at(100.0, 100.0)];
        let links = entangled_pairs(&electrons, 225.0);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].opacity, LINK_MAX_ALPHA);
        assert_eq!((links[0].a, links[0].b), (0, 1));
    }

    #[test]
    fn test_distant_electrons_no_link() {
        let electrons = vec![electron_at(0.0, 0.0), electron_at(225.0, 0.0)];
        assert!(entangled_pairs(&electrons, 225.0).is_empty());
    }

    #[test]
    fn test_all_pairs_considered() {
        let electrons = vec![
            electron_at(0.0, 0.0),
            electron_at(10.0, 0.0),
            electron_at(0.0, 10.0),
        ];
        let links = entangled_pairs(&electrons, 225.0);
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_nearest_electron() {
        let electrons = vec![
            electron_at(0.0, 0.0),
            electron_at(50.0, 0.0),
            electron_at(10.0, 10.0),
        ];
        assert_eq!(nearest_electron(Vec2::new(12.0, 12.0), &electrons), Some(2));
        assert_eq!(nearest_electron(Vec2::ZERO, &[]), None);
    }

    proptest! {
        #[test]
        fn prop_opacity_monotone_nonincreasing(
            d1 in 0.0f32..500.0,
            d2 in 0.0f32..500.0,
            range in 1.0f32..500.0,
        ) {
            let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            prop_assert!(link_opacity(near, range) >= link_opacity(far, range));
        }

        #[test]
        fn prop_opacity_bounded(d in 0.0f32..1000.0, range in 1.0f32..500.0) {
            let o = link_opacity(d, range);
            prop_assert!((0.0..=LINK_MAX_ALPHA).contains(&o));
        }
    }
}
