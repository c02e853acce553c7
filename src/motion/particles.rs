//! Randomised particle layouts.
//!
//! The ambient field is rendered on the server and hydrated in the browser,
//! so it comes from a fixed seed and both sides agree. Hover sparks only ever
//! exist in the browser and take whatever RNG the caller hands in.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const AMBIENT_PARTICLES: usize = 50;
pub const AMBIENT_SEED: u64 = 0x00C4_0A0B_0715;

/// One ambient particle: a resting position plus its own bob loop timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Horizontal position, percent of the section width.
    pub left: f64,
    /// Vertical position, percent of the section height.
    pub top: f64,
    /// Loop length in seconds, in `[3, 5)`.
    pub duration: f64,
    /// Start delay in seconds, in `[0, 2)`.
    pub delay: f64,
}

pub fn ambient_field(seed: u64, count: usize) -> Vec<Drift> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Drift {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(3.0..5.0),
            delay: rng.gen_range(0.0..2.0),
        })
        .collect()
}

/// A particle thrown off a hovered orb. Offsets are pixels from the orb centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub delay: f64,
}

impl Spark {
    pub const STAGGER: f64 = 0.2;
    const SPAWN_RADIUS: f64 = 50.0;
    const TRAVEL_RADIUS: f64 = 100.0;
}

pub fn sparks<R: Rng>(rng: &mut R, count: usize) -> Vec<Spark> {
    let spawn = -Spark::SPAWN_RADIUS..Spark::SPAWN_RADIUS;
    let travel = -Spark::TRAVEL_RADIUS..Spark::TRAVEL_RADIUS;
    (0..count)
        .map(|i| Spark {
            from: (rng.gen_range(spawn.clone()), rng.gen_range(spawn.clone())),
            to: (rng.gen_range(travel.clone()), rng.gen_range(travel.clone())),
            delay: super::stagger(0.0, Spark::STAGGER, i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_field_is_reproducible() {
        let a = ambient_field(AMBIENT_SEED, AMBIENT_PARTICLES);
        let b = ambient_field(AMBIENT_SEED, AMBIENT_PARTICLES);
        assert_eq!(a.len(), AMBIENT_PARTICLES);
        assert_eq!(a, b);
    }

    #[test]
    fn ambient_field_ranges() {
        for drift in ambient_field(7, 500) {
            assert!((0.0..100.0).contains(&drift.left));
            assert!((0.0..100.0).contains(&drift.top));
            assert!((3.0..5.0).contains(&drift.duration));
            assert!((0.0..2.0).contains(&drift.delay));
        }
    }

    #[test]
    fn different_seeds_scatter_differently() {
        assert_ne!(ambient_field(1, 8), ambient_field(2, 8));
    }

    #[test]
    fn sparks_are_staggered_and_bounded() {
        let mut rng = SmallRng::seed_from_u64(42);
        let sparks = sparks(&mut rng, 6);
        assert_eq!(sparks.len(), 6);
        for (i, spark) in sparks.iter().enumerate() {
            assert!((spark.delay - i as f64 * 0.2).abs() < 1e-9);
            assert!(spark.from.0.abs() <= 50.0 && spark.from.1.abs() <= 50.0);
            assert!(spark.to.0.abs() <= 100.0 && spark.to.1.abs() <= 100.0);
        }
    }
}
