// scenario.rs
// Builders that produce the initial particle population for a run.

use palette::Srgb;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use ultraviolet::DVec2;

use crate::body::Particle;
use crate::config;

/// Uniform random field: mass drawn from Normal(MASS_MEAN, MASS_STD_DEV) and
/// clamped to MIN_PARTICLE_MASS, position uniform over [0, w] x [0, h], color
/// channels uniform over 0-255, velocity zero.
///
/// The caller owns the generator, so a fixed seed reproduces the exact field.
pub fn random_field(
    count: usize,
    domain_width: f64,
    domain_height: f64,
    rng: &mut StdRng,
) -> Vec<Particle> {
    let mass_dist = Normal::new(config::MASS_MEAN, config::MASS_STD_DEV)
        .expect("mass distribution parameters are valid");

    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let mass = mass_dist.sample(rng).max(config::MIN_PARTICLE_MASS);
        let pos = DVec2::new(
            rng.random_range(0.0..=domain_width),
            rng.random_range(0.0..=domain_height),
        );
        let color = Srgb::new(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
        particles.push(Particle::new(pos, DVec2::zero(), mass, color));
    }
    particles
}

/// Hand-authored three-body configuration, shifted by `offset`. Doubles as
/// the canonical regression scenario.
pub fn three_body(offset: DVec2) -> Vec<Particle> {
    vec![
        Particle::new(
            offset + DVec2::new(800.0, 400.0),
            DVec2::new(20.0, 0.0),
            1000.0,
            Srgb::new(235, 90, 60),
        ),
        Particle::new(
            offset + DVec2::new(300.0, 300.0),
            DVec2::new(10.0, 10.0),
            500.0,
            Srgb::new(80, 160, 235),
        ),
        Particle::new(
            offset + DVec2::new(1000.0, 800.0),
            DVec2::new(20.0, 20.0),
            3000.0,
            Srgb::new(245, 215, 90),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = random_field(50, 1000.0, 800.0, &mut a);
        let second = random_field(50, 1000.0, 800.0, &mut b);
        for (p, q) in first.iter().zip(&second) {
            assert_eq!(p.mass, q.mass);
            assert_eq!(p.pos, q.pos);
            assert_eq!(p.color, q.color);
        }
    }

    #[test]
    fn generated_masses_never_drop_below_the_floor() {
        let mut rng = StdRng::seed_from_u64(1);
        for p in random_field(500, 100.0, 100.0, &mut rng) {
            assert!(p.mass >= config::MIN_PARTICLE_MASS);
        }
    }

    #[test]
    fn generated_positions_stay_inside_the_domain() {
        let mut rng = StdRng::seed_from_u64(2);
        for p in random_field(500, 640.0, 480.0, &mut rng) {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 480.0);
        }
    }

    #[test]
    fn three_body_has_the_canonical_configuration() {
        let bodies = three_body(DVec2::zero());
        assert_eq!(bodies.len(), 3);
        assert_eq!(bodies[0].mass, 1000.0);
        assert_eq!(bodies[0].pos, DVec2::new(800.0, 400.0));
        assert_eq!(bodies[0].vel, DVec2::new(20.0, 0.0));
        assert_eq!(bodies[1].mass, 500.0);
        assert_eq!(bodies[1].pos, DVec2::new(300.0, 300.0));
        assert_eq!(bodies[1].vel, DVec2::new(10.0, 10.0));
        assert_eq!(bodies[2].mass, 3000.0);
        assert_eq!(bodies[2].pos, DVec2::new(1000.0, 800.0));
        assert_eq!(bodies[2].vel, DVec2::new(20.0, 20.0));
        for b in &bodies {
            assert_eq!(b.force, DVec2::zero());
        }
    }

    #[test]
    fn three_body_offset_shifts_every_position() {
        let shifted = three_body(DVec2::new(10.0, -5.0));
        assert_eq!(shifted[0].pos, DVec2::new(810.0, 395.0));
        assert_eq!(shifted[2].pos, DVec2::new(1010.0, 795.0));
    }
}
