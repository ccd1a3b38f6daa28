// diagnostics.rs
// Aggregate quantities over the particle collection, used for sanity checks
// and for detecting corrupted (non-finite) state.

use ultraviolet::DVec2;

use crate::body::Particle;

/// Counters filled in by the most recent `Simulation::step`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepStats {
    /// Pairwise force evaluations performed (n * (n - 1) for n particles).
    pub pair_evaluations: usize,
}

/// Sum of mass * velocity over all particles.
pub fn total_momentum(bodies: &[Particle]) -> DVec2 {
    bodies.iter().fold(DVec2::zero(), |p, b| p + b.vel * b.mass)
}

pub fn total_kinetic_energy(bodies: &[Particle]) -> f64 {
    bodies.iter().map(|b| 0.5 * b.mass * b.vel.mag_sq()).sum()
}

/// Pairwise potential energy, softened consistently with the force law.
pub fn total_potential_energy(bodies: &[Particle], g: f64, softening: f64) -> f64 {
    let mut potential = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let r2 = (bodies[j].pos - bodies[i].pos).mag_sq();
            potential -= g * bodies[i].mass * bodies[j].mass / (r2 + softening).sqrt();
        }
    }
    potential
}

pub fn total_energy(bodies: &[Particle], g: f64, softening: f64) -> f64 {
    total_kinetic_energy(bodies) + total_potential_energy(bodies, g, softening)
}

/// Number of particles whose position or velocity contains NaN or Inf.
/// Non-finite state never recovers, so one detection is enough.
pub fn count_non_finite(bodies: &[Particle]) -> usize {
    bodies
        .iter()
        .filter(|b| {
            !(b.pos.x.is_finite()
                && b.pos.y.is_finite()
                && b.vel.x.is_finite()
                && b.vel.y.is_finite())
        })
        .count()
}
