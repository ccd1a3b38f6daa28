// body.rs
// The Particle struct: one body's physical state plus its fixed display color.

use palette::Srgb;
use ultraviolet::DVec2;

/// A point mass in the simulation.
///
/// Physical state lives in simulation-space coordinates (the same units the
/// drawing surface uses). Color is fixed at creation and never touched by the
/// physics; the render radius is derived from the mass (1:1).
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub acc: DVec2,
    pub force: DVec2,
    pub mass: f64,
    pub color: Srgb<u8>,
}

impl Particle {
    /// A mass of zero or below would put `Inf` into the first acceleration it
    /// produces, so construction rejects it outright.
    pub fn new(pos: DVec2, vel: DVec2, mass: f64, color: Srgb<u8>) -> Self {
        assert!(mass > 0.0, "particle mass must be positive (got {mass})");
        Self {
            pos,
            vel,
            acc: DVec2::zero(),
            force: DVec2::zero(),
            mass,
            color,
        }
    }

    pub fn reset_force(&mut self) {
        self.force = DVec2::zero();
    }

    /// Add the gravitational pull of `other` to this particle's force.
    ///
    /// `softening` is added to the squared separation so close encounters
    /// stay finite. An exactly coincident pair has no defined pull direction
    /// and contributes nothing.
    pub fn accumulate_force_from(&mut self, other: &Particle, g: f64, softening: f64) {
        let d = other.pos - self.pos;
        let r2 = d.mag_sq();
        if r2 == 0.0 {
            return;
        }
        let magnitude = g * self.mass * other.mass / (r2 + softening);
        self.force += d.normalized() * magnitude;
    }

    /// Semi-implicit kick-drift update: the velocity kick lands first, so the
    /// position drift uses the post-kick velocity.
    pub fn integrate(&mut self, dt: f64) {
        self.acc = self.force / self.mass;
        self.vel += self.acc * dt;
        self.pos += self.vel * dt;
    }

    /// Display radius, scaled 1:1 from mass.
    pub fn radius(&self) -> f64 {
        self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f64, y: f64, mass: f64) -> Particle {
        Particle::new(DVec2::new(x, y), DVec2::zero(), mass, Srgb::new(255, 255, 255))
    }

    #[test]
    fn new_starts_with_zero_force_and_acceleration() {
        let p = particle(3.0, 4.0, 2.0);
        assert_eq!(p.force, DVec2::zero());
        assert_eq!(p.acc, DVec2::zero());
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn zero_mass_is_rejected() {
        particle(0.0, 0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn negative_mass_is_rejected() {
        particle(0.0, 0.0, -1.0);
    }

    #[test]
    fn force_points_toward_the_other_body() {
        let mut a = particle(0.0, 0.0, 2.0);
        let b = particle(10.0, 0.0, 3.0);
        a.accumulate_force_from(&b, 1.0e3, 0.0);
        assert!(a.force.x > 0.0);
        assert_eq!(a.force.y, 0.0);
    }

    #[test]
    fn coincident_pair_contributes_nothing() {
        let mut a = particle(5.0, 5.0, 2.0);
        let b = particle(5.0, 5.0, 3.0);
        a.accumulate_force_from(&b, 1.0e3, 0.0);
        assert_eq!(a.force, DVec2::zero());
    }

    #[test]
    fn integrate_kicks_before_drifting() {
        let mut p = particle(1.0, 1.0, 2.0);
        p.force = DVec2::new(4.0, 0.0);
        p.integrate(0.5);
        // acc = 2, vel = 1 after the kick, and the drift uses that velocity
        assert_eq!(p.acc, DVec2::new(2.0, 0.0));
        assert_eq!(p.vel, DVec2::new(1.0, 0.0));
        assert_eq!(p.pos, DVec2::new(1.5, 1.0));
    }

    #[test]
    fn radius_tracks_mass() {
        assert_eq!(particle(0.0, 0.0, 7.5).radius(), 7.5);
    }
}
