// renderer/mod.rs
// Read-only projection of particle state for an external drawing surface.
// The crate never owns a window or a graphics API; a renderer polls the
// snapshot published in `state` and draws filled circles from it.

pub mod state;

use palette::Srgb;
use ultraviolet::DVec2;

use crate::body::Particle;

/// Everything a 2D surface needs to draw one particle as a filled circle.
#[derive(Clone, Copy, Debug)]
pub struct RenderParticle {
    pub position: DVec2,
    pub radius: f64,
    pub color: Srgb<u8>,
}

impl From<&Particle> for RenderParticle {
    fn from(particle: &Particle) -> Self {
        Self {
            position: particle.pos,
            radius: particle.radius(),
            color: particle.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_copies_position_color_and_mass_radius() {
        let p = Particle::new(
            DVec2::new(12.0, -3.0),
            DVec2::new(1.0, 1.0),
            6.5,
            Srgb::new(10, 20, 30),
        );
        let view = RenderParticle::from(&p);
        assert_eq!(view.position, p.pos);
        assert_eq!(view.radius, 6.5);
        assert_eq!(view.color, Srgb::new(10, 20, 30));
    }
}
