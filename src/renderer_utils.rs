// renderer_utils.rs
// Publishes simulation state for the render collaborator to poll.

use crate::renderer::state::{PARTICLES, UPDATE_LOCK};
use crate::renderer::RenderParticle;
use crate::simulation::Simulation;

/// Refresh the shared render snapshot from the current particle state.
pub fn render(simulation: &Simulation) {
    let mut updated = UPDATE_LOCK.lock();
    {
        let mut particles = PARTICLES.lock();
        particles.clear();
        particles.extend(simulation.bodies.iter().map(RenderParticle::from));
    }
    *updated |= true;
}
