//! All-pairs gravitational force accumulation.
//!
//! For every ordered pair (i, j) with i != j, the force exerted on particle i
//! by particle j is accumulated, giving n * (n - 1) evaluations per step with
//! no third-law shortcut.

use crate::profile_scope;
use crate::simulation::Simulation;

/// Accumulate pairwise gravity into every particle's force vector.
///
/// Positions and masses are only read during this pass, so every evaluation
/// sees the same pre-step snapshot. Returns the number of pairwise
/// evaluations performed.
pub fn accumulate(sim: &mut Simulation) -> usize {
    profile_scope!("forces_accumulate");
    let g = sim.config.gravitational_constant;
    let softening = sim.config.softening;
    let n = sim.bodies.len();

    let mut evaluations = 0;
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let other = sim.bodies[j];
            sim.bodies[i].accumulate_force_from(&other, g, softening);
            evaluations += 1;
        }
    }
    evaluations
}
