// simulation/simulation.rs
// The Simulation struct and the per-frame stepping logic.

use crate::body::Particle;
use crate::config::SimConfig;
use crate::diagnostics::{self, StepStats};
use crate::profile_scope;

use super::forces;

/// Owns the particle collection and advances it one time step at a time.
///
/// A step is a pure function of (current particle state, dt): there is no
/// internal clock, so tests can drive it with any fixed dt they like. The
/// collection is fixed after initial population; nothing is inserted or
/// removed during a run.
pub struct Simulation {
    pub frame: usize,
    pub bodies: Vec<Particle>,
    /// Placement bounds for random generation; motion is never clamped to them.
    pub domain_width: f64,
    pub domain_height: f64,
    pub config: SimConfig,
    pub stats: StepStats,
    corruption_reported: bool,
}

impl Simulation {
    pub fn new(domain_width: f64, domain_height: f64) -> Self {
        Self {
            frame: 0,
            bodies: Vec::new(),
            domain_width,
            domain_height,
            config: SimConfig::default(),
            stats: StepStats::default(),
            corruption_reported: false,
        }
    }

    /// Advance the whole system by `dt`.
    ///
    /// Phase order is load-bearing: every pairwise force is accumulated from
    /// one consistent position snapshot before any particle's velocity or
    /// position moves. `dt == 0` recomputes forces but leaves motion
    /// untouched.
    pub fn step(&mut self, dt: f64) {
        profile_scope!("simulation_step");
        debug_assert!(dt >= 0.0, "negative dt: {dt}");

        for body in &mut self.bodies {
            body.reset_force();
        }

        self.stats.pair_evaluations = forces::accumulate(self);

        self.iterate(dt);

        if cfg!(debug_assertions) && !self.corruption_reported {
            let bad = diagnostics::count_non_finite(&self.bodies);
            if bad > 0 {
                eprintln!(
                    "[diagnostics] frame {}: {} particle(s) entered a non-finite state",
                    self.frame, bad
                );
                self.corruption_reported = true;
            }
        }

        self.frame += 1;
    }

    /// Kick-drift update of every particle from its accumulated force.
    pub fn iterate(&mut self, dt: f64) {
        profile_scope!("iterate");
        for body in &mut self.bodies {
            body.integrate(dt);
        }
    }
}
