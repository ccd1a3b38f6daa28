// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

// ====================
// Physics
// ====================
/// Gravitational coupling. Not physically calibrated; tuned for visually
/// interesting motion at screen scale.
pub const GRAVITATIONAL_CONSTANT: f64 = 1.0e3;
/// Softening added to the squared pair separation (px^2); keeps close
/// encounters finite.
pub const SOFTENING: f64 = 1.0;

// ====================
// Random field generation
// ====================
/// Mean of the generated mass distribution.
pub const MASS_MEAN: f64 = 1.0;
/// Spread of the generated mass distribution.
pub const MASS_STD_DEV: f64 = 5.0;
/// Generated masses are clamped up to this floor.
pub const MIN_PARTICLE_MASS: f64 = 1.0;
pub const DEFAULT_PARTICLE_COUNT: usize = 5000;
pub const DEFAULT_DOMAIN_WIDTH: f64 = 1920.0;
pub const DEFAULT_DOMAIN_HEIGHT: f64 = 1080.0;

// ====================
// Frame loop
// ====================
/// dt supplied for the first frame after a pause is released (seconds).
pub const RESUME_DT: f64 = 1.0e-6;
/// dt used when single-stepping a paused simulation (seconds).
pub const STEP_DT: f64 = 1.0 / 60.0;

/// Runtime physics knobs, owned by the `Simulation`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub gravitational_constant: f64,
    pub softening: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            softening: SOFTENING,
        }
    }
}
