// renderer/state.rs
// Shared state between the simulation loop and the external render/input
// collaborators, plus the command channel the input side drives.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;

use super::RenderParticle;

pub static PAUSED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));
pub static UPDATE_LOCK: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(false));
/// Snapshot of the latest stepped frame, refreshed by the simulation loop.
pub static PARTICLES: Lazy<Mutex<Vec<RenderParticle>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Commands an input collaborator can send to the simulation thread.
pub enum SimCommand {
    TogglePause,
    /// Advance a single fixed-dt frame while paused.
    StepOnce,
    Exit,
}

pub static SIM_COMMAND_SENDER: Lazy<Mutex<Option<Sender<SimCommand>>>> =
    Lazy::new(|| Mutex::new(None));
