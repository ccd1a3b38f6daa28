// app/command_loop.rs
// Handling of commands sent by the input collaborator.

use std::sync::atomic::Ordering;

use crate::config;
use crate::renderer::state::{SimCommand, PAUSED};
use crate::renderer_utils;
use crate::simulation::Simulation;

/// Apply one command. Returns false when the loop should shut down.
pub fn handle_command(cmd: SimCommand, simulation: &mut Simulation) -> bool {
    match cmd {
        SimCommand::TogglePause => {
            let was_paused = PAUSED.fetch_xor(true, Ordering::Relaxed);
            println!(
                "Simulation {}",
                if was_paused { "resumed" } else { "paused" }
            );
        }
        SimCommand::StepOnce => {
            simulation.step(config::STEP_DT);
            renderer_utils::render(simulation);
        }
        SimCommand::Exit => return false,
    }
    true
}
