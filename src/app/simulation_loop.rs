// app/simulation_loop.rs
// The frame loop: drain commands, step by the elapsed wall-clock time,
// publish the render snapshot.

use std::sync::atomic::Ordering;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use super::command_loop;
use crate::config;
use crate::renderer::state::{SimCommand, PAUSED};
use crate::renderer_utils;
use crate::simulation::Simulation;

pub fn run_simulation_loop(rx: Receiver<SimCommand>, mut simulation: Simulation) {
    let mut last_frame = Instant::now();
    let mut just_resumed = false;
    loop {
        while let Ok(cmd) = rx.try_recv() {
            if !command_loop::handle_command(cmd, &mut simulation) {
                return;
            }
        }

        if PAUSED.load(Ordering::Relaxed) {
            just_resumed = true;
            std::thread::yield_now();
            continue;
        }

        // The first frame after a pause runs with a tiny dt instead of the
        // whole wall-clock gap.
        let dt = if just_resumed {
            just_resumed = false;
            config::RESUME_DT
        } else {
            last_frame.elapsed().as_secs_f64()
        };
        last_frame = Instant::now();

        simulation.step(dt);
        renderer_utils::render(&simulation);

        #[cfg(feature = "profiling")]
        if simulation.frame % 600 == 0 {
            crate::PROFILER.lock().print_and_clear();
        }
    }
}
