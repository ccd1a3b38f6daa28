// app/mod.rs
// Startup: load the init configuration, build the scenario, run the frame loop.

use std::sync::mpsc::channel;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ultraviolet::DVec2;

use crate::config;
use crate::init_config::{InitConfig, ScenarioKind};
use crate::renderer::state::SIM_COMMAND_SENDER;
use crate::scenario;
use crate::simulation::Simulation;

pub mod command_loop;
pub mod simulation_loop;

pub fn run() {
    let init = match InitConfig::load_default() {
        Ok(cfg) => {
            println!("Loaded initial configuration from init_config.toml");
            cfg
        }
        Err(e) => {
            eprintln!("Failed to load init_config.toml: {}", e);
            eprintln!("Using built-in defaults");
            InitConfig::default()
        }
    };

    let (domain_width, domain_height) = init.domain_size();
    let mut simulation = Simulation::new(domain_width, domain_height);
    if let Some(sim_cfg) = &init.simulation {
        if let Some(g) = sim_cfg.gravitational_constant {
            simulation.config.gravitational_constant = g;
        }
        if let Some(softening) = sim_cfg.softening {
            simulation.config.softening = softening;
        }
    }

    simulation.bodies = match init.scenario.to_kind() {
        Ok(ScenarioKind::RandomField) => {
            let count = init
                .scenario
                .particle_count
                .unwrap_or(config::DEFAULT_PARTICLE_COUNT);
            let mut rng = match init.seed() {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            scenario::random_field(count, domain_width, domain_height, &mut rng)
        }
        Ok(ScenarioKind::ThreeBody) => scenario::three_body(DVec2::zero()),
        Err(e) => {
            eprintln!("Error in scenario config: {}", e);
            return;
        }
    };
    println!(
        "Simulating {} particles in a {}x{} domain",
        simulation.bodies.len(),
        domain_width,
        domain_height
    );

    let (tx, rx) = channel();
    *SIM_COMMAND_SENDER.lock() = Some(tx);

    simulation_loop::run_simulation_loop(rx, simulation);
}
