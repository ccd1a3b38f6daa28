// init_config.rs
// Loading and parsing the startup configuration from init_config.toml.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config;

#[derive(Debug, Deserialize, Serialize)]
pub struct InitConfig {
    pub simulation: Option<SimulationConfig>,
    pub scenario: ScenarioConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Optional domain width; falls back to the default when omitted.
    pub domain_width: Option<f64>,
    /// Optional domain height; falls back to the default when omitted.
    pub domain_height: Option<f64>,
    pub gravitational_constant: Option<f64>,
    pub softening: Option<f64>,
    /// Optional deterministic seed for scenario generation.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioConfig {
    pub kind: String,
    pub particle_count: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioKind {
    RandomField,
    ThreeBody,
}

impl SimulationConfig {
    /// Domain width and height, using the global defaults for missing values.
    pub fn domain_size(&self) -> (f64, f64) {
        (
            self.domain_width.unwrap_or(config::DEFAULT_DOMAIN_WIDTH),
            self.domain_height.unwrap_or(config::DEFAULT_DOMAIN_HEIGHT),
        )
    }
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("init_config.toml")
    }

    pub fn domain_size(&self) -> (f64, f64) {
        match &self.simulation {
            Some(sim) => sim.domain_size(),
            None => (config::DEFAULT_DOMAIN_WIDTH, config::DEFAULT_DOMAIN_HEIGHT),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.simulation.as_ref().and_then(|sim| sim.seed)
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            simulation: None,
            scenario: ScenarioConfig {
                kind: "random".to_string(),
                particle_count: None,
            },
        }
    }
}

impl ScenarioConfig {
    pub fn to_kind(&self) -> Result<ScenarioKind, String> {
        match self.kind.as_str() {
            "random" => Ok(ScenarioKind::RandomField),
            "three_body" => Ok(ScenarioKind::ThreeBody),
            _ => Err(format!("Unknown scenario kind: {}", self.kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let cfg: InitConfig = toml::from_str(
            r#"
            [simulation]
            domain_width = 800.0
            domain_height = 600.0
            seed = 7

            [scenario]
            kind = "three_body"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.domain_size(), (800.0, 600.0));
        assert_eq!(cfg.seed(), Some(7));
        assert_eq!(cfg.scenario.to_kind().unwrap(), ScenarioKind::ThreeBody);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: InitConfig = toml::from_str(
            r#"
            [scenario]
            kind = "random"
            particle_count = 100
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.domain_size(),
            (config::DEFAULT_DOMAIN_WIDTH, config::DEFAULT_DOMAIN_HEIGHT)
        );
        assert_eq!(cfg.seed(), None);
        assert_eq!(cfg.scenario.particle_count, Some(100));
    }

    #[test]
    fn unknown_scenario_kind_is_an_error() {
        let cfg: InitConfig = toml::from_str(
            r#"
            [scenario]
            kind = "galaxy"
            "#,
        )
        .unwrap();
        assert!(cfg.scenario.to_kind().is_err());
    }
}
