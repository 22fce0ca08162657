//! Build a ready-to-run scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - a loaded `Simulation` at t = 0, owning its `Parameters`
//! - the default time-flow scale for the stopwatch driving it

use crate::configuration::config::{ScenarioConfig, ParametersConfig};
use crate::error::{Result, SimError};
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;

pub struct Scenario {
    pub simulation: Simulation,
    pub time_scale: f64, // model seconds per real second
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        if !cfg.time_scale.is_finite() || cfg.time_scale <= 0.0 {
            return Err(SimError::config(format!(
                "`Time scale` must be a positive number, got {}",
                cfg.time_scale
            )));
        }

        // Parameters (runtime) from ParametersConfig
        let parameters = cfg
            .parameters
            .as_ref()
            .map(Parameters::from)
            .unwrap_or_default();

        let mut simulation = Simulation::with_parameters(parameters);
        simulation.load(&cfg.objects)?;

        Ok(Self {
            simulation,
            time_scale: cfg.time_scale,
        })
    }

    /// Current state in the scenario file format
    pub fn to_config(&self) -> ScenarioConfig {
        let parameters = ParametersConfig { G: self.simulation.parameters().G };
        ScenarioConfig::from_dump(self.time_scale, Some(parameters), self.simulation.dump())
    }
}
