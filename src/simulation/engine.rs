//! The simulation engine
//!
//! `Simulation` owns the body list and runs the two-phase tick:
//! every force/contact computation first, then every position update.
//!
//! The engine is the single writer. Renderers read through [`Simulation::bodies`],
//! a borrow that cannot outlive the next `load` or `step`.

use log::{info, warn};

use crate::configuration::config::BodyConfig;
use crate::error::{Result, SimError};
use crate::simulation::forces::{AccelSet, GravityField};
use crate::simulation::integrator::{check_finite, symplectic_euler};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

pub struct Simulation {
    parameters: Parameters,
    system: System,
    forces: AccelSet,
    halted: Option<String>, // reason of the state error that stopped the run
}

impl Simulation {
    /// Empty simulation with the standard gravitational constant
    pub fn new() -> Self {
        Self::with_parameters(Parameters::default())
    }

    pub fn with_parameters(parameters: Parameters) -> Self {
        let forces = AccelSet::new().with(GravityField::new(parameters.G));
        Self {
            parameters,
            system: System::default(),
            forces,
            halted: None,
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Replace the whole body set.
    ///
    /// Every record is validated before anything is replaced, so on error the
    /// previous generation stays live. Resets model time and clears a halt.
    /// Missing or non-numeric fields are reported earlier, as `SimError::Config`,
    /// by [`ScenarioConfig::parse`](crate::configuration::config::ScenarioConfig::parse)
    /// or [`parse_records`](crate::configuration::config::parse_records).
    pub fn load(&mut self, descriptors: &[BodyConfig]) -> Result<()> {
        let mut bodies = Vec::with_capacity(descriptors.len());
        for (i, d) in descriptors.iter().enumerate() {
            d.validate(i)?;
            bodies.push(d.to_body());
        }

        self.system = System { bodies, t: 0.0 };
        self.halted = None;
        info!("loaded {} bodies", self.system.bodies.len());
        Ok(())
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt == 0` recomputes accelerations without moving anything. A state
    /// error halts the simulation until the next `load`.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if let Some(reason) = &self.halted {
            return Err(SimError::State(format!("simulation halted: {reason}")));
        }
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::State(format!("time step must be finite and >= 0, got {dt}")));
        }

        let outcome = self.advance(dt);

        if let Err(SimError::State(reason)) = &outcome {
            warn!("halting simulation at t = {}: {reason}", self.system.t);
            self.halted = Some(reason.clone());
        }
        outcome
    }

    fn advance(&mut self, dt: f64) -> Result<()> {
        // Phase 1: accelerations and contact velocities
        self.forces.accumulate_accels(&mut self.system.bodies)?;
        // Phase 2: move everything
        symplectic_euler(&mut self.system, dt);
        check_finite(&self.system)
    }

    /// Read-only live view of the current generation, in load order
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Independent copy of the current bodies
    pub fn snapshot(&self) -> Vec<Body> {
        self.system.bodies.clone()
    }

    /// Current state as load-format records, in simulation order
    pub fn dump(&self) -> Vec<BodyConfig> {
        self.system.bodies.iter().map(BodyConfig::from).collect()
    }

    /// Largest center distance over all pairs, 0 with fewer than two bodies
    pub fn max_pairwise_distance(&self) -> f64 {
        let bodies = &self.system.bodies;
        let mut max = 0.0_f64;
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                max = max.max((bodies[i].x - bodies[j].x).norm());
            }
        }
        max
    }

    /// Model time accumulated since the last load
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
