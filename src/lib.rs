pub mod error;
pub mod simulation;
pub mod configuration;
pub mod timing;
pub mod visualization;

pub use error::{Result, SimError};

pub use simulation::states::{Body, Color, System, NVec2};
pub use simulation::params::{Parameters, G};
pub use simulation::forces::{Acceleration, AccelSet, GravityField};
pub use simulation::integrator::symplectic_euler;
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, parse_records};

pub use timing::stopwatch::Stopwatch;

pub use visualization::{ascii::render_ascii, viewport::Viewport};
