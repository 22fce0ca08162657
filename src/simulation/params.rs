//! Physical parameters for the simulation
//!
//! `Parameters` currently only carries the gravitational constant. The time
//! step is never stored here: `dt` is a pure input of every `step`.

/// Newtonian gravitational constant, N·m²/kg²
pub const G: f64 = 6.67408e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self { G }
    }
}
