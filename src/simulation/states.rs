//! Core state types for the planar simulation.
//!
//! - `Body`   one massive disc: kinematic state plus constant radius/mass
//! - `System` the ordered list of bodies and the elapsed model time `t`
//! - `Color`  opaque display tag carried for the renderer
//!
//! Positions are in metres, velocities in m/s, accelerations in m/s²

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

pub type NVec2 = Vector2<f64>;

/// Display attribute passed through unchanged from load to dump.
///
/// The physics never looks inside it; whatever YAML value the scenario gave
/// (`yellow`, `[255, 255, 0]`, ...) is what the renderer gets back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub serde_yaml::Value);

impl Color {
    /// Color name when the tag is a plain string
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color(serde_yaml::Value::String(name.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration from the last force pass
    pub radius: f64, // contact radius, >= 0
    pub m: f64, // mass, > 0
    pub color: Color,
}

impl Body {
    /// New body; acceleration starts at zero until the first force pass
    pub fn new(x: NVec2, v: NVec2, radius: f64, m: f64, color: Color) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            radius,
            m,
            color,
        }
    }

    /// Whether position and velocity are still finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // load order is iteration order
    pub t: f64, // elapsed model time
}
