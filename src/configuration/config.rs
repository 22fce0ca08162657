//! Configuration types for loading and dumping scenarios as YAML.
//!
//! A scenario file is a flat record set:
//!
//! - [`BodyConfig`]       – one body record (`x, y, v_x, v_y, r, m, color`)
//! - [`ParametersConfig`] – optional physical constants
//! - [`ScenarioConfig`]   – top-level document: time scale, parameters, `Objects`
//!
//! # YAML format
//!
//! ```yaml
//! Time scale: 864000.0      # model seconds per real second (default 1.0)
//! Parameters:               # optional
//!   G: 6.67408e-11
//! Objects:
//!   - x: 0.0
//!     y: 0.0
//!     v_x: 0.0
//!     v_y: 0.0
//!     r: 30
//!     m: 1.989e30
//!     color: yellow
//!   - x: 1.496e11
//!     y: 0.0
//!     v_x: 0.0
//!     v_y: 29780.0
//!     r: 10
//!     m: 5.974e24
//!     color: blue
//! ```
//!
//! Records are decoded one by one so that an error names the offending
//! record. The dump side writes the same keys back, so a scenario loaded and
//! dumped without stepping reproduces its field values.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::simulation::params::{self, Parameters};
use crate::simulation::states::{Body, Color, NVec2};

/// Initial (or dumped) state of a single body
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: f64,   // position x, m
    pub y: f64,   // position y, m
    pub v_x: f64, // velocity x, m/s
    pub v_y: f64, // velocity y, m/s
    pub r: f64,   // radius used for contact detection and drawing
    pub m: f64,   // mass, kg
    pub color: Color, // passed through to the renderer
}

impl BodyConfig {
    /// Reject records the engine cannot simulate
    pub fn validate(&self, index: usize) -> Result<()> {
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("v_x", self.v_x),
            ("v_y", self.v_y),
            ("r", self.r),
            ("m", self.m),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::InvalidBody {
                index,
                reason: format!("{name} is not finite ({value})"),
            });
        }
        if self.m <= 0.0 {
            return Err(SimError::InvalidBody {
                index,
                reason: format!("mass must be positive, got {}", self.m),
            });
        }
        if self.r < 0.0 {
            return Err(SimError::InvalidBody {
                index,
                reason: format!("radius must not be negative, got {}", self.r),
            });
        }
        Ok(())
    }

    /// Runtime body for this record; call [`BodyConfig::validate`] first
    pub fn to_body(&self) -> Body {
        Body::new(
            NVec2::new(self.x, self.y),
            NVec2::new(self.v_x, self.v_y),
            self.r,
            self.m,
            self.color.clone(),
        )
    }
}

impl From<&Body> for BodyConfig {
    fn from(b: &Body) -> Self {
        Self {
            x: b.x.x,
            y: b.x.y,
            v_x: b.v.x,
            v_y: b.v.y,
            r: b.radius,
            m: b.m,
            color: b.color.clone(),
        }
    }
}

/// Physical constants; every field has a default
#[allow(non_snake_case)]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
}

fn default_g() -> f64 {
    params::G
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self { G: params::G }
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Parameters { G: cfg.G }
    }
}

/// Top-level scenario document
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(rename = "Time scale")]
    pub time_scale: f64, // default time-flow scale handed to the stopwatch

    #[serde(rename = "Parameters", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParametersConfig>,

    #[serde(rename = "Objects")]
    pub objects: Vec<BodyConfig>,
}

/// Document as read from disk; `Objects` stays raw so each record can be
/// decoded on its own
#[derive(Deserialize)]
struct RawScenario {
    #[serde(rename = "Time scale", default = "default_time_scale")]
    time_scale: f64,

    #[serde(rename = "Parameters", default)]
    parameters: Option<ParametersConfig>,

    #[serde(rename = "Objects")]
    objects: Vec<serde_yaml::Value>,
}

fn default_time_scale() -> f64 {
    1.0
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawScenario = serde_yaml::from_str(text)
            .map_err(|e| SimError::config(format!("malformed scenario: {e}")))?;
        Self::from_raw(raw)
    }

    /// Parse a scenario from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawScenario = serde_yaml::from_reader(reader)
            .map_err(|e| SimError::config(format!("malformed scenario: {e}")))?;
        Self::from_raw(raw)
    }

    /// Load a scenario file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let cfg = Self::from_reader(BufReader::new(file))?;
        info!("read scenario {} with {} objects", path.display(), cfg.objects.len());
        Ok(cfg)
    }

    fn from_raw(raw: RawScenario) -> Result<Self> {
        Ok(Self {
            time_scale: raw.time_scale,
            parameters: raw.parameters,
            objects: parse_records(&raw.objects)?,
        })
    }

    /// Scenario document for a dumped body list
    pub fn from_dump(time_scale: f64, parameters: Option<ParametersConfig>, objects: Vec<BodyConfig>) -> Self {
        Self {
            time_scale,
            parameters,
            objects,
        }
    }

    /// Serialize to YAML text in the load format
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SimError::config(format!("serialization failed: {e}")))
    }

    /// Write the scenario to `path`
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.to_yaml_string()?;
        std::fs::write(path.as_ref(), text)?;
        info!("wrote {} objects to {}", self.objects.len(), path.as_ref().display());
        Ok(())
    }
}

/// Decode a raw record set; errors carry the record index and field
pub fn parse_records(records: &[serde_yaml::Value]) -> Result<Vec<BodyConfig>> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            serde_yaml::from_value::<BodyConfig>(rec.clone()).map_err(|e| SimError::config_at(i, e.to_string()))
        })
        .collect()
}
