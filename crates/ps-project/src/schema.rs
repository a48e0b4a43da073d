//! Scenario file schema definitions.

use ps_core::UnitSystem;
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    pub actuator: ActuatorDef,
    pub load: LoadDef,
    /// Units of the load and the port pressures
    pub units: UnitSystem,
    pub ports: Vec<PortSegmentDef>,
    #[serde(default)]
    pub run: RunDef,
}

/// Actuator construction parameters, imperial as on a datasheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActuatorDef {
    pub bore_diameter_in: f64,
    pub rod_diameter_in: f64,
    pub min_position_in: f64,
    pub max_position_in: f64,
    pub bore_mass_lb: f64,
    pub length_in: f64,
    pub starting_position_in: f64,
    pub flow_coefficient: f64,
    pub kind: ActuatorKindDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ActuatorKindDef {
    DualAction,
    SingleAction {
        spring_constant_n_per_m: f64,
        spring_rest_force_n: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum LoadDef {
    /// Force opposing extension and attached mass, applied every step.
    Direct { force: f64, mass: f64 },
    /// Mass on an incline; the piston runs at `angle_deg` to horizontal.
    Translator { mass: f64, angle_deg: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortSegmentDef {
    pub t_start_s: f64,
    pub ext_pressure: f64,
    pub ret_pressure: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    pub dt_s: f64,
    pub t_end_s: f64,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_record_every() -> usize {
    1
}

fn default_max_steps() -> usize {
    1_000_000
}

impl Default for RunDef {
    fn default() -> Self {
        Self {
            dt_s: 0.001,
            t_end_s: 1.0,
            record_every: default_record_every(),
            max_steps: default_max_steps(),
        }
    }
}
