//! Mutable piston state.

use ps_core::UnitSystem;

/// State of a piston, always held in SI.
#[derive(Clone, Debug, PartialEq)]
pub struct ActuatorState {
    /// Position of the bore face from the cap end (m)
    pub position: f64,
    /// Velocity, positive when extending (m/s)
    pub velocity: f64,
    /// Extension chamber pressure (Pa)
    pub ext_pressure: f64,
    /// Retraction chamber pressure (Pa)
    pub ret_pressure: f64,
    /// Extension chamber volume (m³)
    pub ext_volume: f64,
    /// Retraction chamber volume (m³)
    pub ret_volume: f64,
}

/// Pressures of both chambers in a caller-selected unit system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChamberPressures {
    pub ext: f64,
    pub ret: f64,
}

impl ChamberPressures {
    pub fn from_state(state: &ActuatorState, units: UnitSystem) -> Self {
        Self {
            ext: units.pressure_from_si(state.ext_pressure),
            ret: units.pressure_from_si(state.ret_pressure),
        }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.ext, self.ret]
    }
}
