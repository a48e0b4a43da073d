//! Actuator variants: how chambers are fed and how the load is composed.

use crate::orifice::FlowOrifice;
use crate::state::ActuatorState;

/// Linear return spring of a single-acting cylinder.
///
/// Values are SI and are not unit-converted at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringReturn {
    /// Spring rate (N/m)
    pub spring_constant: f64,
    /// Spring force when fully retracted (N)
    pub rest_force: f64,
}

impl SpringReturn {
    /// Spring force opposing extension at `position` (N).
    pub fn force(&self, position: f64, min_position: f64) -> f64 {
        self.rest_force + self.spring_constant * (position - min_position)
    }
}

/// Closed set of actuator variants sharing one engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PistonKind {
    /// Both ports are independently pressurized or vented.
    DualAction,
    /// Only the extension port is fed; a spring retracts the rod and the
    /// retraction chamber breathes to atmosphere.
    SingleAction(SpringReturn),
}

impl PistonKind {
    /// Update chamber pressures from port flow with volumes held fixed.
    pub fn calc_flows(
        &self,
        orifice: &FlowOrifice,
        state: &mut ActuatorState,
        dt: f64,
        ext_port_pressure: f64,
        ret_port_pressure: f64,
    ) {
        state.ext_pressure =
            orifice.calc_flow(dt, state.ext_pressure, state.ext_volume, ext_port_pressure);

        if let PistonKind::DualAction = self {
            state.ret_pressure =
                orifice.calc_flow(dt, state.ret_pressure, state.ret_volume, ret_port_pressure);
        }
    }

    /// Force opposing extension, given the external load (N).
    pub fn compose_load_force(&self, load_force: f64, position: f64, min_position: f64) -> f64 {
        match self {
            PistonKind::DualAction => load_force,
            PistonKind::SingleAction(spring) => load_force + spring.force(position, min_position),
        }
    }

    /// Whether the retraction chamber pressure follows its volume.
    ///
    /// A vented chamber stays at its initial pressure.
    pub fn tracks_retraction_pressure(&self) -> bool {
        matches!(self, PistonKind::DualAction)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PistonKind::DualAction => "dual-action",
            PistonKind::SingleAction(_) => "single-action",
        }
    }
}
