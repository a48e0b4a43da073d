//! Piston dynamics engine shared by every actuator variant.

use crate::config::{ActuatorConfig, PistonParams};
use crate::error::{PistonError, PistonResult};
use crate::kind::{PistonKind, SpringReturn};
use crate::orifice::FlowOrifice;
use crate::state::{ActuatorState, ChamberPressures};
use ps_core::UnitSystem;
use ps_core::imperial;
use ps_core::units::constants;
use tracing::{debug, trace};

/// Per-step inputs, in the unit system passed alongside them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepInputs {
    /// Force opposing extension (N or lbf)
    pub load_force: f64,
    /// Mass attached to the rod (kg or lbm)
    pub load_mass: f64,
    /// Supply pressure at the extension port (Pa or psi)
    pub ext_port_pressure: f64,
    /// Supply pressure at the retraction port (Pa or psi)
    pub ret_port_pressure: f64,
}

impl StepInputs {
    /// Check that the inputs can drive a step.
    ///
    /// # Errors
    /// Returns [`PistonError::InvalidArg`] if any value is non-finite or the
    /// load mass is negative.
    pub fn validate(&self) -> PistonResult<()> {
        let finite = [
            self.load_force,
            self.load_mass,
            self.ext_port_pressure,
            self.ret_port_pressure,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(PistonError::InvalidArg {
                what: "step inputs must be finite",
            });
        }
        if self.load_mass < 0.0 {
            return Err(PistonError::InvalidArg {
                what: "load mass must be non-negative",
            });
        }
        Ok(())
    }

    pub fn to_si(self, units: UnitSystem) -> Self {
        Self {
            load_force: units.force_to_si(self.load_force),
            load_mass: units.mass_to_si(self.load_mass),
            ext_port_pressure: units.pressure_to_si(self.ext_port_pressure),
            ret_port_pressure: units.pressure_to_si(self.ret_port_pressure),
        }
    }
}

/// Which hard stop, if any, the last motion step ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardStop {
    Retracted,
    Extended,
}

/// Linear piston actuator.
///
/// One engine, one state, one motion routine; the variant only decides how
/// chambers are fed and how the opposing load is composed.
///
/// Each step runs gas exchange and displacement as two sequential
/// quasi-static sub-steps:
///
/// ```text
/// 1. flow:    P_chamber <- orifice(P_chamber, V_chamber, P_port)   (V fixed)
/// 2. force:   F = P_ext*A_ext - P_ret*A_ret - F_load
/// 3. motion:  v += F/(m_bore + m_load)*dt;  x += v*dt;  clamp to [min, max]
/// 4. gas law: P_new = P_old*V_old/V_new                             (T fixed)
/// ```
#[derive(Clone, Debug)]
pub struct Piston {
    config: ActuatorConfig,
    kind: PistonKind,
    orifice: FlowOrifice,
    state: ActuatorState,
}

impl Piston {
    /// Create a piston at rest at `starting_position_m`, both chambers at
    /// atmospheric pressure.
    ///
    /// # Errors
    /// Returns [`PistonError::InvalidGeometry`] if the starting
    /// position is outside the travel limits.
    pub fn new(
        config: ActuatorConfig,
        kind: PistonKind,
        starting_position_m: f64,
    ) -> PistonResult<Self> {
        let position = config.check_position(starting_position_m)?;
        let atmosphere = constants::atmospheric_pa();

        let state = ActuatorState {
            position,
            velocity: 0.0,
            ext_pressure: atmosphere,
            ret_pressure: atmosphere,
            ext_volume: config.extension_volume(position),
            ret_volume: config.retraction_volume(position),
        };

        debug!(
            kind = kind.label(),
            position_m = position,
            ext_area_m2 = config.extension_area(),
            ret_area_m2 = config.retraction_area(),
            "piston created"
        );

        Ok(Self {
            orifice: FlowOrifice::new(config.flow_coefficient()),
            config,
            kind,
            state,
        })
    }

    /// Double-acting cylinder from imperial construction parameters.
    pub fn dual_action(params: &PistonParams) -> PistonResult<Self> {
        let config = ActuatorConfig::from_params(params)?;
        Self::new(
            config,
            PistonKind::DualAction,
            imperial::in_to_m(params.starting_position),
        )
    }

    /// Spring-return cylinder from imperial construction parameters.
    ///
    /// The spring is given in N/m and N.
    pub fn single_action(params: &PistonParams, spring: SpringReturn) -> PistonResult<Self> {
        let config = ActuatorConfig::from_params(params)?;
        Self::new(
            config,
            PistonKind::SingleAction(spring),
            imperial::in_to_m(params.starting_position),
        )
    }

    /// Chamber pressure after flowing through this piston's orifice.
    ///
    /// Arguments and result are SI.
    pub fn calc_flow(
        &self,
        dt: f64,
        chamber_pressure: f64,
        chamber_volume: f64,
        in_pressure: f64,
    ) -> f64 {
        self.orifice.calc_flow(dt, chamber_pressure, chamber_volume, in_pressure)
    }

    /// Feed the chambers from the ports (SI) without moving the piston.
    pub fn calc_flows(&mut self, dt: f64, ext_port_pressure: f64, ret_port_pressure: f64) {
        self.kind.calc_flows(
            &self.orifice,
            &mut self.state,
            dt,
            ext_port_pressure,
            ret_port_pressure,
        );
    }

    /// Advance one timestep.
    ///
    /// Inputs are converted to SI once, here; never fails. Inputs that fail
    /// [`StepInputs::validate`] (a negative load mass cancelling the bore
    /// mass, say) give a non-finite state.
    pub fn update(&mut self, dt: f64, inputs: StepInputs, units: UnitSystem) -> Option<HardStop> {
        let inputs = inputs.to_si(units);

        self.calc_flows(dt, inputs.ext_port_pressure, inputs.ret_port_pressure);

        let load = self.composed_load_force(inputs.load_force);
        let net_force = self.net_pressure_force() - load;
        let acceleration = self.net_acceleration(net_force, inputs.load_mass);

        self.accelerate(dt, acceleration);
        self.advance(dt)
    }

    /// Pressure force pushing toward extension (N).
    pub fn net_pressure_force(&self) -> f64 {
        self.state.ext_pressure * self.config.extension_area()
            - self.state.ret_pressure * self.config.retraction_area()
    }

    /// External load plus whatever the variant adds to it (N).
    pub fn composed_load_force(&self, load_force: f64) -> f64 {
        self.kind
            .compose_load_force(load_force, self.state.position, self.config.min_position())
    }

    /// Acceleration of bore plus load under `net_force` (m/s²).
    pub fn net_acceleration(&self, net_force: f64, load_mass: f64) -> f64 {
        net_force / (self.config.bore_mass() + load_mass)
    }

    /// Integrate velocity.
    pub fn accelerate(&mut self, dt: f64, acceleration: f64) {
        self.state.velocity += acceleration * dt;
    }

    /// Integrate position, clamp to the hard stops and reconcile chamber
    /// pressures with the new volumes.
    ///
    /// Returns the stop that was hit, if any. Hitting a stop discards all
    /// kinetic energy.
    pub fn advance(&mut self, dt: f64) -> Option<HardStop> {
        let state = &mut self.state;
        state.position += state.velocity * dt;

        let stop = if state.position >= self.config.max_position() {
            state.position = self.config.max_position();
            state.velocity = 0.0;
            Some(HardStop::Extended)
        } else if state.position <= self.config.min_position() {
            state.position = self.config.min_position();
            state.velocity = 0.0;
            Some(HardStop::Retracted)
        } else {
            None
        };

        if let Some(stop) = stop {
            trace!(?stop, position_m = state.position, "hard stop");
        }

        // P_old * V_old = P_new * V_new
        let ext_volume = self.config.extension_volume(state.position);
        let ret_volume = self.config.retraction_volume(state.position);

        state.ext_pressure = state.ext_pressure * state.ext_volume / ext_volume;
        if self.kind.tracks_retraction_pressure() {
            state.ret_pressure = state.ret_pressure * state.ret_volume / ret_volume;
        }

        state.ext_volume = ext_volume;
        state.ret_volume = ret_volume;

        stop
    }

    pub fn position(&self, units: UnitSystem) -> f64 {
        units.length_from_si(self.state.position)
    }

    /// Velocity in m/s or in/s.
    pub fn velocity(&self, units: UnitSystem) -> f64 {
        units.length_from_si(self.state.velocity)
    }

    pub fn pressures(&self, units: UnitSystem) -> ChamberPressures {
        ChamberPressures::from_state(&self.state, units)
    }

    pub fn state(&self) -> &ActuatorState {
        &self.state
    }

    pub fn config(&self) -> &ActuatorConfig {
        &self.config
    }

    pub fn kind(&self) -> PistonKind {
        self.kind
    }
}
