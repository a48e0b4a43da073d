//! Linear translator: a piston pushing a mass up a fixed incline.

use crate::error::{PistonError, PistonResult};
use crate::piston::{HardStop, Piston};
use ps_core::UnitSystem;
use ps_core::units::{Force, constants, kg};
use uom::si::force::newton;
use tracing::debug;

/// Constant gravity load carried by a translator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadContext {
    /// Load mass (kg)
    pub mass: f64,
    /// Mounting angle of the piston to horizontal (rad)
    pub angle: f64,
    /// Component of the load's weight along the piston axis (N)
    pub force: f64,
}

impl LoadContext {
    /// `mass` is in kg or lbm depending on `units`; `angle` is always radians.
    pub fn new(mass: f64, angle: f64, units: UnitSystem) -> PistonResult<Self> {
        let mass = units.mass_to_si(mass);
        if !mass.is_finite() || mass < 0.0 {
            return Err(PistonError::InvalidArg {
                what: "load mass must be finite and non-negative",
            });
        }
        if !angle.is_finite() {
            return Err(PistonError::InvalidArg {
                what: "mounting angle must be finite",
            });
        }

        let weight: Force = kg(mass) * constants::g0();

        Ok(Self {
            mass,
            angle,
            force: weight.get::<newton>() * angle.sin(),
        })
    }
}

/// Drives a borrowed piston against a fixed gravity load.
///
/// The translator owns its force-composition policy: rather than going
/// through [`Piston::update`] with a per-call load, it calls the engine's
/// flow and motion primitives directly with its constant load.
#[derive(Debug)]
pub struct LinearTranslator<'a> {
    piston: &'a mut Piston,
    load: LoadContext,
}

impl<'a> LinearTranslator<'a> {
    pub fn new(piston: &'a mut Piston, load: LoadContext) -> Self {
        debug!(
            load_mass_kg = load.mass,
            angle_rad = load.angle,
            load_force_n = load.force,
            "translator attached"
        );
        Self { piston, load }
    }

    /// Advance one timestep with the given port pressures (Pa or psi).
    pub fn update(
        &mut self,
        dt: f64,
        ext_port_pressure: f64,
        ret_port_pressure: f64,
        units: UnitSystem,
    ) -> Option<HardStop> {
        let ext_port_pressure = units.pressure_to_si(ext_port_pressure);
        let ret_port_pressure = units.pressure_to_si(ret_port_pressure);

        self.piston.calc_flows(dt, ext_port_pressure, ret_port_pressure);

        let acceleration = self.net_acceleration();
        self.piston.accelerate(dt, acceleration);
        self.piston.advance(dt)
    }

    /// Acceleration the current chamber pressures produce against the load
    /// (m/s²).
    pub fn net_acceleration(&self) -> f64 {
        let load = self.piston.composed_load_force(self.load.force);
        let net_force = self.piston.net_pressure_force() - load;
        self.piston.net_acceleration(net_force, self.load.mass)
    }

    pub fn load(&self) -> &LoadContext {
        &self.load
    }

    pub fn load_force(&self) -> f64 {
        self.load.force
    }

    pub fn position(&self, units: UnitSystem) -> f64 {
        self.piston.position(units)
    }

    pub fn piston(&self) -> &Piston {
        &*self.piston
    }
}
