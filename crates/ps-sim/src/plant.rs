//! Plant trait: anything the driving loop can advance one step at a time.

use crate::error::SimResult;
use crate::schedule::PortSchedule;
use ps_core::UnitSystem;
use ps_piston::{HardStop, LinearTranslator, Piston, StepInputs};

/// Snapshot of a piston, always SI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Position (m)
    pub position: f64,
    /// Velocity (m/s)
    pub velocity: f64,
    /// Extension chamber pressure (Pa)
    pub ext_pressure: f64,
    /// Retraction chamber pressure (Pa)
    pub ret_pressure: f64,
}

impl Sample {
    pub fn of(piston: &Piston) -> Self {
        let state = piston.state();
        Self {
            position: state.position,
            velocity: state.velocity,
            ext_pressure: state.ext_pressure,
            ret_pressure: state.ret_pressure,
        }
    }
}

/// A dynamic system driven by a fixed-step loop.
///
/// The plant owns its inputs (schedules, loads); the loop only supplies time.
pub trait Plant {
    /// Current state snapshot.
    fn sample(&self) -> Sample;

    /// Advance from `t` to `t + dt`, reporting any hard stop contact.
    fn step(&mut self, t: f64, dt: f64) -> Option<HardStop>;
}

/// Piston driven with a per-step load and scheduled port pressures.
#[derive(Clone, Debug)]
pub struct PistonPlant {
    pub piston: Piston,
    pub schedule: PortSchedule,
    /// Force opposing extension (N or lbf)
    pub load_force: f64,
    /// Mass attached to the rod (kg or lbm)
    pub load_mass: f64,
    /// Units of the load and the schedule pressures
    pub units: UnitSystem,
}

impl PistonPlant {
    /// Checks the load against every scheduled port pressure.
    ///
    /// # Errors
    /// Returns [`crate::SimError::Plant`] for a negative or non-finite load.
    pub fn new(
        piston: Piston,
        schedule: PortSchedule,
        load_force: f64,
        load_mass: f64,
        units: UnitSystem,
    ) -> SimResult<Self> {
        for seg in schedule.segments() {
            StepInputs {
                load_force,
                load_mass,
                ext_port_pressure: seg.ext_pressure,
                ret_port_pressure: seg.ret_pressure,
            }
            .validate()?;
        }
        Ok(Self {
            piston,
            schedule,
            load_force,
            load_mass,
            units,
        })
    }
}

impl Plant for PistonPlant {
    fn sample(&self) -> Sample {
        Sample::of(&self.piston)
    }

    fn step(&mut self, t: f64, dt: f64) -> Option<HardStop> {
        let ports = self.schedule.at(t);
        let inputs = StepInputs {
            load_force: self.load_force,
            load_mass: self.load_mass,
            ext_port_pressure: ports.ext_pressure,
            ret_port_pressure: ports.ret_pressure,
        };
        self.piston.update(dt, inputs, self.units)
    }
}

/// Translator carrying its own gravity load, with scheduled port pressures.
#[derive(Debug)]
pub struct TranslatorPlant<'a> {
    pub translator: LinearTranslator<'a>,
    pub schedule: PortSchedule,
    /// Units of the schedule pressures
    pub units: UnitSystem,
}

impl Plant for TranslatorPlant<'_> {
    fn sample(&self) -> Sample {
        Sample::of(self.translator.piston())
    }

    fn step(&mut self, t: f64, dt: f64) -> Option<HardStop> {
        let ports = self.schedule.at(t);
        self.translator
            .update(dt, ports.ext_pressure, ports.ret_pressure, self.units)
    }
}
