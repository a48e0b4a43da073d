//! Simulation runner and result recording.

use crate::error::{SimError, SimResult};
use crate::events::StrokeEvents;
use crate::plant::{Plant, Sample};
use ps_core::UnitSystem;
use tracing::{info, trace};

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            t_end: 1.0,
            max_steps: 1_000_000,
            record_every: 1,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if !(self.t_end >= 0.0 && self.t_end.is_finite()) {
            return Err(SimError::InvalidArg {
                what: "t_end must be non-negative",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        Ok(())
    }
}

/// Record of simulation results.
#[derive(Clone, Debug)]
pub struct SimRecord {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<Sample>,
    /// Hard stop contacts over the whole run
    pub events: StrokeEvents,
    /// Steps actually taken
    pub steps: usize,
}

impl SimRecord {
    pub fn last(&self) -> Option<(f64, &Sample)> {
        self.t.last().copied().zip(self.x.last())
    }

    /// Render the trace as CSV in the requested units.
    pub fn to_csv(&self, units: UnitSystem) -> String {
        let (len, vel, pres) = units.labels();
        let mut csv = format!(
            "time_s,position_{len},velocity_{vel},ext_pressure_{pres},ret_pressure_{pres}\n"
        );
        for (t, x) in self.t.iter().zip(&self.x) {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                t,
                units.length_from_si(x.position),
                units.length_from_si(x.velocity),
                units.pressure_from_si(x.ext_pressure),
                units.pressure_from_si(x.ret_pressure),
            ));
        }
        csv
    }
}

/// Run a fixed-step simulation of `plant`.
///
/// The initial sample is recorded at t = 0, then every `record_every`-th
/// step, and the final state is always recorded.
pub fn run_sim<P: Plant>(plant: &mut P, opts: &SimOptions) -> SimResult<SimRecord> {
    opts.validate()?;

    info!(
        dt_s = opts.dt,
        t_end_s = opts.t_end,
        record_every = opts.record_every,
        "simulation started"
    );

    let mut t = 0.0;
    let mut t_record = vec![t];
    let mut x_record = vec![plant.sample()];
    let mut events = StrokeEvents::default();

    let mut step = 0;
    while t < opts.t_end && step < opts.max_steps {
        let stop = plant.step(t, opts.dt);
        t += opts.dt;
        step += 1;
        events.observe(t, stop);

        let x = plant.sample();
        trace!(t_s = t, position_m = x.position, velocity_mps = x.velocity, "step");

        // Record if decimation matches
        if step % opts.record_every == 0 {
            t_record.push(t);
            x_record.push(x);
        }
    }

    // Always record final state
    if step % opts.record_every != 0 {
        t_record.push(t);
        x_record.push(plant.sample());
    }

    if step == opts.max_steps && t < opts.t_end {
        tracing::warn!(steps = step, t_s = t, "max_steps reached before t_end");
    }

    info!(
        steps = step,
        t_s = t,
        extended_at_s = events.extended_at,
        retracted_at_s = events.retracted_at,
        "simulation finished"
    );

    Ok(SimRecord {
        t: t_record,
        x: x_record,
        events,
        steps: step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_piston::HardStop;

    /// Plant that moves 1 m per step and hits a stop at 3 m.
    struct Counter {
        position: f64,
    }

    impl Plant for Counter {
        fn sample(&self) -> Sample {
            Sample {
                position: self.position,
                velocity: 0.0,
                ext_pressure: 0.0,
                ret_pressure: 0.0,
            }
        }

        fn step(&mut self, _t: f64, _dt: f64) -> Option<HardStop> {
            self.position = (self.position + 1.0).min(3.0);
            (self.position >= 3.0).then_some(HardStop::Extended)
        }
    }

    #[test]
    fn sim_options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.dt, 1e-3);
        assert_eq!(opts.t_end, 1.0);
        assert_eq!(opts.record_every, 1);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn sim_options_invalid() {
        let bad = [
            SimOptions {
                dt: 0.0,
                ..Default::default()
            },
            SimOptions {
                t_end: -1.0,
                ..Default::default()
            },
            SimOptions {
                max_steps: 0,
                ..Default::default()
            },
            SimOptions {
                record_every: 0,
                ..Default::default()
            },
        ];
        for opts in &bad {
            let mut plant = Counter { position: 0.0 };
            assert!(run_sim(&mut plant, opts).is_err());
        }
    }

    #[test]
    fn decimation_keeps_initial_and_final() {
        let mut plant = Counter { position: 0.0 };
        let opts = SimOptions {
            dt: 1.0,
            t_end: 5.0,
            max_steps: 100,
            record_every: 2,
        };
        let record = run_sim(&mut plant, &opts).unwrap();

        assert_eq!(record.steps, 5);
        assert_eq!(record.t, vec![0.0, 2.0, 4.0, 5.0]);
        assert_eq!(record.x[0].position, 0.0);
        assert_eq!(record.last().unwrap().1.position, 3.0);
        assert_eq!(record.events.extended_at, Some(3.0));
        assert_eq!(record.events.contacts, 3);
    }

    #[test]
    fn max_steps_bounds_the_run() {
        let mut plant = Counter { position: 0.0 };
        let opts = SimOptions {
            dt: 1.0,
            t_end: 100.0,
            max_steps: 2,
            record_every: 1,
        };
        let record = run_sim(&mut plant, &opts).unwrap();
        assert_eq!(record.steps, 2);
        assert_eq!(record.t.len(), 3);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut plant = Counter { position: 0.0 };
        let opts = SimOptions {
            dt: 1.0,
            t_end: 2.0,
            max_steps: 10,
            record_every: 1,
        };
        let record = run_sim(&mut plant, &opts).unwrap();
        let csv = record.to_csv(UnitSystem::Si);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "time_s,position_m,velocity_m/s,ext_pressure_Pa,ret_pressure_Pa"
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "0,0,0,0,0");
        assert_eq!(lines[3], "2,2,0,0,0");
    }
}
