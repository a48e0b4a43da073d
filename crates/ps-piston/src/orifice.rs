//! Empirical fixed-Cv orifice feeding a fixed-volume chamber.

use ps_core::imperial::{M_PER_IN, pa_to_psi};

/// Coefficient of the empirical orifice relation.
pub const ORIFICE_COEFF: f64 = 0.718;
/// Exponent applied to the pressure differential [psi].
pub const ORIFICE_EXPONENT: f64 = -0.804;

const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Orifice between a supply port and one piston chamber.
///
/// The volumetric flow rate follows
///
/// ```text
/// Q [SCFM] = Cv / (0.718 * |Δp [psi]|^-0.804)
/// ```
///
/// and the chamber pressure is updated with a mixing rule that holds the
/// chamber volume and temperature fixed for the duration of the sub-step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowOrifice {
    /// Flow coefficient Cv (dimensionless, calibrated in SCFM and psi)
    pub cv: f64,
}

impl FlowOrifice {
    pub fn new(cv: f64) -> Self {
        Self { cv }
    }

    /// Volumetric flow magnitude for a pressure differential, in m³/s.
    ///
    /// `dp_pa` must be non-zero: the power law is singular at zero.
    pub fn volume_rate(&self, dp_pa: f64) -> f64 {
        let dp_psi = pa_to_psi(dp_pa.abs());
        let scfm = self.cv / (ORIFICE_COEFF * dp_psi.powf(ORIFICE_EXPONENT));
        let cubic_inches_per_second = scfm * CUBIC_INCHES_PER_CUBIC_FOOT / SECONDS_PER_MINUTE;
        cubic_inches_per_second * M_PER_IN * M_PER_IN * M_PER_IN
    }

    /// New chamber pressure after flowing for `dt` seconds.
    ///
    /// All arguments are SI. Equal pressures short-circuit to the unchanged
    /// chamber pressure before the power law is evaluated.
    pub fn calc_flow(
        &self,
        dt: f64,
        chamber_pressure: f64,
        chamber_volume: f64,
        in_pressure: f64,
    ) -> f64 {
        if in_pressure == chamber_pressure {
            return chamber_pressure;
        }

        let flow_rate = self.volume_rate(in_pressure - chamber_pressure);

        if in_pressure > chamber_pressure {
            // P3 = (P1*V1 + P2*V2) / V3
            (chamber_pressure * chamber_volume + in_pressure * flow_rate * dt) / chamber_volume
        } else {
            (chamber_pressure * chamber_volume - in_pressure * flow_rate * dt) / chamber_volume
        }
    }
}
