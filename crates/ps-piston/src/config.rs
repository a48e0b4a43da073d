//! Actuator geometry and its construction parameters.

use crate::error::{PistonError, PistonResult};
use ps_core::{ensure_positive, imperial};
use std::f64::consts::PI;

/// Construction parameters as written on a datasheet.
///
/// Lengths in inches, masses in pound-mass; converted to SI once by
/// [`ActuatorConfig::from_params`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PistonParams {
    /// Bore diameter [in]
    pub bore_diameter: f64,
    /// Rod diameter [in]
    pub rod_diameter: f64,
    /// Minimum retraction position [in]
    pub min_position: f64,
    /// Maximum extension position [in]
    pub max_position: f64,
    /// Mass of the bore [lbm]
    pub bore_mass: f64,
    /// Length of the cylinder chamber [in]
    pub length: f64,
    /// Starting position [in]
    pub starting_position: f64,
    /// Flow coefficient Cv
    pub flow_coefficient: f64,
}

/// Immutable, validated actuator geometry in SI units.
#[derive(Clone, Debug, PartialEq)]
pub struct ActuatorConfig {
    bore_diameter_m: f64,
    rod_diameter_m: f64,
    length_m: f64,
    min_position_m: f64,
    max_position_m: f64,
    bore_mass_kg: f64,
    flow_coefficient: f64,
    extension_area_m2: f64,
    retraction_area_m2: f64,
}

impl ActuatorConfig {
    /// Build from SI values.
    ///
    /// # Errors
    /// Returns [`PistonError::InvalidGeometry`] unless every dimension is
    /// finite and positive, the rod is thinner than the bore, and
    /// `0 < min_position < max_position < length`.
    pub fn new(
        bore_diameter_m: f64,
        rod_diameter_m: f64,
        length_m: f64,
        min_position_m: f64,
        max_position_m: f64,
        bore_mass_kg: f64,
        flow_coefficient: f64,
    ) -> PistonResult<Self> {
        ensure_positive(bore_diameter_m, "bore diameter must be positive")?;
        ensure_positive(rod_diameter_m, "rod diameter must be positive")?;
        ensure_positive(length_m, "length must be positive")?;
        ensure_positive(bore_mass_kg, "bore mass must be positive")?;
        ensure_positive(flow_coefficient, "flow coefficient must be positive")?;

        if rod_diameter_m >= bore_diameter_m {
            return Err(PistonError::InvalidGeometry {
                what: "rod diameter must be smaller than bore diameter",
            });
        }
        if !(min_position_m > 0.0 && max_position_m < length_m) {
            return Err(PistonError::InvalidGeometry {
                what: "min or max position out of bounds",
            });
        }
        if min_position_m >= max_position_m {
            return Err(PistonError::InvalidGeometry {
                what: "min position must be below max position",
            });
        }

        let bore_sq = bore_diameter_m * bore_diameter_m;
        let rod_sq = rod_diameter_m * rod_diameter_m;

        Ok(Self {
            bore_diameter_m,
            rod_diameter_m,
            length_m,
            min_position_m,
            max_position_m,
            bore_mass_kg,
            flow_coefficient,
            extension_area_m2: PI * bore_sq / 4.0,
            retraction_area_m2: PI * (bore_sq - rod_sq) / 4.0,
        })
    }

    /// Convert imperial construction parameters and validate them.
    pub fn from_params(params: &PistonParams) -> PistonResult<Self> {
        Self::new(
            imperial::in_to_m(params.bore_diameter),
            imperial::in_to_m(params.rod_diameter),
            imperial::in_to_m(params.length),
            imperial::in_to_m(params.min_position),
            imperial::in_to_m(params.max_position),
            imperial::lbm_to_kg(params.bore_mass),
            params.flow_coefficient,
        )
    }

    /// Check that a starting position lies within the travel limits.
    pub fn check_position(&self, position_m: f64) -> PistonResult<f64> {
        if !position_m.is_finite()
            || position_m < self.min_position_m
            || position_m > self.max_position_m
        {
            return Err(PistonError::InvalidGeometry {
                what: "starting position out of bounds",
            });
        }
        Ok(position_m)
    }

    pub fn bore_diameter(&self) -> f64 {
        self.bore_diameter_m
    }

    pub fn rod_diameter(&self) -> f64 {
        self.rod_diameter_m
    }

    pub fn length(&self) -> f64 {
        self.length_m
    }

    pub fn min_position(&self) -> f64 {
        self.min_position_m
    }

    pub fn max_position(&self) -> f64 {
        self.max_position_m
    }

    pub fn bore_mass(&self) -> f64 {
        self.bore_mass_kg
    }

    pub fn flow_coefficient(&self) -> f64 {
        self.flow_coefficient
    }

    /// Piston face area on the extension side [m²].
    pub fn extension_area(&self) -> f64 {
        self.extension_area_m2
    }

    /// Annular area on the rod side [m²].
    pub fn retraction_area(&self) -> f64 {
        self.retraction_area_m2
    }

    /// Extension chamber volume with the piston at `position_m` [m³].
    pub fn extension_volume(&self, position_m: f64) -> f64 {
        position_m * self.extension_area_m2
    }

    /// Retraction chamber volume with the piston at `position_m` [m³].
    pub fn retraction_volume(&self, position_m: f64) -> f64 {
        (self.length_m - position_m) * self.retraction_area_m2
    }
}
