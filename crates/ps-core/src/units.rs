// ps-core/src/units.rs

use uom::si::f64::{Acceleration as UomAcceleration, Force as UomForce, Mass as UomMass};

// Typed quantities for load calculations (SI, f64)
pub type Accel = UomAcceleration;
pub type Force = UomForce;
pub type Mass = UomMass;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

/// Imperial <-> SI conversions used at the public boundary.
///
/// The factors are fixed at the values existing sizing results were produced
/// with; they intentionally differ from uom's exact definitions in the last
/// digits (e.g. uom uses 0.453_592_37 kg/lbm).
pub mod imperial {
    pub const KG_PER_LBM: f64 = 0.453592;
    pub const M_PER_IN: f64 = 0.0254;
    pub const N_PER_LBF: f64 = 4.44822;
    pub const PA_PER_PSI: f64 = 6894.76;

    #[inline]
    pub fn lbm_to_kg(lbm: f64) -> f64 {
        lbm * KG_PER_LBM
    }

    #[inline]
    pub fn kg_to_lbm(kg: f64) -> f64 {
        kg / KG_PER_LBM
    }

    #[inline]
    pub fn in_to_m(inches: f64) -> f64 {
        inches * M_PER_IN
    }

    #[inline]
    pub fn m_to_in(meters: f64) -> f64 {
        meters / M_PER_IN
    }

    #[inline]
    pub fn lbf_to_n(lbf: f64) -> f64 {
        lbf * N_PER_LBF
    }

    #[inline]
    pub fn n_to_lbf(newtons: f64) -> f64 {
        newtons / N_PER_LBF
    }

    #[inline]
    pub fn psi_to_pa(psi: f64) -> f64 {
        psi * PA_PER_PSI
    }

    #[inline]
    pub fn pa_to_psi(pa: f64) -> f64 {
        pa / PA_PER_PSI
    }
}

/// Unit system of values crossing the public boundary.
///
/// Everything inside the engine is SI; `Imperial` means in, lbm, lbf, psi
/// (and in/s for velocities).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    #[default]
    Si,
    Imperial,
}

impl UnitSystem {
    pub fn length_to_si(self, v: f64) -> f64 {
        match self {
            UnitSystem::Si => v,
            UnitSystem::Imperial => imperial::in_to_m(v),
        }
    }

    pub fn length_from_si(self, v: f64) -> f64 {
        match self {
            UnitSystem::Si => v,
            UnitSystem::Imperial => imperial::m_to_in(v),
        }
    }

    pub fn mass_to_si(self, v: f64) -> f64 {
        match self {
            UnitSystem::Si => v,
            UnitSystem::Imperial => imperial::lbm_to_kg(v),
        }
    }

    pub fn force_to_si(self, v: f64) -> f64 {
        match self {
            UnitSystem::Si => v,
            UnitSystem::Imperial => imperial::lbf_to_n(v),
        }
    }

    pub fn force_from_si(self, v: f64) -> f64 {
        match self {
            UnitSystem::Si => v,
            UnitSystem::Imperial => imperial::n_to_lbf(v),
        }
    }

    pub fn pressure_to_si(self, v: f64) -> f64 {
        match self {
            UnitSystem::Si => v,
            UnitSystem::Imperial => imperial::psi_to_pa(v),
        }
    }

    pub fn pressure_from_si(self, v: f64) -> f64 {
        match self {
            UnitSystem::Si => v,
            UnitSystem::Imperial => imperial::pa_to_psi(v),
        }
    }

    /// Short labels for (length, velocity, pressure) columns.
    pub fn labels(self) -> (&'static str, &'static str, &'static str) {
        match self {
            UnitSystem::Si => ("m", "m/s", "Pa"),
            UnitSystem::Imperial => ("in", "in/s", "psi"),
        }
    }
}

pub mod constants {
    use super::Accel;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Initial chamber pressure and default vent pressure.
    pub const ATMOSPHERIC_PSI: f64 = 14.7;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }

    #[inline]
    pub fn atmospheric_pa() -> f64 {
        super::imperial::psi_to_pa(ATMOSPHERIC_PSI)
    }
}
