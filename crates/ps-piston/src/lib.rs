//! Linear piston actuator dynamics.
//!
//! Provides:
//! - Actuator geometry validated at construction ([`ActuatorConfig`])
//! - Empirical Cv orifice feeding each chamber ([`FlowOrifice`])
//! - One piston engine with dual-action and spring-return variants
//!   ([`Piston`], [`PistonKind`])
//! - A linear translator applying a gravity load at a mounting angle
//!   ([`LinearTranslator`])
//!
//! All state is SI. Imperial values are accepted at the boundary through
//! [`ps_core::UnitSystem`].
//!
//! # Example
//!
//! ```
//! use ps_core::UnitSystem;
//! use ps_piston::{Piston, PistonParams, StepInputs};
//!
//! let mut piston = Piston::dual_action(&PistonParams {
//!     bore_diameter: 1.25,
//!     rod_diameter: 0.25,
//!     min_position: 0.5,
//!     max_position: 7.5,
//!     bore_mass: 0.1,
//!     length: 8.0,
//!     starting_position: 0.5,
//!     flow_coefficient: 0.5,
//! })
//! .unwrap();
//!
//! let inputs = StepInputs {
//!     load_force: 0.1,
//!     load_mass: 3.0,
//!     ext_port_pressure: 120.0,
//!     ret_port_pressure: 14.7,
//! };
//! for _ in 0..100 {
//!     piston.update(0.001, inputs, UnitSystem::Imperial);
//! }
//! assert!((piston.position(UnitSystem::Imperial) - 7.5).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod kind;
pub mod orifice;
pub mod piston;
pub mod state;
pub mod translator;

pub use config::{ActuatorConfig, PistonParams};
pub use error::{PistonError, PistonResult};
pub use kind::{PistonKind, SpringReturn};
pub use orifice::FlowOrifice;
pub use piston::{HardStop, Piston, StepInputs};
pub use state::{ActuatorState, ChamberPressures};
pub use translator::{LinearTranslator, LoadContext};
