//! Fixed-step driving loop for piston actuators.
//!
//! Provides:
//! - `Plant` trait for anything that advances one step at a time
//! - Piecewise-constant port pressure schedules
//! - Piston and translator plants
//! - Recording with decimation, CSV rendering and hard-stop events

pub mod error;
pub mod events;
pub mod plant;
pub mod schedule;
pub mod sim;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use events::StrokeEvents;
pub use plant::{PistonPlant, Plant, Sample, TranslatorPlant};
pub use schedule::{PortSchedule, PortSegment};
pub use sim::{SimOptions, SimRecord, run_sim};
