//! ps-core: stable foundation for pistonsim.
//!
//! Contains:
//! - units (uom SI types + constructors, imperial boundary conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::PsError;
pub use numeric::*;
pub use units::{UnitSystem, imperial};
