//! Error types for piston construction.

use ps_core::PsError;
use thiserror::Error;

/// Errors raised while building a piston or checking its step inputs.
///
/// Stepping a piston never fails; every runtime edge case is an explicit
/// branch in the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PistonError {
    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type PistonResult<T> = Result<T, PistonError>;

impl From<PsError> for PistonError {
    fn from(e: PsError) -> Self {
        match e {
            PsError::NonFinite { what, .. } => PistonError::InvalidGeometry { what },
            PsError::InvalidArg { what } => PistonError::InvalidGeometry { what },
        }
    }
}
