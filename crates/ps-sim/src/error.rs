//! Error types for simulation runs.

use ps_piston::PistonError;
use thiserror::Error;

/// Errors encountered while setting up or running a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid port schedule: {what}")]
    InvalidSchedule { what: &'static str },

    #[error("Invalid plant input: {0}")]
    Plant(#[from] PistonError),
}

pub type SimResult<T> = Result<T, SimError>;
