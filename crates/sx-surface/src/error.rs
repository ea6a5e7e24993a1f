//! Surface lookup and conversion errors.

use sx_core::SxError;
use thiserror::Error;

pub type SurfaceResult<T> = Result<T, SurfaceError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No surface carries the requested name.
    #[error("could not find any surface with name '{name}'")]
    NameNotFound { name: String },

    /// No surface lies between the requested phases.
    #[error("could not find any surface with phases '{phase1}' and '{phase2}'")]
    PhasesNotFound { phase1: String, phase2: String },

    /// A declared surface names a phase missing from the phase list.
    #[error("surface '{surface}' refers to unknown phase '{phase}'")]
    UnknownPhase { surface: String, phase: String },
}

impl From<SurfaceError> for SxError {
    fn from(err: SurfaceError) -> Self {
        SxError::NotFound {
            what: err.to_string(),
        }
    }
}
