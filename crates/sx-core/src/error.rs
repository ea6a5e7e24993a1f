use thiserror::Error;

pub type SxResult<T> = Result<T, SxError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SxError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
