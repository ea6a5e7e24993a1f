//! Formula and species errors.

use sx_core::SxError;
use thiserror::Error;

/// Result type for formula parsing.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Result type for species lookups.
pub type SpeciesResult<T> = Result<T, SpeciesError>;

/// A chemical formula that cannot be decomposed into symbol/coefficient tokens.
///
/// Positions are character offsets into the trimmed formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Nothing left to parse once suffixes were removed.
    #[error("empty chemical formula '{formula}'")]
    Empty { formula: String },

    #[error("unexpected character '{ch}' at position {pos} in formula '{formula}'")]
    UnexpectedChar {
        formula: String,
        pos: usize,
        ch: char,
    },

    #[error("unmatched parenthesis at position {pos} in formula '{formula}'")]
    UnmatchedParen { formula: String, pos: usize },

    /// A group or hydrate part with nothing inside it.
    #[error("empty group at position {pos} in formula '{formula}'")]
    EmptyGroup { formula: String, pos: usize },

    #[error("zero count at position {pos} in formula '{formula}'")]
    ZeroCount { formula: String, pos: usize },

    #[error("fractional count at position {pos} in formula '{formula}'")]
    FractionalCount { formula: String, pos: usize },

    #[error("count overflow at position {pos} in formula '{formula}'")]
    CountOverflow { formula: String, pos: usize },

    #[error("malformed charge suffix at position {pos} in formula '{formula}'")]
    MalformedCharge { formula: String, pos: usize },
}

impl FormulaError {
    /// The formula that failed to parse.
    pub fn formula(&self) -> &str {
        match self {
            Self::Empty { formula }
            | Self::UnexpectedChar { formula, .. }
            | Self::UnmatchedParen { formula, .. }
            | Self::EmptyGroup { formula, .. }
            | Self::ZeroCount { formula, .. }
            | Self::FractionalCount { formula, .. }
            | Self::CountOverflow { formula, .. }
            | Self::MalformedCharge { formula, .. } => formula,
        }
    }
}

/// Species lookup errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeciesError {
    #[error("no species with formula '{formula}'")]
    FormulaNotFound { formula: String },

    #[error("no species with name '{name}'")]
    NameNotFound { name: String },

    #[error(transparent)]
    Formula(#[from] FormulaError),
}

impl From<FormulaError> for SxError {
    fn from(err: FormulaError) -> Self {
        SxError::InvalidArg {
            what: err.to_string(),
        }
    }
}

impl From<SpeciesError> for SxError {
    fn from(err: SpeciesError) -> Self {
        match err {
            SpeciesError::Formula(e) => e.into(),
            other => SxError::NotFound {
                what: other.to_string(),
            },
        }
    }
}
