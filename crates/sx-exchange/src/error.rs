//! Ion-exchange errors.

use sx_core::SxError;
use sx_species::FormulaError;
use thiserror::Error;

pub type ExchangeResult<T> = Result<T, ExchangeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExchangeError {
    /// A species formula could not be decomposed.
    #[error("species #{index}: {source}")]
    Formula {
        index: usize,
        #[source]
        source: FormulaError,
    },

    /// Zero or several species have zero exchanger equivalents, so the bare
    /// exchanger cannot be identified.
    #[error(
        "expected exactly one exchanger species (zero equivalents), found {} at positions {:?}",
        .positions.len(),
        .positions
    )]
    NoExchangerFound { positions: Vec<usize> },

    /// No exchanger-site symbol was configured and none could be inferred.
    #[error("cannot infer the exchanger site symbol (candidates: {candidates:?})")]
    ExchangerSiteUnresolved { candidates: Vec<String> },

    #[error("expected {expected} amounts, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid amount for species #{index}: {source}")]
    InvalidAmount {
        index: usize,
        #[source]
        source: SxError,
    },

    /// The exchange species hold no exchanger equivalents at all.
    #[error("total exchanger equivalents are zero")]
    ZeroEquivalents,
}

impl From<ExchangeError> for SxError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Formula { source, .. } => source.into(),
            ExchangeError::InvalidAmount { source, .. } => source,
            ExchangeError::LengthMismatch { .. } => SxError::InvalidArg {
                what: err.to_string(),
            },
            other => SxError::Invariant {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_exchanger_message_lists_positions() {
        let err = ExchangeError::NoExchangerFound {
            positions: vec![0, 1],
        };
        let msg = err.to_string();
        assert!(msg.contains("found 2"));
        assert!(msg.contains("[0, 1]"));
    }

    #[test]
    fn formula_error_keeps_source() {
        use std::error::Error;

        let err = ExchangeError::Formula {
            index: 3,
            source: FormulaError::Empty {
                formula: String::new(),
            },
        };
        assert!(err.to_string().starts_with("species #3"));
        assert!(err.source().is_some());
    }

    #[test]
    fn converts_to_sx_error() {
        let err: SxError = ExchangeError::NoExchangerFound { positions: vec![] }.into();
        assert!(matches!(err, SxError::Invariant { .. }));

        let err: SxError = ExchangeError::LengthMismatch {
            expected: 2,
            actual: 1,
        }
        .into();
        assert!(matches!(err, SxError::InvalidArg { .. }));
    }
}
