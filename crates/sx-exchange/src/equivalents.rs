//! Exchanger-site equivalents per formula unit.

use sx_species::Formula;

use crate::error::{ExchangeError, ExchangeResult};

/// Number of exchanger-site equivalents one formula unit consumes.
///
/// That is the coefficient of `symbol` in the formula (0 if absent), except
/// for a charged formula: the bare exchanger (`X-`) carries the charge of its
/// free site and consumes nothing.
///
/// Parsed coefficients never exceed `u32::MAX`; longer sums are rejected
/// as [`FormulaError::CountOverflow`](sx_species::FormulaError::CountOverflow).
pub fn exchanger_equivalents(formula: &Formula, symbol: &str) -> u32 {
    if !formula.is_neutral() {
        return 0;
    }
    u32::try_from(formula.coefficient(symbol)).unwrap_or(0)
}

/// The exchanger site of an ion-exchange surface, identified by its symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExchangerSite {
    symbol: String,
}

impl ExchangerSite {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// See [`exchanger_equivalents`].
    pub fn equivalents(&self, formula: &Formula) -> u32 {
        exchanger_equivalents(formula, &self.symbol)
    }

    /// Infer the site symbol from the formulas of all species on the surface.
    ///
    /// The site is the one symbol every formula contains. No common symbol,
    /// or more than one, leaves the site unresolved.
    pub fn infer(formulas: &[Formula]) -> ExchangeResult<Self> {
        let Some(first) = formulas.first() else {
            return Err(ExchangeError::ExchangerSiteUnresolved { candidates: vec![] });
        };

        let common: Vec<&str> = first
            .symbols()
            .iter()
            .map(|(s, _)| s.as_str())
            .filter(|s| formulas.iter().all(|f| f.contains(s)))
            .collect();

        match common.as_slice() {
            [only] => Ok(Self::new(*only)),
            _ => Err(ExchangeError::ExchangerSiteUnresolved {
                candidates: common.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}
