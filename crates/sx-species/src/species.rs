//! Chemical species records.

use crate::aggregate::AggregateState;
use crate::charge::parse_charge;
use crate::error::FormulaResult;
use crate::formula::{Formula, parse_formula};

/// A chemical species as handed over by a species registry.
///
/// Updates go through the `with_*` methods, which return a modified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    name: String,
    formula: String,
    /// Explicit charge; parsed from the formula when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    charge: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    aggregate_state: AggregateState,
}

impl Species {
    /// Create a species from its formula.
    ///
    /// The name is the formula itself and the aggregate state is identified
    /// from it (`"NaX(ex)"` is ion exchange, `"Na+"` is aqueous).
    pub fn new(formula: impl Into<String>) -> Self {
        let formula = formula.into();
        let aggregate_state = AggregateState::identify(&formula);
        Self {
            name: formula.clone(),
            formula,
            charge: None,
            aggregate_state,
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_formula(&self, formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            ..self.clone()
        }
    }

    pub fn with_charge(&self, charge: i32) -> Self {
        Self {
            charge: Some(charge),
            ..self.clone()
        }
    }

    pub fn with_aggregate_state(&self, aggregate_state: AggregateState) -> Self {
        Self {
            aggregate_state,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn aggregate_state(&self) -> AggregateState {
        self.aggregate_state
    }

    /// Electric charge: the explicit one if set, otherwise parsed from the
    /// formula.
    pub fn charge(&self) -> FormulaResult<i32> {
        match self.charge {
            Some(charge) => Ok(charge),
            None => parse_charge(&self.formula),
        }
    }

    /// Decompose the formula into symbols and coefficients.
    ///
    /// An explicit charge overrides the one written in the formula.
    pub fn parsed_formula(&self) -> FormulaResult<Formula> {
        let formula = parse_formula(&self.formula)?;
        Ok(match self.charge {
            Some(charge) => formula.with_charge(charge),
            None => formula,
        })
    }
}
