//! sx-species: species records and chemical formula parsing for surfex.
//!
//! Provides:
//! - Chemical formula decomposition into symbol/coefficient pairs
//! - Electric charge suffix parsing (`X-`, `Ca++`, `Fe+3`, `CO3(2-)`)
//! - Aggregate state tags and identification from species names
//! - Species records and an ordered species list
//!
//! # Example
//!
//! ```
//! use sx_species::Formula;
//!
//! let formula: Formula = "AlOHX2".parse().unwrap();
//! assert_eq!(formula.coefficient("X"), 2);
//! assert_eq!(formula.coefficient("Al"), 1);
//! assert_eq!(formula.charge(), 0);
//! ```

pub mod aggregate;
pub mod charge;
pub mod error;
pub mod formula;
pub mod list;
pub mod species;

// Re-exports for ergonomics
pub use aggregate::{AggregateState, split_state_suffix};
pub use charge::parse_charge;
pub use error::{FormulaError, FormulaResult, SpeciesError, SpeciesResult};
pub use formula::{Formula, parse_formula};
pub use list::SpeciesList;
pub use species::Species;
