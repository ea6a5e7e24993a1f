//! Ordered species collections.

use crate::aggregate::AggregateState;
use crate::error::{SpeciesError, SpeciesResult};
use crate::species::Species;

/// An ordered list of species. Positions are the species indices used by
/// downstream consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesList {
    species: Vec<Species>,
}

impl SpeciesList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from whitespace-separated formulas, e.g. `"X- NaX CaX2"`.
    pub fn from_formulas(formulas: &str) -> Self {
        formulas.split_whitespace().map(Species::new).collect()
    }

    pub fn push(&mut self, species: Species) {
        self.species.push(species);
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Species> {
        self.species.get(index)
    }

    pub fn as_slice(&self) -> &[Species] {
        &self.species
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> + '_ {
        self.species.iter()
    }

    /// The species with the given aggregate state, in their original order.
    pub fn with_aggregate_state(&self, state: AggregateState) -> SpeciesList {
        self.species
            .iter()
            .filter(|s| s.aggregate_state() == state)
            .cloned()
            .collect()
    }

    /// Position of the first species with the given formula.
    pub fn find_with_formula(&self, formula: &str) -> Option<usize> {
        self.species.iter().position(|s| s.formula() == formula)
    }

    /// Position of the first species with the given name.
    pub fn find_with_name(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name() == name)
    }

    pub fn index_with_formula(&self, formula: &str) -> SpeciesResult<usize> {
        self.find_with_formula(formula)
            .ok_or_else(|| SpeciesError::FormulaNotFound {
                formula: formula.to_string(),
            })
    }

    pub fn index_with_name(&self, name: &str) -> SpeciesResult<usize> {
        self.find_with_name(name).ok_or_else(|| SpeciesError::NameNotFound {
            name: name.to_string(),
        })
    }
}

impl From<Vec<Species>> for SpeciesList {
    fn from(species: Vec<Species>) -> Self {
        Self { species }
    }
}

impl FromIterator<Species> for SpeciesList {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        Self {
            species: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SpeciesList {
    type Item = &'a Species;
    type IntoIter = std::slice::Iter<'a, Species>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.iter()
    }
}

impl std::ops::Index<usize> for SpeciesList {
    type Output = Species;

    fn index(&self, index: usize) -> &Species {
        &self.species[index]
    }
}
